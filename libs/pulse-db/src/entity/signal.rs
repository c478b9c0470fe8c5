use serde::Serialize;

/// Directional call on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalType {
    Bullish,
    Bearish,
}

/// Growth figures backing a signal (percent, except wallet growth)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalMetrics {
    pub tvl_growth: f64,
    pub wallet_growth: i64,
    pub volume_growth: f64,
    pub social_growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: &'static str,
    pub project: &'static str,
    pub chain: &'static str,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    /// 0-100
    pub confidence: u8,
    pub timeframe: &'static str,
    pub description: &'static str,
    pub metrics: SignalMetrics,
}
