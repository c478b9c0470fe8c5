//! Project Score Calculator
//!
//! Score = (wallets*30% + tvl*25% + txVolume*20% + tokenAge*10%
//!          + devActivity*10% + dappUsage*5%) / 1000
//!
//! The weights are provisional: they are not calibrated against any data set
//! and are expected to change. The result is rounded to two decimals and is
//! not clamped.

use serde::{Deserialize, Serialize};

mod weights {
    pub const WALLETS: f64 = 0.30;
    pub const TVL: f64 = 0.25;
    pub const TX_VOLUME: f64 = 0.20;
    pub const TOKEN_AGE: f64 = 0.10;
    pub const DEV_ACTIVITY: f64 = 0.10;
    pub const DAPP_USAGE: f64 = 0.05;

    pub const NORMALIZATION: f64 = 1000.0;
}

/// Raw project figures fed into [`compute_score`].
///
/// Every field is optional; an absent field counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectMetrics {
    /// Unique wallets interacting with the project
    pub wallets: Option<f64>,
    /// Total value locked (USD)
    pub tvl: Option<f64>,
    pub tx_volume: Option<f64>,
    /// Token age in days
    pub token_age: Option<f64>,
    /// Commit count
    pub dev_activity: Option<f64>,
    pub dapp_usage: Option<f64>,
    /// Social mentions; carried along but not weighted
    pub mentions: Option<f64>,
}

impl ProjectMetrics {
    /// Copy of the metrics with every field coerced to a finite, non-negative
    /// number. Missing, negative and non-finite values become zero.
    pub fn sanitized(&self) -> ProjectMetrics {
        ProjectMetrics {
            wallets: Some(coerce(self.wallets)),
            tvl: Some(coerce(self.tvl)),
            tx_volume: Some(coerce(self.tx_volume)),
            token_age: Some(coerce(self.token_age)),
            dev_activity: Some(coerce(self.dev_activity)),
            dapp_usage: Some(coerce(self.dapp_usage)),
            mentions: Some(coerce(self.mentions)),
        }
    }
}

fn coerce(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Compute the project score, rounded to two decimals.
pub fn compute_score(metrics: &ProjectMetrics) -> f64 {
    let raw = coerce(metrics.wallets) * weights::WALLETS
        + coerce(metrics.tvl) * weights::TVL
        + coerce(metrics.tx_volume) * weights::TX_VOLUME
        + coerce(metrics.token_age) * weights::TOKEN_AGE
        + coerce(metrics.dev_activity) * weights::DEV_ACTIVITY
        + coerce(metrics.dapp_usage) * weights::DAPP_USAGE;

    round_to_cents(raw / weights::NORMALIZATION)
}

/// Round half-up to two decimals. Inputs are never negative here, so
/// `f64::round` (half away from zero) matches half-up.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallets_only(wallets: f64) -> ProjectMetrics {
        ProjectMetrics {
            wallets: Some(wallets),
            tvl: Some(0.0),
            tx_volume: Some(0.0),
            token_age: Some(0.0),
            dev_activity: Some(0.0),
            dapp_usage: Some(0.0),
            mentions: None,
        }
    }

    #[test]
    fn test_empty_metrics_score_zero() {
        assert_eq!(compute_score(&ProjectMetrics::default()), 0.0);
    }

    #[test]
    fn test_wallet_weight() {
        assert_eq!(compute_score(&wallets_only(1000.0)), 0.3);
    }

    #[test]
    fn test_all_weights() {
        let metrics = ProjectMetrics {
            wallets: Some(3500.0),
            tvl: Some(2_000_000.0),
            tx_volume: Some(45_000.0),
            token_age: Some(365.0),
            dev_activity: Some(12.0),
            dapp_usage: Some(800.0),
            mentions: Some(25.0),
        };

        // 1050 + 500000 + 9000 + 36.5 + 1.2 + 40 = 510127.7
        assert_eq!(compute_score(&metrics), 510.13);
    }

    #[test]
    fn test_mentions_carry_no_weight() {
        let metrics = ProjectMetrics {
            mentions: Some(1_000_000.0),
            ..Default::default()
        };
        assert_eq!(compute_score(&metrics), 0.0);
    }

    #[test]
    fn test_rounds_half_up() {
        // 0.05 * 100 / 1000 = 0.005 -> 0.01
        let metrics = ProjectMetrics {
            dapp_usage: Some(100.0),
            ..Default::default()
        };
        assert_eq!(compute_score(&metrics), 0.01);
    }

    #[test]
    fn test_invalid_inputs_count_as_zero() {
        let metrics = ProjectMetrics {
            wallets: Some(-5000.0),
            tvl: Some(f64::NAN),
            tx_volume: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(compute_score(&metrics), 0.0);

        let clean = metrics.sanitized();
        assert_eq!(clean.wallets, Some(0.0));
        assert_eq!(clean.tvl, Some(0.0));
        assert_eq!(clean.tx_volume, Some(0.0));
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = ProjectMetrics {
            wallets: Some(1200.0),
            tvl: Some(40_000.0),
            tx_volume: Some(9000.0),
            token_age: Some(90.0),
            dev_activity: Some(30.0),
            dapp_usage: Some(400.0),
            mentions: Some(10.0),
        };
        let before = compute_score(&base);

        let bumps: [fn(&mut ProjectMetrics); 6] = [
            |m| m.wallets = m.wallets.map(|v| v + 10_000.0),
            |m| m.tvl = m.tvl.map(|v| v + 10_000.0),
            |m| m.tx_volume = m.tx_volume.map(|v| v + 10_000.0),
            |m| m.token_age = m.token_age.map(|v| v + 10_000.0),
            |m| m.dev_activity = m.dev_activity.map(|v| v + 10_000.0),
            |m| m.dapp_usage = m.dapp_usage.map(|v| v + 10_000.0),
        ];

        for bump in bumps {
            let mut bumped = base.clone();
            bump(&mut bumped);
            assert!(compute_score(&bumped) >= before);
        }
    }

    #[test]
    fn test_deterministic() {
        let metrics = wallets_only(4321.0);
        assert_eq!(compute_score(&metrics), compute_score(&metrics));
    }

    #[test]
    fn test_deserialize_partial_body() {
        let metrics: ProjectMetrics =
            serde_json::from_str(r#"{"wallets": 1000, "txVolume": 500}"#).unwrap();

        assert_eq!(metrics.wallets, Some(1000.0));
        assert_eq!(metrics.tx_volume, Some(500.0));
        assert_eq!(metrics.tvl, None);
        assert_eq!(compute_score(&metrics), 0.4);
    }
}
