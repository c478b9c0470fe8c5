//! Hype and fundamentals labels
//!
//! A project is "hype" when social chatter is loud but fundamentals are weak.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Mentions at or above this count are considered loud
const LOUD_MENTIONS: u64 = 1000;
/// Project scores at or above this are strong fundamentals
const STRONG_SCORE: f64 = 70.0;
const MODERATE_SCORE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HypeLevel {
    Low,
    Medium,
    High,
}

impl HypeLevel {
    /// Derive the hype level from mention volume relative to the project score
    pub fn classify(mentions: u64, score: f64) -> HypeLevel {
        match (mentions >= LOUD_MENTIONS, Fundamentals::from_score(score)) {
            (true, Fundamentals::Weak) => HypeLevel::High,
            (true, Fundamentals::Strong) => HypeLevel::Medium,
            (false, _) => HypeLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HypeLevel::Low => "Low",
            HypeLevel::Medium => "Medium",
            HypeLevel::High => "High",
        }
    }
}

impl fmt::Display for HypeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a hype label is not one of Low/Medium/High
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hype level: `{0}`")]
pub struct UnknownHypeLevel(pub String);

impl FromStr for HypeLevel {
    type Err = UnknownHypeLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(HypeLevel::Low),
            "medium" => Ok(HypeLevel::Medium),
            "high" => Ok(HypeLevel::High),
            _ => Err(UnknownHypeLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fundamentals {
    Strong,
    Weak,
}

impl Fundamentals {
    pub fn from_score(score: f64) -> Fundamentals {
        if score >= STRONG_SCORE {
            Fundamentals::Strong
        } else {
            Fundamentals::Weak
        }
    }
}

/// Three-way score band used for colouring scores in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> ScoreBand {
        match score {
            s if s >= STRONG_SCORE => ScoreBand::Strong,
            s if s >= MODERATE_SCORE => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }

    /// Get band color (for UI)
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "green",
            ScoreBand::Moderate => "yellow",
            ScoreBand::Weak => "red",
        }
    }
}

/// Headline flag shown next to a project's score
pub fn signal_flag(score: f64, hype: HypeLevel) -> &'static str {
    match (Fundamentals::from_score(score), hype) {
        (Fundamentals::Strong, HypeLevel::Low | HypeLevel::Medium) => "High Signal, Low Hype",
        (Fundamentals::Weak, HypeLevel::High) => "Likely Hype",
        _ => "Neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hype() {
        assert_eq!(HypeLevel::classify(1200, 40.0), HypeLevel::High);
        assert_eq!(HypeLevel::classify(1000, 69.99), HypeLevel::High);
        assert_eq!(HypeLevel::classify(5000, 85.0), HypeLevel::Medium);
        assert_eq!(HypeLevel::classify(999, 10.0), HypeLevel::Low);
        assert_eq!(HypeLevel::classify(25, 89.0), HypeLevel::Low);
    }

    #[test]
    fn test_parse_hype() {
        assert_eq!("High".parse::<HypeLevel>(), Ok(HypeLevel::High));
        assert_eq!(" medium ".parse::<HypeLevel>(), Ok(HypeLevel::Medium));
        assert_eq!("LOW".parse::<HypeLevel>(), Ok(HypeLevel::Low));
        assert!("extreme".parse::<HypeLevel>().is_err());
        assert_eq!(HypeLevel::High.to_string(), "High");
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::from_score(92.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(70.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(39.9), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(10.0).color(), "red");
    }

    #[test]
    fn test_signal_flag() {
        assert_eq!(signal_flag(89.0, HypeLevel::Low), "High Signal, Low Hype");
        assert_eq!(signal_flag(40.0, HypeLevel::High), "Likely Hype");
        assert_eq!(signal_flag(55.0, HypeLevel::Low), "Neutral");
        assert_eq!(signal_flag(80.0, HypeLevel::High), "Neutral");
    }
}
