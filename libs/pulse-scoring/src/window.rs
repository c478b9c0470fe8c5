//! Lookback windows such as `24h`, `7d` or `2w`

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

pub const DEFAULT_WINDOW: &str = "24h";

/// Longest accepted lookback
pub const MAX_WINDOW_DAYS: i64 = 366;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid time window `{0}`, expected e.g. 24h, 7d or 2w")]
    Invalid(String),
}

/// A lookback duration parsed from `<count><unit>`.
///
/// Units are `h` (hours), `d` (days) and `w` (weeks). Any other trailing
/// character falls back to hours, so `"36"` and `"36x"` both mean 36 hours.
/// Windows longer than [`MAX_WINDOW_DAYS`] are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    label: String,
    duration: Duration,
}

impl TimeWindow {
    pub fn parse(input: &str) -> Result<TimeWindow, WindowError> {
        let trimmed = input.trim();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();

        let value = digits
            .parse::<i32>()
            .map_err(|_| WindowError::Invalid(input.to_string()))?;

        let unit = match trimmed.chars().last() {
            Some('d') => Duration::days(1),
            Some('w') => Duration::weeks(1),
            _ => Duration::hours(1),
        };

        let duration = unit
            .checked_mul(value)
            .filter(|d| *d <= Duration::days(MAX_WINDOW_DAYS))
            .ok_or_else(|| WindowError::Invalid(input.to_string()))?;

        Ok(TimeWindow {
            label: trimmed.to_string(),
            duration,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// `[end - duration, end]`, saturating at the earliest representable time
    pub fn ending_at(&self, end: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = end
            .checked_sub_signed(self.duration)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        (start, end)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow {
            label: DEFAULT_WINDOW.to_string(),
            duration: Duration::hours(24),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeWindow::parse(s)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
