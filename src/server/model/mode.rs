//! Time-window modes accepted by the kill analytics endpoints.
//!
//! A mode selects both the bucket granularity of kill summaries and the lookback
//! duration of heatmaps and rankings.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Months, Utc};

use crate::server::error::mode::ModeError;

/// One of the four supported time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hour,
    Day,
    Week,
    Month,
}

impl Mode {
    /// Lower-case token, also used as the truncation unit for bucket periods.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Calendar interval covered by one window.
    pub fn interval(&self) -> &'static str {
        match self {
            Self::Hour => "1 hour",
            Self::Day => "1 day",
            Self::Week => "1 week",
            Self::Month => "1 month",
        }
    }

    /// Start of the window of this mode's length ending at `now`.
    ///
    /// Months are subtracted on the calendar, so 31 March minus a month is the last
    /// day of February.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Hour => now - Duration::hours(1),
            Self::Day => now - Duration::days(1),
            Self::Week => now - Duration::weeks(1),
            Self::Month => now
                .checked_sub_months(Months::new(1))
                .unwrap_or(now - Duration::days(30)),
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(ModeError::Invalid(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
