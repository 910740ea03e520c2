//! Week-start convention.

use std::fmt;

use chrono::Weekday;
use serde::Deserialize;

/// Which weekday a week starts on.
///
/// Only two conventions exist: ISO 8601 weeks start on Monday (the default),
/// and US-style weeks start on the Sunday before that Monday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum WeekBasis {
    /// Weeks start on Monday.
    #[default]
    Monday,
    /// Weeks start on Sunday.
    Sunday,
}

impl WeekBasis {
    /// Resolves an optional, free-form basis string.
    ///
    /// `"sunday"` in any casing selects [`WeekBasis::Sunday`]. Anything else,
    /// including `None` and the empty string, selects [`WeekBasis::Monday`].
    /// This never fails.
    pub fn from_arg(arg: Option<&str>) -> Self {
        arg.map(Self::from).unwrap_or_default()
    }

    /// Returns the weekday this convention starts a week on.
    pub fn first_weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Number of days `weekday` lies after the start of its week.
    pub fn days_into_week(self, weekday: Weekday) -> u32 {
        match self {
            Self::Monday => weekday.num_days_from_monday(),
            Self::Sunday => weekday.num_days_from_sunday(),
        }
    }

    /// Lower-case name of the convention.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Sunday => "sunday",
        }
    }
}

impl From<&str> for WeekBasis {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("sunday") {
            Self::Sunday
        } else {
            Self::Monday
        }
    }
}

impl From<String> for WeekBasis {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for WeekBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
