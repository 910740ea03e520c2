//! Tagged union of the accepted date representations.

use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc, Weekday,
};
use tracing::trace;

use crate::basis::WeekBasis;
use crate::error::WeekError;
use crate::instant::{CalendarInstant, first_day_of_week};

/// Formats tried, in order, for date-times without an offset.
const FLOATING_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar instant in one of the supported representations.
///
/// This is the boundary type for values whose representation is only known
/// at run time: parsed text, native timestamps, or any chrono value. Week
/// starts computed from a `DateValue` keep its variant, so a `Local` value
/// is resolved against the local zone's rules and a `Zoned` value keeps its
/// fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// A date-time with a fixed UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// A date-time in the process's local time zone.
    Local(DateTime<Local>),
    /// A wall-clock date-time with no time zone.
    Floating(NaiveDateTime),
    /// A calendar date.
    Date(NaiveDate),
}

impl DateValue {
    /// Weekday of the value's local calendar date.
    pub fn weekday(&self) -> Weekday {
        self.calendar_date().weekday()
    }

    /// Formats the value with a strftime-style format string.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] if `format` contains an invalid specifier.
    pub fn format(&self, format: &str) -> Result<String, fmt::Error> {
        let mut out = String::new();
        match self {
            Self::Zoned(dt) => write!(out, "{}", dt.format(format))?,
            Self::Local(dt) => write!(out, "{}", dt.format(format))?,
            Self::Floating(dt) => write!(out, "{}", dt.format(format))?,
            Self::Date(d) => write!(out, "{}", d.format(format))?,
        }
        Ok(out)
    }
}

impl CalendarInstant for DateValue {
    fn calendar_date(&self) -> NaiveDate {
        match self {
            Self::Zoned(dt) => dt.date_naive(),
            Self::Local(dt) => dt.date_naive(),
            Self::Floating(dt) => dt.date(),
            Self::Date(d) => *d,
        }
    }

    fn week_start(&self, basis: WeekBasis) -> Result<Self, WeekError> {
        Ok(match self {
            Self::Zoned(dt) => Self::Zoned(dt.week_start(basis)?),
            Self::Local(dt) => Self::Local(dt.week_start(basis)?),
            Self::Floating(dt) => Self::Floating(dt.week_start(basis)?),
            Self::Date(d) => Self::Date(d.week_start(basis)?),
        })
    }
}

impl FromStr for DateValue {
    type Err = WeekError;

    /// Parses RFC 3339 date-times, offset-less date-times and `YYYY-MM-DD`
    /// dates, in that order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(WeekError::invalid("empty date"));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Zoned(dt));
        }
        if let Some(dt) = FLOATING_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        {
            return Ok(Self::Floating(dt));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self::Date)
            .map_err(|_| WeekError::invalid(format!("unrecognized date {s:?}")))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, false)),
            Self::Local(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, false)),
            Self::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Zoned(dt)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Zoned(dt.fixed_offset())
    }
}

impl From<DateTime<Local>> for DateValue {
    fn from(dt: DateTime<Local>) -> Self {
        Self::Local(dt)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Floating(dt)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// Native timestamps are viewed in the local time zone.
impl From<SystemTime> for DateValue {
    fn from(t: SystemTime) -> Self {
        Self::Local(DateTime::<Local>::from(t))
    }
}

/// Returns the first day of the week containing `date`, from loosely typed
/// arguments.
///
/// `basis` is matched case-insensitively against `"sunday"`; any other value,
/// or `None`, means weeks start on Monday.
///
/// # Errors
///
/// Returns [`WeekError::InvalidArgument`] if `date` is `None` or its week
/// start is not representable.
pub fn first_day_of_week_from(
    date: Option<DateValue>,
    basis: Option<&str>,
) -> Result<DateValue, WeekError> {
    let date = date.ok_or_else(|| WeekError::invalid("missing date"))?;
    let basis = WeekBasis::from_arg(basis);
    let start = first_day_of_week(&date, basis)?;
    trace!(%date, %basis, %start, "resolved week start");
    Ok(start)
}
