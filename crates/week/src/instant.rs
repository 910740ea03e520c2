//! Calendar instants and their start of week.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

use crate::basis::WeekBasis;
use crate::error::WeekError;
use crate::week::week_start_date;

/// A point in time with a calendar date and a notion of start of day.
///
/// Implemented for chrono's [`NaiveDate`], [`NaiveDateTime`] and
/// [`DateTime<Tz>`] in any time zone. The week start of an instant is
/// computed in the instant's own calendar context and has the same type.
pub trait CalendarInstant: Sized {
    /// The local calendar date of this instant.
    fn calendar_date(&self) -> NaiveDate;

    /// Start of the first day of the week containing this instant.
    ///
    /// # Errors
    ///
    /// Returns [`WeekError::InvalidArgument`] if the result is not
    /// representable.
    fn week_start(&self, basis: WeekBasis) -> Result<Self, WeekError>;
}

impl CalendarInstant for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn week_start(&self, basis: WeekBasis) -> Result<Self, WeekError> {
        week_start_date(*self, basis)
    }
}

impl CalendarInstant for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    fn week_start(&self, basis: WeekBasis) -> Result<Self, WeekError> {
        Ok(week_start_date(self.date(), basis)?.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> CalendarInstant for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn week_start(&self, basis: WeekBasis) -> Result<Self, WeekError> {
        let date = week_start_date(self.date_naive(), basis)?;
        start_of_day(&self.timezone(), date)
    }
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns the first instant of `date` in `tz`.
///
/// If midnight is ambiguous the earlier instant is used. If midnight falls
/// in a gap, the result is the first wall-clock minute of `date` that exists
/// in `tz`.
pub(crate) fn start_of_day<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
) -> Result<DateTime<Tz>, WeekError> {
    let midnight = date.and_time(NaiveTime::MIN);
    first_valid_local(midnight, |t| tz.from_local_datetime(t).earliest())
        .ok_or_else(|| WeekError::invalid(format!("no local time of {date} can be resolved")))
}

/// Resolves the first minute on or after `midnight`, within the same day,
/// for which `resolve` succeeds.
fn first_valid_local<T>(
    midnight: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> Option<T>,
) -> Option<T> {
    (0..MINUTES_PER_DAY)
        .map_while(|m| midnight.checked_add_signed(TimeDelta::minutes(m)))
        .find_map(|t| resolve(&t))
}

/// Returns the first day of the week containing `date`.
///
/// `date` is borrowed and never modified; the result is a new value of the
/// same type, at the start of the day selected by `basis`.
///
/// # Errors
///
/// Returns [`WeekError::InvalidArgument`] if the week start is not
/// representable for `date`.
///
/// # Examples
///
/// ```ignore
/// let friday = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let monday = first_day_of_week(&friday, WeekBasis::Monday).unwrap();
/// assert_eq!(monday, NaiveDate::from_ymd_opt(2020, 12, 28).unwrap());
/// ```
pub fn first_day_of_week<T: CalendarInstant>(date: &T, basis: WeekBasis) -> Result<T, WeekError> {
    date.week_start(basis)
}
