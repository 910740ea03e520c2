//! Date-only week-start arithmetic.

use chrono::{Datelike, Days, NaiveDate};

use crate::basis::WeekBasis;
use crate::error::WeekError;

/// Returns the first day of the week containing `date`.
///
/// The result is the latest day on or before `date` whose weekday is
/// `basis.first_weekday()`, so it lies 0 to 6 days before `date`. With
/// [`WeekBasis::Sunday`] this is the day before the Monday of the ISO week,
/// unless `date` is itself a Sunday.
///
/// # Errors
///
/// Returns [`WeekError::InvalidArgument`] if the week start would precede
/// [`NaiveDate::MIN`].
pub fn week_start_date(date: NaiveDate, basis: WeekBasis) -> Result<NaiveDate, WeekError> {
    let back = basis.days_into_week(date.weekday());
    date.checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| {
            WeekError::invalid(format!(
                "week of {date} starts before the earliest representable date"
            ))
        })
}
