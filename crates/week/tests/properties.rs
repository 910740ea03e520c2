use chrono::{Datelike, Days, FixedOffset, NaiveDate, TimeZone, Timelike, Weekday};
use firstday_week::{
    CalendarInstant, DateValue, WeekBasis, first_day_of_week, first_day_of_week_from,
};

const BASES: [WeekBasis; 2] = [WeekBasis::Monday, WeekBasis::Sunday];

/// Every day of 2020 and 2021, covering a leap year and a year boundary.
fn two_years() -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..731).map(move |i| start + Days::new(i))
}

#[test]
fn result_weekday_matches_basis() {
    for date in two_years() {
        assert_eq!(
            first_day_of_week(&date, WeekBasis::Monday).unwrap().weekday(),
            Weekday::Mon,
            "monday basis for {date}"
        );
        assert_eq!(
            first_day_of_week(&date, WeekBasis::Sunday).unwrap().weekday(),
            Weekday::Sun,
            "sunday basis for {date}"
        );
    }
}

#[test]
fn on_or_before_within_six_days() {
    for date in two_years() {
        for basis in BASES {
            let start = first_day_of_week(&date, basis).unwrap();
            let gap = date.signed_duration_since(start).num_days();
            assert!(
                (0..=6).contains(&gap),
                "{basis} week start {start} is {gap} days from {date}"
            );
        }
    }
}

#[test]
fn idempotent() {
    for date in two_years() {
        for basis in BASES {
            let once = first_day_of_week(&date, basis).unwrap();
            let twice = first_day_of_week(&once, basis).unwrap();
            assert_eq!(once, twice, "{basis} basis for {date}");
        }
    }
}

#[test]
fn sunday_start_is_day_before_monday_start() {
    for date in two_years() {
        let monday = first_day_of_week(&date, WeekBasis::Monday).unwrap();
        let sunday = first_day_of_week(&date, WeekBasis::Sunday).unwrap();
        if date.weekday() == Weekday::Sun {
            assert_eq!(sunday, date, "sunday {date} is its own week start");
        } else {
            assert_eq!(
                sunday,
                monday.pred_opt().unwrap(),
                "sunday start for {date}"
            );
        }
    }
}

#[test]
fn zoned_results_are_midnight_in_same_offset() {
    let tz = FixedOffset::west_opt(7 * 3600).unwrap();
    for date in two_years() {
        let dt = tz
            .from_local_datetime(&date.and_hms_opt(21, 15, 30).unwrap())
            .unwrap();
        for basis in BASES {
            let start = first_day_of_week(&dt, basis).unwrap();
            assert_eq!(start.offset(), dt.offset());
            assert_eq!(
                (start.hour(), start.minute(), start.second(), start.nanosecond()),
                (0, 0, 0, 0),
                "{basis} start {start} for {dt}"
            );
            assert_eq!(start.calendar_date(), first_day_of_week(&date, basis).unwrap());
        }
    }
}

#[test]
fn basis_is_case_insensitive() {
    for date in two_years().step_by(3) {
        let value = DateValue::from(date);
        let lower = first_day_of_week_from(Some(value), Some("sunday")).unwrap();
        let title = first_day_of_week_from(Some(value), Some("Sunday")).unwrap();
        let upper = first_day_of_week_from(Some(value), Some("SUNDAY")).unwrap();
        assert_eq!(lower, title);
        assert_eq!(lower, upper);
        assert_eq!(lower.weekday(), Weekday::Sun);
    }
}

#[test]
fn unknown_basis_falls_back_to_monday() {
    let value = DateValue::from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    let default = first_day_of_week_from(Some(value), None).unwrap();
    for basis in ["", "monday", "saturday", "week", " sunday ", "sunday "] {
        assert_eq!(
            first_day_of_week_from(Some(value), Some(basis)).unwrap(),
            default,
            "basis {basis:?}"
        );
    }
}

#[test]
fn input_unchanged_after_call() {
    let value: DateValue = "2021-06-17T08:45:00-03:00".parse().unwrap();
    let before = value.to_string();
    let _ = first_day_of_week_from(Some(value), Some("sunday")).unwrap();
    assert_eq!(value.to_string(), before);
}
