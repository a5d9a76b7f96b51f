use assert2::let_assert;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::date::CalendarDate;
use crate::date::Month;
use crate::date::Weekday;
use crate::date::days_in_month;
use crate::date::is_leap_year;
use crate::validation::ValidationError;

#[rstest]
#[case(1900, false)]
#[case(2000, true)]
#[case(2024, true)]
#[case(2023, false)]
#[case(1800, false)]
#[case(1896, true)]
fn is_leap_year_follows_gregorian_rules(#[case] year: u16, #[case] expected: bool) {
    assert_eq!(expected, is_leap_year(year));
}

#[rstest]
#[case(2023, 2, Some(28))]
#[case(2024, 2, Some(29))]
#[case(1900, 2, Some(28))]
#[case(2000, 2, Some(29))]
#[case(2025, 1, Some(31))]
#[case(2025, 4, Some(30))]
#[case(2025, 12, Some(31))]
#[case(2025, 0, None)]
#[case(2025, 13, None)]
fn days_in_month_returns_the_expected_days(#[case] year: u16, #[case] month: u8, #[case] expected: Option<u8>) {
    assert_eq!(expected, days_in_month(year, month));
}

#[rstest]
#[case(1800, 1, 1)]
#[case(2025, 12, 31)]
#[case(2024, 2, 29)]
#[case(2000, 2, 29)]
fn new_accepts_valid_dates(#[case] year: u16, #[case] month: u8, #[case] day: u8) {
    let_assert!(Ok(date) = CalendarDate::new(year, month, day));
    assert_eq!((year, month, day), (date.year(), date.month(), date.day()));
}

#[rstest]
#[case(1799, 12, 31, ValidationError::YearOutOfRange { year: 1799, min: 1800, max: 2025 })]
#[case(2026, 1, 1, ValidationError::YearOutOfRange { year: 2026, min: 1800, max: 2025 })]
#[case(2000, 0, 1, ValidationError::MonthOutOfRange { month: 0 })]
#[case(2000, 13, 1, ValidationError::MonthOutOfRange { month: 13 })]
#[case(2000, 1, 0, ValidationError::DayOutOfRange { year: 2000, month: 1, day: 0, max: 31 })]
#[case(2000, 4, 31, ValidationError::DayOutOfRange { year: 2000, month: 4, day: 31, max: 30 })]
#[case(1900, 2, 29, ValidationError::DayOutOfRange { year: 1900, month: 2, day: 29, max: 28 })]
#[case(2023, 2, 29, ValidationError::DayOutOfRange { year: 2023, month: 2, day: 29, max: 28 })]
fn new_returns_the_expected_error(
    #[case] year: u16,
    #[case] month: u8,
    #[case] day: u8,
    #[case] expected: ValidationError,
) {
    assert_eq!(Err(expected), CalendarDate::new(year, month, day));
}

#[rstest]
#[case(1900, 1, 1, 2, Weekday::Monday)]
#[case(1800, 1, 1, 4, Weekday::Wednesday)]
#[case(1879, 3, 14, 6, Weekday::Friday)]
#[case(1950, 10, 14, 0, Weekday::Saturday)]
#[case(2000, 1, 1, 0, Weekday::Saturday)]
#[case(2024, 2, 29, 5, Weekday::Thursday)]
#[case(2025, 12, 31, 4, Weekday::Wednesday)]
#[case(1969, 7, 20, 1, Weekday::Sunday)]
fn day_of_week_matches_the_calendar(
    #[case] year: u16,
    #[case] month: u8,
    #[case] day: u8,
    #[case] expected_index: u8,
    #[case] expected_weekday: Weekday,
) {
    let_assert!(Ok(date) = CalendarDate::new(year, month, day));
    assert_eq!(expected_index, date.day_of_week());
    assert_eq!(expected_weekday, date.weekday());
    assert_eq!(expected_index, date.weekday().index());
}

#[test]
fn display_and_yyyy_mm_dd_render_padded_iso_dates() {
    let_assert!(Ok(date) = CalendarDate::new(1907, 7, 6));
    assert_eq!("1907-07-06", date.to_string());
    assert_eq!("1907-07-06", date.yyyy_mm_dd());
}

#[rstest]
#[case(1900, 1, 1, "Monday January 1, 1900")]
#[case(1950, 10, 14, "Saturday October 14, 1950")]
#[case(2013, 12, 5, "Thursday December 5, 2013")]
fn long_form_renders_weekday_month_day_and_year(
    #[case] year: u16,
    #[case] month: u8,
    #[case] day: u8,
    #[case] expected: &str,
) {
    let_assert!(Ok(date) = CalendarDate::new(year, month, day));
    assert_eq!(expected, date.long_form());
}

#[test]
fn month_name_maps_every_month_number() {
    for month in 1..=12 {
        let_assert!(Ok(date) = CalendarDate::new(2001, month, 1));
        assert_eq!(month, date.month_name().number());
    }
    let_assert!(Ok(date) = CalendarDate::new(2001, 9, 1));
    assert_eq!(Month::September, date.month_name());
}

#[test]
fn dates_order_chronologically() {
    let_assert!(Ok(earlier) = CalendarDate::new(1999, 12, 31));
    let_assert!(Ok(later) = CalendarDate::new(2000, 1, 1));
    let_assert!(Ok(same_year_earlier_month) = CalendarDate::new(1999, 2, 1));
    assert!(earlier < later);
    assert!(same_year_earlier_month < earlier);
}

#[test]
fn weekday_from_index_wraps_around() {
    assert_eq!(Weekday::Saturday, Weekday::from_index(7));
    assert_eq!(Weekday::Friday, Weekday::from_index(6));
}
