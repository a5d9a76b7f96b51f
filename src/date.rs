//! Validated Gregorian calendar dates in the `[1800, 2025]` span.
//!
//! [`CalendarDate::day_of_week`] uses a closed-form key-value computation instead of
//! counting days from an epoch: a per-century offset, a per-month code, and the
//! dozens/remainder/leap decomposition of the year within its century. Only the
//! centuries inside the supported span have an offset.

use crate::validation::ValidationError;

#[cfg(test)]
#[path = "date/tests/date_tests.rs"]
mod date_tests;

pub const MIN_YEAR: u16 = 1800;
pub const MAX_YEAR: u16 = 2025;

/// Month codes indexed by month number, `[0]` is unused.
const MONTH_CODES: [u32; 13] = [0, 1, 4, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6];

const OFFSET_1800S: u32 = 2;
const OFFSET_2000S: u32 = 6;
const OFFSET_LEAP_JAN_FEB: u32 = 6;
const DAYS_IN_WEEK: u32 = 7;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// # Errors
    ///
    /// Returns an error if:
    /// - `year` is outside `[MIN_YEAR, MAX_YEAR]` ([`ValidationError::YearOutOfRange`]).
    /// - `month` is outside `[1, 12]` ([`ValidationError::MonthOutOfRange`]).
    /// - `day` is outside `[1, days_in_month(year, month)]` ([`ValidationError::DayOutOfRange`]).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        let max = days_in_month(year, month).ok_or(ValidationError::MonthOutOfRange { month })?;
        if day == 0 || day > max {
            return Err(ValidationError::DayOutOfRange { year, month, day, max });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the week as an index: 0 = Saturday, 1 = Sunday, ..., 6 = Friday.
    pub fn day_of_week(&self) -> u8 {
        let year = u32::from(self.year);
        let month = usize::from(self.month);

        let mut offset = 0;
        if (2000..=u32::from(MAX_YEAR)).contains(&year) {
            offset += OFFSET_2000S;
        } else if (u32::from(MIN_YEAR)..=1899).contains(&year) {
            offset += OFFSET_1800S;
        }
        if self.month <= 2 && is_leap_year(self.year) {
            offset += OFFSET_LEAP_JAN_FEB;
        }

        let year_in_century = year % 100;
        let dozens = year_in_century / 12;
        let remainder = year_in_century % 12;
        let leaps_in_remainder = remainder / 4;

        let sum = offset + u32::from(self.day) + dozens + remainder + leaps_in_remainder + MONTH_CODES[month];
        // Always < 7.
        (sum % DAYS_IN_WEEK) as u8
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day_of_week())
    }

    pub fn month_name(&self) -> Month {
        Month::from_number(self.month)
    }

    /// The `YYYY-MM-DD` representation, same as [`std::fmt::Display`].
    pub fn yyyy_mm_dd(&self) -> String {
        self.to_string()
    }

    /// Renders e.g. `Monday January 1, 1900`.
    pub fn long_form(&self) -> String {
        format!("{} {} {}, {}", self.weekday(), self.month_name(), self.day, self.year)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of `month` in `year`, [`None`] if `month` is not in `[1, 12]`.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, parse_display::Display)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Wraps around for indexes past 6.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, parse_display::Display)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Only called with months already validated by [`CalendarDate::new`].
    const fn from_number(month: u8) -> Self {
        Self::ALL[(month as usize + 11) % 12]
    }

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}
