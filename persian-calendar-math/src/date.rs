use std::{fmt, str::FromStr};

use chrono::Datelike as _;
use thiserror::Error;

use crate::{
    gregorian,
    jalali::{JalaliDate, gregorian_to_jalali},
};

/// Earliest Gregorian year a [`CalendarDate`] can hold.
pub const MIN_YEAR: i32 = 1;
/// Latest Gregorian year a [`CalendarDate`] can hold.
pub const MAX_YEAR: i32 = 9999;

/// A Gregorian calendar date at day granularity.
///
/// This is the canonical date value: comparisons, ordering and persistence
/// all go through it, while Jalali triples are derived for display.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    ///
    /// Years outside [`MIN_YEAR`]`..=`[`MAX_YEAR`] are rejected.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        let max_day = gregorian::days_in_month(year, month);
        if day == 0 || day > max_day {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the current date in the local time zone.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        // chrono guarantees month in 1..=12 and day in 1..=31.
        Self::new_unchecked(now.year(), now.month() as u8, now.day() as u8)
    }

    /// Returns the weekday with 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        gregorian::weekday_from_sunday(self.year, self.month, self.day)
    }

    /// Converts this date to the Jalali calendar.
    pub fn to_jalali(&self) -> JalaliDate {
        gregorian_to_jalali(self.year, self.month, self.day)
    }

    /// Returns the number of days since 1970-01-01.
    pub fn to_days(&self) -> i64 {
        gregorian::days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the date `days` after 1970-01-01.
    pub fn from_days(days: i64) -> Self {
        let (year, month, day) = gregorian::civil_from_days(days);
        Self::new_unchecked(year, month, day)
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Errors returned when parsing a [`CalendarDate`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    /// The text is not shaped like `YYYY-MM-DD`.
    #[error("expected a date formatted as YYYY-MM-DD, got `{0}`")]
    Format(String),
    /// The fields parsed but do not name a real day.
    #[error("{year:04}-{month:02}-{day:02} is not a supported Gregorian date")]
    OutOfRange {
        /// Parsed year.
        year: i32,
        /// Parsed month.
        month: u8,
        /// Parsed day.
        day: u8,
    },
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || DateParseError::Format(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format_error());
        };
        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u8 = month.parse().map_err(|_| format_error())?;
        let day: u8 = day.parse().map_err(|_| format_error())?;
        CalendarDate::new(year, month, day).ok_or(DateParseError::OutOfRange { year, month, day })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A year and month pair used for month navigation.
///
/// The pair carries no calendar of its own; the caller decides whether it
/// holds Jalali or Gregorian values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the values are valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }

    pub(crate) fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }
}
