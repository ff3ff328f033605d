//! Month-level queries dispatched on the calendar type.
use crate::{
    date::{CalendarDate, YearMonth},
    gregorian, jalali,
};

/// The calendar system used to present dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CalendarType {
    /// Persian solar hijri calendar, weeks start on Saturday.
    #[default]
    Jalali,
    /// Proleptic Gregorian calendar, weeks start on Sunday.
    Gregorian,
}

impl CalendarType {
    /// Returns the lowercase identifier used in configuration and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarType::Jalali => "jalali",
            CalendarType::Gregorian => "gregorian",
        }
    }

    /// Parses the lowercase identifier, ignoring case and surrounding spaces.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "jalali" => Some(CalendarType::Jalali),
            "gregorian" => Some(CalendarType::Gregorian),
            _ => None,
        }
    }

    /// Returns the day-1 date of a month expressed in this calendar.
    pub fn first_day_of_month(self, year: i32, month: u8) -> CalendarDate {
        self.to_gregorian(year, month, 1)
    }

    /// Resolves a (year, month, day) triple in this calendar to a Gregorian
    /// date.
    pub fn to_gregorian(self, year: i32, month: u8, day: u8) -> CalendarDate {
        match self {
            CalendarType::Jalali => jalali::jalali_to_gregorian(year, month, day),
            CalendarType::Gregorian => CalendarDate::new_unchecked(year, month, day),
        }
    }

    /// Returns the year and month of `date` in this calendar.
    pub fn year_month_of(self, date: CalendarDate) -> YearMonth {
        let (year, month, _) = self.from_gregorian(date);
        YearMonth::new_unchecked(year, month)
    }

    /// Returns the (year, month, day) triple of `date` in this calendar.
    pub fn from_gregorian(self, date: CalendarDate) -> (i32, u8, u8) {
        match self {
            CalendarType::Jalali => {
                let jalali = date.to_jalali();
                (jalali.year(), jalali.month(), jalali.day())
            }
            CalendarType::Gregorian => (date.year(), date.month(), date.day()),
        }
    }
}

/// Returns the number of days in a month of the given calendar.
pub fn days_in_month(calendar: CalendarType, year: i32, month: u8) -> u8 {
    match calendar {
        CalendarType::Jalali => jalali::days_in_month(year, month),
        CalendarType::Gregorian => gregorian::days_in_month(year, month),
    }
}

/// Returns whether `year` is a leap year in the given calendar.
pub fn is_leap_year(calendar: CalendarType, year: i32) -> bool {
    match calendar {
        CalendarType::Jalali => jalali::is_leap_year(year),
        CalendarType::Gregorian => gregorian::is_leap_year(year),
    }
}

/// Returns the weekday column (0-6) of day 1 of the month.
///
/// Gregorian months count from Sunday = 0, Jalali months from Saturday = 0.
pub fn first_weekday_of_month(calendar: CalendarType, year: i32, month: u8) -> u8 {
    let first = calendar.first_day_of_month(year, month);
    match calendar {
        CalendarType::Gregorian => first.weekday(),
        CalendarType::Jalali => (first.weekday() + 1) % 7,
    }
}
