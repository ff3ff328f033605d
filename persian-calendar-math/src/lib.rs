//! Calendar arithmetic for the Jalali (solar hijri) and Gregorian calendars.
//!
//! ## Usage
//!
//! Convert between the two calendars and answer month-level questions such as
//! how many days a month has or on which weekday it starts.
//!
//! ```
//! use persian_calendar_math::{
//!     CalendarType, days_in_month, first_weekday_of_month, gregorian_to_jalali,
//!     jalali_to_gregorian,
//! };
//!
//! let nowruz = gregorian_to_jalali(2024, 3, 20);
//! assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1403, 1, 1));
//!
//! let back = jalali_to_gregorian(1403, 1, 1);
//! assert_eq!(back.to_string(), "2024-03-20");
//!
//! assert_eq!(days_in_month(CalendarType::Jalali, 1403, 12), 30);
//! assert_eq!(first_weekday_of_month(CalendarType::Gregorian, 2024, 3), 5);
//! ```
//!
//! Every function here trusts its input: months are expected in `1..=12` and
//! days within the month. Use [`CalendarDate::new`] or [`JalaliDate::new`]
//! when the values come from outside.
#![deny(missing_docs, clippy::unwrap_used)]

mod calendar;
mod date;
mod gregorian;
mod jalali;

pub use calendar::{CalendarType, days_in_month, first_weekday_of_month, is_leap_year};
pub use date::{CalendarDate, DateParseError, MAX_YEAR, MIN_YEAR, YearMonth};
pub use gregorian::{civil_from_days, days_from_civil};
pub use jalali::{JalaliDate, gregorian_to_jalali, jalali_to_gregorian};
