//! Jalali (solar hijri) conversions built on the 33-year arithmetic cycle.
use std::fmt;

use crate::{date::CalendarDate, gregorian};

/// Years whose remainder modulo 33 falls in this set have a 30-day Esfand.
const LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Days before each Gregorian month in a common year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const GRAND_CYCLE_DAYS: i64 = 12_053;
const FOUR_YEAR_DAYS: i64 = 1_461;
const GREGORIAN_EPOCH_OFFSET: i64 = 355_666;
const JALALI_EPOCH_OFFSET: i64 = 355_668;
const JALALI_YEAR_BASE: i64 = 1_595;
const FIRST_HALF_DAYS: i64 = 186;

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliDate {
    /// Creates a Jalali date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
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

    /// Converts this date to the Gregorian calendar.
    pub fn to_gregorian(&self) -> CalendarDate {
        jalali_to_gregorian(self.year, self.month, self.day)
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Converts a Gregorian date to its Jalali equivalent.
///
/// The arguments must describe a valid Gregorian date in years 1 to 9999.
pub fn gregorian_to_jalali(gy: i32, gm: u8, gd: u8) -> JalaliDate {
    let gy = i64::from(gy);
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = GREGORIAN_EPOCH_OFFSET
        + 365 * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(gd)
        + GREGORIAN_DAYS_BEFORE_MONTH[usize::from(gm - 1)];

    let mut jy = -JALALI_YEAR_BASE + 33 * days.div_euclid(GRAND_CYCLE_DAYS);
    days = days.rem_euclid(GRAND_CYCLE_DAYS);
    jy += 4 * days.div_euclid(FOUR_YEAR_DAYS);
    days = days.rem_euclid(FOUR_YEAR_DAYS);
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        let rest = days - FIRST_HALF_DAYS;
        (7 + rest / 30, 1 + rest % 30)
    };
    JalaliDate::new_unchecked(jy as i32, jm as u8, jd as u8)
}

/// Converts a Jalali date to its Gregorian equivalent.
///
/// The arguments must describe a valid Jalali date whose Gregorian year lies
/// in 1 to 9999.
pub fn jalali_to_gregorian(jy: i32, jm: u8, jd: u8) -> CalendarDate {
    let jy = i64::from(jy) + JALALI_YEAR_BASE;
    let jm = i64::from(jm);
    let day_of_year = if jm < 7 {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + FIRST_HALF_DAYS
    };
    let mut days = -JALALI_EPOCH_OFFSET
        + 365 * jy
        + jy.div_euclid(33) * 8
        + (jy.rem_euclid(33) + 3) / 4
        + i64::from(jd)
        + day_of_year;

    let mut gy = 400 * days.div_euclid(146_097);
    days = days.rem_euclid(146_097);
    if days > 36_524 {
        days -= 1;
        gy += 100 * (days / 36_524);
        days %= 36_524;
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * (days / FOUR_YEAR_DAYS);
    days %= FOUR_YEAR_DAYS;
    if days > 365 {
        gy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let gy = gy as i32;
    let mut gd = days + 1;
    let mut gm = 1;
    while gm < 12 && gd > i64::from(gregorian::days_in_month(gy, gm)) {
        gd -= i64::from(gregorian::days_in_month(gy, gm));
        gm += 1;
    }
    CalendarDate::new_unchecked(gy, gm, gd as u8)
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_leap_year(year) => 30,
        _ => 29,
    }
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    LEAP_REMAINDERS.contains(&year.rem_euclid(33))
}
