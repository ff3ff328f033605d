//! Render model handed to whatever paints the calendar.
use persian_calendar_math::{CalendarDate, CalendarType};

use crate::{
    config::{Strings, Theme},
    selection::SelectionState,
};

/// Number of columns in the month grid.
pub const DATE_COLUMNS: usize = 7;

const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Saturday first.
const JALALI_WEEKDAY_LABELS: [&str; DATE_COLUMNS] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Sunday first.
const GREGORIAN_WEEKDAY_LABELS: [&str; DATE_COLUMNS] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Reading direction of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Gregorian layout.
    LeftToRight,
    /// Jalali layout.
    RightToLeft,
}

impl TextDirection {
    /// Returns the direction conventionally used with `calendar`.
    pub fn for_calendar(calendar: CalendarType) -> Self {
        match calendar {
            CalendarType::Jalali => TextDirection::RightToLeft,
            CalendarType::Gregorian => TextDirection::LeftToRight,
        }
    }
}

/// Status flags of one day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCellState {
    /// Day number in the displayed calendar.
    pub day: u8,
    /// The Gregorian date this cell stands for.
    pub date: CalendarDate,
    /// The cell is the real current date.
    pub is_today: bool,
    /// Clicking the cell does nothing.
    pub is_disabled: bool,
    /// The cell is a selection endpoint.
    pub is_selected: bool,
    /// The cell lies strictly between range endpoints.
    pub is_in_range: bool,
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Placeholder before day 1.
    Blank,
    /// A selectable day.
    Day(DayCellState),
}

impl DayCell {
    /// Returns the day number, or an empty string for blanks.
    pub fn label(&self) -> String {
        match self {
            DayCell::Blank => String::new(),
            DayCell::Day(state) => state.day.to_string(),
        }
    }

    /// Returns the day state, if this is not a blank.
    pub fn state(&self) -> Option<&DayCellState> {
        match self {
            DayCell::Blank => None,
            DayCell::Day(state) => Some(state),
        }
    }
}

/// Everything a render target needs to paint one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Month name and year, e.g. `فروردین 1403`.
    pub title: String,
    /// Weekday names in week-start order.
    pub weekday_labels: [&'static str; DATE_COLUMNS],
    /// Leading blanks followed by one cell per day.
    pub cells: Vec<DayCell>,
    /// Human readable selection.
    pub display_text: String,
    /// Layout direction.
    pub direction: TextDirection,
    /// Label of the previous-month button.
    pub previous_label: String,
    /// Label of the next-month button.
    pub next_label: String,
    /// Colors for selected endpoints and in-range days.
    pub theme: Theme,
}

impl RenderModel {
    /// Returns the day cells without leading blanks.
    pub fn days(&self) -> impl Iterator<Item = &DayCellState> {
        self.cells.iter().filter_map(DayCell::state)
    }

    /// Returns the number of leading blanks.
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, DayCell::Blank))
            .count()
    }

    /// Splits the cells into week rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DATE_COLUMNS)
    }
}

/// Returns the month title, e.g. `March 2024`.
pub fn month_title(calendar: CalendarType, year: i32, month: u8) -> String {
    let names = match calendar {
        CalendarType::Jalali => &JALALI_MONTH_NAMES,
        CalendarType::Gregorian => &GREGORIAN_MONTH_NAMES,
    };
    let name = names[usize::from(month.clamp(1, 12) - 1)];
    format!("{name} {year}")
}

/// Returns weekday labels in the calendar's week-start order.
pub fn weekday_labels(calendar: CalendarType) -> [&'static str; DATE_COLUMNS] {
    match calendar {
        CalendarType::Jalali => JALALI_WEEKDAY_LABELS,
        CalendarType::Gregorian => GREGORIAN_WEEKDAY_LABELS,
    }
}

/// Formats a date for display in the given calendar.
///
/// Jalali dates render as `year/month/day`; Gregorian ones as `Mar 20, 2024`.
pub fn format_date(calendar: CalendarType, date: CalendarDate) -> String {
    match calendar {
        CalendarType::Jalali => date.to_jalali().to_string(),
        CalendarType::Gregorian => {
            let name = GREGORIAN_MONTH_NAMES[usize::from(date.month() - 1)];
            format!("{} {}, {}", &name[..3], date.day(), date.year())
        }
    }
}

/// Returns the human readable form of a selection.
///
/// A pending range shows its start like a single date.
pub fn display_text(selection: &SelectionState, calendar: CalendarType, strings: &Strings) -> String {
    match *selection {
        SelectionState::Empty => strings.no_selection.clone(),
        SelectionState::Single(date) | SelectionState::PendingRange(date) => {
            format!("{} {}", strings.selected_date, format_date(calendar, date))
        }
        SelectionState::Range { start, end } => format!(
            "{} {}{}{}",
            strings.selected_range,
            format_date(calendar, start),
            strings.range_separator,
            format_date(calendar, end)
        ),
    }
}
