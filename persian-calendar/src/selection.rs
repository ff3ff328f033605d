//! Selection state machine and the selectable-dates policy.
use std::sync::Arc;

use persian_calendar_math::CalendarDate;

use crate::config::SelectionMode;

/// The dates picked so far.
///
/// A [`SelectionState::Range`] always has `start <= end`; build it through
/// [`SelectionState::range`] to keep that true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Empty,
    /// One date selected in single mode.
    Single(CalendarDate),
    /// A range start chosen, waiting for its end.
    PendingRange(CalendarDate),
    /// A complete, ordered range.
    ///
    /// The fields are public for matching; constructing this variant directly
    /// must keep `start <= end`.
    Range {
        /// First day of the range.
        start: CalendarDate,
        /// Last day of the range.
        end: CalendarDate,
    },
}

impl SelectionState {
    /// Creates a range from two endpoints in any order.
    pub fn range(a: CalendarDate, b: CalendarDate) -> Self {
        SelectionState::Range {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Returns the state after `date` is clicked.
    pub fn on_click(self, mode: SelectionMode, date: CalendarDate) -> Self {
        match (mode, self) {
            (SelectionMode::Single, _) => SelectionState::Single(date),
            (SelectionMode::Range, SelectionState::PendingRange(start)) => {
                SelectionState::range(start, date)
            }
            (SelectionMode::Range, _) => SelectionState::PendingRange(date),
        }
    }

    /// Returns the first selected date.
    pub fn start(&self) -> Option<CalendarDate> {
        match *self {
            SelectionState::Empty => None,
            SelectionState::Single(date) | SelectionState::PendingRange(date) => Some(date),
            SelectionState::Range { start, .. } => Some(start),
        }
    }

    /// Returns the end of a complete range.
    pub fn end(&self) -> Option<CalendarDate> {
        match *self {
            SelectionState::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Returns whether `date` is a selected endpoint.
    pub fn is_endpoint(&self, date: CalendarDate) -> bool {
        self.start() == Some(date) || self.end() == Some(date)
    }

    /// Returns whether `date` lies strictly inside a complete range.
    pub fn is_inside(&self, date: CalendarDate) -> bool {
        match *self {
            SelectionState::Range { start, end } => {
                debug_assert!(start <= end, "range {start}..{end} is not ordered");
                start < date && date < end
            }
            _ => false,
        }
    }
}

/// Controls which dates can be clicked.
pub trait SelectableDates: Send + Sync {
    /// Returns true when the date can be selected.
    fn is_selectable_date(&self, _date: CalendarDate) -> bool {
        true
    }
}

/// Policy allowing every date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDates;

impl SelectableDates for AllDates {}

/// Policy rejecting dates strictly before a cutoff day.
#[derive(Debug, Clone, Copy)]
pub struct NotBefore(pub CalendarDate);

impl SelectableDates for NotBefore {
    fn is_selectable_date(&self, date: CalendarDate) -> bool {
        date >= self.0
    }
}

/// Returns the policy matching the past-date restriction.
pub fn past_dates_policy(disable_past_dates: bool, today: CalendarDate) -> Arc<dyn SelectableDates> {
    if disable_past_dates {
        Arc::new(NotBefore(today))
    } else {
        Arc::new(AllDates)
    }
}
