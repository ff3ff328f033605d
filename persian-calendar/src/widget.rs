//! The calendar widget controller.
//!
//! ## Usage
//!
//! Create one [`CalendarWidget`] per calendar on the page, feed it
//! [`WidgetEvent`]s from your UI and paint the [`RenderModel`] it returns.
use std::sync::Arc;

use persian_calendar_math::{
    CalendarDate, CalendarType, YearMonth, days_in_month, first_weekday_of_month,
};
use tracing::{debug, trace};

use crate::{
    config::CalendarConfig,
    persistence::{SaveRequest, SelectionPayload, SelectionReporter},
    render::{self, DayCell, DayCellState, RenderModel, TextDirection},
    selection::{SelectableDates, SelectionState, past_dates_policy},
};

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One month back.
    Previous,
    /// One month forward.
    Next,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Input understood by [`CalendarWidget::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A navigation button was pressed.
    Navigate(Direction),
    /// A day cell of the displayed month was clicked.
    ClickDay(u8),
}

/// The month currently on screen.
///
/// Year and month are kept in the widget's own calendar; the anchor is the
/// Gregorian form of day 1 of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    calendar_type: CalendarType,
    month: YearMonth,
    anchor: CalendarDate,
}

impl DisplayedMonth {
    /// Returns the month containing `date`, expressed in `calendar_type`.
    pub fn containing(calendar_type: CalendarType, date: CalendarDate) -> Self {
        Self::from_parts(calendar_type, calendar_type.year_month_of(date))
    }

    /// Returns the month `direction` away from this one.
    ///
    /// The year rolls over at either end; the day is pinned to 1 so months of
    /// different lengths never produce an invalid date.
    pub fn shifted(&self, direction: Direction) -> Self {
        Self::from_parts(self.calendar_type, self.month.add_months(direction.delta()))
    }

    /// Returns the calendar the month is expressed in.
    pub fn calendar_type(&self) -> CalendarType {
        self.calendar_type
    }

    /// Returns the year in the widget's calendar.
    pub fn year(&self) -> i32 {
        self.month.year()
    }

    /// Returns the month (1-12) in the widget's calendar.
    pub fn month(&self) -> u8 {
        self.month.month()
    }

    /// Returns the Gregorian date of day 1.
    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.calendar_type, self.year(), self.month())
    }

    /// Returns the number of blank cells before day 1.
    pub fn leading_blanks(&self) -> u8 {
        first_weekday_of_month(self.calendar_type, self.year(), self.month())
    }

    /// Resolves a day number of this month to a Gregorian date.
    pub fn date_of(&self, day: u8) -> Option<CalendarDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        Some(self.calendar_type.to_gregorian(self.year(), self.month(), day))
    }

    fn from_parts(calendar_type: CalendarType, month: YearMonth) -> Self {
        Self {
            calendar_type,
            month,
            anchor: calendar_type.first_day_of_month(month.year(), month.month()),
        }
    }
}

/// A calendar with its own displayed month and selection.
pub struct CalendarWidget {
    config: CalendarConfig,
    today: CalendarDate,
    displayed: DisplayedMonth,
    selection: SelectionState,
    selectable_dates: Arc<dyn SelectableDates>,
    custom_selectable_dates: bool,
    reporter: Arc<dyn SelectionReporter>,
}

impl CalendarWidget {
    /// Creates a widget showing the current month.
    pub fn new(config: CalendarConfig, reporter: Arc<dyn SelectionReporter>) -> Self {
        Self::with_today(config, reporter, CalendarDate::today())
    }

    /// Creates a widget that treats `today` as the current date.
    pub fn with_today(
        config: CalendarConfig,
        reporter: Arc<dyn SelectionReporter>,
        today: CalendarDate,
    ) -> Self {
        let displayed = DisplayedMonth::containing(config.calendar_type, today);
        let selectable_dates = past_dates_policy(config.disable_past_dates, today);
        debug!(
            calendar = config.calendar_type.as_str(),
            selection = config.selection_mode.as_str(),
            reporter = reporter.name(),
            "Calendar widget created for {today}"
        );
        Self {
            config,
            today,
            displayed,
            selection: SelectionState::Empty,
            selectable_dates,
            custom_selectable_dates: false,
            reporter,
        }
    }

    /// Replaces the selectable-dates policy.
    ///
    /// Overrides the policy derived from `disable_past_dates`, and keeps it
    /// across [`CalendarWidget::set_today`].
    pub fn with_selectable_dates(mut self, selectable_dates: Arc<dyn SelectableDates>) -> Self {
        self.selectable_dates = selectable_dates;
        self.custom_selectable_dates = true;
        self
    }

    /// Moves the current date, e.g. after midnight.
    ///
    /// Updates the today marker and the past-date cutoff. The displayed month
    /// and the selection are untouched.
    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
        if !self.custom_selectable_dates {
            self.selectable_dates = past_dates_policy(self.config.disable_past_dates, today);
        }
        debug!("Today is now {today}");
    }

    /// Re-reads the local date, see [`CalendarWidget::set_today`].
    pub fn refresh_today(&mut self) {
        self.set_today(CalendarDate::today());
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the date treated as today.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Returns the month on screen.
    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed
    }

    /// Returns the current selection.
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Applies one UI event. Returns whether anything changed.
    pub fn handle(&mut self, event: WidgetEvent) -> bool {
        match event {
            WidgetEvent::Navigate(direction) => {
                self.navigate(direction);
                true
            }
            WidgetEvent::ClickDay(day) => self.click_day(day),
        }
    }

    /// Moves the displayed month. The selection is untouched.
    pub fn navigate(&mut self, direction: Direction) {
        self.displayed = self.displayed.shifted(direction);
        debug!(
            "Navigated {:?} to {}-{} (anchor {})",
            direction,
            self.displayed.year(),
            self.displayed.month(),
            self.displayed.anchor()
        );
    }

    /// Shows the previous month.
    pub fn previous_month(&mut self) {
        self.navigate(Direction::Previous);
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.navigate(Direction::Next);
    }

    /// Clicks a day of the displayed month.
    ///
    /// Returns `false` without touching the selection when the day does not
    /// exist in the month or is disabled. Otherwise the selection advances and
    /// is reported.
    pub fn click_day(&mut self, day: u8) -> bool {
        let Some(date) = self.displayed.date_of(day) else {
            trace!("Ignoring click on day {day} outside the displayed month");
            return false;
        };
        if !self.selectable_dates.is_selectable_date(date) {
            trace!("Ignoring click on disabled date {date}");
            return false;
        }

        self.selection = self.selection.on_click(self.config.selection_mode, date);
        debug!("Selection is now {:?}", self.selection);
        self.reporter.report(self.save_request());
        true
    }

    /// Returns the payload describing the current selection.
    pub fn payload(&self) -> SelectionPayload {
        SelectionPayload::new(
            &self.selection,
            self.config.calendar_type,
            self.config.selection_mode,
        )
    }

    /// Returns the human readable selection.
    pub fn display_text(&self) -> String {
        render::display_text(
            &self.selection,
            self.config.calendar_type,
            &self.config.strings,
        )
    }

    /// Builds the render model for the displayed month.
    pub fn render(&self) -> RenderModel {
        let calendar = self.config.calendar_type;
        let blanks = usize::from(self.displayed.leading_blanks());
        let days = self.displayed.days_in_month();

        let mut cells = Vec::with_capacity(blanks + usize::from(days));
        cells.extend(std::iter::repeat_n(DayCell::Blank, blanks));
        cells.extend((1..=days).filter_map(|day| {
            let date = self.displayed.date_of(day)?;
            Some(DayCell::Day(DayCellState {
                day,
                date,
                is_today: date == self.today,
                is_disabled: !self.selectable_dates.is_selectable_date(date),
                is_selected: self.selection.is_endpoint(date),
                is_in_range: self.selection.is_inside(date),
            }))
        }));

        RenderModel {
            title: render::month_title(calendar, self.displayed.year(), self.displayed.month()),
            weekday_labels: render::weekday_labels(calendar),
            cells,
            display_text: self.display_text(),
            direction: TextDirection::for_calendar(calendar),
            previous_label: self.config.strings.previous_month.clone(),
            next_label: self.config.strings.next_month.clone(),
            theme: self.config.theme.clone(),
        }
    }

    fn save_request(&self) -> SaveRequest {
        SaveRequest {
            dates: self.payload(),
            security: self.config.security_token.clone(),
        }
    }
}
