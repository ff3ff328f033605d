use std::sync::Arc;

use persian_calendar::{
    CalendarConfig, CalendarWidget, DayCellState, Direction, RecordingReporter, SelectableDates,
    SelectionMode, SelectionState, TextDirection, Theme, WidgetEvent,
};
use persian_calendar_math::{CalendarDate, CalendarType};

fn date(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(y, m, d).expect("valid date")
}

fn widget(
    calendar_type: CalendarType,
    selection_mode: SelectionMode,
    today: CalendarDate,
) -> (CalendarWidget, Arc<RecordingReporter>) {
    let reporter = RecordingReporter::shared();
    let config = CalendarConfig::default()
        .calendar_type(calendar_type)
        .selection_mode(selection_mode)
        .security_token("nonce-123");
    let widget = CalendarWidget::with_today(config, reporter.clone(), today);
    (widget, reporter)
}

fn day_state(widget: &CalendarWidget, day: u8) -> DayCellState {
    *widget
        .render()
        .days()
        .find(|state| state.day == day)
        .expect("day is rendered")
}

#[test]
fn range_endpoints_are_ordered() {
    let (mut widget, _) = widget(CalendarType::Gregorian, SelectionMode::Range, date(2024, 3, 1));

    assert!(widget.click_day(20));
    assert_eq!(widget.selection(), SelectionState::PendingRange(date(2024, 3, 20)));
    assert!(widget.click_day(10));
    assert_eq!(
        widget.selection(),
        SelectionState::Range {
            start: date(2024, 3, 10),
            end: date(2024, 3, 20),
        }
    );
}

#[test]
fn third_click_starts_a_new_range() {
    let (mut widget, _) = widget(CalendarType::Gregorian, SelectionMode::Range, date(2024, 3, 1));

    widget.click_day(5);
    widget.click_day(15);
    widget.click_day(25);
    assert_eq!(widget.selection(), SelectionState::PendingRange(date(2024, 3, 25)));
}

#[test]
fn single_mode_replaces_the_selection() {
    let (mut widget, reporter) =
        widget(CalendarType::Gregorian, SelectionMode::Single, date(2024, 3, 1));

    widget.click_day(5);
    widget.click_day(5);
    assert_eq!(widget.selection(), SelectionState::Single(date(2024, 3, 5)));
    widget.click_day(9);
    assert_eq!(widget.selection(), SelectionState::Single(date(2024, 3, 9)));
    assert_eq!(reporter.len(), 3);
}

#[test]
fn disabled_past_dates_ignore_clicks() {
    let reporter = RecordingReporter::shared();
    let config = CalendarConfig::default()
        .calendar_type(CalendarType::Gregorian)
        .disable_past_dates(true);
    let mut widget = CalendarWidget::with_today(config, reporter.clone(), date(2024, 3, 15));

    widget.click_day(20);
    let before = widget.selection();
    assert!(!widget.click_day(14));
    assert_eq!(widget.selection(), before);
    assert_eq!(reporter.len(), 1);

    assert!(day_state(&widget, 14).is_disabled);
    assert!(!day_state(&widget, 15).is_disabled);
    assert!(widget.click_day(15));
}

#[test]
fn clicks_outside_the_month_are_ignored() {
    let (mut widget, reporter) =
        widget(CalendarType::Gregorian, SelectionMode::Range, date(2023, 2, 1));

    assert!(!widget.click_day(0));
    assert!(!widget.click_day(29));
    assert_eq!(widget.selection(), SelectionState::Empty);
    assert!(reporter.is_empty());
}

#[test]
fn gregorian_navigation_rolls_over_years() {
    let (mut widget, reporter) =
        widget(CalendarType::Gregorian, SelectionMode::Range, date(2024, 12, 31));

    widget.handle(WidgetEvent::Navigate(Direction::Next));
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (2025, 1));
    assert_eq!(month.anchor(), date(2025, 1, 1));

    widget.previous_month();
    widget.previous_month();
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (2024, 11));
    assert!(reporter.is_empty());
}

#[test]
fn jalali_navigation_rolls_over_years() {
    // 1403/12/30, the leap day.
    let (mut widget, _) = widget(CalendarType::Jalali, SelectionMode::Range, date(2025, 3, 20));
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (1403, 12));
    assert_eq!(month.days_in_month(), 30);

    widget.next_month();
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (1404, 1));
    assert_eq!(month.anchor(), date(2025, 3, 21));
    assert_eq!(widget.render().title, "فروردین 1404");

    widget.previous_month();
    widget.previous_month();
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (1403, 11));
}

#[test]
fn navigation_keeps_the_selection() {
    let (mut widget, _) = widget(CalendarType::Jalali, SelectionMode::Range, date(2024, 3, 20));

    widget.click_day(3);
    widget.next_month();
    widget.click_day(2);
    assert_eq!(
        widget.selection(),
        SelectionState::Range {
            start: date(2024, 3, 22),
            end: date(2024, 4, 21),
        }
    );
}

#[test]
fn render_marks_today_selection_and_range() {
    let (mut widget, _) = widget(CalendarType::Jalali, SelectionMode::Range, date(2024, 3, 20));

    let model = widget.render();
    assert_eq!(model.leading_blanks(), 4);
    assert_eq!(model.days().count(), 31);
    assert_eq!(model.direction, TextDirection::RightToLeft);
    assert_eq!(model.weekday_labels[0], "ش");
    assert!(day_state(&widget, 1).is_today);
    assert!(!day_state(&widget, 2).is_today);

    widget.click_day(10);
    widget.click_day(5);
    for day in [5, 10] {
        let state = day_state(&widget, day);
        assert!(state.is_selected);
        assert!(!state.is_in_range);
    }
    for day in 6..10 {
        let state = day_state(&widget, day);
        assert!(state.is_in_range);
        assert!(!state.is_selected);
    }
    assert!(!day_state(&widget, 11).is_in_range);
}

#[test]
fn gregorian_grid_starts_on_sunday() {
    let (widget, _) = widget(CalendarType::Gregorian, SelectionMode::Range, date(2024, 3, 20));

    let model = widget.render();
    assert_eq!(model.title, "March 2024");
    assert_eq!(model.leading_blanks(), 5);
    assert_eq!(model.cells.len(), 5 + 31);
    assert_eq!(model.weeks().count(), 6);
    assert_eq!(model.direction, TextDirection::LeftToRight);
    assert_eq!(model.previous_label, "Previous month");
    assert_eq!(model.next_label, "Next month");
}

#[test]
fn every_accepted_click_is_reported() {
    let (mut widget, reporter) =
        widget(CalendarType::Jalali, SelectionMode::Range, date(2024, 3, 20));

    widget.click_day(1);
    let request = reporter.last().expect("first click reported");
    assert_eq!(request.security, "nonce-123");
    assert_eq!(request.dates.start, Some(date(2024, 3, 20)));
    assert_eq!(request.dates.end, None);
    assert_eq!(request.dates.calendar_type, CalendarType::Jalali);
    assert_eq!(request.dates.selection_mode, SelectionMode::Range);

    widget.click_day(6);
    let request = reporter.last().expect("second click reported");
    assert_eq!(request.dates.end, Some(date(2024, 3, 25)));
    assert_eq!(request.dates, widget.payload());

    widget.next_month();
    widget.click_day(40);
    assert_eq!(reporter.len(), 2);
}

#[test]
fn display_text_follows_the_selection() {
    let (mut widget, _) = widget(CalendarType::Gregorian, SelectionMode::Range, date(2024, 3, 1));

    assert_eq!(widget.display_text(), "No dates selected.");
    widget.click_day(20);
    assert_eq!(widget.display_text(), "Selected Date: Mar 20, 2024");
    widget.click_day(25);
    assert_eq!(widget.display_text(), "Selected Range: Mar 20, 2024 to Mar 25, 2024");
    assert_eq!(widget.render().display_text, widget.display_text());
}

struct WeekdaysOnly;

impl SelectableDates for WeekdaysOnly {
    fn is_selectable_date(&self, date: CalendarDate) -> bool {
        // Sunday = 0, Saturday = 6.
        !matches!(date.weekday(), 0 | 6)
    }
}

#[test]
fn custom_selectable_dates_replace_the_past_date_policy() {
    let reporter = RecordingReporter::shared();
    let config = CalendarConfig::default()
        .calendar_type(CalendarType::Gregorian)
        .disable_past_dates(true);
    let mut widget = CalendarWidget::with_today(config, reporter.clone(), date(2024, 3, 15))
        .with_selectable_dates(Arc::new(WeekdaysOnly));

    // 2024-03-09 is a Saturday, 2024-03-11 a Monday before today.
    assert!(day_state(&widget, 9).is_disabled);
    assert!(day_state(&widget, 10).is_disabled);
    assert!(!day_state(&widget, 11).is_disabled);

    assert!(!widget.click_day(9));
    assert_eq!(widget.selection(), SelectionState::Empty);
    assert!(reporter.is_empty());

    assert!(widget.click_day(11));
    assert_eq!(widget.selection(), SelectionState::PendingRange(date(2024, 3, 11)));

    widget.set_today(date(2024, 3, 20));
    assert!(!day_state(&widget, 12).is_disabled);
    assert!(day_state(&widget, 16).is_disabled);
}

#[test]
fn set_today_moves_marker_and_cutoff() {
    let reporter = RecordingReporter::shared();
    let config = CalendarConfig::default()
        .calendar_type(CalendarType::Gregorian)
        .disable_past_dates(true);
    let mut widget = CalendarWidget::with_today(config, reporter, date(2024, 3, 15));
    widget.click_day(20);

    widget.set_today(date(2024, 3, 16));
    assert_eq!(widget.today(), date(2024, 3, 16));
    assert!(!day_state(&widget, 15).is_today);
    assert!(day_state(&widget, 16).is_today);
    assert!(day_state(&widget, 15).is_disabled);
    assert!(!widget.click_day(15));
    assert!(widget.click_day(16));

    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (2024, 3));
    assert_eq!(
        widget.selection(),
        SelectionState::Range {
            start: date(2024, 3, 16),
            end: date(2024, 3, 20),
        }
    );
}

#[test]
fn navigation_past_the_last_supported_year_does_not_panic() {
    let (mut widget, _) = widget(CalendarType::Gregorian, SelectionMode::Range, date(9999, 12, 31));

    widget.next_month();
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (10_000, 1));
    widget.previous_month();
    let month = widget.displayed_month();
    assert_eq!((month.year(), month.month()), (9999, 12));
}

#[test]
fn render_carries_the_configured_theme() {
    let (plain, _) = widget(CalendarType::Jalali, SelectionMode::Range, date(2024, 3, 20));
    assert_eq!(plain.render().theme, Theme::default());

    let config = CalendarConfig::default()
        .theme(Theme::default().primary_color("#c0392b").secondary_color("#fc0"));
    let themed = CalendarWidget::with_today(config, RecordingReporter::shared(), date(2024, 3, 20));
    let theme = themed.render().theme;
    assert_eq!(theme.primary_color, "#c0392b");
    assert_eq!(theme.secondary_color, "#fc0");
}
