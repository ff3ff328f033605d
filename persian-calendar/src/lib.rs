//! A Jalali and Gregorian calendar widget core.
//!
//! # Usage
//!
//! Build a [`CalendarConfig`], hand it to a [`CalendarWidget`] together with a
//! [`SelectionReporter`], then forward UI events and paint the returned
//! [`RenderModel`].
//!
//! ```
//! use persian_calendar::{
//!     CalendarConfig, CalendarWidget, Direction, RecordingReporter, SelectionMode,
//!     SelectionState, WidgetEvent,
//! };
//! use persian_calendar_math::{CalendarDate, CalendarType};
//!
//! let reporter = RecordingReporter::shared();
//! let today = CalendarDate::new(2024, 3, 20).expect("valid date");
//! let config = CalendarConfig::default()
//!     .calendar_type(CalendarType::Jalali)
//!     .selection_mode(SelectionMode::Range);
//! let mut widget = CalendarWidget::with_today(config, reporter.clone(), today);
//!
//! assert_eq!(widget.render().title, "فروردین 1403");
//!
//! widget.handle(WidgetEvent::ClickDay(20));
//! widget.handle(WidgetEvent::ClickDay(10));
//! assert!(matches!(widget.selection(), SelectionState::Range { .. }));
//! assert_eq!(widget.display_text(), "Selected Range: 1403/1/10 to 1403/1/20");
//! assert_eq!(reporter.len(), 2);
//!
//! widget.handle(WidgetEvent::Navigate(Direction::Previous));
//! assert_eq!(widget.render().title, "اسفند 1402");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod persistence;
pub mod render;
pub mod selection;
pub mod widget;

pub use config::{CalendarConfig, ConfigError, SelectionMode, Strings, Theme};
pub use persistence::{
    NoopReporter, PersistenceError, RecordingReporter, SaveRequest, SelectionPayload,
    SelectionReporter,
};
pub use render::{DayCell, DayCellState, RenderModel, TextDirection};
pub use selection::{AllDates, NotBefore, SelectableDates, SelectionState};
pub use widget::{CalendarWidget, Direction, DisplayedMonth, WidgetEvent};
