//! Widget configuration and its TOML loader.
//!
//! ## Usage
//!
//! Build a [`CalendarConfig`] in code with its setters, or load one from a
//! TOML file shaped like:
//!
//! ```toml
//! [calendar]
//! type = "jalali"          # or "gregorian"
//! selection = "range"      # or "single"
//! disable_past_dates = true
//! security_token = "a1b2c3"
//!
//! [theme]
//! primary_color = "#007bff"
//! secondary_color = "#1d59ff"
//!
//! [strings]
//! no_selection = "No dates selected."
//! ```
//!
//! Unknown values fall back to the defaults with a warning instead of failing.
use std::{fs, path::Path};

use derive_setters::Setters;
use persian_calendar_math::CalendarType;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default primary theme color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#007bff";
/// Default secondary theme color.
pub const DEFAULT_SECONDARY_COLOR: &str = "#1d59ff";

/// Whether clicks pick one date or a start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Every click replaces the selected date.
    Single,
    /// Two clicks pick an ordered range.
    #[default]
    Range,
}

impl SelectionMode {
    /// Returns the lowercase identifier used in configuration and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Range => "range",
        }
    }

    /// Parses the lowercase identifier, ignoring case and surrounding spaces.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "single" => Some(SelectionMode::Single),
            "range" => Some(SelectionMode::Range),
            _ => None,
        }
    }
}

/// Theme colors, copied into every [`RenderModel`](crate::RenderModel).
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct Theme {
    /// Color of selected endpoints.
    pub primary_color: String,
    /// Color of days inside a range.
    pub secondary_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
        }
    }
}

/// Localized strings shown by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct Strings {
    /// Prefix of a completed range, e.g. `Selected Range:`.
    pub selected_range: String,
    /// Prefix of a single date or a range awaiting its end.
    pub selected_date: String,
    /// Shown when nothing is selected.
    pub no_selection: String,
    /// Placed between the two endpoints of a range.
    pub range_separator: String,
    /// Label of the previous-month button.
    pub previous_month: String,
    /// Label of the next-month button.
    pub next_month: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            selected_range: "Selected Range:".to_string(),
            selected_date: "Selected Date:".to_string(),
            no_selection: "No dates selected.".to_string(),
            range_separator: " to ".to_string(),
            previous_month: "Previous month".to_string(),
            next_month: "Next month".to_string(),
        }
    }
}

/// Configuration of one calendar widget instance.
///
/// The values are fixed for the lifetime of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
pub struct CalendarConfig {
    /// Calendar used for display and navigation.
    pub calendar_type: CalendarType,
    /// Single date or range selection.
    pub selection_mode: SelectionMode,
    /// Whether days before today are disabled.
    pub disable_past_dates: bool,
    /// Colors passed through to the render target.
    pub theme: Theme,
    /// Localized strings.
    pub strings: Strings,
    /// Opaque authenticity token sent with every persistence request.
    #[setters(into)]
    pub security_token: String,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has wrongly typed fields.
    #[error("failed to parse calendar config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CalendarConfig {
    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents)?;
        Ok(raw.into_config())
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    calendar: Option<RawCalendar>,
    theme: Option<RawTheme>,
    strings: Option<RawStrings>,
}

#[derive(Debug, Deserialize, Default)]
struct RawCalendar {
    #[serde(rename = "type")]
    calendar_type: Option<String>,
    selection: Option<String>,
    disable_past_dates: Option<bool>,
    security_token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawTheme {
    primary_color: Option<String>,
    secondary_color: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawStrings {
    selected_range: Option<String>,
    selected_date: Option<String>,
    no_selection: Option<String>,
    range_separator: Option<String>,
    previous_month: Option<String>,
    next_month: Option<String>,
}

impl RawConfig {
    fn into_config(self) -> CalendarConfig {
        let calendar = self.calendar.unwrap_or_default();
        let theme = self.theme.unwrap_or_default();
        let strings = self.strings.unwrap_or_default();
        let default_strings = Strings::default();

        CalendarConfig {
            calendar_type: calendar
                .calendar_type
                .map(|name| sanitize_calendar_type(&name))
                .unwrap_or_default(),
            selection_mode: calendar
                .selection
                .map(|name| sanitize_selection_mode(&name))
                .unwrap_or_default(),
            disable_past_dates: calendar.disable_past_dates.unwrap_or(false),
            theme: Theme {
                primary_color: sanitize_color(theme.primary_color, DEFAULT_PRIMARY_COLOR),
                secondary_color: sanitize_color(theme.secondary_color, DEFAULT_SECONDARY_COLOR),
            },
            strings: Strings {
                selected_range: strings
                    .selected_range
                    .unwrap_or(default_strings.selected_range),
                selected_date: strings.selected_date.unwrap_or(default_strings.selected_date),
                no_selection: strings.no_selection.unwrap_or(default_strings.no_selection),
                range_separator: strings
                    .range_separator
                    .unwrap_or(default_strings.range_separator),
                previous_month: strings
                    .previous_month
                    .unwrap_or(default_strings.previous_month),
                next_month: strings.next_month.unwrap_or(default_strings.next_month),
            },
            security_token: calendar.security_token.unwrap_or_default(),
        }
    }
}

fn sanitize_calendar_type(name: &str) -> CalendarType {
    CalendarType::from_name(name).unwrap_or_else(|| {
        warn!("Unknown calendar type '{name}', falling back to jalali");
        CalendarType::Jalali
    })
}

fn sanitize_selection_mode(name: &str) -> SelectionMode {
    SelectionMode::from_name(name).unwrap_or_else(|| {
        warn!("Unknown selection mode '{name}', falling back to range");
        SelectionMode::Range
    })
}

fn sanitize_color(value: Option<String>, default: &str) -> String {
    match value {
        Some(color) if is_hex_color(&color) => color,
        Some(color) => {
            warn!("Invalid theme color '{color}', using {default}");
            default.to_string()
        }
        None => default.to_string(),
    }
}

/// Accepts `#rgb` and `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
