//! Reporting selections to an external store.
//!
//! ## Usage
//!
//! Implement [`SelectionReporter`] to forward each [`SaveRequest`] to your
//! backend. Reports are fire-and-forget: `report` must return without waiting
//! for the store, and its outcome never changes the widget.
use std::sync::Arc;

use parking_lot::Mutex;
use persian_calendar_math::{CalendarDate, CalendarType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::SelectionMode, selection::SelectionState};

/// The selection as seen by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPayload {
    /// First selected date, if any.
    pub start: Option<CalendarDate>,
    /// End of a complete range, if any.
    pub end: Option<CalendarDate>,
    /// Calendar the widget displays.
    pub calendar_type: CalendarType,
    /// Selection mode of the widget.
    pub selection_mode: SelectionMode,
}

impl SelectionPayload {
    /// Builds the payload describing `selection`.
    pub fn new(
        selection: &SelectionState,
        calendar_type: CalendarType,
        selection_mode: SelectionMode,
    ) -> Self {
        Self {
            start: selection.start(),
            end: selection.end(),
            calendar_type,
            selection_mode,
        }
    }
}

/// A payload plus the token that authenticates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// The selection to store.
    pub dates: SelectionPayload,
    /// Opaque authenticity token.
    pub security: String,
}

impl SaveRequest {
    /// Serializes the request as JSON.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Errors a store may report back to its reporter.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The request carried the wrong token.
    #[error("security token rejected")]
    InvalidToken,
    /// The store could not be written.
    #[error("failed to write selection: {0}")]
    Io(#[from] std::io::Error),
    /// The request could not be encoded.
    #[error("failed to encode selection: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives selection changes from a widget.
pub trait SelectionReporter: Send + Sync {
    /// Returns the reporter name for logging and diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Hands a request to the store without waiting for the outcome.
    fn report(&self, request: SaveRequest);
}

/// Reporter that drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl SelectionReporter for NoopReporter {
    fn report(&self, _request: SaveRequest) {}
}

/// Reporter that keeps every request in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    requests: Mutex<Vec<SaveRequest>>,
}

impl RecordingReporter {
    /// Creates an empty recorder behind an [`Arc`] ready to hand to a widget.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns a copy of every recorded request.
    pub fn requests(&self) -> Vec<SaveRequest> {
        self.requests.lock().clone()
    }

    /// Returns the most recent request.
    pub fn last(&self) -> Option<SaveRequest> {
        self.requests.lock().last().cloned()
    }

    /// Returns the number of recorded requests.
    pub fn len(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.lock().is_empty()
    }
}

impl SelectionReporter for RecordingReporter {
    fn report(&self, request: SaveRequest) {
        self.requests.lock().push(request);
    }
}
