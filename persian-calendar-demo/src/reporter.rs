//! Stores the latest selection in a JSON file from a background task.
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use persian_calendar::{PersistenceError, SaveRequest, SelectionReporter};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{error, info};

/// Forwards save requests to a writer task that owns the store file.
///
/// Requests are written in the order they were reported; each write replaces
/// the previous selection.
pub struct JsonFileReporter {
    sender: mpsc::UnboundedSender<SaveRequest>,
}

impl JsonFileReporter {
    /// Spawns the writer task on the current runtime.
    ///
    /// The task ends once every clone of the returned reporter is dropped and
    /// resolves to the number of selections it stored.
    pub fn spawn(path: PathBuf, expected_token: String) -> (Arc<Self>, JoinHandle<usize>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let writer = tokio::spawn(run_writer(path, expected_token, receiver));
        (Arc::new(Self { sender }), writer)
    }
}

impl SelectionReporter for JsonFileReporter {
    fn report(&self, request: SaveRequest) {
        if self.sender.send(request).is_err() {
            error!("Selection store is closed, dropping request");
        }
    }
}

async fn run_writer(
    path: PathBuf,
    expected_token: String,
    mut receiver: mpsc::UnboundedReceiver<SaveRequest>,
) -> usize {
    let mut stored = 0;
    while let Some(request) = receiver.recv().await {
        match store(&path, &expected_token, &request).await {
            Ok(()) => {
                stored += 1;
                info!("Saved selection to {}", path.display());
            }
            Err(err) => error!("Failed to save selection: {err}"),
        }
    }
    stored
}

async fn store(
    path: &Path,
    expected_token: &str,
    request: &SaveRequest,
) -> Result<(), PersistenceError> {
    if request.security != expected_token {
        return Err(PersistenceError::InvalidToken);
    }
    let json = serde_json::to_string_pretty(&request.dates)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use persian_calendar::{SelectionMode, SelectionPayload, SelectionState};
    use persian_calendar_math::{CalendarDate, CalendarType};

    use super::*;

    fn request(day: u8, security: &str) -> SaveRequest {
        let date = CalendarDate::new(2024, 3, day).expect("valid date");
        SaveRequest {
            dates: SelectionPayload::new(
                &SelectionState::PendingRange(date),
                CalendarType::Jalali,
                SelectionMode::Range,
            ),
            security: security.to_string(),
        }
    }

    #[tokio::test]
    async fn keeps_the_latest_selection() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("selection.json");
        let (reporter, writer) = JsonFileReporter::spawn(path.clone(), "nonce".to_string());

        reporter.report(request(20, "nonce"));
        reporter.report(request(25, "nonce"));
        drop(reporter);

        assert_eq!(writer.await.expect("writer task"), 2);
        let contents = std::fs::read_to_string(&path).expect("read store");
        let stored: SelectionPayload = serde_json::from_str(&contents).expect("decode store");
        assert_eq!(stored, request(25, "nonce").dates);
    }

    #[tokio::test]
    async fn rejects_foreign_tokens() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("selection.json");
        let (reporter, writer) = JsonFileReporter::spawn(path.clone(), "nonce".to_string());

        reporter.report(request(20, "forged"));
        drop(reporter);

        assert_eq!(writer.await.expect("writer task"), 0);
        assert!(!path.exists());
    }
}
