//! Watch mode.
//!
//! Builds once, then waits for file changes. A burst of events is drained until
//! the channel stays quiet for the debounce window and triggers a single full
//! rebuild. Ctrl+C stops the loop.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::commands::generate;
use crate::config::PropdocConfig;
use crate::error::{CliError, Result};
use crate::sources::SourceFilter;
use crate::ui;
use crate::watcher::{FileChange, FileWatcher, WatchFilter};

/// Message printed after every successful build in watch mode.
pub const WATCHING_MESSAGE: &str = "Docs compiled. Watching for changes...";

/// Run watch mode until Ctrl+C.
pub async fn execute(config: PropdocConfig) -> Result<()> {
    let config = Arc::new(config);

    rebuild(&config).await;

    let filter = WatchFilter::new(
        &config.paths,
        &config.output,
        SourceFilter::from_config(&config),
    );
    let (watcher, mut changes) = FileWatcher::new(&config.paths, filter, config.debounce_ms)?;
    tracing::debug!(roots = watcher.roots().len(), "watching inputs");

    let quiet_period = Duration::from_millis(config.debounce_ms);

    loop {
        tokio::select! {
            change = changes.recv() => {
                let Some(change) = change else {
                    break;
                };
                let batch = drain_burst(change, &mut changes, quiet_period).await;
                tracing::debug!(
                    path = %batch.first().path().display(),
                    events = batch.len(),
                    "change detected"
                );
                ui::info(batch.first().message());
                rebuild(&config).await;
            }
            _ = tokio::signal::ctrl_c() => {
                ui::info("Stopping watch mode");
                break;
            }
        }
    }

    Ok(())
}

/// Changes collected into one rebuild.
#[derive(Debug)]
pub struct ChangeBatch {
    changes: Vec<FileChange>,
}

impl ChangeBatch {
    /// The change that opened the batch; it names the rebuild.
    pub fn first(&self) -> &FileChange {
        &self.changes[0]
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Collect `first` plus every change that arrives before the channel has been
/// quiet for `quiet_period`.
pub async fn drain_burst(
    first: FileChange,
    changes: &mut mpsc::Receiver<FileChange>,
    quiet_period: Duration,
) -> ChangeBatch {
    let mut batch = vec![first];
    while let Ok(Some(change)) = tokio::time::timeout(quiet_period, changes.recv()).await {
        batch.push(change);
    }
    ChangeBatch { changes: batch }
}

async fn rebuild(config: &Arc<PropdocConfig>) {
    let config = Arc::clone(config);
    let result = tokio::task::spawn_blocking(move || generate::rebuild(&config))
        .await
        .map_err(|e| CliError::Custom(format!("documentation build panicked: {e}")))
        .and_then(|result| result);

    match result {
        Ok(_) => ui::success(WATCHING_MESSAGE),
        // Keep watching: the next change may fix it
        Err(e) => ui::error(&e.to_string()),
    }
}
