//! File system watcher feeding watch mode.
//!
//! Watches every input path and forwards changes to documentable files through a
//! channel. Hidden entries, ignored directories, other extensions and the output
//! file itself are dropped before anything is sent.

use crate::error::{CliError, Result};
use crate::sources::SourceFilter;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// File change event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// File was modified
    Modified(PathBuf),
    /// File was created
    Created(PathBuf),
    /// File was removed
    Removed(PathBuf),
}

impl FileChange {
    /// Get the path affected by this change.
    pub fn path(&self) -> &Path {
        match self {
            FileChange::Modified(p) | FileChange::Created(p) | FileChange::Removed(p) => p,
        }
    }

    /// Status line announcing the rebuild this change triggers.
    pub fn message(&self) -> &'static str {
        match self {
            FileChange::Created(_) => "A new file was added. Recompiling docs",
            FileChange::Removed(_) => "A file was removed. Recompiling docs",
            FileChange::Modified(_) => "A file was changed. Recompiling docs",
        }
    }
}

/// Decides which file-system events are worth a rebuild.
#[derive(Debug, Clone)]
pub struct WatchFilter {
    roots: Vec<PathBuf>,
    output: PathBuf,
    sources: SourceFilter,
}

impl WatchFilter {
    /// `roots` and `output` are resolved to absolute paths so they compare equal
    /// to the paths notify reports.
    pub fn new(roots: &[PathBuf], output: &Path, sources: SourceFilter) -> Self {
        Self {
            roots: roots.iter().map(|root| resolve(root)).collect(),
            output: resolve(output),
            sources,
        }
    }

    /// Check if a path should be ignored.
    pub fn should_ignore(&self, path: &Path) -> bool {
        if path == self.output {
            return true;
        }

        // Only paths under one of the inputs
        let Some(rel_path) = self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
        else {
            return true;
        };

        // An explicitly named input file is always relevant
        if rel_path.as_os_str().is_empty() {
            return false;
        }

        for component in rel_path.components() {
            let name = component.as_os_str();
            if name.to_str().is_some_and(|n| n.starts_with('.')) {
                return true;
            }
            if self.sources.is_ignored_name(name) {
                return true;
            }
        }

        // Directory events pass; a removed directory no longer reports as one
        if path.is_dir() {
            return false;
        }

        !self.sources.matches_extension(path)
    }
}

/// Make a path absolute without requiring it to exist.
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// File watcher with per-path debouncing and filtering.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    roots: Vec<PathBuf>,
}

impl FileWatcher {
    /// Start watching `roots`.
    ///
    /// Directories are watched recursively, files on their own, both through their
    /// absolute paths. Roots that do not exist are skipped with a warning; if none
    /// exists the watcher fails.
    ///
    /// # Returns
    ///
    /// Tuple of (FileWatcher, receiver for change events)
    pub fn new(
        roots: &[PathBuf],
        filter: WatchFilter,
        debounce_ms: u64,
    ) -> Result<(Self, mpsc::Receiver<FileChange>)> {
        let existing: Vec<PathBuf> = roots
            .iter()
            .filter(|root| {
                let exists = root.exists();
                if !exists {
                    tracing::warn!(path = %root.display(), "cannot watch missing path");
                }
                exists
            })
            .map(|root| resolve(root))
            .collect();

        let Some(first) = existing.first() else {
            return Err(CliError::FileNotFound(
                roots.first().cloned().unwrap_or_default(),
            ));
        };
        tracing::debug!(root = %first.display(), roots = existing.len(), "starting watcher");

        let (tx, rx) = mpsc::channel(100);

        let debounce_duration = Duration::from_millis(debounce_ms);
        let mut last_event: Option<(PathBuf, Instant)> = None;

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("watch error: {}", e);
                    return;
                }
            };

            for path in &event.paths {
                if filter.should_ignore(path) {
                    continue;
                }

                // Debounce: skip if same file changed within debounce window
                let now = Instant::now();
                if let Some((last_path, last_time)) = &last_event {
                    if last_path == path && now.duration_since(*last_time) < debounce_duration {
                        continue;
                    }
                }
                last_event = Some((path.clone(), now));

                let change = match event.kind {
                    EventKind::Create(_) => FileChange::Created(path.clone()),
                    EventKind::Modify(_) => FileChange::Modified(path.clone()),
                    EventKind::Remove(_) => FileChange::Removed(path.clone()),
                    _ => continue,
                };

                // The receiver is gone once watch mode shuts down
                let _ = tx.blocking_send(change);
            }
        })?;

        for root in &existing {
            let mode = if root.is_dir() {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            watcher.watch(root, mode)?;
        }

        Ok((
            Self {
                _watcher: watcher,
                roots: existing,
            },
            rx,
        ))
    }

    /// Paths being watched.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}
