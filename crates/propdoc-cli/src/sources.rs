//! Input discovery.
//!
//! Expands the configured paths into the list of files to parse. Directories are
//! walked recursively in file-name order, skipping ignored directory names and
//! files with other extensions. A file named explicitly is always taken,
//! whatever its extension.

use std::ffi::OsStr;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use walkdir::WalkDir;

use crate::config::PropdocConfig;

/// Extension and directory-name filter shared by the walker and the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    extensions: Vec<String>,
    ignore: Vec<String>,
}

impl SourceFilter {
    pub fn new(extensions: &[String], ignore: &[String]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            ignore: ignore.to_vec(),
        }
    }

    pub fn from_config(config: &PropdocConfig) -> Self {
        Self::new(&config.extensions, &config.ignore)
    }

    /// `true` when the file's extension is one of the configured ones.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    /// `true` when a directory with this name is skipped.
    pub fn is_ignored_name(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.ignore.iter().any(|ignored| ignored == name))
    }
}

/// One file to parse, with the key it gets in the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub key: String,
}

impl Source {
    pub fn new(path: PathBuf, separator: Option<&str>) -> Self {
        let key = output_key(&path, separator);
        Self { path, key }
    }
}

/// Output key for a path: the path as given, with the platform separator
/// replaced by `separator` when one is configured.
pub fn output_key(path: &Path, separator: Option<&str>) -> String {
    let key = path.to_string_lossy();
    match separator {
        Some(sep) => key.replace(MAIN_SEPARATOR, sep),
        None => key.into_owned(),
    }
}

/// Collect every file to parse, in traversal order.
///
/// Paths that do not exist and directory entries that cannot be read are logged
/// and skipped. A file reachable from two inputs is listed twice.
pub fn collect_sources(config: &PropdocConfig) -> Vec<Source> {
    let filter = SourceFilter::from_config(config);
    let separator = config.separator.as_deref();
    let mut sources = Vec::new();

    for root in &config.paths {
        if root.is_file() {
            sources.push(Source::new(root.clone(), separator));
            continue;
        }
        if !root.is_dir() {
            tracing::warn!(path = %root.display(), "input path does not exist, skipping");
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !filter.is_ignored_name(entry.file_name())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "<unknown>".to_string());
                    tracing::warn!(path = %path, "failed to read directory entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() && filter.matches_extension(entry.path()) {
                sources.push(Source::new(entry.into_path(), separator));
            }
        }
    }

    tracing::debug!(files = sources.len(), "collected input files");
    sources
}
