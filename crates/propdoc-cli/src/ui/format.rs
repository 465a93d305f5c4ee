//! Formatting helpers for build summaries.

use std::path::Path;
use std::time::Duration;

/// Format an output size with the largest fitting unit.
///
/// ```
/// use propdoc_cli::ui::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Format a build duration: milliseconds below one second, seconds below one minute.
///
/// ```
/// use std::time::Duration;
/// use propdoc_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One-line summary of a finished build.
///
/// `documented` counts files that produced a record, `scanned` counts every file
/// that was read and parsed.
pub fn format_build_summary(
    documented: usize,
    scanned: usize,
    output: &Path,
    bytes: u64,
    duration: Duration,
) -> String {
    let noun = if scanned == 1 { "file" } else { "files" };
    format!(
        "Documented {} of {} {} into {} ({}, {})",
        documented,
        scanned,
        noun,
        output.display(),
        format_size(bytes),
        format_duration(duration)
    )
}
