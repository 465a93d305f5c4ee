//! Terminal UI: status lines and build summaries.
//!
//! ```no_run
//! use propdoc_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("A file was changed. Recompiling docs");
//! ui::success("Docs compiled. Watching for changes...");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_build_summary, format_duration, format_size};
pub use messages::{error, info, success};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to whether stderr is
/// attended by a user.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status messages are colored.
///
/// Call early in `main`; `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Whether status messages are currently colored.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
