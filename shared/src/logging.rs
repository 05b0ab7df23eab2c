//! Shared logging utilities for consistent tracing across the tracker

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Filter directive applied to the tracker's own crates
fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("tracker={base_level},shared={base_level}")
}

/// Initialize the stdout tracing subscriber with an optional log level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for checklist-scoped info logging
#[macro_export]
macro_rules! checklist_info {
    ($checklist_id:expr, $($arg:tt)*) => {
        tracing::info!(
            checklist = %$checklist_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for checklist-scoped warning logging
#[macro_export]
macro_rules! checklist_warn {
    ($checklist_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            checklist = %$checklist_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for checklist-scoped error logging
#[macro_export]
macro_rules! checklist_error {
    ($checklist_id:expr, $($arg:tt)*) => {
        tracing::error!(
            checklist = %$checklist_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for checklist-scoped debug logging
#[macro_export]
macro_rules! checklist_debug {
    ($checklist_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            checklist = %$checklist_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}
