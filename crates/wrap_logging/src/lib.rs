#![deny(missing_docs)]
//! Shared logging utilities for the AppWrap workspace.
//!
//! This crate provides the `wrap_*` logging macros used across the codebase,
//! a thread-local handle to the workflow run currently being driven, and a
//! minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the id of the workflow run in flight.
    static ACTIVE_RUN: Cell<u64> = const { Cell::new(0) };
}

/// Records the workflow run id for the current thread.
/// The application loop calls this when a new generation run starts so that
/// log lines can be correlated with the run that produced them.
pub fn set_active_run(run_id: u64) {
    ACTIVE_RUN.with(|v| v.set(run_id));
}

/// Returns the workflow run id for the current thread.
/// Returns 0 if no run has started yet.
pub fn active_run() -> u64 {
    ACTIVE_RUN.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! wrap_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! wrap_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! wrap_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! wrap_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! wrap_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
