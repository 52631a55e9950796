#![deny(missing_docs)]
//! Shared logging utilities for the video submitter workspace.
//!
//! This crate provides the `submit_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. While a submission is
//! in flight its id is attached to every log line emitted on the same thread.

use std::cell::RefCell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Id of the submission currently in flight on this thread, if any.
    static CURRENT_SUBMISSION: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Marks `submission_id` as in flight until the returned scope is dropped.
pub fn enter_submission(submission_id: &str) -> SubmissionScope {
    let previous =
        CURRENT_SUBMISSION.with(|slot| slot.replace(Some(submission_id.to_string())));
    SubmissionScope { previous }
}

/// Returns the id of the submission in flight on this thread.
pub fn current_submission() -> Option<String> {
    CURRENT_SUBMISSION.with(|slot| slot.borrow().clone())
}

/// Restores the previous submission context when dropped.
#[must_use = "the submission context ends when the scope is dropped"]
pub struct SubmissionScope {
    previous: Option<String>,
}

impl Drop for SubmissionScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_SUBMISSION.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Prefix the logging macros put in front of each message.
#[doc(hidden)]
pub fn line_prefix() -> String {
    CURRENT_SUBMISSION.with(|slot| match slot.borrow().as_deref() {
        Some(id) => format!("[submission {id}] "),
        None => String::new(),
    })
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! submit_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! submit_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! submit_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! submit_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! submit_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_sets_and_restores_submission() {
        assert_eq!(current_submission(), None);
        {
            let _outer = enter_submission("outer");
            assert_eq!(line_prefix(), "[submission outer] ");
            {
                let _inner = enter_submission("inner");
                assert_eq!(current_submission().as_deref(), Some("inner"));
            }
            assert_eq!(current_submission().as_deref(), Some("outer"));
        }
        assert_eq!(current_submission(), None);
        assert_eq!(line_prefix(), "");
    }
}
