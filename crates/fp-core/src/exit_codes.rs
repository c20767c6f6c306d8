//! Exit codes for the fp CLI.
//!
//! Exit codes communicate outcome without output parsing and are a
//! stable contract for automation.
//!
//! Ranges:
//! - 0: success
//! - 10-19: user/environment errors (recoverable by user action)
//! - 20-29: internal errors (bugs, should be reported)

use fp_common::{Error, ErrorCategory};

/// Exit codes for fp operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Ok = 0,

    /// Invalid arguments.
    ArgsError = 10,

    /// Input file missing or malformed.
    InputError = 11,

    /// Data-shape problem: missing columns, empty table after
    /// cleaning/filtering.
    DataError = 12,

    /// Internal error (bug - please report).
    InternalError = 20,

    /// I/O error.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Ok)
    }

    /// Check if this exit code is a user/environment error (10-19).
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Check if this exit code is an internal error (20-29).
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Input => ExitCode::InputError,
            ErrorCategory::Data => ExitCode::DataError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}
