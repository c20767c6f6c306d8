//! Error types for the filmpulse pipeline.
//!
//! Errors carry enough structure for the CLI to map them to stable exit
//! codes and for machine consumers to group them by category. Library
//! code propagates with `?`; only the binary decides how to present a
//! failure.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for filmpulse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input file problems (missing path, malformed delimited content).
    Input,
    /// Data-shape problems (missing columns, empty tables).
    Data,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for the filmpulse pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("dataset not found: {path}")]
    NotFound { path: PathBuf },

    #[error("malformed delimited data: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column missing from header: {column}")]
    MissingColumn { column: String },

    #[error("aggregation invoked on an empty table")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound { .. } | Error::Csv(_) => ErrorCategory::Input,
            Error::MissingColumn { .. } | Error::EmptyInput => ErrorCategory::Data,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "Dataset Not Found",
            Error::Csv(_) => "Malformed Dataset",
            Error::MissingColumn { .. } => "Missing Column",
            Error::EmptyInput => "Empty Table",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => {
                "Check the --data path, or place the dataset at data/Film_Dataset.csv."
            }
            Error::Csv(_) => {
                "The file is not valid CSV (quoting or column counts). Re-export the dataset."
            }
            Error::MissingColumn { .. } => {
                "The header must contain Film_Name, Release_Date, Viewing_Month, Category, Language, Number_of_Views, Viewer_Rate."
            }
            Error::EmptyInput => {
                "Every row was filtered or dropped during cleaning. Relax the filters or inspect the dataset."
            }
            Error::Io(_) => "Check disk space and file permissions, then retry.",
            Error::Json(_) => "Internal serialization failure; please report it.",
        }
    }
}

/// Format an error for human-readable stderr output.
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let not_found = Error::NotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(not_found.category(), ErrorCategory::Input);
        assert_eq!(
            Error::MissingColumn {
                column: "Film_Name".into()
            }
            .category(),
            ErrorCategory::Data
        );
        assert_eq!(Error::EmptyInput.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Input.to_string(), "input");
        assert_eq!(ErrorCategory::Data.to_string(), "data");
        assert_eq!(ErrorCategory::Io.to_string(), "io");
    }

    #[test]
    fn test_format_error_human() {
        let err = Error::NotFound {
            path: PathBuf::from("data/Film_Dataset.csv"),
        };
        let formatted = format_error_human(&err, false);

        assert!(formatted.contains("Dataset Not Found"));
        assert!(formatted.contains("data/Film_Dataset.csv"));
        assert!(formatted.contains("--data"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
