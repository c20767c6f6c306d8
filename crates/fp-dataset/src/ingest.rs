//! CSV ingestion with header validation.
//!
//! Expected file format:
//! - Header row required, containing at least the seven source columns
//!   (matched by name, so extra columns and reordering are accepted)
//! - `Film_Name,Release_Date,Viewing_Month,Category,Language,Number_of_Views,Viewer_Rate`
//! - One row per viewing record; no type coercion happens here
//!
//! # Errors
//!
//! | Variant | Condition |
//! |---|---|
//! | [`Error::NotFound`] | File does not exist or is unreadable |
//! | [`Error::MissingColumn`] | Header lacks a required column |
//! | [`Error::Csv`] | Malformed quoting or inconsistent column count |

use fp_common::{Error, RawRecord, Result};
use std::path::Path;
use tracing::{debug, info};

/// Columns that must be present in the header, by exact name.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Film_Name",
    "Release_Date",
    "Viewing_Month",
    "Category",
    "Language",
    "Number_of_Views",
    "Viewer_Rate",
];

/// Read the dataset file into textual records, column values as-is.
pub fn read_dataset(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let header = rdr.headers()?.clone();
    debug!(columns = header.len(), "read dataset header");

    // Locate every required column by name; order in the file is free.
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = header
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| Error::MissingColumn {
                column: column.to_string(),
            })?;
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |i: usize| record.get(indices[i]).unwrap_or("").to_string();
        rows.push(RawRecord {
            film_name: field(0),
            release_date: field(1),
            viewing_month: field(2),
            category: field(3),
            language: field(4),
            number_of_views: field(5),
            viewer_rate: field(6),
        });
    }

    info!(rows = rows.len(), path = %path.display(), "dataset loaded");
    Ok(rows)
}
