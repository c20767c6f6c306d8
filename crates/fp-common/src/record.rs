//! The film-viewing record, raw and cleaned.

use crate::id::MovieId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row as read from the dataset file. All fields textual; no
/// coercion has happened yet, so any field may hold garbage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    pub film_name: String,
    pub release_date: String,
    pub viewing_month: String,
    pub category: String,
    pub language: String,
    pub number_of_views: String,
    pub viewer_rate: String,
}

/// One cleaned row: every source field parsed and present, plus the
/// derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub film_name: String,
    pub release_date: NaiveDate,
    /// Month-granularity date; the day component is whatever the source
    /// carried (typically the first of the month).
    pub viewing_month: NaiveDate,
    pub category: String,
    pub language: String,
    pub number_of_views: u64,
    pub viewer_rate: f64,
    pub movie_id: MovieId,
    /// Days between the run date and the release date, floored at 1.
    pub days_since_release: i64,
    /// `days_since_release / 30.0`; always >= 1/30.
    pub months_since_release: f64,
    /// `number_of_views / months_since_release`. Recomputed against the
    /// wall-clock date of each run, so not stable across days.
    pub trending_score: f64,
}

impl FilmRecord {
    /// Textual projection of the seven source columns, as they would
    /// appear in a re-exported file. Used by export and by idempotence
    /// checks (cleaning this projection must remove nothing).
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            film_name: self.film_name.clone(),
            release_date: self.release_date.format("%Y-%m-%d").to_string(),
            viewing_month: self.viewing_month.format("%Y-%m-%d").to_string(),
            category: self.category.clone(),
            language: self.language.clone(),
            number_of_views: self.number_of_views.to_string(),
            viewer_rate: self.viewer_rate.to_string(),
        }
    }
}

/// What cleaning did to the raw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanReport {
    /// Rows read from the file.
    pub rows_in: usize,
    /// Exact full-row duplicates removed (first occurrence kept).
    pub duplicates_removed: usize,
    /// Rows dropped because a field was missing or unparseable.
    pub incomplete_dropped: usize,
    /// Rows surviving into the cleaned table.
    pub rows_out: usize,
}

impl CleanReport {
    /// True when cleaning removed nothing.
    pub fn is_lossless(&self) -> bool {
        self.duplicates_removed == 0 && self.incomplete_dropped == 0
    }
}

/// The cleaned table: ordered records plus the report describing how
/// they were produced. Recomputed from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanTable {
    pub records: Vec<FilmRecord>,
    pub report: CleanReport,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
