//! Cleaning: parse, dedup, drop, derive.
//!
//! The stage mirrors what the dashboard does to the raw frame: coerce
//! the two date columns, remove exact duplicates, drop rows with any
//! missing field, then append the derived columns. A row with a single
//! unparseable field is dropped whole rather than flagged; that loss is
//! counted and logged, never raised.

use chrono::NaiveDate;
use fp_common::{CleanReport, CleanTable, FilmRecord, MovieId, RawRecord};
use std::collections::HashSet;
use tracing::{info, warn};

/// Accepted date format for `Release_Date` and `Viewing_Month`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rating bounds; values outside are treated as unparseable.
const RATE_MIN: f64 = 0.0;
const RATE_MAX: f64 = 5.0;

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

fn parse_views(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok()
}

fn parse_rate(s: &str) -> Option<f64> {
    let rate = s.trim().parse::<f64>().ok()?;
    if rate.is_finite() && (RATE_MIN..=RATE_MAX).contains(&rate) {
        Some(rate)
    } else {
        None
    }
}

/// Parse one raw row into a typed record, deriving the computed columns.
/// Returns `None` when any field is missing or unparseable.
fn parse_record(raw: &RawRecord, today: NaiveDate) -> Option<FilmRecord> {
    if raw.film_name.trim().is_empty()
        || raw.category.trim().is_empty()
        || raw.language.trim().is_empty()
    {
        return None;
    }

    let release_date = parse_date(&raw.release_date)?;
    let viewing_month = parse_date(&raw.viewing_month)?;
    let number_of_views = parse_views(&raw.number_of_views)?;
    let viewer_rate = parse_rate(&raw.viewer_rate)?;

    let film_name = raw.film_name.trim().to_string();
    let category = raw.category.trim().to_string();
    let language = raw.language.trim().to_string();

    let movie_id = MovieId::derive(&film_name, release_date, &category, &language);

    // Floor at one day so months_since_release never reaches zero.
    let days_since_release = (today - release_date).num_days().max(1);
    let months_since_release = days_since_release as f64 / 30.0;
    let trending_score = number_of_views as f64 / months_since_release;

    Some(FilmRecord {
        film_name,
        release_date,
        viewing_month,
        category,
        language,
        number_of_views,
        viewer_rate,
        movie_id,
        days_since_release,
        months_since_release,
        trending_score,
    })
}

/// Clean the raw table against the given run date.
///
/// Pure given `today`: re-running on the same date yields the same
/// table. Duplicate removal keeps the first occurrence; surviving rows
/// keep their relative order.
pub fn clean(raw: &[RawRecord], today: NaiveDate) -> CleanTable {
    let mut seen: HashSet<&RawRecord> = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());
    let mut duplicates_removed = 0usize;
    let mut incomplete_dropped = 0usize;

    for row in raw {
        if !seen.insert(row) {
            duplicates_removed += 1;
            continue;
        }
        match parse_record(row, today) {
            Some(record) => records.push(record),
            None => incomplete_dropped += 1,
        }
    }

    let report = CleanReport {
        rows_in: raw.len(),
        duplicates_removed,
        incomplete_dropped,
        rows_out: records.len(),
    };

    if incomplete_dropped > 0 {
        warn!(
            dropped = incomplete_dropped,
            "rows dropped for missing or unparseable fields"
        );
    }
    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        duplicates = report.duplicates_removed,
        "cleaning finished"
    );

    CleanTable { records, report }
}
