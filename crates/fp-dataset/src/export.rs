//! Export of the cleaned table.
//!
//! Writes all source columns plus the derived ones, header first, no
//! leading row-index column. Dates are ISO-8601 so a re-ingest of the
//! exported file parses cleanly.

use fp_common::{FilmRecord, Result};
use std::path::Path;
use tracing::info;

/// Header written to exported files: the seven source columns followed
/// by the derived columns.
pub const EXPORT_HEADER: [&str; 11] = [
    "Film_Name",
    "Release_Date",
    "Viewing_Month",
    "Category",
    "Language",
    "Number_of_Views",
    "Viewer_Rate",
    "Movie_ID",
    "Days_Since_Release",
    "Months_Since_Release",
    "Trending_Score",
];

/// Write the cleaned table to a CSV file at `path`.
pub fn write_dataset(path: &Path, records: &[FilmRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(EXPORT_HEADER)?;

    for rec in records {
        let raw = rec.to_raw();
        wtr.write_record([
            raw.film_name,
            raw.release_date,
            raw.viewing_month,
            raw.category,
            raw.language,
            raw.number_of_views,
            raw.viewer_rate,
            rec.movie_id.to_hex(),
            rec.days_since_release.to_string(),
            rec.months_since_release.to_string(),
            rec.trending_score.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!(rows = records.len(), path = %path.display(), "cleaned dataset exported");
    Ok(())
}
