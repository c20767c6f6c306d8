//! Builders for cleaned records in tests.

use chrono::NaiveDate;
use fp_common::{FilmRecord, MovieId};

/// A cleaned record with sensible defaults: English, November 2025
/// viewing month, rating 4.0, released 2020-01-01.
pub(crate) fn film(name: &str, views: u64, category: &str) -> FilmRecord {
    let release_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let days_since_release = 2161; // fixed reference run date
    let months_since_release = days_since_release as f64 / 30.0;
    FilmRecord {
        film_name: name.to_string(),
        release_date,
        viewing_month: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        category: category.to_string(),
        language: "English".to_string(),
        number_of_views: views,
        viewer_rate: 4.0,
        movie_id: MovieId::derive(name, release_date, category, "English"),
        days_since_release,
        months_since_release,
        trending_score: views as f64 / months_since_release,
    }
}
