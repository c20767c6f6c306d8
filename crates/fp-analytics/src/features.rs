//! Aggregate views over the cleaned table.

use chrono::NaiveDate;
use fp_common::{Error, FilmRecord, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// View total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryViews {
    pub category: String,
    pub total_views: u64,
}

/// View total for one viewing month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyViews {
    pub month: NaiveDate,
    pub total_views: u64,
}

/// Scalar summary of the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Count of distinct film names.
    pub total_films: usize,
    pub total_views: u64,
    /// Mean viewer rate, rounded to two decimal places.
    pub avg_rating: f64,
}

/// Round to two decimal places, the precision the dashboard displays.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Total views per category, sorted by label.
pub fn category_views(records: &[FilmRecord]) -> Vec<CategoryViews> {
    let mut by_category: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in records {
        *by_category.entry(rec.category.as_str()).or_default() += rec.number_of_views;
    }
    by_category
        .into_iter()
        .map(|(category, total_views)| CategoryViews {
            category: category.to_string(),
            total_views,
        })
        .collect()
}

/// Total views per viewing month, sorted by month.
pub fn monthly_views(records: &[FilmRecord]) -> Vec<MonthlyViews> {
    let mut by_month: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for rec in records {
        *by_month.entry(rec.viewing_month).or_default() += rec.number_of_views;
    }
    by_month
        .into_iter()
        .map(|(month, total_views)| MonthlyViews { month, total_views })
        .collect()
}

/// First `n` records by `number_of_views` descending. The sort is
/// stable, so ties keep their original row order.
pub fn top_movies(records: &[FilmRecord], n: usize) -> Vec<FilmRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.number_of_views.cmp(&a.number_of_views));
    sorted.truncate(n);
    sorted
}

/// Scalar summary metrics. Errors on an empty table, where the mean is
/// undefined.
pub fn basic_stats(records: &[FilmRecord]) -> Result<BasicStats> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    let total_films = records
        .iter()
        .map(|r| r.film_name.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let total_views = records.iter().map(|r| r.number_of_views).sum();
    let rating_sum: f64 = records.iter().map(|r| r.viewer_rate).sum();

    Ok(BasicStats {
        total_films,
        total_views,
        avg_rating: round2(rating_sum / records.len() as f64),
    })
}
