//! Filter, sort, and KPI logic behind the dashboard widgets.
//!
//! The presentation layer collects a [`FilterSpec`] from its widgets and
//! must apply it before re-deriving anything: KPIs, charts, and
//! leaderboards all read the filtered subset, never the full table.

use clap::ValueEnum;
use fp_common::{Error, FilmRecord, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// User filter selections. Inactive fields are `None`; active fields
/// combine by conjunction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub language: Option<String>,
    /// Calendar month (1-12) of `viewing_month`.
    pub month: Option<u32>,
    /// Calendar year of `viewing_month`.
    pub year: Option<i32>,
    /// Minimum `viewer_rate`, inclusive.
    pub min_rating: Option<f64>,
}

impl FilterSpec {
    /// True when no field is active (apply is the identity).
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.language.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.min_rating.is_none()
    }

    /// Conjunction of every active field.
    pub fn matches(&self, rec: &FilmRecord) -> bool {
        use chrono::Datelike;

        if let Some(category) = &self.category {
            if rec.category != *category {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if rec.language != *language {
                return false;
            }
        }
        if let Some(month) = self.month {
            if rec.viewing_month.month() != month {
                return false;
            }
        }
        if let Some(year) = self.year {
            if rec.viewing_month.year() != year {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if rec.viewer_rate < min_rating {
                return false;
            }
        }
        true
    }

    /// Filtered subset, original order preserved.
    pub fn apply(&self, records: &[FilmRecord]) -> Vec<FilmRecord> {
        let filtered: Vec<FilmRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        debug!(before = records.len(), after = filtered.len(), "filter applied");
        filtered
    }
}

/// Sortable metric for leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Views,
    Rating,
    TrendingScore,
    ReleaseDate,
}

/// Records sorted descending by `key` (stable, ties keep row order),
/// truncated to `limit` when given.
pub fn leaderboard(records: &[FilmRecord], key: SortKey, limit: Option<usize>) -> Vec<FilmRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Views => sorted.sort_by(|a, b| b.number_of_views.cmp(&a.number_of_views)),
        SortKey::Rating => sorted.sort_by(|a, b| b.viewer_rate.total_cmp(&a.viewer_rate)),
        SortKey::TrendingScore => {
            sorted.sort_by(|a, b| b.trending_score.total_cmp(&a.trending_score))
        }
        SortKey::ReleaseDate => sorted.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
    }
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// KPI metrics recomputed against a (possibly filtered) subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_films: usize,
    pub total_views: u64,
    pub avg_rating: f64,
    /// Language with the greatest view sum (lexical tie-break).
    pub top_language: String,
    /// Category with the greatest view sum (lexical tie-break).
    pub top_category: String,
}

fn top_by_views<'a>(records: &'a [FilmRecord], label: impl Fn(&'a FilmRecord) -> &'a str) -> String {
    let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in records {
        *sums.entry(label(rec)).or_default() += rec.number_of_views;
    }
    // Label-sorted map plus strict > keeps the lexically smallest tie.
    let mut best: Option<(&str, u64)> = None;
    for (label, views) in sums {
        match best {
            Some((_, best_views)) if views > best_views => best = Some((label, views)),
            None => best = Some((label, views)),
            _ => {}
        }
    }
    best.map(|(label, _)| label.to_string()).unwrap_or_default()
}

/// KPI metrics for the given subset. The caller passes the filtered
/// records; passing the full table here when a filter is active is a
/// presentation bug.
pub fn kpis(records: &[FilmRecord]) -> Result<Kpis> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    let stats = crate::features::basic_stats(records)?;
    Ok(Kpis {
        total_films: stats.total_films,
        total_views: stats.total_views,
        avg_rating: stats.avg_rating,
        top_language: top_by_views(records, |r| r.language.as_str()),
        top_category: top_by_views(records, |r| r.category.as_str()),
    })
}

/// Which label column a distribution is taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColumn {
    Category,
    Language,
}

/// One slice of a distribution (pie chart feed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Row counts per label value, sorted by count descending then label.
pub fn distribution(records: &[FilmRecord], column: LabelColumn) -> Vec<LabelCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records {
        let label = match column {
            LabelColumn::Category => rec.category.as_str(),
            LabelColumn::Language => rec.language.as_str(),
        };
        *counts.entry(label).or_default() += 1;
    }
    let mut out: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Highly rated films with unusually few views: rating at or above
/// `min_rating`, views at or below the nearest-rank `views_percentile`
/// (0-100) of the subset's view counts.
pub fn hidden_gems(
    records: &[FilmRecord],
    min_rating: f64,
    views_percentile: f64,
) -> Vec<FilmRecord> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut views: Vec<u64> = records.iter().map(|r| r.number_of_views).collect();
    views.sort_unstable();

    let p = views_percentile.clamp(0.0, 100.0);
    // Nearest-rank: smallest value with at least p% of the data at or
    // below it. Rank 0 maps to the minimum.
    let rank = ((p / 100.0) * views.len() as f64).ceil() as usize;
    let threshold = views[rank.saturating_sub(1).min(views.len() - 1)];

    records
        .iter()
        .filter(|r| r.viewer_rate >= min_rating && r.number_of_views <= threshold)
        .cloned()
        .collect()
}
