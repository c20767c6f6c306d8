//! Payload rendering: JSON for machines, aligned tables for humans.

use fp_analytics::{CategoryViews, Kpis, MonthlyViews};
use fp_common::{CleanReport, FilmRecord, Result};
use serde::Serialize;

/// Pretty JSON for any payload.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>, min: usize) -> usize {
    names.map(str::len).fold(min, usize::max)
}

/// KPI block, one metric per line.
pub fn kpis_table(kpis: &Kpis) -> String {
    format!(
        "Total films:    {}\n\
         Total views:    {}\n\
         Average rating: {:.2}\n\
         Top language:   {}\n\
         Top category:   {}",
        kpis.total_films, kpis.total_views, kpis.avg_rating, kpis.top_language, kpis.top_category
    )
}

/// Category view sums, label-aligned.
pub fn category_table(rows: &[CategoryViews]) -> String {
    let width = name_width(rows.iter().map(|r| r.category.as_str()), "Category".len());
    let mut out = format!("{:<width$}  {:>12}\n", "Category", "Views");
    for row in rows {
        out.push_str(&format!(
            "{:<width$}  {:>12}\n",
            row.category, row.total_views
        ));
    }
    out.pop();
    out
}

/// Monthly view sums in month order.
pub fn monthly_table(rows: &[MonthlyViews]) -> String {
    let mut out = format!("{:<10}  {:>12}\n", "Month", "Views");
    for row in rows {
        out.push_str(&format!(
            "{:<10}  {:>12}\n",
            row.month.format("%Y-%m"),
            row.total_views
        ));
    }
    out.pop();
    out
}

/// Movie leaderboard: name, release date, views, rating, trending score.
pub fn movies_table(rows: &[FilmRecord]) -> String {
    let width = name_width(rows.iter().map(|r| r.film_name.as_str()), "Film".len());
    let mut out = format!(
        "{:<width$}  {:<10}  {:>10}  {:>6}  {:>12}\n",
        "Film", "Released", "Views", "Rating", "Trending"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<width$}  {}  {:>10}  {:>6.1}  {:>12.1}\n",
            row.film_name,
            row.release_date.format("%Y-%m-%d"),
            row.number_of_views,
            row.viewer_rate,
            row.trending_score
        ));
    }
    out.pop();
    out
}

/// Decision-rule output.
pub fn prediction_table(category: &str) -> String {
    format!("Top category to promote: {category}")
}

/// Cleaning/export summary.
pub fn report_table(report: &CleanReport, output: &str) -> String {
    format!(
        "Rows read:          {}\n\
         Duplicates removed: {}\n\
         Incomplete dropped: {}\n\
         Rows exported:      {}\n\
         Written to:         {}",
        report.rows_in,
        report.duplicates_removed,
        report.incomplete_dropped,
        report.rows_out,
        output
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_alignment() {
        let rows = vec![
            CategoryViews {
                category: "Horror".into(),
                total_views: 300,
            },
            CategoryViews {
                category: "Documentary".into(),
                total_views: 50,
            },
        ];
        let table = category_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Category"));
        // Every row is padded to the same width.
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn test_kpis_table_contents() {
        let kpis = Kpis {
            total_films: 3,
            total_views: 350,
            avg_rating: 4.17,
            top_language: "English".into(),
            top_category: "Horror".into(),
        };
        let table = kpis_table(&kpis);
        assert!(table.contains("Total films:    3"));
        assert!(table.contains("4.17"));
        assert!(table.contains("Horror"));
    }

    #[test]
    fn test_json_is_valid() {
        let kpis = Kpis {
            total_films: 1,
            total_views: 10,
            avg_rating: 4.0,
            top_language: "English".into(),
            top_category: "Horror".into(),
        };
        let json = to_json(&kpis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_views"], 10);
    }
}
