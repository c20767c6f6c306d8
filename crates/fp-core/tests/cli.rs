//! End-to-end tests for the fp binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const HEADER: &str =
    "Film_Name,Release_Date,Viewing_Month,Category,Language,Number_of_Views,Viewer_Rate\n";

fn dataset() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    let content = format!(
        "{HEADER}\
         Alien,1979-05-25,2025-11-01,Horror,English,100,4.5\n\
         Heat,1995-12-15,2025-11-01,Comedy,English,50,4.2\n\
         Ring,1998-01-31,2025-10-01,Horror,Japanese,200,4.8\n\
         Ring,1998-01-31,2025-10-01,Horror,Japanese,200,4.8\n\
         Ghost,bad-date,2025-10-01,Drama,English,75,4.0\n"
    );
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn fp() -> Command {
    Command::cargo_bin("fp").unwrap()
}

#[test]
fn stats_json_reflects_cleaned_table() {
    let data = dataset();
    let output = fp()
        .args(["stats", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Duplicate Ring row removed, bad-date Ghost row dropped.
    assert_eq!(v["total_films"], 3);
    assert_eq!(v["total_views"], 350);
    assert_eq!(v["avg_rating"], 4.5);
    assert_eq!(v["top_category"], "Horror");
    assert_eq!(v["top_language"], "Japanese");
}

#[test]
fn categories_sum_views_per_label() {
    let data = dataset();
    let output = fp()
        .args(["categories", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "Comedy");
    assert_eq!(rows[0]["total_views"], 50);
    assert_eq!(rows[1]["category"], "Horror");
    assert_eq!(rows[1]["total_views"], 300);
}

#[test]
fn predict_returns_max_category() {
    let data = dataset();
    fp().args(["predict", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"top_category\": \"Horror\""));
}

#[test]
fn top_respects_count_and_order() {
    let data = dataset();
    let output = fp()
        .args(["top", "-n", "2", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["film_name"], "Ring");
    assert_eq!(rows[1]["film_name"], "Alien");
}

#[test]
fn filters_apply_before_kpis() {
    let data = dataset();
    let output = fp()
        .args(["stats", "--language", "English", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["total_films"], 2);
    assert_eq!(v["total_views"], 150);
    assert_eq!(v["top_language"], "English");
}

#[test]
fn filters_can_empty_the_table() {
    let data = dataset();
    fp().args(["stats", "--category", "Western", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .code(12)
        .stderr(predicate::str::contains("Empty Table"));
}

#[test]
fn missing_dataset_is_input_error() {
    fp().args(["stats", "--data", "/nonexistent/Film_Dataset.csv"])
        .assert()
        .failure()
        .code(11)
        .stderr(predicate::str::contains("Dataset Not Found"));
}

#[test]
fn table_format_renders_human_output() {
    let data = dataset();
    fp().args(["categories", "-f", "table", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Category"))
        .stdout(predicate::str::contains("Horror"));
}

#[test]
fn clean_exports_with_derived_columns() {
    let data = dataset();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("cleaned.csv");

    fp().args(["clean", "--output"])
        .arg(&out)
        .arg("--data")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rows_exported\": 3"));

    let content = std::fs::read_to_string(&out).unwrap();
    let header = content.lines().next().unwrap();
    assert!(header.starts_with("Film_Name,"));
    assert!(header.contains("Trending_Score"));
    // Duplicate and bad-date rows are gone: header + 3 rows.
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn gems_finds_low_view_high_rating_rows() {
    let data = dataset();
    let output = fp()
        .args(["gems", "--rating", "4.4", "--percentile", "40", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = v.as_array().unwrap();
    // 40th percentile of {50, 100, 200} -> 100; Alien (100, 4.5) is the
    // only row under the cutoff with a qualifying rating.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["film_name"], "Alien");
}

#[test]
fn month_flag_rejects_out_of_range() {
    let data = dataset();
    fp().args(["monthly", "--month", "13", "--data"])
        .arg(data.path())
        .assert()
        .failure();
}
