//! Filmpulse CLI - film-viewing analytics pipeline.
//!
//! Loads the dataset, cleans it, applies the active filters, and prints
//! one payload per invocation: summary KPIs, aggregations, leaderboards,
//! the decision-rule prediction, or a cleaned export.

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use fp_analytics::{
    category_views, hidden_gems, leaderboard, monthly_views, predict_top_category, FilterSpec,
    SortKey,
};
use fp_common::{error::format_error_human, OutputFormat, Result};
use fp_core::{logging, render, ExitCode};
use fp_dataset::{write_dataset, DatasetCache};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Filmpulse - analytics pipeline for film-viewing data
#[derive(Parser)]
#[command(name = "fp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to the dataset file
    #[arg(long, global = true, env = "FP_DATA", default_value = "data/Film_Dataset.csv")]
    data: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Keep only rows in this category
    #[arg(long, global = true)]
    category: Option<String>,

    /// Keep only rows in this language
    #[arg(long, global = true)]
    language: Option<String>,

    /// Keep only rows viewed in this calendar month (1-12)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Keep only rows viewed in this calendar year
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Keep only rows rated at least this highly
    #[arg(long, global = true)]
    min_rating: Option<f64>,
}

impl GlobalOpts {
    fn filter(&self) -> FilterSpec {
        FilterSpec {
            category: self.category.clone(),
            language: self.language.clone(),
            month: self.month,
            year: self.year,
            min_rating: self.min_rating,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summary KPIs for the (filtered) table
    Stats,

    /// Total views per category
    Categories,

    /// Total views per viewing month
    Monthly,

    /// Most-watched films
    Top {
        /// How many films to show
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Fastest-growing films by trending score
    Trending {
        /// How many films to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Category recommended for next month's promotion
    Predict,

    /// Highly rated films with unusually few views
    Gems {
        /// Minimum viewer rating
        #[arg(long, default_value_t = 4.5)]
        rating: f64,

        /// Views percentile cutoff (0-100)
        #[arg(long, default_value_t = 25.0)]
        percentile: f64,
    },

    /// Export the cleaned (and filtered) dataset
    Clean {
        /// Destination path for the exported CSV
        #[arg(long, short)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct Prediction {
    top_category: String,
}

#[derive(Serialize)]
struct ExportSummary {
    output: String,
    rows_exported: usize,
    report: fp_common::CleanReport,
}

fn run(cli: &Cli, today: NaiveDate) -> Result<String> {
    let mut cache = DatasetCache::new();
    let table = cache.load_clean(&cli.global.data, today)?;

    let filter = cli.global.filter();
    let records = if filter.is_empty() {
        table.records.clone()
    } else {
        filter.apply(&table.records)
    };

    let format = cli.global.format;
    match &cli.command {
        Commands::Stats => {
            let kpis = fp_analytics::kpis(&records)?;
            match format {
                OutputFormat::Json => render::to_json(&kpis),
                OutputFormat::Table => Ok(render::kpis_table(&kpis)),
            }
        }
        Commands::Categories => {
            let rows = category_views(&records);
            match format {
                OutputFormat::Json => render::to_json(&rows),
                OutputFormat::Table => Ok(render::category_table(&rows)),
            }
        }
        Commands::Monthly => {
            let rows = monthly_views(&records);
            match format {
                OutputFormat::Json => render::to_json(&rows),
                OutputFormat::Table => Ok(render::monthly_table(&rows)),
            }
        }
        Commands::Top { count } => {
            let rows = fp_analytics::top_movies(&records, *count);
            match format {
                OutputFormat::Json => render::to_json(&rows),
                OutputFormat::Table => Ok(render::movies_table(&rows)),
            }
        }
        Commands::Trending { count } => {
            let rows = leaderboard(&records, SortKey::TrendingScore, Some(*count));
            match format {
                OutputFormat::Json => render::to_json(&rows),
                OutputFormat::Table => Ok(render::movies_table(&rows)),
            }
        }
        Commands::Predict => {
            let top_category = predict_top_category(&records)?;
            match format {
                OutputFormat::Json => render::to_json(&Prediction { top_category }),
                OutputFormat::Table => Ok(render::prediction_table(&top_category)),
            }
        }
        Commands::Gems { rating, percentile } => {
            let rows = hidden_gems(&records, *rating, *percentile);
            match format {
                OutputFormat::Json => render::to_json(&rows),
                OutputFormat::Table => Ok(render::movies_table(&rows)),
            }
        }
        Commands::Clean { output } => {
            write_dataset(output, &records)?;
            let summary = ExportSummary {
                output: output.display().to_string(),
                rows_exported: records.len(),
                report: table.report,
            };
            match format {
                OutputFormat::Json => render::to_json(&summary),
                OutputFormat::Table => {
                    Ok(render::report_table(&table.report, &summary.output))
                }
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.global.verbose, cli.global.quiet, cli.global.no_color);

    let today = Local::now().date_naive();
    match run(&cli, today) {
        Ok(payload) => {
            println!("{payload}");
            std::process::exit(ExitCode::Ok.as_i32());
        }
        Err(err) => {
            let use_color = !cli.global.no_color && std::io::stderr().is_terminal();
            eprintln!("{}", format_error_human(&err, use_color));
            std::process::exit(ExitCode::from(&err).as_i32());
        }
    }
}
