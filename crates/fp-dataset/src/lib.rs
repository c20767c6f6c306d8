//! Filmpulse dataset handling: ingestion, cleaning, export, and cached
//! loading.
//!
//! The pipeline is strictly one-way: `ingest` reads the delimited file
//! into textual records, `clean` turns them into typed [`fp_common::FilmRecord`]s
//! with derived columns, `export` writes the cleaned table back out.
//! [`cache::DatasetCache`] wraps ingest+clean behind a single-slot cache
//! for consumers that refresh repeatedly (the dashboard boundary).

pub mod cache;
pub mod clean;
pub mod export;
pub mod ingest;

pub use cache::DatasetCache;
pub use clean::clean;
pub use export::write_dataset;
pub use ingest::read_dataset;
