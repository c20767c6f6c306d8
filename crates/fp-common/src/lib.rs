//! Filmpulse common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the pipeline:
//! - The film-viewing record in raw and cleaned form
//! - Deterministic movie identifiers
//! - Common error types with category grouping
//! - Output format specifications

pub mod error;
pub mod id;
pub mod output;
pub mod record;

pub use error::{Error, ErrorCategory, Result};
pub use id::MovieId;
pub use output::OutputFormat;
pub use record::{CleanReport, CleanTable, FilmRecord, RawRecord};
