//! Deterministic movie identifiers.
//!
//! The source dataset has no primary key, so one is derived from content:
//! a movie is identified by the (film_name, release_date, category,
//! language) tuple. The identifier is a convenience key for joining and
//! display, not an enforced primary key, and is not collision-proof.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Content-derived movie identifier.
///
/// First 8 big-endian bytes of the SHA-256 digest of
/// `film_name|release_date|category|language`, with the date in ISO-8601
/// form. Stable across runs, platforms, and implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    /// Derive the identifier from the four identifying fields.
    pub fn derive(
        film_name: &str,
        release_date: NaiveDate,
        category: &str,
        language: &str,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(film_name.as_bytes());
        hasher.update(b"|");
        hasher.update(release_date.format("%Y-%m-%d").to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(category.as_bytes());
        hasher.update(b"|");
        hasher.update(language.as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        MovieId(u64::from_be_bytes(bytes))
    }

    /// Hex form used in exports and display.
    pub fn to_hex(self) -> String {
        hex::encode(self.0.to_be_bytes())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
