//! Normalized book records.
//!
//! The catalog service returns loosely-typed records in which nearly every
//! field can be absent. The normalizer maps them into [`BookRecord`], whose
//! derived string fields always carry a displayable value so rendering never
//! has to null-check.

pub mod normalize;
pub mod placeholders;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use normalize::normalize;

/// Stable book identifier (decimal form of the upstream numeric id).
///
/// The canonical key for list membership and deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    /// Create an id from the upstream numeric identifier
    pub fn new(id: u64) -> Self {
        Self(id.to_string())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let id: u64 = s
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid book id: {}", s))?;
        Ok(Self::new(id))
    }
}

/// A normalized book record.
///
/// `id` is always present; every other field degrades to a documented
/// default when the source record is missing data (see [`placeholders`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Canonical identifier
    pub id: BookId,

    /// Title, or the unknown-title placeholder
    pub title: String,

    /// Up to two author names, with a lifespan suffix when at least one
    /// year is known
    pub author: String,

    /// Author names without the lifespan suffix
    pub author_name: String,

    /// Cover image URL (JPEG preferred, PNG fallback, placeholder otherwise)
    pub cover: String,

    /// First author's birth year, when known
    pub year: Option<i32>,

    /// Display string of mapped language names
    pub languages: String,

    /// First five source subjects, order preserved
    #[serde(default)]
    pub subjects: Vec<String>,

    /// First source subject, or a stock description
    pub description: String,

    /// Source bookshelves, verbatim
    #[serde(default)]
    pub bookshelves: Vec<String>,

    /// Raw download count
    #[serde(default)]
    pub downloads: u64,

    /// Human-readable download magnitude ("1.2K", "3.4M")
    pub downloads_formatted: String,

    /// Copyright flag as reported by the source
    #[serde(default)]
    pub copyright: bool,

    /// Source media type
    pub media_type: String,

    /// Full format map (mime type -> URL) for the detail view
    #[serde(default)]
    pub formats: HashMap<String, String>,

    /// User rating; no populating path yet
    #[serde(default)]
    pub rating: u32,

    /// User notes; no populating path yet
    #[serde(default)]
    pub notes: String,
}

impl BookRecord {
    /// Birth year as a display string, falling back to the unknown marker
    pub fn display_year(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => placeholders::UNKNOWN.to_string(),
        }
    }
}
