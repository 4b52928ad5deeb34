//! Named fallback values applied by the normalizer.
//!
//! Kept in one place so every formatting path falls back to the same
//! strings. Display names are Dutch, matching the catalog front-end the
//! records feed.

/// Shown when a record carries no title
pub const UNKNOWN_TITLE: &str = "Onbekende titel";

/// Shown when a record carries no authors
pub const UNKNOWN_AUTHOR: &str = "Onbekende auteur";

/// Generic unknown marker (languages, years)
pub const UNKNOWN: &str = "Onbekend";

/// Cover image used when the format map has no JPEG or PNG entry
pub const COVER_FALLBACK: &str = "https://via.placeholder.com/200x300?text=Geen+Cover";

/// Description used when a record has no subjects
pub const STOCK_DESCRIPTION: &str = "Klassiek literair werk uit het publieke domein.";

/// Media type used when the source omits one
pub const MEDIA_TYPE: &str = "Text";
