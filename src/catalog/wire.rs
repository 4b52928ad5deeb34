//! Raw response types for the catalog service.
//!
//! Every field except the record id may be absent upstream, so everything
//! else is defaulted at the deserialization boundary.

use std::collections::HashMap;

use serde::Deserialize;

/// One page of the `/books/` endpoint
#[derive(Debug, Deserialize)]
pub struct RawPage {
    /// Total number of matching records (not just this page)
    #[serde(default)]
    pub count: u64,

    /// URL of the next page, when there is one
    pub next: Option<String>,

    /// URL of the previous page, when there is one
    pub previous: Option<String>,

    /// Records on this page
    #[serde(default)]
    pub results: Vec<RawBook>,
}

/// A single raw book record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBook {
    /// Numeric identifier; the one field upstream guarantees
    pub id: u64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub authors: Vec<RawAuthor>,

    #[serde(default)]
    pub translators: Vec<RawAuthor>,

    #[serde(default)]
    pub subjects: Vec<String>,

    #[serde(default)]
    pub bookshelves: Vec<String>,

    /// ISO-639 language codes
    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub copyright: Option<bool>,

    #[serde(default)]
    pub media_type: Option<String>,

    /// Mime type -> URL map of available renditions
    #[serde(default)]
    pub formats: HashMap<String, String>,

    #[serde(default)]
    pub download_count: u64,
}

/// Author (or translator) entry with optional lifespan years
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub death_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_deserializes() {
        let book: RawBook = serde_json::from_str(r#"{"id": 84}"#).unwrap();

        assert_eq!(book.id, 84);
        assert!(book.title.is_none());
        assert!(book.authors.is_empty());
        assert!(book.formats.is_empty());
        assert_eq!(book.download_count, 0);
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let result = serde_json::from_str::<RawBook>(r#"{"title": "No id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_envelope() {
        let page: RawPage = serde_json::from_str(
            r#"{"count": 2, "next": null, "previous": null, "results": [{"id": 1}, {"id": 2}]}"#,
        )
        .unwrap();

        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 2);
        assert!(page.next.is_none());
    }
}
