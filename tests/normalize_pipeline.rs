//! Normalization Pipeline Tests
//!
//! Feeds raw catalog JSON through the wire types and the normalizer,
//! checking the documented defaults from the outside.

use boekenplank::book::placeholders;
use boekenplank::catalog::wire::RawBook;
use boekenplank::{normalize, BookId, BookRecord};

fn normalize_json(json: &str) -> BookRecord {
    let raw: RawBook = serde_json::from_str(json).unwrap();
    normalize(raw)
}

#[test]
fn test_full_record() {
    let record = normalize_json(
        r#"{
            "id": 84,
            "title": "Frankenstein; Or, The Modern Prometheus",
            "authors": [
                {"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": 1851}
            ],
            "subjects": [
                "Frankenstein's monster (Fictitious character) -- Fiction",
                "Horror tales",
                "Monsters -- Fiction",
                "Science fiction",
                "Scientists -- Fiction",
                "Gothic fiction"
            ],
            "bookshelves": ["Gothic Fiction", "Movie Books"],
            "languages": ["en"],
            "copyright": false,
            "media_type": "Text",
            "formats": {
                "image/jpeg": "https://www.gutenberg.org/cache/epub/84/pg84.cover.medium.jpg",
                "text/html": "https://www.gutenberg.org/ebooks/84.html.images"
            },
            "download_count": 104393
        }"#,
    );

    assert_eq!(record.id, BookId::new(84));
    assert_eq!(
        record.author,
        "Shelley, Mary Wollstonecraft (1797 - 1851)"
    );
    assert_eq!(record.author_name, "Shelley, Mary Wollstonecraft");
    assert_eq!(record.year, Some(1797));
    assert_eq!(record.languages, "Engels");
    assert_eq!(record.subjects.len(), 5);
    assert_eq!(
        record.description,
        "Frankenstein's monster (Fictitious character) -- Fiction"
    );
    assert_eq!(record.bookshelves, vec!["Gothic Fiction", "Movie Books"]);
    assert_eq!(record.downloads, 104393);
    assert_eq!(record.downloads_formatted, "104.4K");
    assert!(record.cover.ends_with("pg84.cover.medium.jpg"));
    assert_eq!(record.rating, 0);
    assert_eq!(record.notes, "");
}

#[test]
fn test_bare_record_gets_placeholders() {
    let record = normalize_json(r#"{"id": 1}"#);

    assert_eq!(record.title, placeholders::UNKNOWN_TITLE);
    assert_eq!(record.author, placeholders::UNKNOWN_AUTHOR);
    assert_eq!(record.author_name, placeholders::UNKNOWN_AUTHOR);
    assert_eq!(record.cover, placeholders::COVER_FALLBACK);
    assert_eq!(record.languages, placeholders::UNKNOWN);
    assert_eq!(record.description, placeholders::STOCK_DESCRIPTION);
    assert_eq!(record.media_type, placeholders::MEDIA_TYPE);
    assert_eq!(record.downloads_formatted, "0");
    assert_eq!(record.display_year(), placeholders::UNKNOWN);
}

#[test]
fn test_unknown_language_codes_uppercased() {
    let record = normalize_json(r#"{"id": 1, "languages": ["en", "nl", "xx"]}"#);
    assert_eq!(record.languages, "Engels, Nederlands, XX");
}

#[test]
fn test_serialized_list_round_trips() {
    let records: Vec<BookRecord> = [r#"{"id": 1, "title": "A"}"#, r#"{"id": 2, "title": "B"}"#]
        .iter()
        .map(|json| normalize_json(json))
        .collect();

    let json = serde_json::to_string(&records).unwrap();
    let restored: Vec<BookRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, records);
}

#[test]
fn test_record_with_translators_only() {
    // Translators are not authors: the author fields fall back
    let record = normalize_json(
        r#"{"id": 1, "translators": [{"name": "Somebody", "birth_year": 1900}]}"#,
    );

    assert_eq!(record.author_name, placeholders::UNKNOWN_AUTHOR);
    assert_eq!(record.year, None);
}
