//! Conversion from raw catalog records to the normalized shape.

use std::collections::HashMap;

use crate::catalog::wire::{RawAuthor, RawBook};

use super::placeholders;
use super::{BookId, BookRecord};

/// Fixed ISO-639 code -> display name table (13 known languages).
///
/// Codes outside the table are shown upper-cased verbatim.
fn language_name(code: &str) -> Option<&'static str> {
    Some(match code {
        "en" => "Engels",
        "nl" => "Nederlands",
        "fr" => "Frans",
        "de" => "Duits",
        "es" => "Spaans",
        "it" => "Italiaans",
        "pt" => "Portugees",
        "la" => "Latijn",
        "el" => "Grieks",
        "fi" => "Fins",
        "sv" => "Zweeds",
        "da" => "Deens",
        "no" => "Noors",
        _ => return None,
    })
}

/// Map a raw catalog record into a [`BookRecord`].
///
/// Every derived string field ends up with a displayable value; absent
/// source data maps to the [`placeholders`] table, never to an empty field.
pub fn normalize(raw: RawBook) -> BookRecord {
    let author_name = format_authors(&raw.authors);
    let author = format!("{}{}", author_name, author_lifespan(raw.authors.first()));
    let year = raw.authors.first().and_then(|a| a.birth_year);

    BookRecord {
        id: BookId::new(raw.id),
        title: raw
            .title
            .unwrap_or_else(|| placeholders::UNKNOWN_TITLE.to_string()),
        author,
        author_name,
        cover: cover_url(&raw.formats),
        year,
        languages: format_languages(&raw.languages),
        description: raw
            .subjects
            .first()
            .cloned()
            .unwrap_or_else(|| placeholders::STOCK_DESCRIPTION.to_string()),
        subjects: raw.subjects.into_iter().take(5).collect(),
        bookshelves: raw.bookshelves,
        downloads: raw.download_count,
        downloads_formatted: format_downloads(raw.download_count),
        copyright: raw.copyright.unwrap_or(false),
        media_type: raw
            .media_type
            .unwrap_or_else(|| placeholders::MEDIA_TYPE.to_string()),
        formats: raw.formats,
        rating: 0,
        notes: String::new(),
    }
}

/// First two author names joined with ", "; placeholder when there are none
fn format_authors(authors: &[RawAuthor]) -> String {
    if authors.is_empty() {
        return placeholders::UNKNOWN_AUTHOR.to_string();
    }

    authors
        .iter()
        .take(2)
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lifespan suffix ` (birth - death)` for the first author.
///
/// The unknown side renders as `?`; the suffix is omitted entirely when
/// neither year is known.
fn author_lifespan(author: Option<&RawAuthor>) -> String {
    let Some(author) = author else {
        return String::new();
    };

    if author.birth_year.is_none() && author.death_year.is_none() {
        return String::new();
    }

    let side = |year: Option<i32>| match year {
        Some(y) => y.to_string(),
        None => "?".to_string(),
    };

    format!(" ({} - {})", side(author.birth_year), side(author.death_year))
}

/// JPEG cover if present, else PNG, else the fixed placeholder
fn cover_url(formats: &HashMap<String, String>) -> String {
    formats
        .get("image/jpeg")
        .or_else(|| formats.get("image/png"))
        .cloned()
        .unwrap_or_else(|| placeholders::COVER_FALLBACK.to_string())
}

/// Mapped language names joined with ", "; empty input yields the unknown
/// marker
fn format_languages(codes: &[String]) -> String {
    if codes.is_empty() {
        return placeholders::UNKNOWN.to_string();
    }

    codes
        .iter()
        .map(|code| match language_name(code) {
            Some(name) => name.to_string(),
            None => code.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compact magnitude formatting: counts under 1 000 verbatim, then one
/// decimal of K or M
pub fn format_downloads(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
