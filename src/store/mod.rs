//! Locally persisted reading lists.
//!
//! Two named lists ("want-to-read", "read") hold normalized book records,
//! keyed by id, unique, in append order, plus a single "current selection"
//! hand-off slot. Every operation reads the full list from storage; the
//! lists are small and the calls infrequent.
//!
//! # Storage Layout
//!
//! ```text
//! ~/.boekenplank/
//! └── lists/
//!     ├── want-to-read.json     # JSON array of BookRecord
//!     ├── read.json             # JSON array of BookRecord
//!     └── current-book.json     # single BookRecord, last write wins
//! ```
//!
//! Read-side failures (missing key, corrupted JSON) degrade to an empty
//! list after a warning; they never reach the caller. Write-side failures
//! come back as a typed [`StoreError`] so the caller decides whether to
//! surface or ignore them.

pub mod backend;

use thiserror::Error;
use tracing::warn;

use crate::book::{BookId, BookRecord};

pub use backend::{FileStorage, MemoryStorage, Storage, StorageError};

/// Storage key of the selection hand-off slot
const SELECTION_KEY: &str = "current-book";

/// Errors from store mutations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The two persisted reading lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListName {
    /// Books the user wants to read
    WantToRead,

    /// Books the user has read
    Read,
}

impl ListName {
    /// Storage key for this list
    pub fn as_key(&self) -> &'static str {
        match self {
            ListName::WantToRead => "want-to-read",
            ListName::Read => "read",
        }
    }

    /// Human label used by the CLI
    pub fn label(&self) -> &'static str {
        match self {
            ListName::WantToRead => "Wil ik lezen",
            ListName::Read => "Gelezen",
        }
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl std::str::FromStr for ListName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "want-to-read" | "want" | "wanttoread" => Ok(ListName::WantToRead),
            "read" | "gelezen" => Ok(ListName::Read),
            _ => anyhow::bail!("Unknown list name: {}", s),
        }
    }
}

/// Reading-list store over a storage capability.
///
/// State machine per book per list: absent or present. `add` is the only
/// absent -> present transition and is idempotent; `remove` is the only
/// present -> absent transition and is a no-op on absent ids.
pub struct ReadingListStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ReadingListStore<S> {
    /// Create a store over the given storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted sequence of a list, in append order.
    ///
    /// Unreadable or corrupted data degrades to an empty list.
    pub async fn books(&self, list: ListName) -> Vec<BookRecord> {
        let raw = match self.storage.read(list.as_key()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = list.as_key(), %err, "storage read failed, treating list as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(key = list.as_key(), %err, "corrupted list data, treating list as empty");
                Vec::new()
            }
        }
    }

    /// True iff a record with this id is in the named list
    pub async fn contains(&self, id: &BookId, list: ListName) -> bool {
        self.books(list).await.iter().any(|b| &b.id == id)
    }

    /// Append `book` unless its id is already present.
    ///
    /// Returns `false` and leaves the list unchanged on a duplicate id.
    pub async fn add(&self, book: &BookRecord, list: ListName) -> Result<bool, StoreError> {
        let mut books = self.books(list).await;

        if books.iter().any(|b| b.id == book.id) {
            return Ok(false);
        }

        books.push(book.clone());
        self.write_records(list.as_key(), &books).await?;
        Ok(true)
    }

    /// Remove the record with `id`; `false` when it was not present
    pub async fn remove(&self, id: &BookId, list: ListName) -> Result<bool, StoreError> {
        let mut books = self.books(list).await;
        let before = books.len();

        books.retain(|b| &b.id != id);
        if books.len() == before {
            return Ok(false);
        }

        self.write_records(list.as_key(), &books).await?;
        Ok(true)
    }

    /// Overwrite the selection hand-off slot (last write wins)
    pub async fn select(&self, book: &BookRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(book)?;
        self.storage.write(SELECTION_KEY, &raw).await?;
        Ok(())
    }

    /// The currently selected record; `None` when unset or unreadable
    pub async fn selection(&self) -> Option<BookRecord> {
        let raw = match self.storage.read(SELECTION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(%err, "selection slot unreadable");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(book) => Some(book),
            Err(err) => {
                warn!(%err, "corrupted selection slot");
                None
            }
        }
    }

    async fn write_records(&self, key: &str, records: &[BookRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(records)?;
        self.storage.write(key, &raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::normalize;
    use crate::catalog::wire::RawBook;

    fn book(id: u64, title: &str) -> BookRecord {
        normalize(RawBook {
            id,
            title: Some(title.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_list_name_round_trip() {
        for list in [ListName::WantToRead, ListName::Read] {
            assert_eq!(list.to_string().parse::<ListName>().unwrap(), list);
        }

        assert_eq!("want".parse::<ListName>().unwrap(), ListName::WantToRead);
        assert_eq!("gelezen".parse::<ListName>().unwrap(), ListName::Read);
        assert!("favorites".parse::<ListName>().is_err());
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let store = ReadingListStore::new(MemoryStorage::new());
        let b = book(1, "Frankenstein");

        assert!(store.add(&b, ListName::Read).await.unwrap());
        assert!(!store.add(&b, ListName::Read).await.unwrap());

        assert_eq!(store.books(ListName::Read).await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_then_remove_leaves_empty() {
        let store = ReadingListStore::new(MemoryStorage::new());
        let b = book(1, "Frankenstein");

        store.add(&b, ListName::Read).await.unwrap();
        assert!(store.remove(&b.id, ListName::Read).await.unwrap());

        assert!(store.books(ListName::Read).await.is_empty());
        assert!(!store.contains(&b.id, ListName::Read).await);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let store = ReadingListStore::new(MemoryStorage::new());

        assert!(!store.remove(&BookId::new(99), ListName::Read).await.unwrap());
    }

    #[tokio::test]
    async fn test_lists_are_independent() {
        let store = ReadingListStore::new(MemoryStorage::new());
        let b = book(1, "Frankenstein");

        store.add(&b, ListName::WantToRead).await.unwrap();

        assert!(store.contains(&b.id, ListName::WantToRead).await);
        assert!(!store.contains(&b.id, ListName::Read).await);
    }

    #[tokio::test]
    async fn test_corrupted_list_reads_as_empty() {
        let storage = MemoryStorage::new();
        storage.write("read", "{not json").await.unwrap();

        let store = ReadingListStore::new(storage);
        assert!(store.books(ListName::Read).await.is_empty());
    }

    #[tokio::test]
    async fn test_selection_last_write_wins() {
        let store = ReadingListStore::new(MemoryStorage::new());

        assert!(store.selection().await.is_none());

        store.select(&book(1, "First")).await.unwrap();
        store.select(&book(2, "Second")).await.unwrap();

        let current = store.selection().await.unwrap();
        assert_eq!(current.id, BookId::new(2));
        assert_eq!(current.title, "Second");
    }

    #[tokio::test]
    async fn test_corrupted_selection_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.write(SELECTION_KEY, "[]").await.unwrap();

        let store = ReadingListStore::new(storage);
        assert!(store.selection().await.is_none());
    }
}
