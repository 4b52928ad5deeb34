//! boekenplank - Gutendex catalog companion
//!
//! Searches the public Gutendex book catalog, normalizes its loosely-typed
//! records into a stable internal shape, and keeps two reading lists
//! ("want-to-read", "read") persisted locally.
//!
//! # Architecture
//!
//! A query or random-page request yields raw external records; the
//! normalizer maps each into a [`BookRecord`]; the CLI renders cards
//! reading current list membership from the store; user commands mutate
//! the store. Absent source data degrades to documented placeholder
//! values instead of failing.
//!
//! # Modules
//!
//! - `catalog`: wire types and the HTTP client for the catalog service
//! - `book`: the normalized [`BookRecord`] and its normalizer
//! - `store`: locally persisted reading lists behind a storage capability
//! - `config`: path and endpoint resolution
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the catalog
//! boekenplank search "jane austen"
//!
//! # Put a result on a list
//! boekenplank add want-to-read 1342
//!
//! # See both lists
//! boekenplank lists
//! ```

pub mod book;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod store;

// Re-export main types at crate root for convenience
pub use book::{normalize, BookId, BookRecord};
pub use catalog::{CatalogClient, SearchResults};
pub use store::{FileStorage, ListName, MemoryStorage, ReadingListStore, Storage, StoreError};
