//! Gutendex catalog access.
//!
//! Wire types mirror the remote JSON; [`CatalogClient`] wraps the single
//! read-only `/books/` endpoint in its three query shapes (free-text
//! search, page request, lookup by id).

pub mod client;
pub mod wire;

pub use client::{CatalogClient, SearchResults, DEFAULT_BASE_URL};
