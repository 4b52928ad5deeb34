//! HTTP client for the catalog service.

use anyhow::{Context, Result};
use tracing::debug;

use crate::book::{normalize, BookId, BookRecord};

use super::wire::RawPage;

/// Default catalog service endpoint
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com";

/// Trending picks come from a page in this range
const RANDOM_PAGE_SPAN: u32 = 100;

/// Read-only client for the catalog's `/books/` endpoint.
///
/// No retries and no timeout beyond the transport defaults; a non-success
/// status is an error.
pub struct CatalogClient {
    /// Service endpoint, without the `/books/` path
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

/// Outcome of a free-text search: total match count plus the first page of
/// results, already normalized
#[derive(Debug)]
pub struct SearchResults {
    /// Total number of matches reported by the service
    pub total: u64,

    /// Normalized records of the first result page, ranked
    pub books: Vec<BookRecord>,
}

impl CatalogClient {
    /// Create a client against the given endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the books endpoint URL
    fn books_url(&self) -> String {
        format!("{}/books/", self.base_url.trim_end_matches('/'))
    }

    /// Fetch one page of raw records with the given query parameters
    async fn fetch_page(&self, query: &[(&str, String)]) -> Result<RawPage> {
        let response = self
            .client
            .get(self.books_url())
            .query(query)
            .send()
            .await
            .context("Failed to reach catalog service")?;

        if !response.status().is_success() {
            anyhow::bail!("Catalog request failed with status {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse catalog response")
    }

    /// Free-text search over titles and authors, ranked by the service
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let page = self.fetch_page(&[("search", query.to_string())]).await?;
        debug!(total = page.count, query, "catalog search finished");

        Ok(SearchResults {
            total: page.count,
            books: page.results.into_iter().map(normalize).collect(),
        })
    }

    /// One page of records in the source's default order
    pub async fn page(&self, number: u32) -> Result<Vec<BookRecord>> {
        let page = self.fetch_page(&[("page", number.to_string())]).await?;
        Ok(page.results.into_iter().map(normalize).collect())
    }

    /// Fetch specific records by id.
    ///
    /// Ids unknown to the service are simply absent from the result.
    pub async fn lookup(&self, ids: &[BookId]) -> Result<Vec<BookRecord>> {
        let joined = ids
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let page = self.fetch_page(&[("ids", joined)]).await?;
        Ok(page.results.into_iter().map(normalize).collect())
    }

    /// The first `count` records of a pseudo-random catalog page
    pub async fn trending(&self, count: usize) -> Result<Vec<BookRecord>> {
        let page = random_page();
        debug!(page, "fetching trending picks");

        let mut books = self.page(page).await?;
        books.truncate(count);
        Ok(books)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Page number in 1..=RANDOM_PAGE_SPAN, seeded from the subsecond clock
fn random_page() -> u32 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);

    nanos % RANDOM_PAGE_SPAN + 1
}
