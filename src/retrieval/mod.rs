//! Mock retrieval layer.
//!
//! This module provides everything the store needs to answer a search locally:
//! a fixed fixture catalog, pure filter/sort and summarization functions, and the
//! [`Retriever`] trait seam the store is injected with.
//!
//! # Modules
//!
//! - [`catalog`]: The eight-item fixture dataset and sample queries
//! - [`engine`]: Pure `retrieve` and `summarize` functions
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors the two operations the store actually performs
//! per search. Keeping the functions pure and the trait thin lets tests drive the
//! store with a failing retriever without touching the engine.

pub mod catalog;
pub mod engine;

use crate::domain::error::Result;
use crate::domain::result::ResultItem;
use crate::domain::summary::Summary;

pub use catalog::{catalog, SAMPLE_QUERIES};

/// Abstraction over retrieval backends.
///
/// The store owns a boxed retriever and calls it once per search: `retrieve` to
/// obtain the ordered result list, then `summarize` over the matches. The bundled
/// implementation is [`CatalogRetriever`]; tests substitute failing or canned
/// implementations.
///
/// # Examples
///
/// ```
/// use astrafind::retrieval::{CatalogRetriever, Retriever};
///
/// let retriever = CatalogRetriever::new();
/// let matched = retriever.retrieve("semantic search")?;
/// let summary = retriever.summarize("semantic search", &matched);
/// assert!(!summary.bullets.is_empty());
/// # Ok::<(), astrafind::domain::AstraFindError>(())
/// ```
pub trait Retriever: Send {
    /// Returns the ordered result list for a query.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot serve the query. The bundled
    /// catalog retriever never fails.
    fn retrieve(&self, query: &str) -> Result<Vec<ResultItem>>;

    /// Builds the summary accompanying a matched result list.
    fn summarize(&self, query: &str, matched: &[ResultItem]) -> Summary;
}

/// The outcome of one completed search: a result list and its companion summary.
///
/// The two halves always travel together so the store can commit them atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Ordered result list.
    pub results: Vec<ResultItem>,

    /// Summary generated from the same retrieval call.
    pub summary: Summary,
}

/// Retriever over the bundled fixture catalog.
///
/// Wraps [`catalog()`] and the pure [`engine`] functions. Deterministic and
/// infallible.
#[derive(Debug, Clone)]
pub struct CatalogRetriever {
    items: Vec<ResultItem>,
}

impl CatalogRetriever {
    /// Creates a retriever over the bundled catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { items: catalog() }
    }

    /// Creates a retriever over a custom catalog.
    ///
    /// Useful for tests that need controlled scores or tie-breaks.
    #[must_use]
    pub fn with_catalog(items: Vec<ResultItem>) -> Self {
        Self { items }
    }
}

impl Default for CatalogRetriever {
    fn default() -> Self {
        Self::new()
    }
}

impl Retriever for CatalogRetriever {
    fn retrieve(&self, query: &str) -> Result<Vec<ResultItem>> {
        Ok(engine::retrieve(query, &self.items))
    }

    fn summarize(&self, query: &str, matched: &[ResultItem]) -> Summary {
        engine::summarize(query, matched)
    }
}
