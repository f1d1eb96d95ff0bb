//! Application state store.
//!
//! This module defines [`AppStore`], the single source of truth for all
//! UI-observable application state: the current query, result list and summary,
//! loading and error flags, filter configuration, panel visibility, upload
//! records, and the recent-search history. The store is an explicit,
//! constructible object injected into the presentation layer rather than a
//! module-level singleton.
//!
//! # State Components
//!
//! - **Search state**: `query`, `results`, `summary`, `is_loading`, `error`
//! - **Filters**: [`SearchFilters`], mutated by partial merge
//! - **UI state**: sidebar visibility flags and the [`ViewMode`]
//! - **Uploads**: inert list scaffolding
//! - **History**: deduplicated, most-recent-first, capped at ten entries
//!
//! # Persistence Boundary
//!
//! Filters, both sidebar flags, the view mode, and the recent-search history
//! persist across sessions through an optional bound [`PrefsStore`]: restored
//! once at construction via [`AppStore::with_persistence`], saved best-effort
//! after each mutation of a persisted field. Persistence failures are logged and
//! swallowed; the store degrades to in-memory operation.
//!
//! # Search Orchestration
//!
//! [`AppStore::search`] is the sole asynchronous action. It composes the
//! [`AppStore::begin_search`] / [`AppStore::finish_search`] primitives around the
//! simulated latency window and the injected [`Retriever`]. Overlapping searches
//! are resolved by sequence-numbered tickets: a resolution carrying a stale
//! ticket is dropped wholly, so the most recently issued search determines the
//! final `query` / `results` / `summary` together.

use crate::app::filters::{FiltersUpdate, SearchFilters};
use crate::app::modes::ViewMode;
use crate::domain::error::Result;
use crate::domain::result::ResultItem;
use crate::domain::summary::Summary;
use crate::domain::upload::{UploadRecord, UploadUpdate};
use crate::retrieval::{Retriever, SearchOutcome};
use crate::storage::json::PrefsStore;
use crate::storage::models::PersistedState;
use std::time::Duration;

/// Maximum number of entries kept in the recent-search history.
const MAX_RECENT_SEARCHES: usize = 10;

/// Default simulated network round-trip for a search.
const DEFAULT_SEARCH_LATENCY: Duration = Duration::from_millis(1500);

/// The fixed user-facing message set when a search fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search. Please try again.";

/// Handle identifying one in-flight search.
///
/// Issued by [`AppStore::begin_search`] and redeemed by
/// [`AppStore::finish_search`]. A ticket older than the most recently issued one
/// is stale; redeeming it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Central application state container.
///
/// Holds all transient and persisted UI state and exposes the fine-grained
/// mutation actions plus the composite asynchronous `search` action. Mutations
/// apply in place and are visible to readers immediately; the `&mut` receiver
/// serializes access under the single-threaded cooperative model.
///
/// # Examples
///
/// ```
/// use astrafind::app::AppStore;
/// use astrafind::retrieval::CatalogRetriever;
///
/// let mut store = AppStore::new(Box::new(CatalogRetriever::new()));
/// store.toggle_sidebar_left();
/// assert!(!store.sidebar_left_open());
/// assert!(store.results().is_empty());
/// ```
pub struct AppStore {
    query: String,
    results: Vec<ResultItem>,
    summary: Option<Summary>,
    is_loading: bool,
    error: Option<String>,
    filters: SearchFilters,
    sidebar_left_open: bool,
    sidebar_right_open: bool,
    view_mode: ViewMode,
    uploads: Vec<UploadRecord>,
    recent_searches: Vec<String>,
    search_seq: u64,
    search_latency: Duration,
    retriever: Box<dyn Retriever>,
    prefs: Option<PrefsStore>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("query", &self.query)
            .field("results", &self.results.len())
            .field("summary", &self.summary.is_some())
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .field("view_mode", &self.view_mode)
            .field("recent_searches", &self.recent_searches.len())
            .field("search_seq", &self.search_seq)
            .finish_non_exhaustive()
    }
}

impl AppStore {
    /// Creates an in-memory store with default state and the given retriever.
    ///
    /// No persistence is bound; use [`AppStore::with_persistence`] to restore and
    /// keep preferences on disk.
    #[must_use]
    pub fn new(retriever: Box<dyn Retriever>) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            summary: None,
            is_loading: false,
            error: None,
            filters: SearchFilters::default(),
            sidebar_left_open: true,
            sidebar_right_open: true,
            view_mode: ViewMode::default(),
            uploads: Vec::new(),
            recent_searches: Vec::new(),
            search_seq: 0,
            search_latency: DEFAULT_SEARCH_LATENCY,
            retriever,
            prefs: None,
        }
    }

    /// Binds a preferences store, restoring any previously persisted state.
    ///
    /// This is the explicit load-at-startup boundary: the snapshot on disk (if
    /// any) replaces the persisted fields, transient fields keep their fresh
    /// defaults, and subsequent mutations of persisted fields save through the
    /// bound store. A load failure is logged and the store continues with
    /// defaults.
    #[must_use]
    pub fn with_persistence(mut self, prefs: PrefsStore) -> Self {
        match prefs.load() {
            Ok(Some(state)) => {
                tracing::debug!("restoring persisted state");
                self.restore(state);
            }
            Ok(None) => {
                tracing::debug!("no persisted state found, keeping defaults");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persisted state, keeping defaults");
            }
        }
        self.prefs = Some(prefs);
        self
    }

    /// Overrides the simulated search latency.
    ///
    /// Tests set this to zero; the default models a network round-trip.
    pub fn set_search_latency(&mut self, latency: Duration) {
        self.search_latency = latency;
    }

    // Read accessors.

    /// Current query text, stored verbatim as submitted.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current result list, most relevant first.
    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Summary accompanying the current results, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Whether a search is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// User-facing error message, if the last search failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current filter configuration.
    #[must_use]
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Whether the left (filter) sidebar is open.
    #[must_use]
    pub fn sidebar_left_open(&self) -> bool {
        self.sidebar_left_open
    }

    /// Whether the right (summary) sidebar is open.
    #[must_use]
    pub fn sidebar_right_open(&self) -> bool {
        self.sidebar_right_open
    }

    /// Current result list layout mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Tracked uploads.
    #[must_use]
    pub fn uploads(&self) -> &[UploadRecord] {
        &self.uploads
    }

    /// Recent queries, most recent first, at most ten.
    #[must_use]
    pub fn recent_searches(&self) -> &[String] {
        &self.recent_searches
    }

    // Unconditional setters.

    /// Replaces the query text verbatim. No trimming, no validation.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replaces the result list.
    pub fn set_results(&mut self, results: Vec<ResultItem>) {
        self.results = results;
    }

    /// Replaces or clears the summary.
    pub fn set_summary(&mut self, summary: Option<Summary>) {
        self.summary = summary;
    }

    /// Replaces the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Replaces or clears the error message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    // Persisted-field mutations.

    /// Shallow-merges a partial filter update and persists the result.
    ///
    /// Supplied fields replace the current values, omitted fields are retained;
    /// a supplied nested struct replaces that struct wholesale.
    pub fn set_filters(&mut self, update: FiltersUpdate) {
        self.filters.apply(update);
        self.persist();
    }

    /// Flips the left sidebar and persists.
    pub fn toggle_sidebar_left(&mut self) {
        self.sidebar_left_open = !self.sidebar_left_open;
        self.persist();
    }

    /// Flips the right sidebar and persists.
    pub fn toggle_sidebar_right(&mut self) {
        self.sidebar_right_open = !self.sidebar_right_open;
        self.persist();
    }

    /// Replaces the view mode and persists.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.persist();
    }

    /// Records a query in the recent-search history and persists.
    ///
    /// The entry is deduplicated (an existing occurrence moves to the front
    /// rather than duplicating), prepended, and the history is capped at ten
    /// entries. Queries are recorded verbatim, empty strings included.
    pub fn add_recent_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.recent_searches.retain(|existing| existing != &query);
        self.recent_searches.insert(0, query);
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
        self.persist();
    }

    // Upload list management. Inert scaffolding: no action drives status
    // transitions.

    /// Appends an upload record.
    pub fn add_upload(&mut self, record: UploadRecord) {
        self.uploads.push(record);
    }

    /// Applies a partial update to the upload with the given id.
    ///
    /// Unknown ids are a no-op.
    pub fn update_upload(&mut self, id: &str, update: UploadUpdate) {
        if let Some(record) = self.uploads.iter_mut().find(|record| record.id == id) {
            record.apply(update);
        }
    }

    /// Removes the upload with the given id.
    ///
    /// Unknown ids are a no-op.
    pub fn remove_upload(&mut self, id: &str) {
        self.uploads.retain(|record| record.id != id);
    }

    // Search orchestration.

    /// Starts a search: stores the query verbatim, raises the loading flag,
    /// clears any prior error, and records the query in the history.
    ///
    /// Returns the ticket identifying this search. The query is recorded before
    /// any results arrive, so it enters the history even when the search later
    /// yields nothing or fails.
    pub fn begin_search(&mut self, query: &str) -> SearchTicket {
        let _span = tracing::debug_span!("begin_search", query_len = query.len()).entered();

        self.query = query.to_string();
        self.is_loading = true;
        self.error = None;
        self.add_recent_search(query);

        self.search_seq += 1;
        SearchTicket(self.search_seq)
    }

    /// Completes a search, committing its outcome if the ticket is still
    /// current.
    ///
    /// A fresh ticket commits atomically: on success, results and summary
    /// replace the prior pair together and any error clears; on failure, the
    /// fixed error message is set and the prior results and summary stay
    /// untouched. The loading flag clears on both paths.
    ///
    /// A stale ticket (a newer search has begun since) is dropped wholly: no
    /// field changes, including the loading flag, which belongs to the newer
    /// search. Returns whether the outcome was committed.
    pub fn finish_search(&mut self, ticket: SearchTicket, outcome: Result<SearchOutcome>) -> bool {
        let _span = tracing::debug_span!("finish_search", ticket = ticket.0).entered();

        if ticket.0 != self.search_seq {
            tracing::debug!(
                ticket = ticket.0,
                current = self.search_seq,
                "stale search resolution dropped"
            );
            return false;
        }

        match outcome {
            Ok(SearchOutcome { results, summary }) => {
                tracing::debug!(results = results.len(), "search committed");
                self.results = results;
                self.summary = Some(summary);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }

        self.is_loading = false;
        true
    }

    /// Runs one full search: begin, simulated latency, retrieval, commit.
    ///
    /// Failures surface only through [`AppStore::error`]; this method never
    /// panics or returns an error. If another search begins while this one is
    /// suspended, this one's resolution is dropped (see
    /// [`AppStore::finish_search`]).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # #[tokio::main]
    /// # async fn main() {
    /// use astrafind::app::AppStore;
    /// use astrafind::retrieval::CatalogRetriever;
    ///
    /// let mut store = AppStore::new(Box::new(CatalogRetriever::new()));
    /// store.search("semantic search").await;
    /// assert!(!store.is_loading());
    /// # }
    /// ```
    pub async fn search(&mut self, query: &str) {
        let ticket = self.begin_search(query);

        tokio::time::sleep(self.search_latency).await;

        let outcome = self.retriever.retrieve(query).map(|results| {
            let summary = self.retriever.summarize(query, &results);
            SearchOutcome { results, summary }
        });

        self.finish_search(ticket, outcome);
    }

    /// Replaces the summary by re-running summarization over the current query
    /// and results.
    ///
    /// A no-op when there are no results and no summary to replace.
    pub fn regenerate_summary(&mut self) {
        if self.results.is_empty() && self.summary.is_none() {
            return;
        }
        tracing::debug!(results = self.results.len(), "regenerating summary");
        self.summary = Some(self.retriever.summarize(&self.query, &self.results));
    }

    // Persistence plumbing.

    fn snapshot(&self) -> PersistedState {
        PersistedState {
            version: PersistedState::SCHEMA_VERSION,
            filters: self.filters.clone(),
            sidebar_left_open: self.sidebar_left_open,
            sidebar_right_open: self.sidebar_right_open,
            view_mode: self.view_mode,
            recent_searches: self.recent_searches.clone(),
        }
    }

    fn restore(&mut self, state: PersistedState) {
        self.filters = state.filters;
        self.sidebar_left_open = state.sidebar_left_open;
        self.sidebar_right_open = state.sidebar_right_open;
        self.view_mode = state.view_mode;
        self.recent_searches = state.recent_searches;
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }

    /// Saves the persisted-field snapshot, best-effort.
    ///
    /// Failures are logged and swallowed so the store keeps operating in
    /// memory; persisted-state problems are never surfaced as user errors.
    fn persist(&self) {
        let Some(prefs) = &self.prefs else {
            return;
        };
        let snapshot = self.snapshot();
        if let Err(e) = prefs.save(&snapshot) {
            tracing::warn!(error = %e, "failed to persist state, continuing in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AstraFindError;
    use crate::retrieval::{engine, CatalogRetriever};

    struct FailingRetriever;

    impl Retriever for FailingRetriever {
        fn retrieve(&self, _query: &str) -> Result<Vec<ResultItem>> {
            Err(AstraFindError::Search("backend offline".to_string()))
        }

        fn summarize(&self, query: &str, matched: &[ResultItem]) -> Summary {
            engine::summarize(query, matched)
        }
    }

    fn store() -> AppStore {
        let mut store = AppStore::new(Box::new(CatalogRetriever::new()));
        store.set_search_latency(Duration::ZERO);
        store
    }

    #[test]
    fn add_recent_search_is_idempotent_and_moves_to_front() {
        let mut store = store();
        store.add_recent_search("alpha");
        store.add_recent_search("beta");
        store.add_recent_search("alpha");

        assert_eq!(store.recent_searches(), ["alpha", "beta"]);

        store.add_recent_search("alpha");
        assert_eq!(store.recent_searches(), ["alpha", "beta"]);
    }

    #[test]
    fn recent_searches_are_capped_at_ten() {
        let mut store = store();
        for n in 0..15 {
            store.add_recent_search(format!("query {n}"));
        }

        assert_eq!(store.recent_searches().len(), 10);
        assert_eq!(store.recent_searches()[0], "query 14");
        assert_eq!(store.recent_searches()[9], "query 5");
    }

    #[test]
    fn toggles_flip_independently() {
        let mut store = store();
        store.toggle_sidebar_left();
        assert!(!store.sidebar_left_open());
        assert!(store.sidebar_right_open());

        store.toggle_sidebar_right();
        assert!(!store.sidebar_right_open());
    }

    #[test]
    fn upload_operations_are_noop_on_unknown_ids() {
        let mut store = store();
        store.update_upload(
            "missing",
            UploadUpdate {
                progress: Some(50.0),
                ..UploadUpdate::default()
            },
        );
        store.remove_upload("missing");
        assert!(store.uploads().is_empty());
    }

    #[tokio::test]
    async fn search_commits_results_and_summary_together() {
        let mut store = store();
        store.search("multi-modal").await;

        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert!(!store.results().is_empty());
        let summary = store.summary().expect("summary should accompany results");
        assert!(summary.bullets[0].contains("multi-modal"));
    }

    #[tokio::test]
    async fn search_records_query_even_when_nothing_matches() {
        let mut store = store();
        store.search("nonexistent-zzz").await;

        assert_eq!(store.query(), "nonexistent-zzz");
        assert_eq!(store.recent_searches(), ["nonexistent-zzz"]);
        assert!(store.results().is_empty());
        let summary = store.summary().expect("zero-match summary is still produced");
        assert!(summary.bullets[0].starts_with("Found 0"));
    }

    #[tokio::test]
    async fn failed_search_sets_error_and_keeps_prior_data() {
        let mut store = AppStore::new(Box::new(FailingRetriever));
        store.set_search_latency(Duration::ZERO);

        let prior = crate::retrieval::catalog();
        store.set_results(prior.clone());
        store.set_summary(Some(engine::summarize("earlier", &prior)));

        store.search("anything").await;

        assert!(!store.is_loading());
        assert_eq!(store.error(), Some(SEARCH_FAILED_MESSAGE));
        assert_eq!(store.results(), prior.as_slice());
        assert!(store.summary().is_some());
    }

    #[tokio::test]
    async fn new_search_clears_prior_error() {
        let mut store = AppStore::new(Box::new(FailingRetriever));
        store.set_search_latency(Duration::ZERO);
        store.search("first").await;
        assert!(store.error().is_some());

        let _ticket = store.begin_search("second");
        assert!(store.error().is_none());
        assert!(store.is_loading());
    }

    #[test]
    fn stale_resolution_is_dropped_wholly() {
        let mut store = store();

        let first = store.begin_search("first");
        let second = store.begin_search("second");

        let first_outcome = Ok(SearchOutcome {
            results: crate::retrieval::catalog(),
            summary: engine::summarize("first", &[]),
        });
        assert!(!store.finish_search(first, first_outcome));

        // Nothing from the stale call applied; the newer search still owns the
        // loading flag.
        assert_eq!(store.query(), "second");
        assert!(store.is_loading());
        assert!(store.results().is_empty());

        let matched = engine::retrieve("second", &crate::retrieval::catalog());
        let second_outcome = Ok(SearchOutcome {
            results: matched.clone(),
            summary: engine::summarize("second", &matched),
        });
        assert!(store.finish_search(second, second_outcome));

        assert!(!store.is_loading());
        assert_eq!(store.query(), "second");
        assert_eq!(store.results(), matched.as_slice());
    }

    #[test]
    fn regenerate_summary_replaces_the_summary() {
        let mut store = store();
        let matched = engine::retrieve("charts", &crate::retrieval::catalog());
        store.set_query("charts");
        store.set_results(matched.clone());
        store.set_summary(Some(engine::summarize("stale query", &matched)));

        store.regenerate_summary();

        let summary = store.summary().expect("summary present");
        assert!(summary.bullets[0].contains("\"charts\""));
    }

    #[test]
    fn regenerate_summary_is_noop_without_results_or_summary() {
        let mut store = store();
        store.regenerate_summary();
        assert!(store.summary().is_none());
    }

    #[test]
    fn set_query_stores_text_verbatim() {
        let mut store = store();
        store.set_query("  padded query  ");
        assert_eq!(store.query(), "  padded query  ");
    }
}
