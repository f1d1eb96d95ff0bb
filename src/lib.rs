//! AstraFind: the client-side core of a multi-modal search workspace.
//!
//! AstraFind provides the state and retrieval layer behind a search-results UI:
//! - An application state store covering query, results, AI-style summary,
//!   filters, panel visibility, uploads, and recent-search history
//! - A deterministic mock retrieval engine over a fixed catalog (substring
//!   matching, descending score order) with companion summaries and citations
//! - Persisted preferences backed by a versioned JSON snapshot with atomic
//!   writes and schema migration
//! - Markdown export of the current summary
//!
//! All data is local and mocked; there is no network retrieval.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State container
//! │  - Mutation actions                                 │  ← Search orchestration
//! │  - Filter merging                                   │
//! │  - Overlap guard (search tickets)                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Retrieval     │   │ Storage Layer │   │ Export        │
//! │ (retrieval/)  │   │ (storage/)    │   │ (export/)     │
//! │ - Catalog     │   │ - JSON I/O    │   │ - Markdown    │
//! │ - Engine      │   │ - Migration   │   │   document    │
//! │ - Trait seam  │   │ - Versioning  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths (infrastructure/)                     │
//! │  - Error types (domain/error)                       │
//! │  - Result/summary/upload models (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state store, filters, and view modes
//! - [`domain`]: Core domain types (results, summaries, uploads, errors)
//! - [`retrieval`]: Mock retrieval engine, catalog, and the retriever seam
//! - [`storage`]: Persisted preferences with versioning and migration
//! - [`export`]: Markdown export of the current summary
//! - [`infrastructure`]: Data directory resolution
//! - [`observability`]: Tracing setup
//!
//! # Initialization Flow
//!
//! 1. Build or load a [`Config`] (defaults, or a TOML file)
//! 2. Call [`initialize`]: wires the catalog retriever, resolves the data
//!    directory, restores the persisted snapshot, and binds save-on-change
//! 3. Drive the returned [`AppStore`](app::AppStore) from the presentation
//!    layer
//!
//! # Examples
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! use astrafind::{initialize, Config};
//!
//! let mut store = initialize(&Config::default());
//! store.search("semantic search").await;
//!
//! assert!(!store.is_loading());
//! for item in store.results() {
//!     println!("{} ({})", item.title, item.source_domain);
//! }
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod export;
pub mod infrastructure;
pub mod observability;
pub mod retrieval;
pub mod storage;

pub use app::{AppStore, FiltersUpdate, SearchFilters, ViewMode};
pub use domain::{AstraFindError, Modality, Result, ResultItem, Summary};
pub use retrieval::{CatalogRetriever, Retriever};
pub use storage::{PersistedState, PrefsStore};

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Core configuration.
///
/// Loaded from a TOML file or constructed with defaults. Every field is
/// optional in the file; missing values take the defaults below.
///
/// # Example
///
/// ```toml
/// # astrafind.toml
/// search_latency_ms = 250
/// trace_level = "debug"
/// data_dir = "/tmp/astrafind"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted preference snapshot.
    ///
    /// Defaults to the platform data directory (see
    /// [`infrastructure::default_data_dir`]).
    pub data_dir: Option<PathBuf>,

    /// Simulated network round-trip per search, in milliseconds. Default: 1500.
    pub search_latency_ms: u64,

    /// Tracing level when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            search_latency_ms: 1500,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AstraFindError::Config`] if the file cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use astrafind::Config;
    ///
    /// let config = Config::from_file("astrafind.toml")?;
    /// # Ok::<(), astrafind::AstraFindError>(())
    /// ```
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AstraFindError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            AstraFindError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

/// Initializes the application store from configuration.
///
/// Creates an [`AppStore`] over the bundled catalog retriever with the
/// configured search latency, then binds persistence: the data directory is
/// resolved, the preference snapshot (if any) is restored, and subsequent
/// preference changes save through the bound store. When the preferences file
/// cannot be opened the store runs in memory and the failure is only logged.
///
/// # Examples
///
/// ```no_run
/// use astrafind::{initialize, Config};
///
/// let store = initialize(&Config::default());
/// assert!(store.recent_searches().len() <= 10);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppStore {
    tracing::debug!("initializing astrafind core");

    let mut store = AppStore::new(Box::new(CatalogRetriever::new()));
    store.set_search_latency(Duration::from_millis(config.search_latency_ms));

    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(infrastructure::default_data_dir);

    match PrefsStore::open(infrastructure::state_file_path(&data_dir)) {
        Ok(prefs) => store.with_persistence(prefs),
        Err(e) => {
            tracing::warn!(error = %e, "preferences unavailable, running in memory");
            store
        }
    }
}
