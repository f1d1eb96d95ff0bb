//! Persisted-state model for the storage layer.
//!
//! This module defines the exact snapshot written to disk. The snapshot is kept
//! separate from the live store so the storage representation can evolve behind
//! the schema version without touching the application layer.

use crate::app::filters::SearchFilters;
use crate::app::modes::ViewMode;
use serde::{Deserialize, Serialize};

/// The preference snapshot persisted across sessions.
///
/// Contains exactly the durable subset of the store: filters, both sidebar
/// flags, the view mode, and the recent-search history. Transient fields (query,
/// results, summary, loading and error flags, uploads) never reach disk.
///
/// # Schema Versioning
///
/// The `version` field tags the on-disk schema. Loading migrates older blobs
/// forward (see [`crate::storage::json`]) and refuses blobs written by a newer
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// On-disk schema version. Always [`PersistedState::SCHEMA_VERSION`] for
    /// freshly written snapshots.
    pub version: u32,

    /// Persisted filter configuration.
    #[serde(default)]
    pub filters: SearchFilters,

    /// Left sidebar visibility.
    #[serde(default = "default_open")]
    pub sidebar_left_open: bool,

    /// Right sidebar visibility.
    #[serde(default = "default_open")]
    pub sidebar_right_open: bool,

    /// Result list layout mode.
    #[serde(default)]
    pub view_mode: ViewMode,

    /// Recent queries, most recent first.
    #[serde(default)]
    pub recent_searches: Vec<String>,
}

fn default_open() -> bool {
    true
}

impl PersistedState {
    /// Current on-disk schema version.
    pub const SCHEMA_VERSION: u32 = 1;
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: Self::SCHEMA_VERSION,
            filters: SearchFilters::default(),
            sidebar_left_open: true,
            sidebar_right_open: true,
            view_mode: ViewMode::default(),
            recent_searches: Vec::new(),
        }
    }
}
