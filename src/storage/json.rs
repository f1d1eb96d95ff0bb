//! JSON file-based preferences store.
//!
//! This module persists the preference snapshot as a single human-readable JSON
//! file under one namespaced path. Writes are atomic (write-to-temp + rename) to
//! prevent corruption on crashes, and loads run incoming blobs through a schema
//! migration step before deserializing.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1), loads the whole file once at startup
//! - **Write**: O(n), serializes and writes the whole snapshot per change
//! - **Best for**: a single small snapshot with infrequent writes

use crate::domain::error::{AstraFindError, Result};
use crate::storage::models::PersistedState;
use std::path::PathBuf;

/// File name of the persisted snapshot, the single namespaced storage key.
pub const STATE_FILE_NAME: &str = "astra-app-state.json";

/// JSON file preferences store.
///
/// Stateless apart from its target path: the live snapshot is owned by the
/// application store, and this type only moves it to and from disk.
///
/// # Examples
///
/// ```no_run
/// use astrafind::storage::{PersistedState, PrefsStore};
/// use std::path::PathBuf;
///
/// let prefs = PrefsStore::open(PathBuf::from("/tmp/astrafind/astra-app-state.json"))?;
/// let restored = prefs.load()?.unwrap_or_default();
/// prefs.save(&restored)?;
/// # Ok::<(), astrafind::domain::AstraFindError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PrefsStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl PrefsStore {
    /// Creates a preferences store at the given file path.
    ///
    /// Parent directories are created immediately so later saves only touch the
    /// file itself.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preferences store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    /// Loads the persisted snapshot, if one exists.
    ///
    /// Returns `Ok(None)` when no file is present (first run). Blobs from older
    /// schema versions are migrated forward; blobs from a newer schema are
    /// refused so a downgraded binary does not clobber them silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON, or
    /// carries a newer schema version than this build understands.
    pub fn load(&self) -> Result<Option<PersistedState>> {
        let _span = tracing::debug_span!("prefs_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no snapshot on disk");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| AstraFindError::Storage(format!("failed to parse JSON: {e}")))?;

        let state = migrate(value)?;
        tracing::debug!(
            version = state.version,
            recent = state.recent_searches.len(),
            "snapshot loaded"
        );
        Ok(Some(state))
    }

    /// Saves a snapshot to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left half-written even if the process crashes
    /// mid-save.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        let _span = tracing::debug_span!("prefs_save", path = ?self.file_path).entered();

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AstraFindError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("snapshot saved");
        Ok(())
    }
}

/// Migrates a raw JSON blob to the current schema.
///
/// Pre-versioned blobs (no `version` field) carry the same field set minus the
/// tag; they are stamped with version zero and deserialized with defaults for
/// anything missing. Current-version blobs deserialize directly. Newer versions
/// are refused.
fn migrate(mut value: serde_json::Value) -> Result<PersistedState> {
    let version = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0) as u32;

    if version > PersistedState::SCHEMA_VERSION {
        return Err(AstraFindError::Storage(format!(
            "snapshot schema version {version} is newer than supported version {}",
            PersistedState::SCHEMA_VERSION
        )));
    }

    if version < PersistedState::SCHEMA_VERSION {
        tracing::debug!(
            from = version,
            to = PersistedState::SCHEMA_VERSION,
            "migrating snapshot schema"
        );
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "version".to_string(),
                serde_json::Value::from(PersistedState::SCHEMA_VERSION),
            );
        }
    }

    serde_json::from_value(value)
        .map_err(|e| AstraFindError::Storage(format!("failed to decode snapshot: {e}")))
}
