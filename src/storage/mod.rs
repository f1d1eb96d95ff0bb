//! Storage layer for persisted preferences.
//!
//! This module persists the durable subset of the application state (filters,
//! sidebar visibility, view mode, recent searches) under a single namespaced
//! JSON file, with schema versioning and forward migration.
//!
//! # Modules
//!
//! - `json`: JSON file store with atomic writes and migration
//! - `models`: The persisted snapshot type, separate from the live store

pub mod json;
pub mod models;

pub use json::{PrefsStore, STATE_FILE_NAME};
pub use models::PersistedState;
