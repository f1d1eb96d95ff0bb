//! Application layer: the state store and its supporting types.
//!
//! This module holds the heart of the crate, [`AppStore`], together with the
//! filter configuration and view mode types it manages.
//!
//! # Architecture
//!
//! The presentation layer owns a store instance and drives it through actions;
//! reads go through the store's accessors after each action:
//!
//! ```text
//! UI events → AppStore actions → in-place state mutation → UI re-reads state
//!                   │
//!                   ├── Retriever (injected)      → results + summary
//!                   └── PrefsStore (optional)     → persisted preferences
//! ```
//!
//! # Modules
//!
//! - [`filters`]: Filter configuration and partial updates
//! - [`modes`]: Result list layout mode
//! - [`store`]: The state container and search orchestration

pub mod filters;
pub mod modes;
pub mod store;

pub use filters::{DateRange, DomainFilters, FiltersUpdate, SearchFilters, SortBy, SourceToggles};
pub use modes::ViewMode;
pub use store::{AppStore, SearchTicket, SEARCH_FAILED_MESSAGE};
