//! Domain layer for the AstraFind core.
//!
//! This module contains the core domain types of the search workspace, independent
//! of storage, retrieval, or presentation concerns. It follows domain-driven design
//! principles by keeping the data model isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`result`]: Result item model, modality tag, and table previews
//! - [`summary`]: AI-style summary and citation model
//! - [`upload`]: Upload record scaffolding
//!
//! # Examples
//!
//! ```
//! use astrafind::domain::{Modality, ResultItem};
//!
//! fn first_text_item(items: &[ResultItem]) -> Option<&ResultItem> {
//!     items.iter().find(|item| item.modality == Modality::Text)
//! }
//! ```

pub mod error;
pub mod result;
pub mod summary;
pub mod upload;

pub use error::{AstraFindError, Result};
pub use result::{Modality, ResultItem, TablePreview};
pub use summary::{Citation, Summary};
pub use upload::{UploadRecord, UploadStatus, UploadUpdate};
