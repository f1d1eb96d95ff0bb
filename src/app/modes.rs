//! View mode state types for the application.
//!
//! This module defines the enum controlling how the result list is laid out.
//! The mode is pure presentation state: it never affects retrieval, only how the
//! UI arranges result cards. It persists across sessions alongside the filters.

use serde::{Deserialize, Serialize};

/// Result list layout mode.
///
/// Determines whether result cards render as a responsive grid or a single
/// vertical list. Changed by the view toggle in the top bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Responsive card grid. The default.
    #[default]
    Grid,

    /// Single-column list with wider cards.
    List,
}
