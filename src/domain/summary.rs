//! AI-style summary domain model.
//!
//! This module defines [`Summary`], the synopsis generated alongside each result
//! set, and [`Citation`], a numbered reference from the summary to a specific
//! result item. A summary is created atomically with its result set, replaced
//! wholesale on each new search or explicit regeneration, and cleared only when
//! the results themselves are cleared.

use crate::domain::result::ResultItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference from the summary to a specific result item.
///
/// Shown in the UI as a numbered source. The `id` resolves against the result set
/// the summary was generated with; resolution against any other set may silently
/// yield nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Identifier of the cited [`ResultItem`].
    pub id: String,

    /// Short human-readable label, e.g. a truncated title plus source domain.
    pub short_ref: String,
}

/// AI-style synopsis of the current result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Summary lines in display order.
    pub bullets: Vec<String>,

    /// Ordered references into the accompanying result set.
    pub citations: Vec<Citation>,

    /// Time the summary was generated.
    pub generated_at: DateTime<Utc>,
}

impl Summary {
    /// Resolves a citation id against a result set.
    ///
    /// Returns `None` when the id is not present, in which case callers render the
    /// citation without cross-reference data rather than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use astrafind::domain::Summary;
    /// use astrafind::retrieval::{catalog, engine};
    ///
    /// let matched = engine::retrieve("RAG", &catalog());
    /// let summary = engine::summarize("RAG", &matched);
    /// let first = &summary.citations[0];
    /// assert!(Summary::resolve(&matched, &first.id).is_some());
    /// ```
    #[must_use]
    pub fn resolve<'a>(results: &'a [ResultItem], id: &str) -> Option<&'a ResultItem> {
        results.iter().find(|item| item.id == id)
    }
}
