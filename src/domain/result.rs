//! Result item domain model.
//!
//! This module defines [`ResultItem`], one retrieved artifact in a result set, along
//! with its [`Modality`] tag and the optional [`TablePreview`] attached to table
//! results. Items are constructed wholesale by the retrieval engine per search call,
//! are immutable thereafter, and are replaced rather than mutated on each new search.

use crate::domain::error::{AstraFindError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a result artifact.
///
/// A fixed, exhaustive tag driving UI rendering decisions (icon and color choice,
/// card layout). Serialized in lowercase to match the wire shape of the result
/// dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Plain text or web page result.
    Text,

    /// PDF document result, typically with a page thumbnail.
    Pdf,

    /// Image result with a preview thumbnail.
    Image,

    /// Structured table result with an inline preview.
    Table,
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Table => "table",
        };
        f.pad(tag)
    }
}

/// Inline preview of a structured table result.
///
/// Holds an ordered header row and an ordered list of data rows. Every row must
/// have exactly as many cells as there are headers; rendering is undefined
/// otherwise, so construction through [`TablePreview::new`] validates the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    /// Ordered column headers.
    pub headers: Vec<String>,

    /// Ordered data rows. Each row has `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl TablePreview {
    /// Creates a table preview, validating that every row matches the header width.
    ///
    /// # Errors
    ///
    /// Returns [`AstraFindError::Table`] if any row's cell count differs from the
    /// number of headers.
    ///
    /// # Examples
    ///
    /// ```
    /// use astrafind::domain::TablePreview;
    ///
    /// let preview = TablePreview::new(
    ///     vec!["Model".to_string(), "Score".to_string()],
    ///     vec![vec!["GPT-4".to_string(), "86.4".to_string()]],
    /// )?;
    /// assert_eq!(preview.headers.len(), 2);
    /// # Ok::<(), astrafind::domain::AstraFindError>(())
    /// ```
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let preview = Self { headers, rows };
        preview.validate()?;
        Ok(preview)
    }

    /// Checks the row-width invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AstraFindError::Table`] naming the first offending row if any row's
    /// cell count differs from the number of headers.
    pub fn validate(&self) -> Result<()> {
        let width = self.headers.len();
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                return Err(AstraFindError::Table(format!(
                    "row {index} has {} cells, expected {width}",
                    row.len()
                )));
            }
        }
        Ok(())
    }
}

/// One retrieved artifact in a result set.
///
/// Carries display metadata, an optional snippet and highlight terms used both for
/// display and for substring matching, and a precomputed relevance score used only
/// as a sort key. Optional preview fields (`thumbnail_url`, `table_preview`) are
/// meaningful for the pdf/image and table modalities respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Unique stable identifier within the catalog.
    pub id: String,

    /// Artifact category driving rendering.
    pub modality: Modality,

    /// Display title. Participates in substring matching.
    pub title: String,

    /// Resource locator of the artifact.
    pub url: String,

    /// Domain the artifact was sourced from, for display and citation labels.
    pub source_domain: String,

    /// Publication date, omitted from display when absent.
    #[serde(default)]
    pub published_at: Option<NaiveDate>,

    /// Relevance score in `[0, 100]`. Sort key only, no further semantics.
    pub score: f32,

    /// Short descriptive text. Participates in substring matching when present.
    #[serde(default)]
    pub snippet: Option<String>,

    /// Ordered highlight terms. Each participates in substring matching.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,

    /// Preview image reference, meaningful for pdf and image modalities.
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Inline table preview, meaningful for the table modality.
    #[serde(default)]
    pub table_preview: Option<TablePreview>,
}

impl ResultItem {
    /// Returns true when `needle` occurs case-insensitively in the title, the
    /// snippet, or any highlight term.
    ///
    /// `needle` must already be lowercase; the item's own fields are lowercased
    /// here. This is the per-token predicate underlying
    /// [`retrieve`](crate::retrieval::engine::retrieve).
    ///
    /// # Examples
    ///
    /// ```
    /// use astrafind::retrieval::catalog;
    ///
    /// let items = catalog();
    /// assert!(items[0].matches_token("rag"));
    /// assert!(!items[0].matches_token("nonexistent-zzz"));
    /// ```
    #[must_use]
    pub fn matches_token(&self, needle: &str) -> bool {
        if self.title.to_lowercase().contains(needle) {
            return true;
        }
        if let Some(snippet) = &self.snippet {
            if snippet.to_lowercase().contains(needle) {
                return true;
            }
        }
        self.highlights
            .iter()
            .any(|highlight| highlight.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, snippet: Option<&str>, highlights: &[&str]) -> ResultItem {
        ResultItem {
            id: "t".to_string(),
            modality: Modality::Text,
            title: title.to_string(),
            url: "https://example.org/t".to_string(),
            source_domain: "example.org".to_string(),
            published_at: None,
            score: 50.0,
            snippet: snippet.map(String::from),
            highlights: highlights.iter().map(|h| (*h).to_string()).collect(),
            thumbnail_url: None,
            table_preview: None,
        }
    }

    #[test]
    fn matches_token_checks_title_snippet_and_highlights() {
        let item = item("Graph Networks", Some("A survey of methods"), &["GNN"]);
        assert!(item.matches_token("graph"));
        assert!(item.matches_token("survey"));
        assert!(item.matches_token("gnn"));
        assert!(!item.matches_token("transformer"));
    }

    #[test]
    fn matches_token_tolerates_absent_optional_fields() {
        let item = item("Bare Title", None, &[]);
        assert!(item.matches_token("bare"));
        assert!(!item.matches_token("snippet"));
    }

    #[test]
    fn table_preview_rejects_ragged_rows() {
        let result = TablePreview::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string()]],
        );
        assert!(matches!(result, Err(AstraFindError::Table(_))));
    }

    #[test]
    fn table_preview_accepts_consistent_rows() {
        let preview = TablePreview::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ],
        );
        assert!(preview.is_ok());
    }

    #[test]
    fn modality_displays_lowercase_tags() {
        assert_eq!(Modality::Pdf.to_string(), "pdf");
        assert_eq!(Modality::Table.to_string(), "table");
    }
}
