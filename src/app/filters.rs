//! Search filter configuration and partial updates.
//!
//! This module defines [`SearchFilters`], the user-selected constraints that live
//! independently of any specific search, and [`FiltersUpdate`], the all-optional
//! mirror struct used for partial merges. Filters persist across sessions.
//!
//! Several dimensions are accepted and stored but not applied by the mock
//! retrieval engine: `file_types`, `domains`, custom date bounds, and the
//! non-relevance sort orders. They are kept for behavioral parity with the
//! surrounding system rather than dropped from the model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-source-kind inclusion toggles.
///
/// All four default to enabled. Supplying a new set through
/// [`FiltersUpdate::sources`] replaces the whole set, matching the shallow-merge
/// contract of the update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceToggles {
    /// Include plain web/text results.
    pub web: bool,

    /// Include PDF results.
    pub pdfs: bool,

    /// Include image results.
    pub images: bool,

    /// Include table results.
    pub tables: bool,
}

impl Default for SourceToggles {
    fn default() -> Self {
        Self {
            web: true,
            pdfs: true,
            images: true,
            tables: true,
        }
    }
}

/// Publication date constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    /// No date constraint. The default.
    #[default]
    #[serde(rename = "any")]
    Any,

    /// Last 24 hours.
    #[serde(rename = "24h")]
    Past24Hours,

    /// Last 7 days.
    #[serde(rename = "7d")]
    Past7Days,

    /// Last 30 days.
    #[serde(rename = "30d")]
    Past30Days,

    /// Custom bounds; see the filters' `custom_date_start` / `custom_date_end`.
    #[serde(rename = "custom")]
    Custom,
}

/// Result ordering preference.
///
/// Only [`SortBy::Relevance`] is honored by the current retrieval engine; the
/// other variants are accepted and stored for parity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order by relevance score, descending. The default and the only order the
    /// engine implements.
    #[default]
    Relevance,

    /// Order by publication date. Accepted, not applied.
    Recency,

    /// Order by source quality. Accepted, not applied.
    Quality,
}

/// Domain allow/deny hints.
///
/// Not applied by the mock retrieval engine; carried in the model and persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFilters {
    /// Domains to prefer.
    #[serde(default)]
    pub include: Vec<String>,

    /// Domains to suppress.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// User-selected search constraints.
///
/// Initialized to defaults at store creation, persisted across sessions, and
/// mutated only by partial merge through [`SearchFilters::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Source-kind toggles, default all enabled.
    pub sources: SourceToggles,

    /// Publication date constraint, default unconstrained.
    pub date_range: DateRange,

    /// Lower custom date bound, meaningful when `date_range` is `Custom`.
    #[serde(default)]
    pub custom_date_start: Option<NaiveDate>,

    /// Upper custom date bound, meaningful when `date_range` is `Custom`.
    #[serde(default)]
    pub custom_date_end: Option<NaiveDate>,

    /// File type tags. Reserved for future filtering, currently inert.
    #[serde(default)]
    pub file_types: Vec<String>,

    /// Domain allow/deny hints. Currently inert.
    #[serde(default)]
    pub domains: DomainFilters,

    /// BCP-47-like language code, default `"en"`.
    pub language: String,

    /// Result ordering preference, default relevance.
    pub sort_by: SortBy,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            sources: SourceToggles::default(),
            date_range: DateRange::default(),
            custom_date_start: None,
            custom_date_end: None,
            file_types: Vec::new(),
            domains: DomainFilters::default(),
            language: "en".to_string(),
            sort_by: SortBy::default(),
        }
    }
}

/// Partial update over [`SearchFilters`].
///
/// Every field is optional: supplied fields replace the current value, omitted
/// fields retain it. The merge is shallow, so a supplied [`SourceToggles`] or
/// [`DomainFilters`] replaces the nested value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltersUpdate {
    /// Replacement source toggles.
    pub sources: Option<SourceToggles>,

    /// Replacement date range.
    pub date_range: Option<DateRange>,

    /// Replacement lower custom date bound.
    pub custom_date_start: Option<NaiveDate>,

    /// Replacement upper custom date bound.
    pub custom_date_end: Option<NaiveDate>,

    /// Replacement file type tags.
    pub file_types: Option<Vec<String>>,

    /// Replacement domain hints.
    pub domains: Option<DomainFilters>,

    /// Replacement language code.
    pub language: Option<String>,

    /// Replacement sort order.
    pub sort_by: Option<SortBy>,
}

impl SearchFilters {
    /// Shallow-merges a partial update into the current filters.
    ///
    /// # Examples
    ///
    /// ```
    /// use astrafind::app::{DateRange, FiltersUpdate, SearchFilters};
    ///
    /// let mut filters = SearchFilters::default();
    /// filters.apply(FiltersUpdate {
    ///     date_range: Some(DateRange::Past7Days),
    ///     ..FiltersUpdate::default()
    /// });
    ///
    /// assert_eq!(filters.date_range, DateRange::Past7Days);
    /// // Untouched fields keep their defaults.
    /// assert!(filters.sources.web && filters.sources.tables);
    /// ```
    pub fn apply(&mut self, update: FiltersUpdate) {
        if let Some(sources) = update.sources {
            self.sources = sources;
        }
        if let Some(date_range) = update.date_range {
            self.date_range = date_range;
        }
        if let Some(start) = update.custom_date_start {
            self.custom_date_start = Some(start);
        }
        if let Some(end) = update.custom_date_end {
            self.custom_date_end = Some(end);
        }
        if let Some(file_types) = update.file_types {
            self.file_types = file_types;
        }
        if let Some(domains) = update.domains {
            self.domains = domains;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_initial_state() {
        let filters = SearchFilters::default();
        assert!(filters.sources.web);
        assert!(filters.sources.pdfs);
        assert!(filters.sources.images);
        assert!(filters.sources.tables);
        assert_eq!(filters.date_range, DateRange::Any);
        assert_eq!(filters.language, "en");
        assert_eq!(filters.sort_by, SortBy::Relevance);
        assert!(filters.file_types.is_empty());
        assert!(filters.domains.include.is_empty());
    }

    #[test]
    fn partial_merge_leaves_unsupplied_fields_untouched() {
        let mut filters = SearchFilters::default();
        filters.apply(FiltersUpdate {
            date_range: Some(DateRange::Past7Days),
            ..FiltersUpdate::default()
        });

        assert_eq!(filters.date_range, DateRange::Past7Days);
        assert_eq!(filters.sources, SourceToggles::default());
        assert_eq!(filters.language, "en");
    }

    #[test]
    fn supplied_sources_replace_the_whole_toggle_set() {
        let mut filters = SearchFilters::default();
        filters.apply(FiltersUpdate {
            sources: Some(SourceToggles {
                web: true,
                pdfs: false,
                images: false,
                tables: false,
            }),
            ..FiltersUpdate::default()
        });

        assert!(filters.sources.web);
        assert!(!filters.sources.pdfs);
        assert!(!filters.sources.images);
        assert!(!filters.sources.tables);
    }

    #[test]
    fn date_range_round_trips_through_its_wire_tags() {
        let json = serde_json::to_string(&DateRange::Past24Hours).unwrap();
        assert_eq!(json, "\"24h\"");
        let parsed: DateRange = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(parsed, DateRange::Custom);
    }
}
