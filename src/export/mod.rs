//! Markdown export of the current summary.
//!
//! A thin collaborator over the core: serializes the summary bullets, the
//! numbered citation list, and the user's free-text notes into a small Markdown
//! document for local download. There is no inverse import.

use crate::domain::error::Result;
use crate::domain::result::ResultItem;
use crate::domain::summary::Summary;
use std::path::Path;

/// Renders the summary as a Markdown document.
///
/// The document carries three sections: the summary bullets, a numbered
/// `Sources` list, and a `Custom Analysis` section holding the free-text notes.
/// When a citation id resolves against `results`, its line is suffixed with the
/// resolved URL; an unresolved id renders with its label alone.
///
/// # Examples
///
/// ```
/// use astrafind::export::summary_markdown;
/// use astrafind::retrieval::{catalog, engine};
///
/// let items = catalog();
/// let matched = engine::retrieve("RAG", &items);
/// let summary = engine::summarize("RAG", &matched);
///
/// let document = summary_markdown(&summary, &matched, "My own notes.");
/// assert!(document.starts_with("# Search Summary"));
/// assert!(document.contains("## Sources"));
/// assert!(document.contains("My own notes."));
/// ```
#[must_use]
pub fn summary_markdown(summary: &Summary, results: &[ResultItem], notes: &str) -> String {
    let mut document = String::from("# Search Summary\n\n");

    for bullet in &summary.bullets {
        document.push_str("- ");
        document.push_str(bullet);
        document.push('\n');
    }

    document.push_str("\n## Sources\n");
    for (index, citation) in summary.citations.iter().enumerate() {
        match Summary::resolve(results, &citation.id) {
            Some(item) => {
                document.push_str(&format!(
                    "{}. {} <{}>\n",
                    index + 1,
                    citation.short_ref,
                    item.url
                ));
            }
            None => {
                document.push_str(&format!("{}. {}\n", index + 1, citation.short_ref));
            }
        }
    }

    document.push_str("\n## Custom Analysis\n");
    document.push_str(notes);
    document.push('\n');

    document
}

/// Writes an exported document to disk.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_markdown(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = ?path, bytes = content.len(), "writing export");
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::Citation;
    use crate::retrieval::{catalog, engine};

    #[test]
    fn document_contains_bullets_citations_and_notes() {
        let items = catalog();
        let matched = engine::retrieve("multi-modal", &items);
        let summary = engine::summarize("multi-modal", &matched);

        let document = summary_markdown(&summary, &matched, "Follow up on benchmarks.");

        for bullet in &summary.bullets {
            assert!(document.contains(bullet.as_str()));
        }
        assert!(document.contains("1. "));
        assert!(document.contains("Follow up on benchmarks."));
    }

    #[test]
    fn resolved_citations_carry_urls_and_unresolved_do_not() {
        let items = catalog();
        let matched = engine::retrieve("charts", &items);
        let mut summary = engine::summarize("charts", &matched);
        summary.citations.push(Citation {
            id: "no-such-id".to_string(),
            short_ref: "Dangling Reference (nowhere.example)".to_string(),
        });

        let document = summary_markdown(&summary, &matched, "");

        assert!(document.contains("<https://"));
        assert!(document.contains("Dangling Reference (nowhere.example)\n"));
    }

    #[test]
    fn write_markdown_creates_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("search-summary.md");

        write_markdown(&path, "# Search Summary\n").unwrap();

        let read_back = std::fs::read_to_string(&path).unwrap();
        assert!(read_back.starts_with("# Search Summary"));
    }
}
