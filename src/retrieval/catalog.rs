//! Fixed result catalog used by the mock retrieval engine.
//!
//! The catalog is a static fixture: eight items spanning all four modalities, each
//! with a precomputed relevance score. Content is treated as data, not behavior;
//! the engine only reads it.

use crate::domain::result::{Modality, ResultItem, TablePreview};
use chrono::NaiveDate;

/// Suggested queries surfaced by the search bar when history is empty.
pub const SAMPLE_QUERIES: [&str; 6] = [
    "LLM evaluation techniques",
    "Graph RAG for PDFs",
    "Vision-language models for charts",
    "Multi-modal embeddings comparison",
    "Semantic search implementation",
    "Attention mechanisms in transformers",
];

fn owned(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

fn owned_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|row| owned(row)).collect()
}

/// Builds the fixture catalog in its canonical order.
///
/// Each call returns a fresh, owned copy; the engine filters and sorts copies so
/// the canonical order is never disturbed.
///
/// # Examples
///
/// ```
/// use astrafind::retrieval::catalog;
///
/// let items = catalog();
/// assert_eq!(items.len(), 8);
/// assert_eq!(items[3].id, "4");
/// ```
#[must_use]
pub fn catalog() -> Vec<ResultItem> {
    vec![
        ResultItem {
            id: "1".to_string(),
            modality: Modality::Text,
            title: "Advanced RAG Techniques for Multi-Modal Document Processing".to_string(),
            url: "https://arxiv.org/abs/2024.01234".to_string(),
            source_domain: "arxiv.org".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 15),
            score: 95.0,
            snippet: Some(
                "We present novel approaches to retrieval-augmented generation that \
                 combine text, image, and table understanding for comprehensive document \
                 analysis. Our method achieves state-of-the-art performance on \
                 multi-modal benchmarks."
                    .to_string(),
            ),
            highlights: owned(&["RAG", "multi-modal", "document analysis"]),
            thumbnail_url: None,
            table_preview: None,
        },
        ResultItem {
            id: "2".to_string(),
            modality: Modality::Pdf,
            title: "Vision-Language Models for Chart Understanding".to_string(),
            url: "https://research.microsoft.com/chart-understanding.pdf".to_string(),
            source_domain: "research.microsoft.com".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 2, 10),
            score: 92.0,
            snippet: Some(
                "This paper introduces a comprehensive framework for understanding charts \
                 and graphs using vision-language models, with applications in data \
                 analysis and business intelligence."
                    .to_string(),
            ),
            highlights: owned(&["vision-language", "charts", "data analysis"]),
            thumbnail_url: Some("/placeholder-pdf.png".to_string()),
            table_preview: None,
        },
        ResultItem {
            id: "3".to_string(),
            modality: Modality::Image,
            title: "Graph Neural Network Architecture Diagram".to_string(),
            url: "https://cdn.openai.com/research/gnn-architecture.png".to_string(),
            source_domain: "openai.com".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 28),
            score: 88.0,
            snippet: Some(
                "Detailed architectural diagram showing the flow of information through \
                 graph neural networks for recommendation systems."
                    .to_string(),
            ),
            highlights: owned(&["graph neural network", "architecture", "recommendation"]),
            thumbnail_url: Some("/placeholder-image.png".to_string()),
            table_preview: None,
        },
        ResultItem {
            id: "4".to_string(),
            modality: Modality::Table,
            title: "LLM Evaluation Benchmark Results".to_string(),
            url: "https://huggingface.co/benchmarks/llm-eval-2024".to_string(),
            source_domain: "huggingface.co".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 2, 5),
            score: 91.0,
            snippet: Some(
                "Comprehensive evaluation results comparing major language models across \
                 various tasks including reasoning, coding, and multi-modal understanding."
                    .to_string(),
            ),
            highlights: owned(&["LLM evaluation", "benchmarks", "performance"]),
            thumbnail_url: None,
            table_preview: Some(TablePreview {
                headers: owned(&["Model", "MMLU Score", "HumanEval", "Multi-Modal Score"]),
                rows: owned_rows(&[
                    &["GPT-4", "86.4", "67.0", "82.1"],
                    &["Claude-3", "84.2", "64.5", "79.8"],
                    &["Gemini Pro", "83.7", "63.4", "78.9"],
                    &["GPT-3.5", "70.0", "48.1", "65.2"],
                    &["LLaMA-2", "68.9", "29.9", "62.4"],
                ]),
            }),
        },
        ResultItem {
            id: "5".to_string(),
            modality: Modality::Text,
            title: "Implementing Semantic Search with Vector Databases".to_string(),
            url: "https://blog.pinecone.io/semantic-search-implementation".to_string(),
            source_domain: "pinecone.io".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 20),
            score: 87.0,
            snippet: Some(
                "Step-by-step guide to building production-ready semantic search systems \
                 using vector embeddings and modern database technologies."
                    .to_string(),
            ),
            highlights: owned(&["semantic search", "vector databases", "embeddings"]),
            thumbnail_url: None,
            table_preview: None,
        },
        ResultItem {
            id: "6".to_string(),
            modality: Modality::Pdf,
            title: "Attention Mechanisms in Transformer Models".to_string(),
            url: "https://papers.nips.cc/attention-transformers-2024.pdf".to_string(),
            source_domain: "papers.nips.cc".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 2, 14),
            score: 94.0,
            snippet: Some(
                "Deep dive into the mathematical foundations of attention mechanisms and \
                 their applications in modern transformer architectures for NLP and \
                 computer vision."
                    .to_string(),
            ),
            highlights: owned(&["attention mechanisms", "transformers", "deep learning"]),
            thumbnail_url: Some("/placeholder-pdf.png".to_string()),
            table_preview: None,
        },
        ResultItem {
            id: "7".to_string(),
            modality: Modality::Image,
            title: "Multi-Modal AI Pipeline Visualization".to_string(),
            url: "https://storage.googleapis.com/ai-research/pipeline-viz.png".to_string(),
            source_domain: "google.com".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 12),
            score: 85.0,
            snippet: Some(
                "Interactive visualization showing how different modalities (text, image, \
                 audio) are processed through a unified AI pipeline."
                    .to_string(),
            ),
            highlights: owned(&["multi-modal", "AI pipeline", "visualization"]),
            thumbnail_url: Some("/placeholder-image.png".to_string()),
            table_preview: None,
        },
        ResultItem {
            id: "8".to_string(),
            modality: Modality::Table,
            title: "Performance Comparison: Embedding Models".to_string(),
            url: "https://www.anthropic.com/research/embedding-comparison".to_string(),
            source_domain: "anthropic.com".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 2, 8),
            score: 89.0,
            snippet: Some(
                "Detailed performance analysis of various embedding models across \
                 different domains and tasks, including retrieval accuracy and \
                 computational efficiency."
                    .to_string(),
            ),
            highlights: owned(&["embedding models", "performance", "comparison"]),
            thumbnail_url: None,
            table_preview: Some(TablePreview {
                headers: owned(&["Model", "Retrieval@10", "Speed (ms)", "Memory (GB)"]),
                rows: owned_rows(&[
                    &["text-embedding-ada-002", "0.847", "45", "2.1"],
                    &["sentence-transformers", "0.832", "23", "1.8"],
                    &["e5-large-v2", "0.856", "67", "3.2"],
                    &["bge-large-en", "0.841", "52", "2.7"],
                ]),
            }),
        },
    ]
}
