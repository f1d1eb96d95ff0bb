//! CLI shim over the AstraFind core.
//!
//! A thin driver for the library: loads configuration, initializes tracing and
//! the store, runs a single search from the command-line arguments, and prints
//! the result list and summary as plain text. The real consumer of the core is
//! a graphical presentation layer; this binary exists to exercise the same
//! surface end to end.
//!
//! # Usage
//!
//! ```text
//! astrafind <query words...>
//! ```
//!
//! Configuration is read from the file named by `ASTRAFIND_CONFIG`, when set;
//! defaults apply otherwise. Logs go to stderr (`RUST_LOG` aware), the report
//! goes to stdout.

use astrafind::retrieval::SAMPLE_QUERIES;
use astrafind::{initialize, observability::init_tracing, Config};

#[tokio::main]
async fn main() {
    let config = match std::env::var("ASTRAFIND_CONFIG") {
        Ok(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("astrafind: {e}");
                std::process::exit(2);
            }
        },
        Err(_) => Config::default(),
    };

    init_tracing(&config);

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let mut store = initialize(&config);
    store.search(&query).await;

    if let Some(error) = store.error() {
        eprintln!("astrafind: {error}");
        std::process::exit(1);
    }

    if query.trim().is_empty() {
        println!("Showing the full catalog. Try one of:");
        for sample in SAMPLE_QUERIES {
            println!("  astrafind {sample}");
        }
        println!();
    }

    println!("{} result(s) for \"{}\"", store.results().len(), store.query());
    for item in store.results() {
        let date = item
            .published_at
            .map_or_else(String::new, |d| format!("  {d}"));
        println!(
            "{:>5.1}  {:<5}  {}  ({}){date}",
            item.score, item.modality, item.title, item.source_domain
        );
    }

    if let Some(summary) = store.summary() {
        println!("\nSummary:");
        for bullet in &summary.bullets {
            println!("- {bullet}");
        }
        if !summary.citations.is_empty() {
            println!("\nSources:");
            for (index, citation) in summary.citations.iter().enumerate() {
                println!("[{}] {}", index + 1, citation.short_ref);
            }
        }
    }
}
