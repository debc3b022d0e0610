use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::index::{CachePolicy, IndexConfig, IndexService};
use crate::indexer::build_index_with_config;
use crate::models::SearchResults;
use crate::utils::get_dataset_path;

const BENCH_QUERY: &str = "last";

#[derive(Parser)]
#[command(name = "substring-index")]
#[command(version = "0.1.0")]
#[command(about = "Substring search over term/value datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the dataset for terms containing each query
    Search {
        /// Substrings to look for (case-sensitive)
        #[arg(required = true)]
        queries: Vec<String>,
        /// JSON Lines dataset (defaults to $SUBSTRING_INDEX_DATASET)
        #[arg(long)]
        dataset: Option<PathBuf>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Keep cached results across inserts instead of invalidating them
        #[arg(long)]
        retain_cache: bool,
    },
    /// Show statistics about the dataset index
    Stats {
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Print every term -> id association
    Dump {
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Time repeated searches against a synthetic index
    Bench {
        /// Number of synthetic items to insert
        #[arg(long, default_value_t = 1000)]
        items: usize,
        /// Number of searches to time
        #[arg(long, default_value_t = 1000)]
        requests: usize,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Search { queries, dataset, json, retain_cache }) => {
            let policy =
                if *retain_cache { CachePolicy::Retain } else { CachePolicy::InvalidateOnInsert };
            run_search(queries, dataset.as_deref(), *json, policy)?;
        }
        Some(Commands::Stats { dataset }) => {
            show_stats(dataset.as_deref())?;
        }
        Some(Commands::Dump { dataset }) => {
            let index = load_index(dataset.as_deref(), IndexConfig::default())?;
            println!("{}", index.render_index());
        }
        Some(Commands::Bench { items, requests }) => {
            run_bench(*items, *requests);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn load_index(dataset: Option<&Path>, config: IndexConfig) -> Result<IndexService<Value>> {
    let path = get_dataset_path(dataset)?;
    build_index_with_config(&path, config)
}

fn run_search(
    queries: &[String],
    dataset: Option<&Path>,
    json: bool,
    policy: CachePolicy,
) -> Result<()> {
    let mut index = load_index(dataset, IndexConfig::with_cache_policy(policy))?;

    if json {
        let all: Vec<_> = queries
            .iter()
            .map(|query| {
                let results = index.search(query);
                serde_json::json!({
                    "query": query,
                    "results": results.values().collect::<Vec<_>>(),
                })
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&all).context("Failed to serialize search results")?;
        println!("{}", rendered);
    } else {
        for query in queries {
            let results = index.search(query);
            print!("{}", format_results(query, &results));
        }
    }

    Ok(())
}

/// Render one query's results as a header line plus one line per match
pub fn format_results(query: &str, results: &SearchResults<Value>) -> String {
    let mut out = format!("{} result(s) for {:?}\n", results.len(), query);
    for result in results.values() {
        out.push_str(&format!("  [{}] {} => {}\n", result.id, result.search_term, result.item));
    }
    out
}

fn show_stats(dataset: Option<&Path>) -> Result<()> {
    let path = get_dataset_path(dataset)?;
    let index = build_index_with_config(&path, IndexConfig::default())?;

    println!("Substring Index Statistics");
    println!("==========================");
    println!("Dataset: {}", path.display());
    println!("Items: {}", index.len());
    println!("Distinct terms: {}", index.term_count());
    println!("Term associations: {}", index.entry_count());

    Ok(())
}

fn run_bench(items: usize, requests: usize) {
    let mut index = IndexService::new();
    for i in 0..items {
        index.add_item(&i.to_string(), i.to_string());
    }
    index.add_item("last item", "last item value".to_string());

    let start = Instant::now();
    for _ in 0..requests {
        index.search(BENCH_QUERY);
    }
    let elapsed = start.elapsed();

    println!("{} items processed in {} by IndexService.search()", items, format_elapsed(elapsed));
    let stats = index.cache_stats();
    println!("Cache: {} hits, {} misses", stats.hits, stats.misses);
}

/// Milliseconds below one second, seconds above, both to three decimals
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;
    if millis > 1000.0 { format!("{:.3}s", millis / 1000.0) } else { format!("{:.3}ms", millis) }
}
