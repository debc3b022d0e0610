//! Index builder for JSON Lines datasets.
//!
//! Entries are inserted in file order, so the n-th parsed line receives id `n`.
//! Line-level problems are handled by [`parse_dataset_file`]; anything it rejects
//! is propagated as an error.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

use crate::index::{IndexConfig, IndexService};
use crate::models::DatasetEntry;
use crate::parsers::parse_dataset_file;

/// Build an index from the dataset at `path` with the default configuration
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is larger than 100MB, or too many
/// of its lines fail to parse.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use substring_index::build_index;
///
/// let mut index = build_index(Path::new("terms.jsonl"))?;
/// println!("{} matches", index.search("hello").len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_index(path: &Path) -> Result<IndexService<Value>> {
    build_index_with_config(path, IndexConfig::default())
}

/// Build an index from the dataset at `path` using `config`
pub fn build_index_with_config(path: &Path, config: IndexConfig) -> Result<IndexService<Value>> {
    let entries = parse_dataset_file(path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    let index = build_index_from_entries(entries, config);

    info!(
        "Indexed {} items under {} distinct terms from {}",
        index.len(),
        index.term_count(),
        path.display()
    );

    Ok(index)
}

/// Insert already-parsed entries in order
pub fn build_index_from_entries<I>(entries: I, config: IndexConfig) -> IndexService<Value>
where
    I: IntoIterator<Item = DatasetEntry>,
{
    let mut index = IndexService::with_config(config);
    for entry in entries {
        index.add_item(&entry.term, entry.value);
    }
    index
}
