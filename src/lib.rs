//! Substring Index - in-memory substring search over term/value pairs
//!
//! Items are added as `(search term, value)` pairs and receive sequential ids.
//! A query returns every item whose term contains the query string, keyed by id.
//! It supports:
//!
//! - Inserting items with dense, never-reused ids
//! - Case-sensitive substring queries with per-query result caching
//! - Loading term/value pairs from JSON Lines datasets
//!
//! # Example
//!
//! ```
//! use substring_index::IndexService;
//!
//! let mut index = IndexService::new();
//! index.add_item("hello1", "hv1");
//! index.add_item("hello2", "hv2");
//! index.add_item("world", "wv");
//!
//! let results = index.search("hello");
//! assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
//! assert!(index.search("xyz").is_empty());
//! ```

pub mod cli;
pub mod index;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use index::{CachePolicy, CacheStats, IndexConfig, IndexService};
pub use indexer::build_index;
pub use models::{DatasetEntry, EntryId, SearchResult, SearchResults};
pub use parsers::parse_dataset_file;
