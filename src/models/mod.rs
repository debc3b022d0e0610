//! Data models shared by the index, the dataset parser and the CLI.
//!
//! - [`SearchResult`] - One match produced by a query
//! - [`SearchResults`] - Id-keyed result mapping returned (and cached) per query
//! - [`DatasetEntry`] - A term/value pair read from a JSON Lines dataset

pub mod dataset;
pub mod search;

pub use dataset::DatasetEntry;
pub use search::{EntryId, SearchResult, SearchResults};
