//! In-memory substring search index
//!
//! Three structures grow together for the lifetime of an [`IndexService`]:
//!
//! - [`LookupTable`] - dense id -> value storage; the next id is always its size
//! - [`SearchIndex`] - term -> ids mapping scanned for substring containment
//! - [`QueryCache`] - exact query string -> previously computed results
//!
//! There is no update or delete. See [`service`] for the query contract and the
//! cache invalidation policies.

pub mod cache;
pub mod lookup;
pub mod service;
pub mod terms;

pub use cache::{CachePolicy, CacheStats, QueryCache};
pub use lookup::LookupTable;
pub use service::{INDEX_SEPARATOR, IndexConfig, IndexService};
pub use terms::SearchIndex;
