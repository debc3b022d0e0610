use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::models::SearchResults;

/// How cached query results react to new inserts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Drop every cached query whenever an item is added
    #[default]
    InvalidateOnInsert,
    /// Keep cached queries across inserts; callers refresh with `clear_cache`
    Retain,
}

/// Hit/miss counters for the query cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Memoized results keyed by the exact (case-sensitive) query string
#[derive(Debug, Clone)]
pub struct QueryCache<T> {
    entries: HashMap<String, Arc<SearchResults<T>>>,
    stats: CacheStats,
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self { entries: HashMap::new(), stats: CacheStats::default() }
    }

    /// Look up a previously computed result, counting a hit when found
    pub fn get(&mut self, query: &str) -> Option<Arc<SearchResults<T>>> {
        let cached = self.entries.get(query).cloned();
        if cached.is_some() {
            self.stats.hits += 1;
        }
        cached
    }

    /// Store freshly computed results; every insert corresponds to one miss
    pub fn insert(&mut self, query: &str, results: SearchResults<T>) -> Arc<SearchResults<T>> {
        self.stats.misses += 1;
        let results = Arc::new(results);
        self.entries.insert(query.to_string(), Arc::clone(&results));
        results
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    /// Drop all cached queries; counters are kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
