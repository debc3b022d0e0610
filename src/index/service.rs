//! The search index service: lookup table, term index and query cache kept in step.
//!
//! # Contract
//!
//! - `add_item` never fails. The n-th insert into a fresh index receives id `n`;
//!   ids are never reused or skipped.
//! - `search(q)` returns every item whose term contains `q` (case-sensitive, no
//!   wildcards). An empty query matches every item. No match is an empty mapping,
//!   not an error.
//! - Results are keyed by id and iterate in ascending id order, so a term inserted
//!   several times lists its earliest insertion first.
//! - Results are memoized per exact query string. With the default
//!   [`CachePolicy::InvalidateOnInsert`] every insert clears the cache, so results
//!   are never stale. With [`CachePolicy::Retain`] they stay cached until
//!   [`IndexService::clear_cache`] is called.
//!
//! The service is single-owner: `search` takes `&mut self` because it fills the
//! cache. Hosts that share it across threads need to wrap it in a lock.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

use super::cache::{CachePolicy, CacheStats, QueryCache};
use super::lookup::LookupTable;
use super::terms::SearchIndex;
use crate::models::{EntryId, SearchResult, SearchResults};

/// Delimiter used by [`IndexService::render_index`]
pub const INDEX_SEPARATOR: &str = "__is__";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexConfig {
    pub cache_policy: CachePolicy,
}

impl IndexConfig {
    pub fn with_cache_policy(cache_policy: CachePolicy) -> Self {
        Self { cache_policy }
    }
}

/// In-memory substring search index
#[derive(Debug, Clone)]
pub struct IndexService<T> {
    lookup_table: LookupTable<T>,
    index: SearchIndex,
    cache: QueryCache<T>,
    config: IndexConfig,
}

impl<T: Clone> IndexService<T> {
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self::with_lookup_table(LookupTable::new(), config)
    }

    /// Build on top of an existing lookup table
    ///
    /// Values already in the table are reachable through [`get`](Self::get) but
    /// are not searchable, since they have no term. New ids continue after them.
    pub fn with_lookup_table(lookup_table: LookupTable<T>, config: IndexConfig) -> Self {
        Self { lookup_table, index: SearchIndex::new(), cache: QueryCache::new(), config }
    }

    /// Add `value` under `search_term` and return its id
    ///
    /// An empty term is accepted; it is only matched by the empty query.
    pub fn add_item(&mut self, search_term: &str, value: T) -> EntryId {
        let id = self.lookup_table.insert(value);
        self.index.insert(search_term, id);
        trace!("Indexed term {:?} as id {}", search_term, id);

        if self.config.cache_policy == CachePolicy::InvalidateOnInsert && !self.cache.is_empty() {
            debug!("Invalidating {} cached queries after insert", self.cache.len());
            self.cache.clear();
        }

        id
    }

    /// Find every item whose term contains `search_input`
    pub fn search(&mut self, search_input: &str) -> Arc<SearchResults<T>> {
        if let Some(cached) = self.cache.get(search_input) {
            debug!("Cache hit for {:?} ({} results)", search_input, cached.len());
            return cached;
        }

        let mut results = SearchResults::new();
        for (term, id) in self.index.matches(search_input) {
            // Every indexed id was produced by the lookup table, so this always resolves
            if let Some(item) = self.lookup_table.get(id) {
                results.insert(
                    id,
                    SearchResult {
                        id,
                        item: item.clone(),
                        search_term: term.to_string(),
                        search_input: search_input.to_string(),
                    },
                );
            }
        }

        debug!(
            "Cache miss for {:?}: scanned {} terms, {} results",
            search_input,
            self.index.len(),
            results.len()
        );
        self.cache.insert(search_input, results)
    }

    /// Current term -> ids mapping
    pub fn index(&self) -> &HashMap<String, Vec<EntryId>> {
        self.index.as_map()
    }

    pub fn separator(&self) -> &'static str {
        INDEX_SEPARATOR
    }

    /// One `term__is__id` line per association, sorted by id
    pub fn render_index(&self) -> String {
        let mut pairs: Vec<(EntryId, &str)> = self
            .index
            .as_map()
            .iter()
            .flat_map(|(term, ids)| ids.iter().map(move |&id| (id, term.as_str())))
            .collect();
        pairs.sort_unstable_by_key(|(id, _)| *id);

        pairs
            .iter()
            .map(|(id, term)| format!("{}{}{}", term, INDEX_SEPARATOR, id))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lookup_table(&self) -> &LookupTable<T> {
        &self.lookup_table
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.lookup_table.get(id)
    }

    /// Number of stored items, including any from an injected lookup table
    pub fn len(&self) -> usize {
        self.lookup_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup_table.is_empty()
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    /// Number of term -> id associations
    pub fn entry_count(&self) -> usize {
        self.index.entry_count()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }
}

impl<T: Clone> Default for IndexService<T> {
    fn default() -> Self {
        Self::new()
    }
}
