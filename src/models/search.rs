use std::collections::BTreeMap;

use serde::Serialize;

/// Identifier assigned to every inserted item, dense and starting at the
/// lookup table's size when the index was created
pub type EntryId = usize;

/// A single match returned by [`crate::index::IndexService::search`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<T> {
    /// Position of the item in the lookup table
    pub id: EntryId,
    /// The stored value for `id`
    pub item: T,
    /// The indexed term that contained the query
    pub search_term: String,
    /// The query that produced this result
    pub search_input: String,
}

/// Matches keyed by id; iteration is always in ascending id order
pub type SearchResults<T> = BTreeMap<EntryId, SearchResult<T>>;
