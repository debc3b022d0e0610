use std::collections::HashMap;

use crate::models::EntryId;

/// Term -> ids mapping used for substring lookups
///
/// Each term keeps its ids in insertion order, which is also ascending since
/// ids are handed out sequentially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    terms: HashMap<String, Vec<EntryId>>,
    entry_count: usize,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `term` resolves to `id`
    pub fn insert(&mut self, term: &str, id: EntryId) {
        match self.terms.get_mut(term) {
            Some(ids) => ids.push(id),
            None => {
                self.terms.insert(term.to_string(), vec![id]);
            }
        }
        self.entry_count += 1;
    }

    /// Ids recorded for exactly `term`
    pub fn ids_for(&self, term: &str) -> &[EntryId] {
        self.terms.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (term, id) pair whose term contains `query`
    ///
    /// Plain case-sensitive containment: an empty query matches every pair.
    /// Pairs come out in no particular order.
    pub fn matches<'a>(&'a self, query: &'a str) -> impl Iterator<Item = (&'a str, EntryId)> + 'a {
        self.terms
            .iter()
            .filter(move |(term, _)| term.contains(query))
            .flat_map(|(term, ids)| ids.iter().map(move |&id| (term.as_str(), id)))
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of term -> id associations, counting repeated terms
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn as_map(&self) -> &HashMap<String, Vec<EntryId>> {
        &self.terms
    }
}
