use crate::models::EntryId;

/// Dense id -> value storage
///
/// Ids are positions in the table, so the next id is always the current length.
/// Nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable<T> {
    values: Vec<T>,
}

impl<T> LookupTable<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create a table that already holds `values` at ids `0..values.len()`
    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Store `value` and return the id it was assigned
    pub fn insert(&mut self, value: T) -> EntryId {
        let id = self.values.len();
        self.values.push(value);
        id
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.values.get(id)
    }

    /// The id the next insert will receive
    pub fn next_id(&self) -> EntryId {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> {
        self.values.iter().enumerate()
    }
}

impl<T> Default for LookupTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
