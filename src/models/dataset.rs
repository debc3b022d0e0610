use serde::{Deserialize, Serialize};

/// One line of a JSON Lines dataset: the term to index and the value it resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub term: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl DatasetEntry {
    pub fn new(term: impl Into<String>, value: serde_json::Value) -> Self {
        Self { term: term.into(), value }
    }
}
