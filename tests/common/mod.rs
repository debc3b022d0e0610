//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

pub const DATASET_FILENAME: &str = "dataset.jsonl";

/// Builder for JSON Lines datasets written into a temp directory
pub struct DatasetBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Add a well-formed term/value entry
    pub fn entry(mut self, term: &str, value: Value) -> Self {
        self.lines.push(json!({ "term": term, "value": value }).to_string());
        self
    }

    /// Add a raw line, e.g. malformed JSON
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the dataset and return the temp dir (keeps it alive) and the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join(DATASET_FILENAME);
        fs::write(&path, self.lines.join("\n")).expect("Failed to write dataset");
        (self.temp_dir, path)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The hello/world dataset used across tests
pub fn hello_world_dataset() -> (TempDir, PathBuf) {
    DatasetBuilder::new()
        .entry("hello1", json!("hv1"))
        .entry("hello2", json!("hv2"))
        .entry("world", json!("wv"))
        .build()
}
