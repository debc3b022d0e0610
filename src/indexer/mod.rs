//! Loading datasets into an [`IndexService`](crate::index::IndexService)
//!
//! # Error Handling Strategy
//!
//! - **Line-level failures**: delegated to the dataset parser, which skips malformed lines
//!   and fails only when the file looks systematically broken.
//! - **File-level failures**: a missing, oversized or unreadable dataset is an error with
//!   the dataset path attached as context.
//! - **Summary reporting**: the number of indexed items and distinct terms is logged at
//!   `info` level once the index is built.

pub mod builder;

pub use builder::{build_index, build_index_from_entries, build_index_with_config};
