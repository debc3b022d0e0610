//! JSON Lines dataset parser
//!
//! # Error Handling Strategy
//!
//! Parsing degrades gracefully:
//!
//! - **Individual line failures**: Malformed lines are logged with `log::warn!` and skipped,
//!   so one bad record does not prevent the rest of the dataset from being indexed.
//!
//! - **Catastrophic failure detection**: If >50% of lines fail to parse, or if 100 consecutive
//!   lines fail, the parser returns an error instead of a mostly empty dataset.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context; callers report and exit.

pub mod dataset;

pub use dataset::parse_dataset_file;
