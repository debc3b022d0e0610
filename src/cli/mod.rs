//! Command-line front end over [`IndexService`](crate::index::IndexService)

pub mod commands;

pub use commands::{Cli, Commands, run};
