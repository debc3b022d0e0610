use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable consulted when no `--dataset` flag is given
pub const DATASET_ENV_VAR: &str = "SUBSTRING_INDEX_DATASET";

/// Resolve the dataset path: explicit flag first, then `SUBSTRING_INDEX_DATASET`
pub fn get_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let path = env::var(DATASET_ENV_VAR).with_context(|| {
        format!("No dataset given: pass --dataset or set {}", DATASET_ENV_VAR)
    })?;
    Ok(PathBuf::from(path))
}
