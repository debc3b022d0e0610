use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use crate::models::DatasetEntry;
use crate::utils::open_dataset_file;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Parse a JSON Lines dataset of `{"term": ..., "value": ...}` objects
///
/// Malformed lines are logged and skipped. Returns an error if more than 50% of
/// lines fail to parse or after 100 consecutive failures.
pub fn parse_dataset_file(path: &Path) -> Result<Vec<DatasetEntry>> {
    let file = open_dataset_file(path)?;

    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line from {}", path.display()))?;

        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<DatasetEntry>(&line) {
            Ok(entry) => {
                entries.push(entry);
                consecutive_errors = 0;
            }
            Err(e) => {
                warn!("Failed to parse line {} in {}: {}", line_num + 1, path.display(), e);
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in {} - file may be corrupted",
                        consecutive_errors,
                        path.display()
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in {}: {} of {} lines failed ({:.1}%)",
                path.display(),
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        info!("Parsed {}: {} entries ({} skipped)", path.display(), entries.len(), skipped_count);
    }

    Ok(entries)
}
