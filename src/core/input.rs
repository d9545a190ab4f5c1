//! Input collection
//!
//! Gathers raw credential entries from the `-k` value and the `-f` file.
//! Entries are not validated here.

use crate::utils::error::{CheckError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Collect raw entries, `-k` first, then the file's lines in order
///
/// An empty `key` is ignored. Blank lines in the file are kept.
pub fn collect_credentials(key: Option<&str>, file: Option<&Path>) -> Result<Vec<String>> {
    let mut entries = Vec::new();

    if let Some(key) = key.filter(|k| !k.is_empty()) {
        entries.push(key.to_string());
    }

    if let Some(path) = file {
        let lines = read_lines(path)?;
        info!("Read {} entries from {}", lines.len(), path.display());
        entries.extend(lines);
    }

    debug!("Collected {} credential entries", entries.len());
    Ok(entries)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| CheckError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| CheckError::InputRead {
            path: path.to_path_buf(),
            source,
        })
}
