//! JSON snapshot loading.
//!
//! This is the validation boundary: malformed URL-entry records and duplicate
//! group names are rejected here, so the diff engines only ever see
//! well-formed snapshots and cannot fail.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::Snapshot;

/// Errors that can occur while loading a [`Snapshot`] from JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was not valid JSON for the snapshot schema. This includes URL
    /// entry objects missing their `url` field.
    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read the input file.
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    /// Two groups in one snapshot share a name.
    #[error("duplicate group name in snapshot: '{0}'")]
    DuplicateGroup(String),
}

/// Parse a snapshot from a JSON string.
pub fn parse_snapshot(input: &str) -> Result<Snapshot, ParseError> {
    let snapshot: Snapshot = serde_json::from_str(input)?;
    validate(&snapshot)?;
    Ok(snapshot)
}

/// Parse a snapshot from a JSON file.
pub fn parse_snapshot_file(path: &Path) -> Result<Snapshot, ParseError> {
    parse_snapshot(&fs::read_to_string(path)?)
}

fn validate(snapshot: &Snapshot) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for group in &snapshot.groups {
        if !seen.insert(group.name.as_str()) {
            return Err(ParseError::DuplicateGroup(group.name.clone()));
        }
    }
    Ok(())
}
