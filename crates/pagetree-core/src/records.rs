//! Loading page records from JSON.
//!
//! Input is a JSON array of [`PageRecord`] objects:
//!
//! ```json
//! [
//!   { "id": 1, "parent_id": 0, "title": "About" },
//!   { "id": 2, "parentId": 1, "title": "Team" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use crate::record::PageRecord;

/// Error loading page records.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    /// File could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Content is not a valid record array.
    #[error("Invalid page records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of page records.
///
/// # Errors
///
/// Returns [`RecordsError::Json`] if the input is not an array of records.
pub fn parse_records(json: &str) -> Result<Vec<PageRecord>, RecordsError> {
    let records: Vec<PageRecord> = serde_json::from_str(json)?;
    tracing::debug!(count = records.len(), "Page records parsed");
    Ok(records)
}

/// Read and parse a JSON file of page records.
///
/// # Errors
///
/// Returns [`RecordsError::Io`] if the file cannot be read, or
/// [`RecordsError::Json`] if it is not an array of records.
pub fn load_records(path: &Path) -> Result<Vec<PageRecord>, RecordsError> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content)
}
