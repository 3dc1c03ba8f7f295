//! Generation record store.
//!
//! Each completed generation can be appended to an external store for
//! audit/feedback purposes. The store itself is an external collaborator;
//! this module defines the injected seam ([`RecordStore`]) plus an NDJSON
//! file implementation (one JSON object per line) for local use.

use crate::error::{Result, TaskdocError};
use crate::task::TaskRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit record of one document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// When the document was generated.
    pub ts: DateTime<Utc>,
    /// The request the document was generated from.
    pub request: TaskRequest,
    /// Name of the artifact that was produced.
    pub file_name: String,
}

impl GenerationRecord {
    /// Create a record for a finished generation.
    pub fn new(request: &TaskRequest, file_name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            ts: at,
            request: request.clone(),
            file_name: file_name.into(),
        }
    }

    /// Serialize as a single NDJSON line (no trailing newline).
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TaskdocError::Io(format!("failed to serialize record: {}", e)))
    }
}

/// The record-store collaborator.
pub trait RecordStore {
    /// Append one record to the store.
    fn append(&self, record: &GenerationRecord) -> Result<()>;
}

/// Append-only NDJSON file store.
pub struct NdjsonStore {
    path: PathBuf,
}

impl NdjsonStore {
    /// Create a store that appends to the given file, creating it on first
    /// use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for NdjsonStore {
    fn append(&self, record: &GenerationRecord) -> Result<()> {
        let line = record.to_ndjson_line()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TaskdocError::Io(format!(
                    "failed to open record store '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", line).map_err(|e| {
            TaskdocError::Io(format!(
                "failed to append to record store '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
