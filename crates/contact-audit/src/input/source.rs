//! Loaded rows and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of lines read, header included.
    pub line_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, line_count: usize) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            line_count,
            loaded_at: Utc::now(),
        }
    }
}

/// One source line split into fields.
///
/// The number of fields is whatever the line carried; it is not
/// reconciled against the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based source line number (the header is line 1).
    pub line: usize,
    /// Fields in source order, empty ones included.
    pub fields: Vec<String>,
}

impl RawRow {
    /// Create a row from its line number and fields.
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Number of fields on this line.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at a 0-based position, if the line is long enough.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }
}

/// Every line of a source file, in order.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, header first.
    pub rows: Vec<RawRow>,
    /// Where the rows came from.
    pub source: SourceMetadata,
}

impl Dataset {
    /// Create a dataset from loaded rows.
    pub fn new(rows: Vec<RawRow>, source: SourceMetadata) -> Self {
        Self { rows, source }
    }

    /// The header row (line 1), if any line was read.
    pub fn header(&self) -> Option<&RawRow> {
        self.rows.first()
    }

    /// Data rows, i.e. every line after the header.
    pub fn data_rows(&self) -> &[RawRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.data_rows().len()
    }

    /// Whether no line at all was read.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
