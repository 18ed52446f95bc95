//! Line-oriented loader for tab-separated exports.
//!
//! Unlike a CSV reader this does no quote handling and no arity
//! reconciliation: every line is split on the delimiter exactly as
//! encountered, so short and over-long rows survive for the classifier.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::source::{Dataset, RawRow, SourceMetadata};
use crate::error::{AuditError, Result};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field delimiter.
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delimiter: '\t' }
    }
}

/// Reads a delimited file into raw rows.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file into a dataset.
    ///
    /// Fails with [`AuditError::EmptyData`] when the file has no lines.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| AuditError::io(path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| AuditError::io(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());
        let size_bytes = contents.len() as u64;

        let text = String::from_utf8(contents).map_err(|e| AuditError::Encoding {
            path: path.to_path_buf(),
            source: e,
        })?;
        let rows = self.parse_str(&text);

        if rows.is_empty() {
            warn!(path = %path.display(), "source file has no lines");
            return Err(AuditError::EmptyData("no data".to_string()));
        }

        debug!(
            path = %path.display(),
            lines = rows.len(),
            bytes = size_bytes,
            "loaded source file"
        );

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            rows.len(),
        );
        Ok(Dataset::new(rows, source))
    }

    /// Split text into rows, one per line.
    ///
    /// Lines end at `\n`, `\r\n` or a bare `\r`. Only a `\n` is removed
    /// from the end of a line, so a `\r` before it (or a bare `\r`
    /// terminator) stays in the last field. A trailing terminator does not
    /// produce an extra row, but a blank line in the middle becomes a
    /// single empty field.
    pub fn parse_str(&self, text: &str) -> Vec<RawRow> {
        split_lines(text)
            .into_iter()
            .map(|line| line.strip_suffix('\n').unwrap_or(line))
            .enumerate()
            .map(|(idx, line)| {
                let fields = line
                    .split(self.config.delimiter)
                    .map(|s| s.to_string())
                    .collect();
                RawRow::new(idx + 1, fields)
            })
            .collect()
    }
}

/// Split text after every line terminator, keeping the terminators.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (idx, &byte) in bytes.iter().enumerate() {
        let ends_line = match byte {
            b'\n' => true,
            b'\r' => bytes.get(idx + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            lines.push(&text[start..=idx]);
            start = idx + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
