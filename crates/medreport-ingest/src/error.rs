//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a report document.
///
/// Unresolvable or unconvertible fields are not errors; readers simply
/// omit them. These variants cover documents that cannot be read at all.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the document.
    #[error("failed to read report {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse delimited content.
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("spreadsheet has no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// Failed to extract text from a PDF document.
    #[error("failed to extract text from PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = IngestError::EmptyWorkbook {
            path: PathBuf::from("/tmp/report.xlsx"),
        };
        assert_eq!(
            err.to_string(),
            "spreadsheet has no worksheets: /tmp/report.xlsx"
        );
    }
}
