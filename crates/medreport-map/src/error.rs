//! Error types for report mapping.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the report mapper.
///
/// Format errors are user-correctable (wrong file type); parse errors
/// mean the document itself could not be read. Unmapped fields are
/// never errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The file name carries no extension to dispatch on.
    #[error("unable to determine report format for {path}")]
    UnknownFormat { path: PathBuf },

    /// The extension is not one of the supported report formats.
    #[error("unsupported report format .{extension}; allowed formats: CSV, PDF, XLS, XLSX")]
    UnsupportedFormat { extension: String },

    /// Uploaded bytes could not be materialized for parsing.
    #[error("failed to stage uploaded report {name}: {source}")]
    Stage {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be read or parsed.
    #[error("failed to parse medical report: {source}")]
    Parse {
        #[from]
        source: medreport_ingest::IngestError,
    },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, ReportError>;
