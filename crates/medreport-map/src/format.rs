//! Report format detection.

use std::path::Path;

use crate::error::ReportError;

/// Supported report file extensions, lowercase without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["csv", "pdf", "xls", "xlsx"];

/// Dispatchable report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Delimited,
    Spreadsheet,
    Pdf,
}

impl ReportFormat {
    /// Detect the format from a file name's extension
    /// (case-insensitive). A missing extension and an unsupported one
    /// are distinct errors so callers can word their guidance
    /// accordingly.
    pub fn from_path(path: &Path) -> Result<ReportFormat, ReportError> {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return Err(ReportError::UnknownFormat {
                path: path.to_path_buf(),
            });
        };
        match extension.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Delimited),
            "xls" | "xlsx" => Ok(ReportFormat::Spreadsheet),
            "pdf" => Ok(ReportFormat::Pdf),
            other => Err(ReportError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_dispatch_case_insensitively() {
        assert_eq!(
            ReportFormat::from_path(Path::new("report.csv")).unwrap(),
            ReportFormat::Delimited
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("report.XLSX")).unwrap(),
            ReportFormat::Spreadsheet
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("labs.Pdf")).unwrap(),
            ReportFormat::Pdf
        );
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = ReportFormat::from_path(Path::new("report.txt")).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat { extension } if extension == "txt"));
    }

    #[test]
    fn missing_extension_is_its_own_error() {
        let err = ReportFormat::from_path(Path::new("report")).unwrap_err();
        assert!(matches!(err, ReportError::UnknownFormat { .. }));
        // a bare dotfile has no extension either
        let err = ReportFormat::from_path(Path::new(".csv")).unwrap_err();
        assert!(matches!(err, ReportError::UnknownFormat { .. }));
    }
}
