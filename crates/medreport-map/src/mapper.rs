//! Report parsing and disease-form mapping.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info_span, trace};

use medreport_ingest::{
    RawRecord, read_delimited_record, read_pdf_record, read_spreadsheet_record,
};
use medreport_model::{Disease, FormValues};

use crate::error::{ReportError, Result};
use crate::format::ReportFormat;
use crate::index::AliasIndex;
use crate::value::normalize_value;

/// Upper bound on accepted report size. Callers enforce this before
/// handing bytes over; the mapper itself never buffers more than one
/// report at a time.
pub const MAX_REPORT_SIZE_BYTES: u64 = 200 * 1024 * 1024;

/// Normalized output: one value bucket per disease form, keyed by
/// canonical field name. Only diseases that received at least one
/// value appear.
pub type ParsedReport = BTreeMap<Disease, FormValues>;

/// Parses medical reports and distributes their fields across the
/// disease assessment forms.
///
/// The mapper is stateless between reports; the alias index is built
/// once at construction and shared by every parse.
pub struct ReportMapper {
    index: AliasIndex,
}

impl ReportMapper {
    pub fn new() -> Self {
        Self {
            index: AliasIndex::build(),
        }
    }

    /// Parse a report file and map its fields onto the disease forms.
    ///
    /// The reader is chosen by file extension. Unrecognized fields and
    /// unconvertible values are dropped silently; only I/O and document
    /// errors surface.
    pub fn parse_path(&self, path: &Path) -> Result<ParsedReport> {
        let format = ReportFormat::from_path(path)?;
        let span = info_span!("parse_report", report = %path.display());
        let _guard = span.enter();

        let record = match format {
            ReportFormat::Delimited => read_delimited_record(path)?,
            ReportFormat::Spreadsheet => read_spreadsheet_record(path)?,
            ReportFormat::Pdf => read_pdf_record(path)?,
        };
        debug!(fields = record.len(), "report extracted");

        Ok(self.map_record(&record))
    }

    /// Parse an in-memory report, e.g. an upload that never touched
    /// disk. The bytes are staged to a scratch file carrying the
    /// original extension so the format readers can dispatch on it;
    /// the scratch file is removed when parsing finishes, successful
    /// or not.
    pub fn parse_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<ParsedReport> {
        let name_path = Path::new(file_name);
        // reject bad names before writing anything to disk
        ReportFormat::from_path(name_path)?;
        let extension = name_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let stage = |source| ReportError::Stage {
            name: file_name.to_string(),
            source,
        };
        let mut scratch = tempfile::Builder::new()
            .prefix("medreport-")
            .suffix(&format!(".{extension}"))
            .tempfile()
            .map_err(stage)?;
        scratch.write_all(bytes).map_err(stage)?;
        scratch.flush().map_err(stage)?;

        // scratch is unlinked on drop, error paths included
        self.parse_path(scratch.path())
    }

    /// Distribute an extracted record across the disease forms.
    ///
    /// Each record key resolves to zero or more (disease, field)
    /// targets; the raw value is converted per target kind. The first
    /// successful write to a form field wins, so a later alias for an
    /// already-filled field cannot overwrite it.
    pub fn map_record(&self, record: &RawRecord) -> ParsedReport {
        let mut mapped = ParsedReport::new();
        for (key, raw) in record.iter() {
            let targets = self.index.resolve(key);
            if targets.is_empty() {
                trace!(key, "no matching form field");
                continue;
            }
            for target in targets {
                let Some(value) = normalize_value(target.kind, raw) else {
                    trace!(
                        key,
                        disease = target.disease.as_str(),
                        field = target.field,
                        "value not convertible for field kind"
                    );
                    continue;
                };
                mapped
                    .entry(target.disease)
                    .or_default()
                    .entry(target.field.to_string())
                    .or_insert(value);
            }
        }
        mapped
    }
}

impl Default for ReportMapper {
    fn default() -> Self {
        Self::new()
    }
}
