//! Shared collection of header/row tables into raw records.

use medreport_model::RawValue;

use crate::record::RawRecord;

/// Collect a header row plus data rows into a [`RawRecord`].
///
/// The first data row is the primary source: each header label takes its
/// value from that row (wide single-patient exports). Every data row is
/// then scanned as a potential label/value pair in columns 0 and 1 to
/// cover reports laid out as narrow two-column tables. First-write-wins
/// keeps the header-derived entries when both layouts apply.
pub(crate) fn collect_record(headers: &[String], rows: &[Vec<RawValue>]) -> RawRecord {
    let mut record = RawRecord::new();

    if let Some(first_row) = rows.first() {
        for (index, header) in headers.iter().enumerate() {
            if let Some(value) = first_row.get(index) {
                record.insert(header, value.clone());
            }
        }
    }

    for row in rows {
        if row.len() < 2 {
            continue;
        }
        let Some(label) = row[0].to_text() else {
            continue;
        };
        record.insert(&label, row[1].clone());
    }

    record
}
