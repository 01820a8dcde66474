pub mod delimited;
pub mod error;
pub mod pdf;
pub mod record;
pub mod spreadsheet;
mod tabular;
pub mod text;

pub use delimited::read_delimited_record;
pub use error::{IngestError, Result};
pub use pdf::read_pdf_record;
pub use record::RawRecord;
pub use spreadsheet::read_spreadsheet_record;
pub use text::record_from_text;
