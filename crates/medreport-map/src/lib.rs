pub mod error;
pub mod format;
pub mod index;
pub mod mapper;
pub mod value;

pub use error::{ReportError, Result};
pub use format::{ALLOWED_EXTENSIONS, ReportFormat};
pub use index::{AliasIndex, FieldTarget};
pub use mapper::{MAX_REPORT_SIZE_BYTES, ParsedReport, ReportMapper};
pub use value::normalize_value;
