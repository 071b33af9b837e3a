//! Spreadsheet writer: project a Measurement Set onto workbook columns

pub mod columns;
pub mod entries;
pub mod error;
pub mod workbook;

pub use entries::{classify, Accepted, CellValue, Entry, RejectReason, Rejected};
pub use error::{DataLoadCause, SheetError};
pub use workbook::{load_data, update_workbook, write_entries, UpdateOptions, UpdateReport};
