//! Fatal errors of the spreadsheet writer, each with its own exit code

use std::path::PathBuf;
use thiserror::Error;

use super::columns::MAX_ROW;

/// Why the data file could not be turned into a Measurement Set
#[derive(Debug, Error)]
pub enum DataLoadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("top-level value is not an object")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Start row {row} is outside the sheet (1..={max})", max = MAX_ROW)]
    InvalidStartRow { row: u32 },

    #[error("Failed to load JSON file '{}': {source}", .path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: DataLoadCause,
    },

    #[error("Failed to open workbook '{}': {source}", .path.display())]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("Failed to save workbook '{}': {source}", .path.display())]
    WorkbookSave {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },
}

impl SheetError {
    /// Process exit status for this failure; 0 is reserved for success
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidStartRow { .. } => 1,
            Self::DataLoad { .. } => 2,
            Self::WorkbookOpen { .. } => 3,
            Self::WorkbookSave { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_load_message() {
        let err = SheetError::DataLoad {
            path: PathBuf::from("savaData.json"),
            source: DataLoadCause::NotAnObject,
        };
        assert_eq!(
            err.to_string(),
            "Failed to load JSON file 'savaData.json': top-level value is not an object"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_start_row_message() {
        let err = SheetError::InvalidStartRow { row: 0 };
        assert_eq!(
            err.to_string(),
            "Start row 0 is outside the sheet (1..=1048576)"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let io = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let codes = [
            SheetError::DataLoad {
                path: PathBuf::from("a.json"),
                source: DataLoadCause::Io(io()),
            }
            .exit_code(),
            SheetError::WorkbookOpen {
                path: PathBuf::from("b.xlsx"),
                source: umya_spreadsheet::XlsxError::Io(io()),
            }
            .exit_code(),
            SheetError::WorkbookSave {
                path: PathBuf::from("b.xlsx"),
                source: umya_spreadsheet::XlsxError::Io(io()),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [2, 3, 4]);
    }
}
