//! Load, write, and save: the whole update of one workbook
//!
//! Nothing is saved unless every fatal step succeeded, so a failed run leaves
//! the workbook file exactly as it was.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use umya_spreadsheet::{Spreadsheet, Worksheet};

use super::columns::{last_row, MAX_ROW};
use super::entries::{classify, CellValue, Entry, Rejected};
use super::error::{DataLoadCause, SheetError};

/// Inputs of one writer run
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Existing workbook, updated in place
    pub workbook: PathBuf,
    /// Measurement Set to project
    pub data: PathBuf,
    /// Preferred sheet; the active sheet is used when absent or unknown
    pub sheet: Option<String>,
    /// Row receiving the first element of every list
    pub start_row: u32,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub workbook: PathBuf,
    pub sheet: String,
    pub start_row: u32,
    /// Keys whose value was a list, empty lists included
    pub written: usize,
    pub skipped: usize,
}

/// Read the data file as a JSON object
pub fn load_data(path: &Path) -> Result<Map<String, Value>, SheetError> {
    let fail = |source| SheetError::DataLoad {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(|e| fail(DataLoadCause::Io(e)))?;
    match serde_json::from_str::<Value>(&content).map_err(|e| fail(DataLoadCause::Parse(e)))? {
        Value::Object(map) => Ok(map),
        _ => Err(fail(DataLoadCause::NotAnObject)),
    }
}

/// Write accepted lists down their columns; rejected entries go to `on_skip`
///
/// Element `i` of a list lands at row `first_row + i`. Cells below a list are
/// left alone, even if they hold values from an earlier, longer run. Nothing
/// is written past [`MAX_ROW`].
pub fn write_entries(
    sheet: &mut Worksheet,
    entries: &[Entry],
    mut on_skip: impl FnMut(&Rejected),
) -> usize {
    let mut written = 0;

    for entry in entries {
        let accepted = match entry {
            Entry::Accepted(accepted) => accepted,
            Entry::Rejected(rejected) => {
                on_skip(rejected);
                continue;
            }
        };

        for (row, value) in (accepted.first_row.max(1)..=MAX_ROW).zip(&accepted.values) {
            let cell = sheet.get_cell_mut((accepted.column, row));
            match value {
                CellValue::Number(n) => {
                    cell.set_value_number(*n);
                }
                CellValue::Text(s) => {
                    cell.set_value_string(s.clone());
                }
                CellValue::Bool(b) => {
                    cell.set_value_bool(*b);
                }
                CellValue::Blank => {
                    cell.set_blank();
                }
            }
        }

        tracing::debug!(
            key = %accepted.key,
            column = %accepted.column_name(),
            rows = accepted.values.len(),
            "list written"
        );
        written += 1;
    }

    written
}

/// Run `f` on the requested sheet, or on the active sheet when it doesn't exist
fn with_target_sheet<T>(
    book: &mut Spreadsheet,
    requested: Option<&str>,
    f: impl FnOnce(&mut Worksheet) -> T,
) -> T {
    if let Some(name) = requested {
        if let Some(sheet) = book.get_sheet_by_name_mut(name) {
            return f(sheet);
        }
        tracing::debug!(name, "sheet not found, falling back to the active sheet");
    }
    f(book.get_active_sheet_mut())
}

/// Project the data file onto the workbook and save it in place
#[tracing::instrument(level = "debug", skip_all, fields(workbook = %options.workbook.display()))]
pub fn update_workbook(
    options: &UpdateOptions,
    on_skip: impl FnMut(&Rejected),
) -> Result<UpdateReport, SheetError> {
    if last_row(options.start_row, 0).is_none() {
        return Err(SheetError::InvalidStartRow {
            row: options.start_row,
        });
    }

    let data = load_data(&options.data)?;

    let mut book = umya_spreadsheet::reader::xlsx::read(&options.workbook).map_err(|source| {
        SheetError::WorkbookOpen {
            path: options.workbook.clone(),
            source,
        }
    })?;

    let entries = classify(&data, options.start_row);
    let skipped = entries
        .iter()
        .filter(|e| matches!(e, Entry::Rejected(_)))
        .count();

    let (sheet, written) = with_target_sheet(&mut book, options.sheet.as_deref(), |sheet| {
        let written = write_entries(sheet, &entries, on_skip);
        (sheet.get_name().to_string(), written)
    });

    umya_spreadsheet::writer::xlsx::write(&book, &options.workbook).map_err(|source| {
        SheetError::WorkbookSave {
            path: options.workbook.clone(),
            source,
        }
    })?;

    Ok(UpdateReport {
        workbook: options.workbook.clone(),
        sheet,
        start_row: options.start_row,
        written,
        skipped,
    })
}
