//! Section id -> spreadsheet column, and the sheet's row bounds

use crate::config::COLUMN_OFFSET;

/// Widest column an xlsx sheet can hold ("XFD")
pub const MAX_COLUMN: u32 = 16_384;

/// Tallest sheet an xlsx file can hold
pub const MAX_ROW: u32 = 1_048_576;

/// Last row a list of `len` values occupies when written from `start_row`
///
/// None when `start_row` is not a valid row or the list would run past
/// [`MAX_ROW`]. An empty list occupies nothing and only needs a valid start.
pub fn last_row(start_row: u32, len: usize) -> Option<u32> {
    if !(1..=MAX_ROW).contains(&start_row) {
        return None;
    }
    let extra = u32::try_from(len.saturating_sub(1)).ok()?;
    start_row.checked_add(extra).filter(|row| *row <= MAX_ROW)
}

/// 1-based column for a section key, or None when it falls outside the sheet
pub fn column_for_key(key: i64) -> Option<u32> {
    let column = key.checked_add(COLUMN_OFFSET)?;
    u32::try_from(column)
        .ok()
        .filter(|c| (1..=MAX_COLUMN).contains(c))
}

/// Letter notation of a 1-based column (4 -> "D")
pub fn column_letter(column: u32) -> String {
    umya_spreadsheet::helper::coordinate::string_from_column_index(&column)
}
