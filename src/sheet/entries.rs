//! Validation pass over the raw data file
//!
//! Every key is classified before anything touches the workbook: it is either
//! accepted with its target column, first row, and values, or rejected with a reason that
//! becomes one warning line. Rejections never stop the run.

use serde_json::{Map, Value};
use std::fmt;

use super::columns::{column_for_key, column_letter, last_row, MAX_ROW};

/// A value destined for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Blank,
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(n.to_string())),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Null => Self::Blank,
            nested => Self::Text(nested.to_string()),
        }
    }
}

/// A key whose list will be written down `column` from `first_row`
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub key: String,
    pub column: u32,
    pub first_row: u32,
    pub values: Vec<CellValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NonIntegerKey,
    ColumnOutOfRange,
    NotAList,
    RowOutOfRange,
}

/// A key left out of the write, reported to the operator
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    pub key: String,
    pub reason: RejectReason,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::NonIntegerKey => write!(f, "Skipping non-integer key: {}", self.key),
            RejectReason::ColumnOutOfRange => {
                write!(f, "Key {} maps outside the sheet's columns; skipping.", self.key)
            }
            RejectReason::NotAList => {
                write!(f, "Key {} does not contain a list; skipping.", self.key)
            }
            RejectReason::RowOutOfRange => write!(
                f,
                "Key {} would run past row {}; skipping.",
                self.key, MAX_ROW
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Accepted(Accepted),
    Rejected(Rejected),
}

impl Accepted {
    /// Column in letter notation, for reporting
    pub fn column_name(&self) -> String {
        column_letter(self.column)
    }
}

fn parse_key(key: &str) -> Option<i64> {
    key.trim().parse().ok()
}

/// Classify every key, integer keys ascending by value, non-integer keys last
///
/// A list is accepted only if all of it fits on the sheet when written from
/// `start_row`; it is never truncated.
pub fn classify(data: &Map<String, Value>, start_row: u32) -> Vec<Entry> {
    let mut keys: Vec<(&String, Option<i64>)> =
        data.keys().map(|k| (k, parse_key(k))).collect();
    // None sorts first on Option, so order on (is_none, value) instead
    keys.sort_by_key(|(_, parsed)| (parsed.is_none(), *parsed));

    keys.into_iter()
        .map(|(key, parsed)| {
            let reject = |reason| {
                Entry::Rejected(Rejected {
                    key: key.clone(),
                    reason,
                })
            };

            let Some(index) = parsed else {
                return reject(RejectReason::NonIntegerKey);
            };
            let Some(column) = column_for_key(index) else {
                return reject(RejectReason::ColumnOutOfRange);
            };
            let Value::Array(items) = &data[key] else {
                return reject(RejectReason::NotAList);
            };
            if last_row(start_row, items.len()).is_none() {
                return reject(RejectReason::RowOutOfRange);
            }
            Entry::Accepted(Accepted {
                key: key.clone(),
                column,
                first_row: start_row,
                values: items.iter().map(CellValue::from).collect(),
            })
        })
        .collect()
}
