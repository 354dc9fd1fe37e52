//! Host data boundary
//!
//! The engine reads text and writes numbers through `Dataset`, and reports
//! messages through `Diagnostics`. Columns and rows are 0-based on this side;
//! hosts with 1-based addressing translate in their `Dataset` impl.

use std::borrow::Cow;

use thiserror::Error;
use tracing::{error, info};

/// Size of the host's string read buffer, terminator included.
pub const MAX_STR_BUF: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("column {column} out of range ({columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("row {row} out of range ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// Reported 1-based, the way hosts number their variables.
    #[error("variable {} must be a string variable", .0 + 1)]
    NotText(usize),

    #[error("variable {} must be a numeric variable", .0 + 1)]
    NotNumeric(usize),
}

impl HostError {
    /// Addressing errors mean the engine walked past a shape it had already
    /// validated. Type errors are the caller's.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            HostError::ColumnOutOfRange { .. } | HostError::RowOutOfRange { .. }
        )
    }
}

/// A rectangular table the engine reads strings from and writes scores into.
pub trait Dataset {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Whether `column` holds strings. Checked for every column before any
    /// value is read or stored.
    fn is_text(&self, column: usize) -> bool;

    fn read_text(&self, column: usize, row: usize) -> Result<Cow<'_, str>, HostError>;

    /// Store a numeric value; `None` is the host's missing value.
    fn store(&mut self, column: usize, row: usize, value: Option<f64>) -> Result<(), HostError>;
}

/// Message channel back to the host.
pub trait Diagnostics {
    /// Report a call-level failure.
    fn error(&mut self, message: &str);

    /// Best-effort informational output (progress).
    fn display(&mut self, message: &str);
}

/// Forwards host messages to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&mut self, message: &str) {
        error!("{}", message.trim_end());
    }

    fn display(&mut self, message: &str) {
        info!("{}", message.trim_end());
    }
}

/// Cap `s` at `MAX_STR_BUF - 1` bytes without splitting a character.
pub fn truncate_to_buffer(s: &str) -> &str {
    let limit = MAX_STR_BUF - 1;
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Numeric(Vec<Option<f64>>),
}

/// In-memory `Dataset`.
///
/// ```
/// use fuzzlink::host::{Dataset, MemoryTable};
///
/// let table = MemoryTable::new(2)
///     .with_text(["kitten", "flaw"])
///     .with_numeric();
/// assert_eq!(table.column_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTable {
    rows: usize,
    columns: Vec<Column>,
}

impl MemoryTable {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
        }
    }

    /// Append a text column, padded with empty strings or cut to the row count.
    pub fn with_text<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
        values.resize(self.rows, String::new());
        self.columns.push(Column::Text(values));
        self
    }

    /// Append an all-missing numeric column.
    pub fn with_numeric(mut self) -> Self {
        self.columns.push(Column::Numeric(vec![None; self.rows]));
        self
    }

    pub fn numeric(&self, column: usize) -> Option<&[Option<f64>]> {
        match self.columns.get(column)? {
            Column::Numeric(values) => Some(values),
            Column::Text(_) => None,
        }
    }

    fn column(&self, column: usize) -> Result<&Column, HostError> {
        self.columns.get(column).ok_or(HostError::ColumnOutOfRange {
            column,
            columns: self.columns.len(),
        })
    }

    fn check_row(&self, row: usize) -> Result<(), HostError> {
        if row >= self.rows {
            return Err(HostError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

impl Dataset for MemoryTable {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn is_text(&self, column: usize) -> bool {
        matches!(self.columns.get(column), Some(Column::Text(_)))
    }

    fn read_text(&self, column: usize, row: usize) -> Result<Cow<'_, str>, HostError> {
        self.check_row(row)?;
        match self.column(column)? {
            Column::Text(values) => Ok(Cow::Borrowed(values[row].as_str())),
            Column::Numeric(_) => Err(HostError::NotText(column)),
        }
    }

    fn store(&mut self, column: usize, row: usize, value: Option<f64>) -> Result<(), HostError> {
        self.check_row(row)?;
        let columns = self.columns.len();
        match self.columns.get_mut(column) {
            Some(Column::Numeric(values)) => {
                values[row] = value;
                Ok(())
            }
            Some(Column::Text(_)) => Err(HostError::NotNumeric(column)),
            None => Err(HostError::ColumnOutOfRange { column, columns }),
        }
    }
}
