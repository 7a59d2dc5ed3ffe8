//! Table model and column application.
//!
//! A [`Table`] is an ordered set of equally long, uniquely named [`Column`]s.
//! [`normalize_column`] maps the normalizer over one of them; the new column
//! only replaces the old one once every cell has been processed, so a failed
//! run leaves the table exactly as it was.

use serde::Deserialize;

use crate::normalizer::{self, NormalizeError};
use crate::types::Value;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("no column named {0:?}")]
    UnknownColumn(String),
    #[error("duplicate column name {0:?}")]
    DuplicateColumn(String),
    #[error("column {name:?} has {len} values, expected {expected}")]
    RaggedColumn {
        name: String,
        len: usize,
        expected: usize,
    },
    #[error("column {column:?}, row {row}: {source}")]
    Normalize {
        column: String,
        row: usize,
        #[source]
        source: NormalizeError,
    },
}

// ---------------------------------------------------------------------------
// Column / Table
// ---------------------------------------------------------------------------

/// A named, ordered sequence of cells, one per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, rejecting duplicate names and columns whose length
    /// differs from the first column.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let expected = columns.first().map_or(0, Column::len);
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
            if column.len() != expected {
                return Err(TableError::RaggedColumn {
                    name: column.name.clone(),
                    len: column.len(),
                    expected,
                });
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Row-major view: one `Vec<&Value>` per row, cells in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.height()).map(move |row| self.columns.iter().map(|c| &c.values[row]).collect())
    }

    /// Element-wise map over one column.
    ///
    /// `f` receives the row index and the current cell. The first error
    /// aborts the map and the column keeps its previous values.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<(), TableError>
    where
        F: FnMut(usize, &Value) -> Result<Value, TableError>,
    {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;

        let mapped = column
            .values
            .iter()
            .enumerate()
            .map(|(row, value)| f(row, value))
            .collect::<Result<Vec<_>, _>>()?;

        column.values = mapped;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Column normalisation
// ---------------------------------------------------------------------------

/// What [`normalize_column`] does with a marked value it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the whole column; the table is left untouched.
    #[default]
    Fail,
    /// Keep the offending value as-is and carry on.
    PassThrough,
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(ErrorPolicy::Fail),
            "passthrough" | "pass-through" => Ok(ErrorPolicy::PassThrough),
            other => Err(format!(
                "unknown error policy {other:?} (expected \"fail\" or \"passthrough\")"
            )),
        }
    }
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::Fail => write!(f, "fail"),
            ErrorPolicy::PassThrough => write!(f, "passthrough"),
        }
    }
}

/// Per-column outcome counts. `converted + unchanged + failed == rows`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnReport {
    pub rows: usize,
    pub converted: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl std::fmt::Display for ColumnReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows: {} converted, {} unchanged, {} failed",
            self.rows, self.converted, self.unchanged, self.failed
        )
    }
}

/// Normalise every value of `column` in place.
pub fn normalize_column(
    table: &mut Table,
    column: &str,
    policy: ErrorPolicy,
) -> Result<ColumnReport, TableError> {
    let mut report = ColumnReport::default();

    table.map_column(column, |row, value| {
        report.rows += 1;
        let marked = value.as_text().is_some_and(normalizer::has_marker);
        match normalizer::normalize(value) {
            Ok(out) => {
                if marked {
                    report.converted += 1;
                } else {
                    report.unchanged += 1;
                }
                Ok(out)
            }
            Err(source) => match policy {
                ErrorPolicy::Fail => Err(TableError::Normalize {
                    column: column.to_string(),
                    row,
                    source,
                }),
                ErrorPolicy::PassThrough => {
                    tracing::debug!(column, row, %source, "keeping unparseable value");
                    report.failed += 1;
                    Ok(value.clone())
                }
            },
        }
    })?;

    tracing::info!(column, policy = %policy, %report, "column normalised");
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
