//! Test builders: ergonomic constructors for `Table` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use knorm_core::{Column, Table, Value};

// ---------------------------------------------------------------------------
// TableBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Table`] test fixtures.
///
/// # Example
///
/// ```rust
/// let table = TableBuilder::new()
///     .column("country", ["FR", "DE"])
///     .column("gdp_pcapita", [Value::from("12k"), Value::Int(42000)])
///     .build();
/// ```
#[derive(Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.columns
            .push(Column::new(name, values.into_iter().map(Into::into).collect()));
        self
    }

    pub fn build(self) -> Table {
        Table::new(self.columns).expect("TableBuilder columns must be equal length and unique")
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A single-column table named `gdp_pcapita`.
pub fn gdp_table<I, V>(values: I) -> Table
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    TableBuilder::new().column("gdp_pcapita", values).build()
}

/// Values of `name`, panicking if the column is missing.
pub fn values_of<'a>(table: &'a Table, name: &str) -> &'a [Value] {
    &table
        .column(name)
        .unwrap_or_else(|| panic!("no column {name:?} in table"))
        .values
}
