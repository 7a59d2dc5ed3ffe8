//! Delimited text tables (CSV / TSV).
//!
//! The first record is the header. With type inference on, each column is
//! typed as a whole: every non-empty cell an `i64` gives an `Int` column,
//! otherwise every non-empty cell an `f64` gives a `Float` column, otherwise
//! the column is `Text`. Empty cells are always `Null`. A column mixing
//! `"12k"` and `"45000"` therefore stays text throughout.

use std::io;

use knorm_core::{Column, Table, Value};

use crate::{IoError, TableOptions};

pub fn read<R: io::Read>(reader: R, opts: &TableOptions) -> Result<Table, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record?;
        for (cells, field) in raw.iter_mut().zip(record.iter()) {
            cells.push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| Column::new(name, type_column(cells, opts.infer_types)))
        .collect();

    Ok(Table::new(columns)?)
}

pub fn write<W: io::Write>(table: &Table, writer: W, opts: &TableOptions) -> Result<(), IoError> {
    if table.width() == 0 {
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .from_writer(writer);

    wtr.write_record(table.column_names())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

fn type_column(cells: Vec<String>, infer: bool) -> Vec<Value> {
    if infer {
        if let Some(ints) = parse_all(&cells, |s| s.parse::<i64>().ok().map(Value::Int)) {
            return ints;
        }
        if let Some(floats) = parse_all(&cells, |s| s.parse::<f64>().ok().map(Value::Float)) {
            return floats;
        }
    }
    cells
        .into_iter()
        .map(|s| if s.is_empty() { Value::Null } else { Value::Text(s) })
        .collect()
}

fn parse_all(cells: &[String], parse: impl Fn(&str) -> Option<Value>) -> Option<Vec<Value>> {
    cells
        .iter()
        .map(|s| if s.is_empty() { Some(Value::Null) } else { parse(s) })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
