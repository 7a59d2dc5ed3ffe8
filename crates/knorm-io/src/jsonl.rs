//! JSON Lines tables: one flat JSON object per line, one line per row.
//!
//! Columns appear in first-seen key order. A row that lacks a key gets
//! `Null` in that column. Nested arrays and objects are rejected, and so are
//! infinite or NaN floats on write, since JSON has no number for them.

use std::collections::HashMap;
use std::io::{self, BufRead};

use knorm_core::{Column, Table, Value};

use crate::IoError;

pub fn read<R: io::Read>(reader: R) -> Result<Table, IoError> {
    let mut columns: Vec<Column> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut height = 0usize;

    for (i, line) in io::BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let object = match serde_json::from_str(&line) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => return Err(IoError::NotAnObject { line: lineno }),
            Err(source) => return Err(IoError::Json { line: lineno, source }),
        };

        for (key, json) in object {
            let cell = to_cell(json, &key, lineno)?;
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                columns.push(Column::new(key, vec![Value::Null; height]));
                columns.len() - 1
            });
            columns[slot].values.push(cell);
        }

        height += 1;
        for column in columns.iter_mut().filter(|c| c.len() < height) {
            column.values.push(Value::Null);
        }
    }

    tracing::trace!(rows = height, columns = columns.len(), "jsonl table read");
    Ok(Table::new(columns)?)
}

pub fn write<W: io::Write>(table: &Table, mut writer: W) -> Result<(), IoError> {
    for (i, row) in table.rows().enumerate() {
        let mut object = serde_json::Map::with_capacity(table.width());
        for (name, cell) in table.column_names().zip(row) {
            if matches!(cell, Value::Float(x) if !x.is_finite()) {
                return Err(IoError::NonFinite {
                    line: i + 1,
                    column: name.to_string(),
                });
            }
            let json = serde_json::to_value(cell).map_err(|source| IoError::Json {
                line: i + 1,
                source,
            })?;
            object.insert(name.to_string(), json);
        }
        serde_json::to_writer(&mut writer, &object).map_err(|source| IoError::Json {
            line: i + 1,
            source,
        })?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn to_cell(json: serde_json::Value, column: &str, line: usize) -> Result<Value, IoError> {
    use serde_json::Value as Json;

    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) => Value::Text(s),
        Json::Array(_) | Json::Object(_) => {
            return Err(IoError::UnsupportedValue {
                line,
                column: column.to_string(),
            })
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
