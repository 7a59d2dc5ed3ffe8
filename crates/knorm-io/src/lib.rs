//! knorm-io: table sources and sinks for knorm.
//!
//! Each format reads a whole file into a [`knorm_core::Table`] and writes one
//! back out. Nothing streams: tables are small enough to live in memory.

pub mod delimited;
pub mod jsonl;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use knorm_core::{Table, TableError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: expected a JSON object")]
    NotAnObject { line: usize },
    #[error("line {line}, column {column:?}: nested arrays and objects are not supported")]
    UnsupportedValue { line: usize, column: String },
    #[error("line {line}, column {column:?}: JSON cannot represent an infinite or NaN number")]
    NonFinite { line: usize, column: String },
    #[error("cannot tell the table format of {0:?}; pass --format")]
    UnknownFormat(String),
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    BadDelimiter(String),
    #[error(transparent)]
    Table(#[from] TableError),
}

// ---------------------------------------------------------------------------
// Format / options
// ---------------------------------------------------------------------------

/// On-disk table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    /// CSV with a tab delimiter, regardless of [`TableOptions::delimiter`].
    Tsv,
    Jsonl,
}

impl Format {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Format::Csv),
            Some("tsv") | Some("tab") => Ok(Format::Tsv),
            Some("jsonl") | Some("ndjson") => Ok(Format::Jsonl),
            _ => Err(IoError::UnknownFormat(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            "jsonl" | "ndjson" => Ok(Format::Jsonl),
            other => Err(IoError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Tsv => write!(f, "tsv"),
            Format::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Reader/writer knobs shared by the formats that use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub delimiter: u8,
    pub infer_types: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_types: true,
        }
    }
}

impl TableOptions {
    fn for_format(&self, format: Format) -> Self {
        match format {
            Format::Tsv => Self {
                delimiter: b'\t',
                ..*self
            },
            _ => *self,
        }
    }
}

/// Parse a config/CLI delimiter string. `\t` and `tab` mean a tab.
pub fn parse_delimiter(s: &str) -> Result<u8, IoError> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(IoError::BadDelimiter(s.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

pub fn read_from<R: io::Read>(
    reader: R,
    format: Format,
    opts: &TableOptions,
) -> Result<Table, IoError> {
    match format {
        Format::Csv | Format::Tsv => delimited::read(reader, &opts.for_format(format)),
        Format::Jsonl => jsonl::read(reader),
    }
}

pub fn write_to<W: io::Write>(
    table: &Table,
    writer: W,
    format: Format,
    opts: &TableOptions,
) -> Result<(), IoError> {
    match format {
        Format::Csv | Format::Tsv => delimited::write(table, writer, &opts.for_format(format)),
        Format::Jsonl => jsonl::write(table, writer),
    }
}

pub fn read_table(path: &Path, format: Format, opts: &TableOptions) -> Result<Table, IoError> {
    let table = read_from(File::open(path)?, format, opts)?;
    tracing::debug!(
        path = %path.display(),
        %format,
        rows = table.height(),
        columns = table.width(),
        "table loaded"
    );
    Ok(table)
}

pub fn write_table(
    table: &Table,
    path: &Path,
    format: Format,
    opts: &TableOptions,
) -> Result<(), IoError> {
    let file = BufWriter::new(File::create(path)?);
    write_to(table, file, format, opts)?;
    tracing::debug!(path = %path.display(), %format, rows = table.height(), "table written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
