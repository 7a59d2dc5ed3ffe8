//! One normalisation run: load, normalise a column, write.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use knorm_core::config::Config;
use knorm_core::{normalize_column, ColumnReport, ErrorPolicy};
use knorm_io::{Format, TableOptions};

/// Fully resolved settings for [`run`]. Built from a [`Config`] with any
/// command-line [`Overrides`] applied before the strings are parsed.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub column: String,
    pub policy: ErrorPolicy,
    /// `None` picks the format from the input file extension.
    pub format: Option<Format>,
    pub table: TableOptions,
}

/// Command-line values that win over the config file. `None` keeps the
/// config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub column: Option<String>,
    pub policy: Option<ErrorPolicy>,
    pub format: Option<String>,
    pub delimiter: Option<String>,
    pub no_infer: bool,
}

impl Options {
    pub fn from_config(config: &Config, input: PathBuf) -> anyhow::Result<Self> {
        Self::resolve(config, input, Overrides::default())
    }

    /// Merge `overrides` over `config`. An invalid config format or
    /// delimiter is never parsed when the command line replaces it.
    pub fn resolve(config: &Config, input: PathBuf, overrides: Overrides) -> anyhow::Result<Self> {
        let format = overrides.format.as_deref().unwrap_or(&config.input.format);
        let delimiter = overrides
            .delimiter
            .as_deref()
            .unwrap_or(&config.input.delimiter);

        Ok(Self {
            input,
            output: overrides.output,
            column: overrides
                .column
                .unwrap_or_else(|| config.normalize.column.clone()),
            policy: overrides.policy.unwrap_or(config.normalize.on_error),
            format: parse_format(format)?,
            table: TableOptions {
                delimiter: knorm_io::parse_delimiter(delimiter)?,
                infer_types: config.input.infer_types && !overrides.no_infer,
            },
        })
    }
}

/// `auto` means "decide from the file extension".
pub fn parse_format(s: &str) -> anyhow::Result<Option<Format>> {
    if s.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    Ok(Some(s.parse()?))
}

pub fn run(opts: &Options) -> anyhow::Result<ColumnReport> {
    let format = match opts.format {
        Some(format) => format,
        None => Format::from_path(&opts.input)?,
    };

    let mut table = knorm_io::read_table(&opts.input, format, &opts.table)
        .with_context(|| format!("failed to read {}", opts.input.display()))?;

    let report = normalize_column(&mut table, &opts.column, opts.policy)
        .with_context(|| format!("failed to normalise column {:?}", opts.column))?;

    match &opts.output {
        Some(path) => knorm_io::write_table(&table, path, format, &opts.table)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => knorm_io::write_to(&table, BufWriter::new(io::stdout().lock()), format, &opts.table)
            .context("failed to write to stdout")?,
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
