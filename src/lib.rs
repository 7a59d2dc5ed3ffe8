//! knorm: expand thousands-marked values in a table column.
//!
//! Reads a CSV/TSV/JSONL table, rewrites one column so that text such as
//! `"12k"` or `"3.5K"` becomes `12000.0` / `3500.0`, and writes the table
//! back out. The pieces live in the workspace crates; this crate wires them
//! together for the binary and the integration harnesses.
//!
//! # Architecture
//!
//! ```text
//! knorm-io::read_table ──► knorm-core::normalize_column ──► knorm-io::write_table
//!                                   ▲
//!                       knorm-core::config::Config
//! ```

pub mod app;

pub use app::{run, Options, Overrides};
pub use knorm_core::{ColumnReport, ErrorPolicy, Table, Value};
