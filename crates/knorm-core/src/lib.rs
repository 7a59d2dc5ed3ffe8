//! knorm-core: thousands-marker normalisation for table columns.
//!
//! This crate holds the value normalizer and the small table model it is
//! applied to, plus the shared configuration types.
//!
//! # Architecture
//!
//! ```text
//! Value ──► normalizer::normalize ──► Value
//!                  │
//! Table ──► table::normalize_column (element-wise, all-or-nothing)
//! ```
//!
//! Loading and saving tables lives in `knorm-io`; nothing here does I/O
//! except [`config::Config::load`].

pub mod config;
pub mod normalizer;
pub mod table;
pub mod types;

pub use normalizer::{normalize, NormalizeError};
pub use table::{normalize_column, Column, ColumnReport, ErrorPolicy, Table, TableError};
pub use types::Value;
