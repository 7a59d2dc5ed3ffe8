//! Configuration types for knorm.
//!
//! [`Config::load`] reads `~/.config/knorm/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//! Command-line flags are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::table::ErrorPolicy;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
column   = "gdp_pcapita"
on_error = "fail"

[input]
format      = "auto"
delimiter   = ","
infer_types = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/knorm/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default = "default_column")]
    pub column: String,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

fn default_column() -> String { "gdp_pcapita".to_string() }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
            on_error: ErrorPolicy::default(),
        }
    }
}

/// `[input]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// `auto`, `csv`, or `jsonl`. `auto` picks by file extension.
    #[serde(default = "default_format")]
    pub format: String,
    /// Single-byte CSV field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Type whole columns as int/float when every cell allows it.
    #[serde(default = "default_infer_types")]
    pub infer_types: bool,
}

fn default_format() -> String { "auto".to_string() }
fn default_delimiter() -> String { ",".to_string() }
fn default_infer_types() -> bool { true }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            delimiter: default_delimiter(),
            infer_types: default_infer_types(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/knorm/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Layer an explicit file over the built-in defaults. The file must exist.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("knorm")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
