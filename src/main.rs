use std::path::PathBuf;

use clap::Parser;
use knorm::app::Overrides;
use knorm::{ErrorPolicy, Options};
use knorm_core::config::Config;

#[derive(Parser)]
#[command(name = "knorm", about = "Expand thousands-marked values (\"12k\") in a table column")]
struct Cli {
    /// Input table (.csv, .tsv, .jsonl).
    #[arg(short, long)]
    input: PathBuf,

    /// Output file. Defaults to stdout, in the input's format.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column to normalise.
    #[arg(short, long)]
    column: Option<String>,

    /// What to do with unparseable marked values: fail or passthrough.
    #[arg(long, value_name = "POLICY")]
    on_error: Option<ErrorPolicy>,

    /// Table format: auto, csv, tsv or jsonl.
    #[arg(long)]
    format: Option<String>,

    /// CSV field delimiter.
    #[arg(long)]
    delimiter: Option<String>,

    /// Keep every CSV cell as text instead of typing numeric columns.
    #[arg(long)]
    no_infer: bool,

    /// Config file to use instead of ~/.config/knorm/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (RUST_LOG overrides the filter).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load config file, using defaults");
            Config::defaults()
        }),
    };

    let overrides = Overrides {
        output: cli.output,
        column: cli.column,
        policy: cli.on_error,
        format: cli.format,
        delimiter: cli.delimiter,
        no_infer: cli.no_infer,
    };
    let opts = Options::resolve(&config, cli.input, overrides)?;

    let report = knorm::run(&opts)?;
    eprintln!("{}: {report}", opts.column);
    Ok(())
}
