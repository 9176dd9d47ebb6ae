use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rev1_cov::api::{self, CovarianceRecord};
use rev1_cov::Rev1;

/// Convert the covariance matrices of a Rev-1 file to JSON
#[derive(Parser, Debug)]
#[command(name = "rev1-cov", version, about)]
struct Cli {
    /// Rev-1 file to read
    #[arg(default_value = "REV1.01v")]
    input: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = "converted.json")]
    output: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rev1_cov=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let rev1 = Rev1::from_REV1(&cli.input)
        .with_context(|| format!("Failed to parse Rev-1 file: {}", cli.input.display()))?;
    let records = CovarianceRecord::from_Rev1(&rev1)?;
    api::write_json(&records, &cli.output, cli.pretty)?;

    info!("Converted {} to {}", cli.input.display(), cli.output.display());
    Ok(())
}
