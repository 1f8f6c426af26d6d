//! Main entry point for the modlister CLI.
//!
//! Scans a mods directory, builds one record per readable Fabric mod
//! archive, and writes the aggregate to the workspace. All fatal
//! conditions funnel into the single exit-code decision here; the
//! library functions only ever return results.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use modlister::{Cli, Workspace, scan_mods};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    if !cli.mods_dir.is_dir() {
        bail!("{} is not a directory", cli.mods_dir.display());
    }

    let workspace = Workspace::create(&cli.out_dir)
        .await
        .context("preparing workspace")?;

    let records = scan_mods(&cli.mods_dir, &workspace).await?;

    // A write failure is a real failure: the whole point of the run is
    // this file.
    workspace.write_records(&records).await?;

    info!(
        records = records.len(),
        "wrote {}",
        workspace.output_path().display()
    );
    Ok(())
}

/// Log to stderr so stdout stays free for downstream tooling.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "error" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
