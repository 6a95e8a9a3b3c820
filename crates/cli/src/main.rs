//! figpack-refs - find figpack figure URLs referenced from GitHub Markdown
//!
//! This binary parses flags, loads configuration and hands off to the
//! pipeline in the library crate.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::Parser;
use figpack_refs::{run_pipeline, Cli, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let token = config.search.token_from_env();
    run_pipeline(&config, token).await?;

    Ok(())
}

/// Initialize logging system
///
/// `RUST_LOG` takes precedence over the `--verbose` level.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "figrefs_core={level},figrefs_search={level},figrefs_clone={level},\
             figrefs_scanner={level},{}={level}",
            env!("CARGO_CRATE_NAME")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
