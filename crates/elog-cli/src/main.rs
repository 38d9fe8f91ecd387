#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]

use anyhow::Context;
use clap::Parser;
use elog_client::ElogClient;
use elog_config::ElogConfig;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("elog error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = load_config(flags.base_url.as_deref())?;
    tracing::debug!(base_url = %config.server.base_url, "configuration loaded");

    let client = ElogClient::from_config(&config).context("failed to build logbook client")?;
    commands::dispatch::dispatch(cli.command, &client, &config, &flags).await
}

fn load_config(base_url: Option<&str>) -> anyhow::Result<ElogConfig> {
    let mut config = ElogConfig::load_with_dotenv().context("failed to load elog configuration")?;
    if let Some(base_url) = base_url {
        config.server.base_url = base_url.to_string();
        config
            .validate()
            .context("invalid --base-url")?;
    }
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ELOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
