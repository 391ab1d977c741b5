// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{anyhow, Result};
use clap::Parser;
use dnsaddhost::{
    addhost::add_host,
    api::NetmagisClient,
    cli::Cli,
    config::Config,
    constants::LOG_FORMAT_ENV,
};
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    // Error messages already embed their cause
    if let Err(e) = run(&cli) {
        eprintln!("dnsaddhost: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // One request at a time, no need for worker threads
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Cannot start async runtime: {e}"))?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config_file.as_deref())?;
    debug!(?config, "Configuration loaded");

    let client = NetmagisClient::new(&config);

    info!(fqdn = %cli.fqdn, ip = %cli.ip, view = %cli.view, "Adding address");
    let outcome = add_host(&client, &cli.fqdn, &cli.ip, &cli.view).await?;

    println!("{outcome}");
    Ok(())
}

/// Initialize logging on stderr so stdout only carries the result line.
///
/// Respects `RUST_LOG` if set, otherwise uses the `-v` level.
/// Respects `RUST_LOG_FORMAT=json` for structured output.
fn init_logging(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
    }
}
