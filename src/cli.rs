// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line arguments.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Add a host, or an address to an existing host, in Netmagis.
///
/// The API URL and key are read from the `[general]` section of the
/// configuration file.
#[derive(Debug, Parser)]
#[command(name = "dnsaddhost", version, about, long_about = None)]
pub struct Cli {
    /// Config file location (default: ~/.config/netmagisrc)
    #[arg(short = 'c', long = "config-file", value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Host FQDN
    pub fqdn: String,

    /// IP (v4 or v6) address to add
    #[arg(value_parser = parse_ip)]
    pub ip: String,

    /// View name
    pub view: String,
}

impl Cli {
    /// Log filter directive matching the requested verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Accept only valid IP addresses, keeping them as typed.
fn parse_ip(value: &str) -> Result<String, String> {
    value
        .parse::<IpAddr>()
        .map(|_| value.to_string())
        .map_err(|e| format!("'{value}' is not an IPv4 or IPv6 address: {e}"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
