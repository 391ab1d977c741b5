// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # dnsaddhost - add a host or an address through the Netmagis API
//!
//! `dnsaddhost` adds an IP address to a DNS host managed by Netmagis. If the
//! host does not exist in the requested view it is created; otherwise the
//! address is appended to its address list.
//!
//! ## Modules
//!
//! - [`config`] - Configuration file (`~/.config/netmagisrc`) loading
//! - [`api`] - Netmagis REST API client and resource types
//! - [`fqdn`] - FQDN decomposition and domain resolution
//! - [`addhost`] - The add-or-extend routine
//! - [`cli`] - Command-line arguments
//! - [`dns_errors`] - Error types
//! - [`http_errors`] - HTTP status descriptions
//!
//! ## Example
//!
//! ```rust,no_run
//! use dnsaddhost::{addhost::add_host, api::NetmagisClient, config::Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load_or_default(None)?;
//! let client = NetmagisClient::new(&config);
//! add_host(&client, "host1.example.com", "192.0.2.10", "internal").await?;
//! # Ok(())
//! # }
//! ```

pub mod addhost;
pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod dns_errors;
pub mod fqdn;
pub mod http_errors;
