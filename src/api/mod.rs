// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Netmagis management via its REST API.
//!
//! This module provides the client used to read and modify Netmagis data:
//!
//! - Listing domains and views to resolve names into identifiers
//! - Searching hosts by `(name, domain, view)`
//! - Fetching, creating and updating host records
//!
//! # Architecture
//!
//! The [`NetmagisApi`] trait is the seam between the add-host logic and the
//! network. [`NetmagisClient`] implements it over HTTP; tests use in-memory
//! implementations.
//!
//! # Example
//!
//! ```rust,no_run
//! use dnsaddhost::api::{NetmagisApi, NetmagisClient};
//! use dnsaddhost::config::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::parse("[general]\nurl = https://nm.example.com\nkey = secret\n")?;
//! let client = NetmagisClient::new(&config);
//!
//! let idview = client.get_idview("internal").await?;
//! # Ok(())
//! # }
//! ```

pub mod request;
pub mod types;

pub use types::{Domain, Host, HostSummary, NewHost, View};

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::constants::{DOMAINS_PATH, HOSTS_PATH, VIEWS_PATH};
use crate::dns_errors::ApiError;
use request::{netmagis_json, netmagis_request};

/// Operations the add-host routine needs from Netmagis.
#[async_trait]
pub trait NetmagisApi: Send + Sync {
    /// List all domains (`GET /domains`).
    async fn domains(&self) -> Result<Vec<Domain>, ApiError>;

    /// List all views (`GET /views`).
    async fn views(&self) -> Result<Vec<View>, ApiError>;

    /// Search hosts by name, domain and view (`GET /hosts?name=&domain=&view=`).
    async fn find_hosts(
        &self,
        name: &str,
        domain: &str,
        view: &str,
    ) -> Result<Vec<HostSummary>, ApiError>;

    /// Fetch a full host record (`GET /hosts/{id}`).
    async fn get_host(&self, idhost: i64) -> Result<Host, ApiError>;

    /// Create a host (`POST /hosts`).
    async fn create_host(&self, host: &NewHost) -> Result<(), ApiError>;

    /// Replace a host record (`PUT /hosts/{id}`).
    async fn update_host(&self, idhost: i64, host: &Host) -> Result<(), ApiError>;

    /// The domain named `domain`, as Netmagis spells it, if Netmagis knows it.
    ///
    /// Domain names are compared case-insensitively, ignoring a trailing dot.
    /// Callers must use the returned name, not their input, in later requests.
    async fn find_domain(&self, domain: &str) -> Result<Option<Domain>, ApiError> {
        let wanted = domain.trim_end_matches('.');
        Ok(self
            .domains()
            .await?
            .into_iter()
            .find(|d| d.name.trim_end_matches('.').eq_ignore_ascii_case(wanted)))
    }

    /// Identifier of the view named `view`, if Netmagis knows it.
    async fn get_idview(&self, view: &str) -> Result<Option<i64>, ApiError> {
        Ok(self
            .views()
            .await?
            .into_iter()
            .find(|v| v.name == view)
            .map(|v| v.idview))
    }
}

/// HTTP client for the Netmagis API.
#[derive(Clone)]
pub struct NetmagisClient {
    /// HTTP client for API requests
    client: HttpClient,
    /// API base URL
    base: Url,
    /// API key sent as session cookie
    key: String,
}

impl std::fmt::Debug for NetmagisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetmagisClient")
            .field("base", &self.base.as_str())
            .field("key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl NetmagisClient {
    /// Create a client from a loaded configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            client: HttpClient::new(),
            base: config.url.clone(),
            key: config.key.clone(),
        }
    }

    async fn get_json<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        netmagis_json(
            &self.client,
            &self.base,
            &self.key,
            Method::GET,
            path,
            query,
            None::<&()>,
        )
        .await
    }
}

#[async_trait]
impl NetmagisApi for NetmagisClient {
    async fn domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.get_json(DOMAINS_PATH, &[]).await
    }

    async fn views(&self) -> Result<Vec<View>, ApiError> {
        self.get_json(VIEWS_PATH, &[]).await
    }

    async fn find_hosts(
        &self,
        name: &str,
        domain: &str,
        view: &str,
    ) -> Result<Vec<HostSummary>, ApiError> {
        let hosts: Vec<HostSummary> = self
            .get_json(
                HOSTS_PATH,
                &[("name", name), ("domain", domain), ("view", view)],
            )
            .await?;
        debug!(host = name, domain, view, matches = hosts.len(), "Host lookup done");
        Ok(hosts)
    }

    async fn get_host(&self, idhost: i64) -> Result<Host, ApiError> {
        self.get_json(&host_path(idhost), &[]).await
    }

    async fn create_host(&self, host: &NewHost) -> Result<(), ApiError> {
        netmagis_request(
            &self.client,
            &self.base,
            &self.key,
            Method::POST,
            HOSTS_PATH,
            &[],
            Some(host),
        )
        .await?;
        Ok(())
    }

    async fn update_host(&self, idhost: i64, host: &Host) -> Result<(), ApiError> {
        netmagis_request(
            &self.client,
            &self.base,
            &self.key,
            Method::PUT,
            &host_path(idhost),
            &[],
            Some(host),
        )
        .await?;
        Ok(())
    }
}

/// Path of a single host record.
#[must_use]
pub fn host_path(idhost: i64) -> String {
    format!("{HOSTS_PATH}/{idhost}")
}

#[cfg(test)]
pub(crate) mod mock;
