// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Add a host, or an address to an existing host.
//!
//! The routine works in four steps:
//!
//! 1. Split the FQDN and resolve its domain ([`crate::fqdn::split_fqdn`])
//! 2. Resolve the view name
//! 3. Look up hosts matching `(name, domain, view)`
//! 4. Depending on the number of matches:
//!    - 0: create the host with a single address (`POST /hosts`)
//!    - 1: fetch the full record, append the address and send it back
//!      (`GET /hosts/{id}` then `PUT /hosts/{id}`)
//!    - more: fail, the server holds duplicate hosts
//!
//! The address is appended verbatim, even if the host already has it.
//!
//! # Example
//!
//! ```rust,no_run
//! use dnsaddhost::addhost::add_host;
//! use dnsaddhost::api::NetmagisClient;
//! use dnsaddhost::config::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load_or_default(None)?;
//! let client = NetmagisClient::new(&config);
//!
//! let outcome = add_host(&client, "host1.example.com", "192.0.2.10", "internal").await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;

use tracing::{error, info};

use crate::api::{NetmagisApi, NewHost};
use crate::dns_errors::AddHostError;
use crate::fqdn::split_fqdn;

/// What [`add_host`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new host was created with the address
    Created {
        /// Host FQDN
        fqdn: String,
        /// View the host was created in
        view: String,
    },
    /// The address was appended to an existing host
    Extended {
        /// Host FQDN
        fqdn: String,
        /// View of the host
        view: String,
        /// Identifier of the updated host
        idhost: i64,
        /// Address list sent to the server
        addr: Vec<String>,
    },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { fqdn, view } => write!(f, "Host {fqdn} created in view {view}"),
            Self::Extended {
                fqdn,
                view,
                addr,
                ..
            } => write!(
                f,
                "Host {fqdn} updated in view {view}, addresses: {}",
                addr.join(", ")
            ),
        }
    }
}

/// Add `ip` to the host `fqdn` in `view`, creating the host if needed.
///
/// # Errors
///
/// - [`AddHostError::InvalidFqdn`] / [`AddHostError::UnknownDomain`] if the
///   FQDN cannot be resolved
/// - [`AddHostError::UnknownView`] if the view does not exist
/// - [`AddHostError::DuplicateHost`] if more than one host matches
/// - [`AddHostError::Api`] if any request fails
///
/// No create or update request is sent when one of the first three errors
/// is returned.
pub async fn add_host<A>(
    api: &A,
    fqdn: &str,
    ip: &str,
    view: &str,
) -> Result<Outcome, AddHostError>
where
    A: NetmagisApi + ?Sized,
{
    let parts = split_fqdn(api, fqdn).await?;

    let idview = api
        .get_idview(view)
        .await?
        .ok_or_else(|| AddHostError::UnknownView(view.to_string()))?;

    let matches = api.find_hosts(&parts.name, &parts.domain, view).await?;

    match matches.as_slice() {
        [] => {
            info!(fqdn, view, ip, "Host does not exist, creating it");
            let host = NewHost::with_address(&parts.name, parts.iddom, idview, ip);
            api.create_host(&host).await?;

            Ok(Outcome::Created {
                fqdn: fqdn.to_string(),
                view: view.to_string(),
            })
        }
        [summary] => {
            let idhost = summary.idhost;
            info!(fqdn, view, ip, idhost, "Host exists, appending address");

            let mut host = api.get_host(idhost).await?;
            host.addr.push(ip.to_string());
            api.update_host(idhost, &host).await?;

            Ok(Outcome::Extended {
                fqdn: fqdn.to_string(),
                view: view.to_string(),
                idhost,
                addr: host.addr,
            })
        }
        _ => {
            error!(
                fqdn,
                view,
                matches = matches.len(),
                "Host exists more than once in view"
            );
            Err(AddHostError::DuplicateHost {
                name: parts.name,
                domain: parts.domain,
                view: view.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "addhost_tests.rs"]
mod addhost_tests;
