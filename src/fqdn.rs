// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! FQDN decomposition into host name and Netmagis domain.

use tracing::debug;

use crate::api::NetmagisApi;
use crate::dns_errors::AddHostError;

/// A FQDN split into its host name and a domain known to Netmagis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FqdnParts {
    /// First label, e.g. `host1`
    pub name: String,
    /// Domain as Netmagis names it, e.g. `example.com`
    pub domain: String,
    /// Netmagis identifier of `domain`
    pub iddom: i64,
}

/// Split `fqdn` at its first dot, without consulting the API.
///
/// A single trailing dot is accepted. Returns `None` if there is no dot or
/// either side is empty.
#[must_use]
pub fn split_labels(fqdn: &str) -> Option<(&str, &str)> {
    let fqdn = fqdn.strip_suffix('.').unwrap_or(fqdn);
    let (name, domain) = fqdn.split_once('.')?;
    if name.is_empty() || domain.is_empty() {
        return None;
    }
    Some((name, domain))
}

/// Split `fqdn` and resolve its domain part through the API.
///
/// # Errors
///
/// - [`AddHostError::InvalidFqdn`] if the name part cannot be determined
/// - [`AddHostError::UnknownDomain`] if Netmagis does not manage the domain
/// - [`AddHostError::Api`] if the domain list cannot be fetched
pub async fn split_fqdn<A>(api: &A, fqdn: &str) -> Result<FqdnParts, AddHostError>
where
    A: NetmagisApi + ?Sized,
{
    let (name, domain) =
        split_labels(fqdn).ok_or_else(|| AddHostError::InvalidFqdn(fqdn.to_string()))?;

    let known = api
        .find_domain(domain)
        .await?
        .ok_or_else(|| AddHostError::UnknownDomain(domain.to_string()))?;

    // Host lookups must use the server's spelling of the domain
    let domain = known.name.trim_end_matches('.').to_string();
    debug!(fqdn, host = name, domain = %domain, iddom = known.iddom, "FQDN resolved");

    Ok(FqdnParts {
        name: name.to_string(),
        domain,
        iddom: known.iddom,
    })
}

#[cfg(test)]
#[path = "fqdn_tests.rs"]
mod fqdn_tests;
