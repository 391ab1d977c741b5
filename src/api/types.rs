// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Netmagis API resource types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DEFAULT_IDHINFO, INHERIT};

/// Entry of the `GET /domains` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier
    pub iddom: i64,
    /// Domain name, e.g. `example.com`
    pub name: String,
}

/// Entry of the `GET /views` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// View identifier
    pub idview: i64,
    /// View name, e.g. `internal`
    pub name: String,
}

/// Entry of the `GET /hosts?name=&domain=&view=` list.
///
/// Only `idhost` is needed; other summary fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSummary {
    /// Host identifier
    pub idhost: i64,
}

/// Full host record as returned by `GET /hosts/{id}` and sent back by
/// `PUT /hosts/{id}`.
///
/// Fields this tool does not touch are kept in `extra` so the update sends
/// the record back exactly as received, apart from the address list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// Host identifier
    pub idhost: i64,
    /// Address list (IPv4 and IPv6, as strings)
    #[serde(default)]
    pub addr: Vec<String>,
    /// Remaining attributes (name, iddom, idview, mac, ttl, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `POST /hosts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHost {
    /// Host name (first label of the FQDN)
    pub name: String,
    /// Domain identifier
    pub iddom: i64,
    /// View identifier
    pub idview: i64,
    /// MAC address, empty for none
    pub mac: String,
    /// HINFO identifier
    pub idhinfo: i64,
    /// Free-form comment
    pub comment: String,
    /// Responsible person name
    pub respname: String,
    /// Responsible person mail
    pub respmail: String,
    /// DHCP profile identifier, -1 to inherit
    pub iddhcpprof: i64,
    /// Record TTL, -1 to inherit
    pub ttl: i64,
    /// Address list
    pub addr: Vec<String>,
}

impl NewHost {
    /// Host with a single address and every other attribute left to its
    /// default: empty MAC, comment and responsible fields, placeholder HINFO,
    /// DHCP profile and TTL inherited.
    #[must_use]
    pub fn with_address(name: &str, iddom: i64, idview: i64, ip: &str) -> Self {
        Self {
            name: name.to_string(),
            iddom,
            idview,
            mac: String::new(),
            idhinfo: DEFAULT_IDHINFO,
            comment: String::new(),
            respname: String::new(),
            respmail: String::new(),
            iddhcpprof: INHERIT,
            ttl: INHERIT,
            addr: vec![ip.to_string()],
        }
    }
}
