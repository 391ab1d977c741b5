// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for dnsaddhost.
//!
//! This module provides specialized error types for:
//! - Loading the configuration file
//! - Netmagis HTTP API calls (transport, status, decoding)
//! - Resolving the FQDN, domain and view given on the command line
//! - Data integrity problems reported by the server
//!
//! Every error is terminal: the binary prints it and exits with a
//! non-zero status. Nothing is retried.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::http_errors::describe_http_status;

/// Errors that can occur while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No path was given and the user's config directory could not be located
    #[error("Cannot locate configuration directory (neither XDG_CONFIG_HOME nor HOME is set)")]
    NoConfigDir,

    /// The configuration file could not be read
    #[error("Cannot read configuration file {}: {source}", path.display())]
    Unreadable {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line is neither a section header, a comment nor a `key = value` pair
    #[error("Malformed line {line} in configuration: '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// The `[general]` section is absent
    #[error("Missing section [{0}] in configuration")]
    MissingSection(String),

    /// A required key is absent from the `[general]` section
    #[error("Missing key '{key}' in section [{section}]")]
    MissingKey {
        /// Section searched
        section: String,
        /// Key that was expected
        key: String,
    },

    /// The configured URL is not an absolute http(s) URL
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// URL as written in the file
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors that can occur while talking to the Netmagis HTTP API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read
    #[error("HTTP request {method} {path} failed: {source}")]
    Transport {
        /// HTTP method
        method: &'static str,
        /// API path (without base URL)
        path: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{method} {path}: {} ({status}){}", describe_http_status(*status), format_server_message(message))]
    Status {
        /// HTTP method
        method: &'static str,
        /// API path (without base URL)
        path: String,
        /// HTTP status returned by the server
        status: StatusCode,
        /// Response body, if any
        message: String,
    },

    /// The response body is not the JSON we expected
    #[error("Cannot decode response to {method} {path}: {source}")]
    Decode {
        /// HTTP method
        method: &'static str,
        /// API path (without base URL)
        path: String,
        /// JSON decoding error
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built from the base URL and path
    #[error("Cannot build request URL for {path}: {source}")]
    Url {
        /// API path (without base URL)
        path: String,
        /// URL parsing error
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// HTTP status of the failure, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn format_server_message(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

/// Errors returned by the add-host routine.
#[derive(Error, Debug)]
pub enum AddHostError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The FQDN has no usable name or domain part
    #[error("Invalid FQDN {0}")]
    InvalidFqdn(String),

    /// The domain part of the FQDN is not managed by Netmagis
    #[error("Unknown domain {0}")]
    UnknownDomain(String),

    /// The view name is not known to Netmagis
    #[error("Unknown view {0}")]
    UnknownView(String),

    /// A remote call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// More than one host matches `(name, domain, view)`; should never happen
    #[error("Server error: host '{name}.{domain}' exists more than once in view {view}")]
    DuplicateHost {
        /// Host name (first label)
        name: String,
        /// Domain part of the FQDN
        domain: String,
        /// View name
        view: String,
    },
}
