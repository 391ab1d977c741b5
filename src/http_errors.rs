// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP status code descriptions for Netmagis API failures.
//!
//! The Netmagis API reports failures with plain HTTP status codes and a short
//! body. This module turns the status code into a human explanation so the
//! message printed on exit says what went wrong, not just a number.
//!
//! # Usage
//!
//! ```rust
//! use dnsaddhost::http_errors::describe_http_status;
//! use reqwest::StatusCode;
//!
//! assert_eq!(describe_http_status(StatusCode::NOT_FOUND), "resource not found");
//! assert_eq!(describe_http_status(StatusCode::BAD_GATEWAY), "Netmagis server unavailable");
//! ```

use reqwest::StatusCode;

/// Describe an HTTP status code returned by the Netmagis API.
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Description |
/// |-----------|-------------|
/// | 400 | invalid request |
/// | 401 | authentication failed (check API key) |
/// | 403 | permission denied |
/// | 404 | resource not found |
/// | 409 | conflicting data |
/// | 500 | Netmagis internal error |
/// | 502, 503, 504 | Netmagis server unavailable |
/// | Other 4xx | request rejected |
/// | Other 5xx | Netmagis server error |
/// | Other | unexpected HTTP status |
#[must_use]
pub fn describe_http_status(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "invalid request",
        401 => "authentication failed (check API key)",
        403 => "permission denied",
        404 => "resource not found",
        409 => "conflicting data",
        500 => "Netmagis internal error",
        502..=504 => "Netmagis server unavailable",
        400..=499 => "request rejected",
        500..=599 => "Netmagis server error",
        _ => "unexpected HTTP status",
    }
}
