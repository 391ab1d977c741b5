// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for dnsaddhost.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Configuration File Constants
// ============================================================================

/// File name of the configuration file inside the user's config directory
pub const CONFIG_FILE_NAME: &str = "netmagisrc";

/// Section of the configuration file holding the API settings
pub const CONFIG_SECTION: &str = "general";

/// Key holding the API base URL
pub const CONFIG_KEY_URL: &str = "url";

/// Key holding the API session key
pub const CONFIG_KEY_KEY: &str = "key";

// ============================================================================
// Netmagis API Constants
// ============================================================================

/// Cookie carrying the API key on every request
pub const SESSION_COOKIE: &str = "session";

/// Path of the host collection
pub const HOSTS_PATH: &str = "/hosts";

/// Path of the domain collection
pub const DOMAINS_PATH: &str = "/domains";

/// Path of the view collection
pub const VIEWS_PATH: &str = "/views";

// ============================================================================
// Host Record Defaults
// ============================================================================

/// Sentinel telling the server to inherit the value (DHCP profile, TTL)
pub const INHERIT: i64 = -1;

/// HINFO id used for new hosts.
///
/// The API does not expose a default HINFO yet, so 0 is sent as a placeholder.
pub const DEFAULT_IDHINFO: i64 = 0;

// ============================================================================
// Logging Constants
// ============================================================================

/// Default log filter when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";
