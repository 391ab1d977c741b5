// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Netmagis client configuration.
//!
//! The configuration lives in an INI-style file, by default
//! `~/.config/netmagisrc`:
//!
//! ```text
//! [general]
//!     url = https://app.example.com/netmagis
//!     key = a-secret-key-delivered-by-netmagis
//! ```
//!
//! Only the `[general]` section is read. Lines starting with `#` or `;` are
//! comments. Other sections are accepted and ignored so the same file can be
//! shared with other Netmagis tools.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::constants::{CONFIG_FILE_NAME, CONFIG_KEY_KEY, CONFIG_KEY_URL, CONFIG_SECTION};
use crate::dns_errors::ConfigError;

/// Settings needed to reach the Netmagis API.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API, without trailing slash
    pub url: Url,
    /// API key sent as session cookie
    pub key: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url.as_str())
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// valid `[general]` section.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Reading configuration file");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Load the configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if no default location exists or if loading fails.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = default_config_path().ok_or(ConfigError::NoConfigDir)?;
                Self::load(&path)
            }
        }
    }

    /// Parse configuration text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed lines, a missing `[general]` section,
    /// a missing `url` or `key`, or an unusable URL.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let sections = parse_ini(text)?;
        let general = sections
            .get(CONFIG_SECTION)
            .ok_or_else(|| ConfigError::MissingSection(CONFIG_SECTION.to_string()))?;

        let raw_url = required(general, CONFIG_KEY_URL)?;
        let key = required(general, CONFIG_KEY_KEY)?;

        Ok(Self {
            url: parse_base_url(raw_url)?,
            key: key.to_string(),
        })
    }
}

/// Default configuration file location.
///
/// `$XDG_CONFIG_HOME/netmagisrc` when `XDG_CONFIG_HOME` is set, otherwise
/// `$HOME/.config/netmagisrc`. Returns `None` when neither is set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn config_path_from(
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    let dir = xdg_config_home
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|home| home.join(".config")))?;
    Some(dir.join(CONFIG_FILE_NAME))
}

fn required<'a>(
    section: &'a HashMap<String, String>,
    key: &str,
) -> Result<&'a str, ConfigError> {
    section
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingKey {
            section: CONFIG_SECTION.to_string(),
            key: key.to_string(),
        })
}

/// Parse the base URL and drop any trailing slash so paths can be appended.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}

/// Split INI text into `section -> key -> value`.
///
/// Keys appearing before any section header are rejected. A repeated key
/// keeps its last value.
fn parse_ini(text: &str) -> Result<HashMap<String, HashMap<String, String>>, ConfigError> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let malformed = || ConfigError::MalformedLine {
            line: index + 1,
            content: raw_line.to_string(),
        };

        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or_else(malformed)?.trim();
            if name.is_empty() {
                return Err(malformed());
            }
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        // Whichever delimiter comes first separates key from value
        let at = line.find(['=', ':']).ok_or_else(malformed)?;
        let (key, value) = (&line[..at], &line[at + 1..]);
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }
        let section = current.as_ref().ok_or_else(malformed)?;

        sections
            .entry(section.clone())
            .or_default()
            .insert(key.to_lowercase(), value.trim().to_string());
    }

    Ok(sections)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
