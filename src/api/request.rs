// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Low-level HTTP calls to the Netmagis API.
//!
//! Every call goes through [`netmagis_request`], which authenticates with the
//! session cookie, logs the exchange and turns non-success statuses into
//! [`ApiError::Status`]. There is no retry: the first failure is returned.

use reqwest::header::COOKIE;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};
use url::Url;

use crate::constants::SESSION_COOKIE;
use crate::dns_errors::ApiError;

/// Build the full request URL from the base URL, an API path and query pairs.
///
/// `path` must start with `/`. The base URL may carry a path prefix
/// (e.g. `https://nm.example.com/netmagis`) which is preserved.
///
/// # Errors
///
/// Returns an error if the concatenated string is not a valid URL.
pub(crate) fn build_request_url(
    base: &Url,
    path: &str,
    query: &[(&str, &str)],
) -> Result<Url, ApiError> {
    let joined = format!("{}{path}", base.as_str().trim_end_matches('/'));
    let mut url = Url::parse(&joined).map_err(|source| ApiError::Url {
        path: path.to_string(),
        source,
    })?;

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

/// Execute a request to the Netmagis API and return the response body.
///
/// # Arguments
/// * `client` - HTTP client
/// * `base` - API base URL
/// * `key` - API key, sent as the `session` cookie
/// * `method` - HTTP method (GET, POST, PUT)
/// * `path` - API path, e.g. `/hosts/42`
/// * `query` - Query string pairs
/// * `body` - Optional JSON body for POST and PUT requests
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the body cannot be read,
/// or the server answers with a non-success status.
pub(crate) async fn netmagis_request<T: Serialize + std::fmt::Debug>(
    client: &HttpClient,
    base: &Url,
    key: &str,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    body: Option<&T>,
) -> Result<String, ApiError> {
    let method_name = method_name(&method);
    let url = build_request_url(base, path, query)?;

    info!(
        method = %method,
        url = %url,
        body = ?body,
        "HTTP API request to Netmagis"
    );

    let mut request = client
        .request(method, url.clone())
        .header(COOKIE, format!("{SESSION_COOKIE}={key}"));
    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let transport = |source| ApiError::Transport {
        method: method_name,
        path: path.to_string(),
        source,
    };

    let response = request.send().await.map_err(transport)?;
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        error!(
            method = method_name,
            url = %url,
            status = %status,
            error = %error_text,
            "HTTP API request failed"
        );
        return Err(ApiError::Status {
            method: method_name,
            path: path.to_string(),
            status,
            message: error_text,
        });
    }

    let text = response.text().await.map_err(transport)?;

    info!(
        method = method_name,
        url = %url,
        status = %status,
        response_len = text.len(),
        "HTTP API request successful"
    );

    Ok(text)
}

/// Execute a request and decode the JSON response body.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not valid JSON for `R`.
pub(crate) async fn netmagis_json<T, R>(
    client: &HttpClient,
    base: &Url,
    key: &str,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    body: Option<&T>,
) -> Result<R, ApiError>
where
    T: Serialize + std::fmt::Debug,
    R: DeserializeOwned,
{
    let method_name = method_name(&method);
    let text = netmagis_request(client, base, key, method, path, query, body).await?;
    debug!(path = %path, body = %text, "Decoding Netmagis response");

    serde_json::from_str(&text).map_err(|source| ApiError::Decode {
        method: method_name,
        path: path.to_string(),
        source,
    })
}

/// Static name of the methods this client issues, for error reporting.
fn method_name(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        _ => "HTTP",
    }
}
