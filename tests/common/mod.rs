// Common test utilities for integration tests

#![allow(dead_code)]

use dnsaddhost::api::NetmagisClient;
use dnsaddhost::config::Config;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const API_KEY: &str = "integration-key";

/// Start a Netmagis mock serving domain `example.com` (iddom 3) and views
/// `internal` (1) and `external` (2).
pub async fn start_netmagis() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"iddom": 3, "name": "example.com"},
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/views"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"idview": 1, "name": "internal"},
            {"idview": 2, "name": "external"},
        ])))
        .mount(&server)
        .await;

    server
}

/// Answer the host lookup for `host1.example.com` in view `internal`.
pub async fn mount_lookup(server: &MockServer, matches: Value) {
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .and(query_param("name", "host1"))
        .and(query_param("domain", "example.com"))
        .and(query_param("view", "internal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(matches))
        .expect(1)
        .mount(server)
        .await;
}

/// Full host record as Netmagis returns it.
pub fn host_record(idhost: i64, addr: &[&str]) -> Value {
    json!({
        "idhost": idhost,
        "name": "host1",
        "iddom": 3,
        "idview": 1,
        "mac": "",
        "idhinfo": 0,
        "comment": "existing host",
        "respname": "",
        "respmail": "",
        "iddhcpprof": -1,
        "ttl": -1,
        "addr": addr,
    })
}

pub fn config_text(server: &MockServer) -> String {
    format!("[general]\n    url = {}\n    key = {API_KEY}\n", server.uri())
}

pub fn client_for(server: &MockServer) -> NetmagisClient {
    NetmagisClient::new(&Config::parse(&config_text(server)).expect("valid test config"))
}

/// Write a configuration file pointing at `server`.
pub fn write_config(server: &MockServer) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(config_text(server).as_bytes())
        .expect("write temp config");
    file
}

/// Requests with the given method received so far.
pub async fn requests_with_method(server: &MockServer, wanted: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == wanted)
        .collect()
}
