// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory Netmagis used by unit tests.
//!
//! Hosts are stored with their `(name, domain, view)` key so lookups behave
//! like the server. Every call is recorded so tests can assert which
//! requests were (or were not) issued.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Map, Value};

use super::{Domain, Host, HostSummary, NetmagisApi, NewHost, View};
use crate::dns_errors::ApiError;

/// A request the mock received, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Domains,
    Views,
    FindHosts {
        name: String,
        domain: String,
        view: String,
    },
    GetHost(i64),
    CreateHost(NewHost),
    UpdateHost(i64, Host),
}

#[derive(Debug, Clone)]
struct StoredHost {
    domain: String,
    view: String,
    host: Host,
}

#[derive(Debug, Default)]
struct State {
    hosts: Vec<StoredHost>,
    next_id: i64,
    calls: Vec<Call>,
}

#[derive(Debug, Default)]
pub struct MockNetmagis {
    domains: Vec<Domain>,
    views: Vec<View>,
    /// Status returned by every call to `find_hosts`, when set
    fail_lookup: Option<StatusCode>,
    state: Mutex<State>,
}

impl MockNetmagis {
    /// Netmagis with domain `example.com` (id 3) and views `internal` (1)
    /// and `external` (2).
    pub fn new() -> Self {
        Self {
            domains: vec![
                Domain {
                    iddom: 3,
                    name: "example.com".to_string(),
                },
                Domain {
                    iddom: 4,
                    name: "sub.example.com".to_string(),
                },
            ],
            views: vec![
                View {
                    idview: 1,
                    name: "internal".to_string(),
                },
                View {
                    idview: 2,
                    name: "external".to_string(),
                },
            ],
            fail_lookup: None,
            state: Mutex::new(State {
                next_id: 100,
                ..State::default()
            }),
        }
    }

    pub fn failing_lookup(mut self, status: StatusCode) -> Self {
        self.fail_lookup = Some(status);
        self
    }

    /// Store a host directly, bypassing the call log. Returns its id.
    pub fn insert_host(&self, name: &str, domain: &str, view: &str, addr: &[&str]) -> i64 {
        let mut state = self.state.lock().unwrap();
        let idhost = state.next_id;
        state.next_id += 1;

        let mut extra = Map::new();
        extra.insert("name".to_string(), json!(name));
        extra.insert("comment".to_string(), json!("seeded"));
        extra.insert("ttl".to_string(), json!(3600));

        state.hosts.push(StoredHost {
            domain: domain.to_string(),
            view: view.to_string(),
            host: Host {
                idhost,
                addr: addr.iter().map(|a| (*a).to_string()).collect(),
                extra,
            },
        });
        idhost
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of create or update calls received.
    pub fn mutations(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::CreateHost(_) | Call::UpdateHost(..)))
            .count()
    }

    pub fn hosts_named(&self, name: &str) -> Vec<Host> {
        self.state
            .lock()
            .unwrap()
            .hosts
            .iter()
            .filter(|h| h.host.extra.get("name") == Some(&Value::from(name)))
            .map(|h| h.host.clone())
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

fn not_found(method: &'static str, path: String) -> ApiError {
    ApiError::Status {
        method,
        path,
        status: StatusCode::NOT_FOUND,
        message: "no such host".to_string(),
    }
}

#[async_trait]
impl NetmagisApi for MockNetmagis {
    async fn domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.record(Call::Domains);
        Ok(self.domains.clone())
    }

    async fn views(&self) -> Result<Vec<View>, ApiError> {
        self.record(Call::Views);
        Ok(self.views.clone())
    }

    async fn find_hosts(
        &self,
        name: &str,
        domain: &str,
        view: &str,
    ) -> Result<Vec<HostSummary>, ApiError> {
        self.record(Call::FindHosts {
            name: name.to_string(),
            domain: domain.to_string(),
            view: view.to_string(),
        });
        if let Some(status) = self.fail_lookup {
            return Err(ApiError::Status {
                method: "GET",
                path: "/hosts".to_string(),
                status,
                message: String::new(),
            });
        }

        let state = self.state.lock().unwrap();
        Ok(state
            .hosts
            .iter()
            .filter(|h| {
                h.domain == domain
                    && h.view == view
                    && h.host.extra.get("name") == Some(&Value::from(name))
            })
            .map(|h| HostSummary {
                idhost: h.host.idhost,
            })
            .collect())
    }

    async fn get_host(&self, idhost: i64) -> Result<Host, ApiError> {
        self.record(Call::GetHost(idhost));
        let state = self.state.lock().unwrap();
        state
            .hosts
            .iter()
            .find(|h| h.host.idhost == idhost)
            .map(|h| h.host.clone())
            .ok_or_else(|| not_found("GET", super::host_path(idhost)))
    }

    async fn create_host(&self, host: &NewHost) -> Result<(), ApiError> {
        self.record(Call::CreateHost(host.clone()));

        let domain = self
            .domains
            .iter()
            .find(|d| d.iddom == host.iddom)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        let view = self
            .views
            .iter()
            .find(|v| v.idview == host.idview)
            .map(|v| v.name.clone())
            .unwrap_or_default();
        let addr: Vec<&str> = host.addr.iter().map(String::as_str).collect();
        self.insert_host(&host.name, &domain, &view, &addr);
        Ok(())
    }

    async fn update_host(&self, idhost: i64, host: &Host) -> Result<(), ApiError> {
        self.record(Call::UpdateHost(idhost, host.clone()));
        let mut state = self.state.lock().unwrap();
        let stored = state
            .hosts
            .iter_mut()
            .find(|h| h.host.idhost == idhost)
            .ok_or_else(|| not_found("PUT", super::host_path(idhost)))?;
        stored.host = host.clone();
        Ok(())
    }
}
