#![cfg(test)]

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use hyper::{Body, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::transport::{HttpTransport, TransportError};
use crate::{Client, ConfigBuilder, ServiceEndpointsBuilder};

pub const API_KEY: &str = "api-key-123";

/// A client pointed at the mock server, authenticating with [API_KEY].
pub fn client_for(server: &mockito::ServerGuard) -> Client {
    let mut endpoints = ServiceEndpointsBuilder::new();
    endpoints.base_url(&server.url());

    Client::build(
        ConfigBuilder::new()
            .api_key(API_KEY)
            .service_endpoints(&endpoints)
            .transport(hyper::Client::new())
            .build(),
    )
    .expect("client should build")
}

/// A client whose transport fails every request and counts how often it was asked.
pub fn offline_client() -> (Client, UnreachableTransport) {
    let transport = UnreachableTransport::default();
    let client = Client::build(
        ConfigBuilder::new()
            .api_key(API_KEY)
            .transport(transport.clone())
            .build(),
    )
    .expect("client should build");
    (client, transport)
}

#[derive(Clone, Default)]
pub struct UnreachableTransport {
    calls: Arc<AtomicUsize>,
}

impl UnreachableTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpTransport for UnreachableTransport {
    fn send(
        &self,
        _request: Request<Body>,
    ) -> BoxFuture<'static, Result<Response<Body>, TransportError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async { Err(TransportError::from("connection refused")) })
    }
}

/// Encodes `value` and decodes the result, asserting that nothing changed on the way.
pub fn assert_round_trips<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let encoded = serde_json::to_string(value).expect("value should encode");
    let decoded: T = serde_json::from_str(&encoded).expect("encoded value should decode");
    assert_eq!(value, &decoded, "round trip changed the value encoded as {}", encoded);
}

pub fn not_found_body() -> &'static str {
    r#"{"code": "not_found", "message": "Unknown resource"}"#
}

pub fn basic_member(id: &str, email: &str) -> serde_json::Value {
    json!({
        "_links": {"self": {"href": format!("/api/v2/members/{}", id), "type": "application/json"}},
        "_id": id,
        "role": "reader",
        "email": email,
        "_pendingInvite": false,
        "_verified": true,
        "customRoles": [],
        "mfa": "disabled",
        "_lastSeen": 0,
        "creationDate": 1628001602644i64
    })
}

pub fn basic_flag(key: &str) -> serde_json::Value {
    json!({
        "name": key,
        "kind": "boolean",
        "key": key,
        "_version": 1,
        "creationDate": 1700000000000i64,
        "variations": [{"value": true}, {"value": false}],
        "temporary": true,
        "tags": [],
        "_links": {"self": {"href": format!("/api/v2/flags/default/{}", key), "type": "application/json"}},
        "customProperties": {},
        "archived": false,
        "environments": {}
    })
}

pub fn basic_ai_config(key: &str) -> serde_json::Value {
    json!({
        "key": key,
        "name": key,
        "description": "",
        "tags": [],
        "version": 1,
        "variations": [],
        "createdAt": 1700000000000i64,
        "updatedAt": 1700000000000i64
    })
}

pub fn basic_ai_config_variation(key: &str) -> serde_json::Value {
    json!({
        "_id": format!("{}-id", key),
        "key": key,
        "name": key,
        "messages": [{"content": "You are a helpful assistant.", "role": "system"}],
        "model": {},
        "version": 1,
        "createdAt": 1700000000000i64
    })
}

pub fn basic_repository(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "type": "github",
        "defaultBranch": "main",
        "enabled": true,
        "version": 1,
        "_links": {}
    })
}
