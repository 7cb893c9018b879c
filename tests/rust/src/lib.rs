//! Shared fixtures for integration tests
//!
//! Helpers to stand up a mock registry (wiremock) and point a
//! `RegistryClient` at it.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use commerce_ui_core::RegistryClient;

/// Client pointed at a mock registry server
pub fn client_for(server: &MockServer) -> RegistryClient {
    RegistryClient::with_base_urls(
        format!("{}/registry.json", server.uri()),
        format!("{}/r", server.uri()),
    )
}

/// Client pointed at an address nothing listens on
pub fn unreachable_client() -> RegistryClient {
    RegistryClient::with_base_urls(
        "http://127.0.0.1:9/registry.json",
        "http://127.0.0.1:9/r",
    )
}

/// Manifest entry for a component or block
pub fn manifest_item(name: &str, kind: &str, description: &str) -> Value {
    json!({"name": name, "type": kind, "description": description})
}

/// Manifest entry for an example with its dependency URLs
pub fn manifest_example(name: &str, dependencies: &[&str]) -> Value {
    json!({
        "name": name,
        "type": "registry:example",
        "description": format!("{} demo", name),
        "registryDependencies": dependencies,
    })
}

/// Mount the manifest document at `/registry.json`
pub async fn mount_manifest(server: &MockServer, entries: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/registry.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "registry": entries })))
        .mount(server)
        .await;
}

/// Mount a detail document at `/r/<resource>`
pub async fn mount_detail(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/r/{}", resource)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Component detail document body with one source file
pub fn component_detail_body(name: &str, content: &str) -> Value {
    json!({
        "name": name,
        "type": "registry:component",
        "files": [{"content": content}],
    })
}

/// Block detail document body with one source file
pub fn block_detail_body(name: &str, content: &str) -> Value {
    json!({
        "name": name,
        "type": "registry:block",
        "registryDependencies": [],
        "files": [{"content": content}],
    })
}

/// Example detail document body with one source file
pub fn example_detail_body(name: &str, content: &str) -> Value {
    json!({
        "name": name,
        "type": "registry:example",
        "description": format!("{} demo", name),
        "files": [{"content": content}],
    })
}

/// Registry dependency URL naming a component
pub fn dependency_url(name: &str) -> String {
    format!("https://ui.stackzero.co/r/{}", name)
}
