#![allow(dead_code)]

use std::time::Duration;

use akash_holders::config::SourcesConfig;
use serde_json::Value;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

pub const MINTSCAN_PATH: &str = "/v1/akash/account/top-holders";
pub const SUPPLY_PATH: &str = "/cosmos/bank/v1beta1/supply/uakt";
pub const COSMOSTATION_PATH: &str = "/v1/account/holders";

pub fn sources_for(server: &MockServer) -> SourcesConfig {
    SourcesConfig {
        request_timeout_ms: 1_000,
        ..SourcesConfig::with_base_url(&server.uri())
    }
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    mount(server, route, ResponseTemplate::new(200).set_body_json(body)).await;
}

pub async fn mount_raw(server: &MockServer, route: &str, status: u16, body: &str) {
    mount(server, route, ResponseTemplate::new(status).set_body_string(body)).await;
}

pub async fn mount_delayed(server: &MockServer, route: &str, body: Value, delay: Duration) {
    mount(server, route, ResponseTemplate::new(200).set_body_json(body).set_delay(delay)).await;
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
