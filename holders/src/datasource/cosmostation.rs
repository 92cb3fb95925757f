use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::HolderSource;
use super::SourceBatch;
use super::fetch_body;
use super::parse_holder_entries;
use super::parse_json;
use crate::constants::COSMOSTATION_SOURCE;
use crate::error::SourceError;

/// Cosmostation holders: `{ data: [{address, balance|amount}] }`, no supply
#[derive(Debug, Clone)]
pub struct CosmostationSource {
    pub url: String,
}

impl CosmostationSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

pub fn parse_cosmostation(body: &str) -> Result<SourceBatch, SourceError> {
    let value = parse_json(COSMOSTATION_SOURCE, body)?;

    let entries = value
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::malformed(COSMOSTATION_SOURCE, "missing data array"))?;

    let holders = parse_holder_entries(COSMOSTATION_SOURCE, entries, &["balance", "amount"]);
    debug!("cosmostation::parsed::{}_holders", holders.len());

    Ok(SourceBatch {
        holders,
        total_supply_akt: None,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HolderSource for CosmostationSource {
    fn name(&self) -> &str {
        COSMOSTATION_SOURCE
    }

    async fn fetch_holders(&self, client: &Client) -> Result<SourceBatch, SourceError> {
        let body = fetch_body(client, COSMOSTATION_SOURCE, &self.url).await?;
        parse_cosmostation(&body)
    }
}
