use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use super::HolderSource;
use super::SourceBatch;
use super::fetch_body;
use super::parse_amount;
use super::parse_json;
use crate::constants::ARCTURIAN_SOURCE;
use crate::error::SourceError;
use crate::utils::uakt_to_akt;

/// Bank supply from the Arcturian LCD: `{ amount: { denom, amount } }`.
/// It carries no holder list, so it always yields an empty batch and the
/// chain moves on. The supply is only logged.
#[derive(Debug, Clone)]
pub struct SupplySource {
    pub url: String,
}

impl SupplySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Supply in AKT when the body has the bank supply shape
pub fn parse_supply(body: &str) -> Result<f64, SourceError> {
    let value = parse_json(ARCTURIAN_SOURCE, body)?;

    let coin = value
        .get("amount")
        .ok_or_else(|| SourceError::malformed(ARCTURIAN_SOURCE, "missing amount"))?;

    match coin.get("denom").and_then(Value::as_str) {
        Some("uakt") => {},
        other => {
            return Err(SourceError::malformed(
                ARCTURIAN_SOURCE,
                format!("unexpected denom {:?}", other),
            ));
        },
    }

    coin.get("amount")
        .and_then(parse_amount)
        .map(uakt_to_akt)
        .ok_or_else(|| SourceError::malformed(ARCTURIAN_SOURCE, "unreadable amount"))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HolderSource for SupplySource {
    fn name(&self) -> &str {
        ARCTURIAN_SOURCE
    }

    async fn fetch_holders(&self, client: &Client) -> Result<SourceBatch, SourceError> {
        let body = fetch_body(client, ARCTURIAN_SOURCE, &self.url).await?;
        let supply = parse_supply(&body)?;
        info!("arcturian::supply::{:.0}_akt::no_holder_list", supply);

        Ok(SourceBatch::default())
    }
}
