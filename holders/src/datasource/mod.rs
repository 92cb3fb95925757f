pub mod cosmostation;
pub mod fallback;
pub mod mintscan;
pub mod supply;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

pub use cosmostation::CosmostationSource;
pub use fallback::fallback_holders;
pub use mintscan::MintscanSource;
pub use supply::SupplySource;

use crate::config::SourcesConfig;
use crate::error::SourceError;
use crate::model::RawHolder;

/// Holders reported by one source, plus the supply it reported if any (AKT)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBatch {
    pub holders: Vec<RawHolder>,
    pub total_supply_akt: Option<f64>,
}

impl SourceBatch {
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HolderSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_holders(&self, client: &Client) -> Result<SourceBatch, SourceError>;
}

/// The live chain in the order it is attempted
pub fn default_sources(config: &SourcesConfig) -> Vec<Box<dyn HolderSource>> {
    vec![
        Box::new(MintscanSource::new(config.mintscan_url.clone())),
        Box::new(SupplySource::new(config.supply_url.clone())),
        Box::new(CosmostationSource::new(config.cosmostation_url.clone())),
    ]
}

/// GET `url` and return the body of a 2xx response
pub(crate) async fn fetch_body(
    client: &Client,
    source_name: &str,
    url: &str,
) -> Result<String, SourceError> {
    debug!("{}::fetch::{}", source_name, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::transport(source_name, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::status(source_name, status.as_u16()));
    }

    response.text().await.map_err(|e| SourceError::transport(source_name, e))
}

pub(crate) fn parse_json(source_name: &str, body: &str) -> Result<Value, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::malformed(source_name, e))
}

/// Amounts arrive as JSON numbers or decimal strings. Negative and
/// non-finite values are rejected.
pub(crate) fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if amount.is_finite() && amount >= 0.0 { Some(amount) } else { None }
}

/// Read `{address, <one of amount_keys>}` entries. Entries with a missing
/// address or unreadable amount are skipped.
pub(crate) fn parse_holder_entries(
    source_name: &str,
    entries: &[Value],
    amount_keys: &[&str],
) -> Vec<RawHolder> {
    entries
        .iter()
        .filter_map(|entry| {
            let address = entry.get("address").and_then(Value::as_str).filter(|a| !a.is_empty());
            let amount = amount_keys.iter().find_map(|key| entry.get(*key).and_then(parse_amount));

            match (address, amount) {
                (Some(address), Some(amount)) => Some(RawHolder::new(address, amount)),
                _ => {
                    debug!("{}::skip_entry::{}", source_name, entry);
                    None
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_amount_accepts_numbers_and_strings() {
        assert_eq!(parse_amount(&json!(12)), Some(12.0));
        assert_eq!(parse_amount(&json!("7770780000000")), Some(7_770_780_000_000.0));
        assert_eq!(parse_amount(&json!(" 1.5 ")), Some(1.5));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(&json!(-1)), None);
        assert_eq!(parse_amount(&json!("abc")), None);
        assert_eq!(parse_amount(&json!(null)), None);
        assert_eq!(parse_amount(&json!({"amount": 1})), None);
    }

    #[test]
    fn test_parse_holder_entries_skips_incomplete() {
        let entries = vec![
            json!({"address": "akash1a", "amount": "10"}),
            json!({"address": "akash1b"}),
            json!({"amount": 3}),
            json!({"address": "akash1c", "balance": 4}),
        ];
        let parsed = parse_holder_entries("test", &entries, &["amount", "balance"]);
        assert_eq!(parsed, vec![RawHolder::new("akash1a", 10.0), RawHolder::new("akash1c", 4.0)]);
    }
}
