use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::HolderSource;
use super::SourceBatch;
use super::fetch_body;
use super::parse_amount;
use super::parse_holder_entries;
use super::parse_json;
use crate::constants::MINTSCAN_SOURCE;
use crate::error::SourceError;
use crate::utils::uakt_to_akt;

/// Mintscan top holders: `{ holders: [{address, amount|balance}], total_supply? }`
#[derive(Debug, Clone)]
pub struct MintscanSource {
    pub url: String,
}

impl MintscanSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

pub fn parse_mintscan(body: &str) -> Result<SourceBatch, SourceError> {
    let value = parse_json(MINTSCAN_SOURCE, body)?;

    let entries = value
        .get("holders")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::malformed(MINTSCAN_SOURCE, "missing holders array"))?;

    let holders = parse_holder_entries(MINTSCAN_SOURCE, entries, &["amount", "balance"]);
    debug!("mintscan::parsed::{}_holders", holders.len());

    // Supply is already in AKT, unlike the balances
    let largest_akt = holders.iter().map(|h| uakt_to_akt(h.balance_uakt)).fold(0.0, f64::max);
    let total_supply_akt = value
        .get("total_supply")
        .and_then(parse_amount)
        .filter(|supply| *supply > 0.0)
        .filter(|supply| {
            let plausible = largest_akt <= *supply;
            if !plausible {
                debug!("mintscan::total_supply::{}::below_largest_holder::ignored", supply);
            }
            plausible
        });

    Ok(SourceBatch { holders, total_supply_akt })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HolderSource for MintscanSource {
    fn name(&self) -> &str {
        MINTSCAN_SOURCE
    }

    async fn fetch_holders(&self, client: &Client) -> Result<SourceBatch, SourceError> {
        let body = fetch_body(client, MINTSCAN_SOURCE, &self.url).await?;
        parse_mintscan(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawHolder;
    use crate::model::rank_holders;

    #[test]
    fn test_parse_mintscan_with_supply() {
        let body = r#"{
            "holders": [
                {"address": "akash1one", "amount": "2000000"},
                {"address": "akash1two", "balance": 1000000}
            ],
            "total_supply": "388539008"
        }"#;

        let batch = parse_mintscan(body).unwrap();
        assert_eq!(batch.holders, vec![RawHolder::new("akash1one", 2_000_000.0), RawHolder::new("akash1two", 1_000_000.0)]);
        assert_eq!(batch.total_supply_akt, Some(388_539_008.0));
    }

    #[test]
    fn test_mintscan_supply_in_akt_gives_share_of_supply() {
        let body = r#"{"holders": [{"address": "akash1x", "amount": "7770780000000"}], "total_supply": 388539008}"#;

        let batch = parse_mintscan(body).unwrap();
        let holders = rank_holders(batch.holders, batch.total_supply_akt.unwrap(), 15);

        assert_eq!(holders[0].balance, 7_770_780.0);
        assert_eq!(holders[0].percentage, 2.0);
    }

    #[test]
    fn test_mintscan_ignores_supply_smaller_than_a_holder() {
        // 1000 AKT of supply would put the holder above 100%
        let body = r#"{"holders": [{"address": "akash1x", "amount": "7770780000000"}], "total_supply": 1000}"#;

        let batch = parse_mintscan(body).unwrap();
        assert_eq!(batch.holders.len(), 1);
        assert_eq!(batch.total_supply_akt, None);
    }

    #[test]
    fn test_parse_mintscan_rejects_wrong_shape() {
        assert!(matches!(parse_mintscan(r#"{"data": []}"#), Err(SourceError::Malformed { .. })));
        assert!(matches!(parse_mintscan("<html>"), Err(SourceError::Malformed { .. })));
        assert!(matches!(parse_mintscan(r#"{"holders": {}}"#), Err(SourceError::Malformed { .. })));
    }

    #[test]
    fn test_parse_mintscan_without_supply() {
        let batch = parse_mintscan(r#"{"holders": [], "total_supply": null}"#).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.total_supply_akt, None);
    }
}
