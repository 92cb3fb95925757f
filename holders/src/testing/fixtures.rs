use serde_json::Value;
use serde_json::json;

use crate::model::RawHolder;

/// Valid-looking bech32 account, long enough to be truncated for display
pub fn sample_address(index: usize) -> String {
    format!("akash1{:0>32}{:04}", index, index)
}

/// `count` holders with strictly decreasing uakt balances
pub fn sample_raw_holders(count: usize) -> Vec<RawHolder> {
    (0..count)
        .map(|i| RawHolder::new(sample_address(i), ((count - i) as f64) * 1_000_000_000_000.0))
        .collect()
}

/// Balances go out in uakt, `total_supply` in AKT
pub fn mintscan_body(holders: &[RawHolder], total_supply_akt: Option<f64>) -> Value {
    let entries: Vec<Value> = holders
        .iter()
        .map(|h| json!({ "address": h.address, "amount": format!("{:.0}", h.balance_uakt) }))
        .collect();

    match total_supply_akt {
        Some(supply) => json!({ "holders": entries, "total_supply": format!("{:.0}", supply) }),
        None => json!({ "holders": entries }),
    }
}

pub fn cosmostation_body(holders: &[RawHolder]) -> Value {
    let entries: Vec<Value> = holders
        .iter()
        .map(|h| json!({ "address": h.address, "balance": h.balance_uakt }))
        .collect();
    json!({ "data": entries })
}

pub fn supply_body(amount_uakt: &str) -> Value {
    json!({ "amount": { "denom": "uakt", "amount": amount_uakt } })
}
