use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::utils::percentage_of_supply;
use crate::utils::truncate_address;
use crate::utils::uakt_to_akt;

/// One ranked account in the bubble map. `balance` is in AKT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderRecord {
    pub address: String,
    pub balance: f64,
    pub percentage: f64,
    pub rank: u32,
}

impl HolderRecord {
    pub fn new(
        address: impl Into<String>,
        balance: f64,
        percentage: f64,
        rank: u32,
    ) -> Self {
        Self {
            address: address.into(),
            balance,
            percentage,
            rank,
        }
    }
}

/// Un-ranked holder as reported by a live source, balance in uakt
#[derive(Debug, Clone, PartialEq)]
pub struct RawHolder {
    pub address: String,
    pub balance_uakt: f64,
}

impl RawHolder {
    pub fn new(address: impl Into<String>, balance_uakt: f64) -> Self {
        Self {
            address: address.into(),
            balance_uakt,
        }
    }
}

/// Sort by balance descending, keep the top `limit` and assign ranks 1..=N.
/// Ties keep the order the source reported them in.
pub fn rank_holders(
    mut raw: Vec<RawHolder>,
    total_supply_akt: f64,
    limit: usize,
) -> Vec<HolderRecord> {
    raw.sort_by(|a, b| b.balance_uakt.partial_cmp(&a.balance_uakt).unwrap_or(Ordering::Equal));
    raw.truncate(limit);

    raw.into_iter()
        .enumerate()
        .map(|(i, holder)| {
            let balance = uakt_to_akt(holder.balance_uakt);
            HolderRecord {
                address: truncate_address(&holder.address),
                balance,
                percentage: percentage_of_supply(balance, total_supply_akt),
                rank: (i + 1) as u32,
            }
        })
        .collect()
}

/// Ranks form `1..=N` and balances never increase along the list
pub fn is_well_ranked(holders: &[HolderRecord]) -> bool {
    holders.iter().enumerate().all(|(i, h)| h.rank as usize == i + 1)
        && holders.windows(2).all(|w| w[0].balance >= w[1].balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_holders_orders_and_ranks() {
        let raw = vec![
            RawHolder::new("akash1small", 1_000_000.0),
            RawHolder::new("akash1large", 9_000_000.0),
            RawHolder::new("akash1mid", 5_000_000.0),
        ];

        let ranked = rank_holders(raw, 100.0, 15);
        let addresses: Vec<&str> = ranked.iter().map(|h| h.address.as_str()).collect();
        assert_eq!(addresses, vec!["akash1large", "akash1mid", "akash1small"]);
        assert_eq!(ranked.iter().map(|h| h.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ranked[0].balance, 9.0);
        assert_eq!(ranked[0].percentage, 9.0);
        assert!(is_well_ranked(&ranked));
    }

    #[test]
    fn test_rank_holders_respects_limit() {
        let raw = (0..20).map(|i| RawHolder::new(format!("akash1h{}", i), (i * 1_000_000) as f64)).collect();
        let ranked = rank_holders(raw, 1_000.0, 15);
        assert_eq!(ranked.len(), 15);
        assert_eq!(ranked[0].address, "akash1h19");
        assert_eq!(ranked[14].rank, 15);
    }

    #[test]
    fn test_rank_holders_truncates_addresses() {
        let raw = vec![RawHolder::new("akash1qqzwc5d7hynl67nsmn9jukvwqp3vzdl6j2t7lk", 1.0)];
        let ranked = rank_holders(raw, 1.0, 15);
        assert_eq!(ranked[0].address, "akash1qqzwc...t7lk");
    }

    #[test]
    fn test_is_well_ranked_rejects_gaps() {
        let holders = vec![HolderRecord::new("a", 2.0, 0.0, 1), HolderRecord::new("b", 1.0, 0.0, 3)];
        assert!(!is_well_ranked(&holders));
    }
}
