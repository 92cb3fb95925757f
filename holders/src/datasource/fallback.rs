use crate::model::HolderRecord;

/// Sample distribution shown when no live source answers
pub fn fallback_holders() -> Vec<HolderRecord> {
    vec![
        HolderRecord::new("akash1abc...xyz1", 15_000_000.0, 15.5, 1),
        HolderRecord::new("akash1def...xyz2", 12_000_000.0, 12.3, 2),
        HolderRecord::new("akash1ghi...xyz3", 10_000_000.0, 10.2, 3),
        HolderRecord::new("akash1jkl...xyz4", 8_500_000.0, 8.7, 4),
        HolderRecord::new("akash1mno...xyz5", 7_000_000.0, 7.2, 5),
        HolderRecord::new("akash1pqr...xyz6", 6_000_000.0, 6.1, 6),
        HolderRecord::new("akash1stu...xyz7", 5_200_000.0, 5.3, 7),
        HolderRecord::new("akash1vwx...xyz8", 4_500_000.0, 4.6, 8),
        HolderRecord::new("akash1yza...xyz9", 3_800_000.0, 3.9, 9),
        HolderRecord::new("akash1bcd...xy10", 3_200_000.0, 3.3, 10),
        HolderRecord::new("akash1efg...xy11", 2_800_000.0, 2.9, 11),
        HolderRecord::new("akash1hij...xy12", 2_400_000.0, 2.5, 12),
        HolderRecord::new("akash1klm...xy13", 2_000_000.0, 2.0, 13),
        HolderRecord::new("akash1nop...xy14", 1_800_000.0, 1.8, 14),
        HolderRecord::new("akash1qrs...xy15", 1_500_000.0, 1.5, 15),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::is_well_ranked;

    #[test]
    fn test_fallback_is_well_ranked() {
        let holders = fallback_holders();
        assert_eq!(holders.len(), 15);
        assert!(is_well_ranked(&holders));
    }
}
