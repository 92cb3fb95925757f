use akash_holders::layout::LayoutConfig;
use akash_holders::layout::bubble_position;
use akash_holders::layout::compute_layout;
use akash_holders::model::RawHolder;
use akash_holders::model::is_well_ranked;
use akash_holders::model::rank_holders;
use proptest::prelude::*;

/// Strategy for holder sets as a source would report them, in any order
fn arbitrary_raw_holders() -> impl Strategy<Value = Vec<RawHolder>> {
    prop::collection::vec(0u64..=1_000_000_000_000_000u64, 1..=30).prop_map(|balances| {
        balances
            .into_iter()
            .enumerate()
            .map(|(i, b)| RawHolder::new(format!("akash1holder{:03}", i), b as f64))
            .collect()
    })
}

proptest! {
    /// Property: ranks are 1..N in descending balance order, capped at 15
    #[test]
    fn prop_ranks_are_contiguous(raw in arbitrary_raw_holders()) {
        let expected_len = raw.len().min(15);
        let ranked = rank_holders(raw, 388_539_008.0, 15);

        prop_assert_eq!(ranked.len(), expected_len);
        prop_assert!(is_well_ranked(&ranked));
    }

    /// Property: diameters are bounded and never shrink as balance grows
    #[test]
    fn prop_sizes_bounded_and_monotonic(raw in arbitrary_raw_holders()) {
        let holders = rank_holders(raw, 388_539_008.0, 15);
        let config = LayoutConfig::default();
        let bubbles = compute_layout(&holders, &config);

        for bubble in &bubbles {
            prop_assert!(bubble.layout.size.is_finite());
            prop_assert!(bubble.layout.size >= 40.0 && bubble.layout.size <= 180.0);
        }

        let mut by_balance: Vec<(f64, f64)> = bubbles.iter().map(|b| (b.holder.balance, b.layout.size)).collect();
        by_balance.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in by_balance.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1, "size decreased: {:?}", pair);
        }
    }

    /// Property: every centre stays inside the padded canvas
    #[test]
    fn prop_positions_inside_canvas(total in 1usize..=15, width in 300.0f64..2000.0, height in 300.0f64..2000.0) {
        let config = LayoutConfig { canvas_width: width, canvas_height: height, ..LayoutConfig::default() };
        for index in 0..total {
            let p = bubble_position(index, total, &config);
            prop_assert!(p.left >= config.padding && p.left <= width - config.padding);
            prop_assert!(p.top >= config.padding && p.top <= height - config.padding);
        }
    }
}
