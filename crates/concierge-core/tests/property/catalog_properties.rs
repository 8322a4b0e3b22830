use concierge_core::{Catalog, IntentRecord};
use proptest::prelude::*;

fn catalog_with_counts(counts: &[usize]) -> Catalog {
    let records = counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            IntentRecord::new(
                format!("intent{i}"),
                (0..n).map(|p| format!("pattern {i} {p}")),
                [format!("response {i}")],
            )
        })
        .collect();
    Catalog::from_records(records).unwrap()
}

proptest! {
    #[test]
    fn flat_index_owner_matches_cumulative_offsets(counts in prop::collection::vec(1usize..8, 1..12)) {
        let catalog = catalog_with_counts(&counts);
        prop_assert_eq!(catalog.pattern_count(), counts.iter().sum::<usize>());

        let mut flat = 0;
        for (i, &n) in counts.iter().enumerate() {
            for _ in 0..n {
                let owner = catalog.owner_of(flat).unwrap();
                prop_assert_eq!(owner.id().as_str(), format!("intent{i}"));
                flat += 1;
            }
        }
        prop_assert!(catalog.owner_of(flat).is_none());
    }

    #[test]
    fn patterns_iterator_agrees_with_owner_table(counts in prop::collection::vec(1usize..6, 1..8)) {
        let catalog = catalog_with_counts(&counts);
        for (flat, (intent_index, pattern)) in catalog.patterns().enumerate() {
            let owner = catalog.owner_of(flat).unwrap();
            prop_assert_eq!(owner.id(), catalog.get(intent_index).unwrap().id());
            prop_assert!(owner.patterns().iter().any(|p| p == pattern));
        }
    }
}
