use concierge_core::IMatchStrategy;
use concierge_matcher::algorithms::sequence_ratio::ratio;
use concierge_matcher::{ResponseSelector, SubsetStrategy, TfIdfIndex};
use proptest::prelude::*;
use test_fixtures::hotel_catalog;

proptest! {
    #[test]
    fn ratio_is_symmetric(a in ".{0,40}", b in ".{0,40}") {
        prop_assert!((ratio(&a, &b) - ratio(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn ratio_is_bounded(a in ".{0,40}", b in ".{0,40}") {
        let r = ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r), "ratio {}", r);
    }

    #[test]
    fn ratio_of_identical_text_is_one(a in ".{0,60}") {
        prop_assert_eq!(ratio(&a, &a), 1.0);
    }

    #[test]
    fn subset_match_survives_extra_words(
        pick in 0usize..33,
        extra in "[a-z]{1,8}( [a-z]{1,8}){0,3}",
    ) {
        let catalog = hotel_catalog();
        let patterns = catalog.all_patterns();
        let pattern = patterns[pick % patterns.len()];
        let utterance = format!("{extra} {pattern} {extra}");
        let result = SubsetStrategy.classify(&utterance, &catalog);
        prop_assert!(result.is_match(), "{:?} did not match", utterance);
        prop_assert_eq!(result.score, 1.0);
    }

    #[test]
    fn cosine_scores_are_bounded(query in "[a-z ]{0,40}") {
        let catalog = hotel_catalog();
        let index = TfIdfIndex::build(&catalog).unwrap();
        let hit = index.best_match(&query).unwrap();
        prop_assert!(hit.score >= 0.0 && hit.score <= 1.0 + 1e-9, "score {}", hit.score);
        prop_assert_eq!(index.owner_of(hit.pattern), Some(hit.intent));
    }

    #[test]
    fn selected_response_belongs_to_intent(seed in any::<u64>(), which in 0usize..9) {
        let catalog = hotel_catalog();
        let intent = catalog.get(which % catalog.len()).unwrap();
        let mut selector = ResponseSelector::seeded(seed);
        let text = selector.select_response(Some(intent));
        prop_assert!(intent.responses().contains(&text));
    }
}
