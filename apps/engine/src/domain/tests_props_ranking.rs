//! Property tests for combination classification and ranking.
//!
//! Properties tested:
//! - Classification only depends on the card set, not its order
//! - Single comparison is exactly the card order
//! - compare is a mirror relation (a vs b determines b vs a)
//! - Different categories never compare
//! - Five-card kinds rank strictly by shape
//! - Group kinds compare by the group's rank alone

use proptest::prelude::*;

use crate::domain::combos::classify;
use crate::domain::ranking::{beats, compare_combos, CompareOutcome};
use crate::domain::{test_gens, test_prelude, ComboKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_classify_is_order_insensitive(cards in test_gens::unique_cards_up_to(5)) {
        let mut sorted = cards.clone();
        sorted.sort_unstable();
        match (classify(&cards), classify(&sorted)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "order changed the outcome: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn prop_single_follows_card_order((a, b) in test_gens::two_distinct_cards()) {
        let ca = classify(&[a]).unwrap();
        let cb = classify(&[b]).unwrap();
        prop_assert_eq!(beats(&ca, &cb), a > b);
        prop_assert_eq!(beats(&cb, &ca), b > a);
    }

    #[test]
    fn prop_compare_is_a_mirror(
        a in test_gens::any_combo_cards(),
        b in test_gens::any_combo_cards(),
    ) {
        let a = classify(&a).unwrap();
        let b = classify(&b).unwrap();
        let expected = match compare_combos(&a, &b) {
            CompareOutcome::Greater => CompareOutcome::Less,
            CompareOutcome::Less => CompareOutcome::Greater,
            other => other,
        };
        prop_assert_eq!(compare_combos(&b, &a), expected);
    }

    #[test]
    fn prop_categories_never_compare(
        a in test_gens::any_combo_cards(),
        b in test_gens::any_combo_cards(),
    ) {
        let a = classify(&a).unwrap();
        let b = classify(&b).unwrap();
        prop_assume!(a.category() != b.category());
        prop_assert_eq!(compare_combos(&a, &b), CompareOutcome::Incomparable);
        prop_assert!(!beats(&a, &b));
        prop_assert!(!beats(&b, &a));
    }

    #[test]
    fn prop_five_card_ladder_ranks_by_shape(
        a in test_gens::five_card_combo(),
        b in test_gens::five_card_combo(),
    ) {
        let a = classify(&a).unwrap();
        let b = classify(&b).unwrap();
        prop_assume!(a.kind() != b.kind());
        let expected = if a.kind().five_card_rank() > b.kind().five_card_rank() {
            CompareOutcome::Greater
        } else {
            CompareOutcome::Less
        };
        prop_assert_eq!(compare_combos(&a, &b), expected);
    }

    #[test]
    fn prop_full_houses_rank_by_triple_alone(
        a in test_gens::full_house_five(),
        b in test_gens::full_house_five(),
    ) {
        let a = classify(&a).unwrap();
        let b = classify(&b).unwrap();
        prop_assume!(a.deciding_card().rank != b.deciding_card().rank);
        let expected = if a.deciding_card().rank > b.deciding_card().rank {
            CompareOutcome::Greater
        } else {
            CompareOutcome::Less
        };
        prop_assert_eq!(compare_combos(&a, &b), expected);
    }

    #[test]
    fn prop_shapes_classify_as_expected(
        straight in test_gens::straight_five(),
        flush in test_gens::flush_five(),
        full_house in test_gens::full_house_five(),
        quads in test_gens::four_kind_five(),
        sf in test_gens::straight_flush_five(),
    ) {
        prop_assert!(matches!(
            classify(&straight).unwrap().kind(),
            ComboKind::Straight | ComboKind::StraightFlush
        ));
        prop_assert!(matches!(
            classify(&flush).unwrap().kind(),
            ComboKind::Flush | ComboKind::StraightFlush
        ));
        prop_assert_eq!(classify(&full_house).unwrap().kind(), ComboKind::FullHouse);
        prop_assert_eq!(classify(&quads).unwrap().kind(), ComboKind::FourOfAKind);
        prop_assert_eq!(classify(&sf).unwrap().kind(), ComboKind::StraightFlush);
    }
}
