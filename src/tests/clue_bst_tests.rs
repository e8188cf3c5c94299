//! Property tests for the clue tree.

use crate::data_structures::clue_bst::ClueBst;
use crate::tests::clue_set_strategy;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn build(clues: &[String]) -> ClueBst {
    let mut tree = ClueBst::new();
    for clue in clues {
        tree.insert(clue.as_str());
    }
    tree
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// In-order traversal yields the distinct clues in byte-wise order.
    #[test]
    fn prop_in_order_is_sorted_and_distinct(clues in clue_set_strategy()) {
        let tree = build(&clues);
        let expected: Vec<&str> = clues
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let visited: Vec<&str> = tree.iter().collect();
        prop_assert_eq!(visited, expected.clone());
        prop_assert_eq!(tree.len(), expected.len());
    }

    /// Inserting a clue a second time changes nothing.
    #[test]
    fn prop_insert_is_idempotent(clues in clue_set_strategy()) {
        let mut tree = build(&clues);
        let before: Vec<String> = tree.iter().map(str::to_string).collect();

        for clue in &clues {
            prop_assert!(!tree.insert(clue.as_str()));
            prop_assert!(tree.contains(clue));
        }

        let after: Vec<String> = tree.iter().map(str::to_string).collect();
        prop_assert_eq!(before, after);
    }

    /// Teardown releases exactly one node per distinct clue.
    #[test]
    fn prop_teardown_matches_len(clues in clue_set_strategy()) {
        let tree = build(&clues);
        let len = tree.len();
        prop_assert_eq!(tree.teardown(), len);
    }
}

#[test]
fn test_sorted_insertion_degenerates_without_overflow() {
    let mut tree = ClueBst::new();
    for index in 0..50_000 {
        tree.insert(format!("{index:06}"));
    }
    assert_eq!(tree.iter().count(), 50_000);
    assert_eq!(tree.iter().next(), Some("000000"));
    drop(tree);
}
