pub mod common;
pub use common::*;

use copse::maps::{AvlTreeMap, RedBlackTreeMap, SortedVecMap, SplayTreeMap};
use proptest::prelude::*;
use std::collections::BTreeMap;

pub fn round_action_strategy(bound: i32) -> impl Strategy<Value = RoundAction> {
    let key = -bound..bound;
    // Set
    (key.clone(), any::<i32>())
        .prop_map(|(key, value)| RoundAction::Set { key, value })
        .boxed()
        // Get
        .prop_union(key.clone().prop_map(|key| RoundAction::Get { key }).boxed())
        // Has
        .or(key.clone().prop_map(|key| RoundAction::Has { key }).boxed())
        // Delete
        .or(key.clone().prop_map(|key| RoundAction::Delete { key }).boxed())
        // Range, in any order of the bounds
        .or((key.clone(), key.clone())
            .prop_map(|(start, stop)| RoundAction::Range { start, stop })
            .boxed())
        // Neighbors
        .or(key.prop_map(|key| RoundAction::Neighbors { key }).boxed())
}

fn initial_keys() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-100..100i32, 0..100)
}

fn round_actions() -> impl Strategy<Value = Vec<RoundAction>> {
    proptest::collection::vec(round_action_strategy(100), 1..300)
}

fn check_consistency_proptest<M: CheckedMap>(
    initial: &[i32],
    actions: &[RoundAction],
) -> Result<(), TestCaseError> {
    let mut map = M::default();
    let mut model = BTreeMap::new();
    for &key in initial {
        map.set(key, key);
        model.insert(key, key);
    }

    for action in actions {
        let result = run_round(action, &mut map);
        let expected = run_model_round(action, &mut model);
        prop_assert_eq!(result, expected, "diverged on {:?}", action);
        map.assert_correctness();
    }
    assert_same_entries(&map, &model);
    Ok(())
}

proptest::proptest! {
    #[test]
    fn avl_consistency_proptest(initial in initial_keys(), actions in round_actions()) {
        check_consistency_proptest::<AvlTreeMap<i32, i32>>(&initial, &actions)?;
    }

    #[test]
    fn red_black_consistency_proptest(initial in initial_keys(), actions in round_actions()) {
        check_consistency_proptest::<RedBlackTreeMap<i32, i32>>(&initial, &actions)?;
    }

    #[test]
    fn splay_consistency_proptest(initial in initial_keys(), actions in round_actions()) {
        check_consistency_proptest::<SplayTreeMap<i32, i32>>(&initial, &actions)?;
    }

    #[test]
    fn sorted_vec_consistency_proptest(initial in initial_keys(), actions in round_actions()) {
        check_consistency_proptest::<SortedVecMap<i32, i32>>(&initial, &actions)?;
    }
}

proptest::proptest! {
    #![proptest_config(ProptestConfig {
        cases: 20, .. ProptestConfig::default()
      })]

    /// Keys come out sorted no matter the insertion order, and `reversed` is the exact reverse.
    #[test]
    fn sorted_round_trip_proptest(keys in proptest::collection::hash_set(any::<i32>(), 0..200)) {
        let mut map = RedBlackTreeMap::new();
        for &key in keys.iter() {
            map.set(key, ());
        }
        let mut expected: Vec<i32> = keys.into_iter().collect();
        expected.sort_unstable();
        let ascending: Vec<i32> = map.keys().copied().collect();
        prop_assert_eq!(&ascending, &expected);
        let descending: Vec<i32> = map.reversed().map(|(key, _)| *key).collect();
        expected.reverse();
        prop_assert_eq!(descending, expected);
    }

    /// A splay map always has the last touched key at its root.
    #[test]
    fn splay_promotion_proptest(keys in proptest::collection::vec(-50..50i32, 1..100), probe in 0..100usize) {
        let mut map = SplayTreeMap::new();
        for &key in keys.iter() {
            map.set(key, key);
        }
        let key = keys[probe % keys.len()];
        let root_key = |map: &SplayTreeMap<i32, i32>| {
            let root = map.tree().root().unwrap();
            *map.entry_at(root).unwrap().0
        };
        prop_assert!(map.has(&key));
        prop_assert_eq!(root_key(&map), key);
        map.get(&key).unwrap();
        prop_assert_eq!(root_key(&map), key);
        map.set(key, 0);
        prop_assert_eq!(root_key(&map), key);
    }
}
