#![allow(dead_code)]

use copse::maps::{Balance, OrderedMap, SortedVecMap, TreeMap};
use itertools::Itertools;
use rand::{self, seq::SliceRandom, Rng};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// A map under test, with a way to check its internal invariants.
pub trait CheckedMap: OrderedMap<i32, i32> + Default {
    fn assert_correctness(&self);
}

impl<S: Balance + Default> CheckedMap for TreeMap<i32, i32, S> {
    fn assert_correctness(&self) {
        TreeMap::assert_correctness(self)
    }
}

impl CheckedMap for SortedVecMap<i32, i32> {
    fn assert_correctness(&self) {
        assert!(
            self.keys().tuple_windows().all(|(a, b)| a < b),
            "keys out of order"
        );
    }
}

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Set { key: i32, value: i32 },
    Get { key: i32 },
    Has { key: i32 },
    Delete { key: i32 },
    Range { start: i32, stop: i32 },
    Neighbors { key: i32 },
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Empty,
    Value(Option<i32>),
    Present(bool),
    Entries(Vec<(i32, i32)>),
    /// greater, greater or equal, less, less or equal
    Neighbors([Option<(i32, i32)>; 4]),
}

pub const KEY_BOUND: i32 = 100;

fn pair((key, value): (&i32, &i32)) -> (i32, i32) {
    (*key, *value)
}

pub fn random_round_action(rng: &mut rand::prelude::ThreadRng) -> RoundAction {
    use RoundAction::*;
    let key = rng.gen_range(-KEY_BOUND..KEY_BOUND);
    match rng.gen_range(0..6) {
        0 => Set {
            key,
            value: rng.gen(),
        },
        1 => Get { key },
        2 => Has { key },
        3 => Delete { key },
        4 => Range {
            start: key,
            stop: rng.gen_range(-KEY_BOUND..KEY_BOUND),
        },
        5 => Neighbors { key },
        _ => {
            panic!()
        }
    }
}

pub fn run_round<M: OrderedMap<i32, i32>>(round_action: &RoundAction, map: &mut M) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Set { key, value } => {
            map.set(key, value);
            Empty
        }
        Get { key } => Value(map.get(&key).ok().copied()),
        Has { key } => Present(map.has(&key)),
        Delete { key } => Present(map.delete(&key)),
        Range { start, stop } => Entries(map.find_range(&start, &stop).map(pair).collect()),
        RoundAction::Neighbors { key } => RoundResult::Neighbors([
            map.find_greater(&key).map(pair),
            map.find_greater_or_equal(&key).map(pair),
            map.find_less(&key).map(pair),
            map.find_less_or_equal(&key).map(pair),
        ]),
    }
}

/// The same round, against the standard library's ordered map.
pub fn run_model_round(round_action: &RoundAction, model: &mut BTreeMap<i32, i32>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Set { key, value } => {
            model.insert(key, value);
            Empty
        }
        Get { key } => Value(model.get(&key).copied()),
        Has { key } => Present(model.contains_key(&key)),
        Delete { key } => Present(model.remove(&key).is_some()),
        Range { start, stop } if start < stop => {
            Entries(model.range(start..stop).map(pair).collect())
        }
        Range { .. } => Entries(vec![]),
        RoundAction::Neighbors { key } => RoundResult::Neighbors([
            model.range((Excluded(key), Unbounded)).next().map(pair),
            model.range(key..).next().map(pair),
            model.range(..key).next_back().map(pair),
            model.range(..=key).next_back().map(pair),
        ]),
    }
}

/// Asserts that the map holds exactly the model's entries, in both directions.
pub fn assert_same_entries<M: OrderedMap<i32, i32>>(map: &M, model: &BTreeMap<i32, i32>) {
    let entries: Vec<_> = map.entries().map(pair).collect();
    let expected: Vec<_> = model.iter().map(pair).collect();
    assert_eq!(entries, expected);

    let reversed: Vec<_> = map.reversed().map(pair).collect();
    let expected_reversed: Vec<_> = model.iter().rev().map(pair).collect();
    assert_eq!(reversed, expected_reversed);

    assert_eq!(map.len(), model.len());
    assert_eq!(map.find_min().map(pair), model.iter().next().map(pair));
    assert_eq!(map.find_max().map(pair), model.iter().next_back().map(pair));
}

const INITIAL_SIZE: i32 = 50;

/// Runs random rounds against a `BTreeMap`, checking every result and the invariants.
pub fn check_consistency<M: CheckedMap>(num_rounds: u32) {
    let mut rng = rand::thread_rng();
    let mut map: M = M::default();
    let mut model = BTreeMap::new();
    for key in (-INITIAL_SIZE..INITIAL_SIZE).step_by(2) {
        map.set(key, key * 10);
        model.insert(key, key * 10);
    }

    for _ in 0..num_rounds {
        let round_action = random_round_action(&mut rng);
        let result = run_round(&round_action, &mut map);
        let expected = run_model_round(&round_action, &mut model);
        assert_eq!(result, expected, "diverged on {:?}", round_action);
        // `O(n)` per round, fine for the sizes used here
        map.assert_correctness();
    }
    assert_same_entries(&map, &model);
}

const NUM_KEYS: i32 = 300;

/// Inserts shuffled keys, checking the invariants after each insertion.
pub fn check_insert<M: CheckedMap>() {
    let mut keys: Vec<i32> = (0..NUM_KEYS).collect();
    keys.shuffle(&mut rand::thread_rng());

    let mut map: M = M::default();
    let mut model = BTreeMap::new();
    for &key in keys.iter() {
        map.set(key, -key);
        model.insert(key, -key);
        map.assert_correctness();
        assert_eq!(map.len(), model.len());
    }
    assert_same_entries(&map, &model);

    // overwriting keeps the size
    for &key in keys.iter() {
        map.set(key, key);
        model.insert(key, key);
    }
    map.assert_correctness();
    assert_same_entries(&map, &model);
}

/// Deletes every key of a full map in random order, checking the invariants on the way.
pub fn check_delete<M: CheckedMap>() {
    let mut map: M = M::default();
    let mut model = BTreeMap::new();
    for key in 0..NUM_KEYS {
        map.set(key, key);
        model.insert(key, key);
    }

    let mut keys: Vec<i32> = (0..NUM_KEYS).collect();
    keys.shuffle(&mut rand::thread_rng());
    for &key in keys.iter() {
        assert!(map.delete(&key));
        assert!(!map.delete(&key));
        model.remove(&key);
        map.assert_correctness();
        assert_same_entries(&map, &model);
    }
    assert!(map.is_empty());
    assert_eq!(map.find_min(), None);
}
