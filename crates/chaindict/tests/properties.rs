// HashDict / HashSet property tests against std::collections::HashMap as a model.
//
//  - Round-trip: every distinct key reads back the first value written for it.
//  - Size: size() == number of distinct keys, duplicates included in the input.
//  - Deletion: popped keys are gone, popping absent keys changes nothing.
//  - Growth: capacity never shrinks, and every capacity after the first is prime.
use std::collections::HashMap;

use chaindict::hashmap::is_prime;
use chaindict::{Error, HashDict, HashSet};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_int_keys_round_trip(pairs in proptest::collection::vec((any::<i64>(), any::<i32>()), 0..400)) {
        let mut dict = HashDict::new();
        let mut model = HashMap::new();

        for (k, v) in pairs {
            let stored = dict.add(k, v);
            let fresh = !model.contains_key(&k);
            model.entry(k).or_insert(v);
            prop_assert_eq!(stored, fresh);
        }

        prop_assert_eq!(dict.size(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(dict.get(k), Ok(v));
        }
    }

    #[test]
    fn prop_text_keys_round_trip(keys in proptest::collection::vec("[a-z]{0,6}", 0..200)) {
        let mut dict = HashDict::new();
        let mut model = HashMap::new();

        for (i, k) in keys.into_iter().enumerate() {
            model.entry(k.clone()).or_insert(i);
            dict.add(k, i);
        }

        prop_assert_eq!(dict.size(), model.len());
        for (k, v) in &model {
            prop_assert!(dict.is_in(k.as_str()));
            prop_assert_eq!(dict[k.as_str()], *v);
        }
    }

    #[test]
    fn prop_float_keys_round_trip(raw in proptest::collection::vec(-10_000i32..10_000, 0..300)) {
        let mut dict = HashDict::new();
        let mut model = HashMap::new();

        for r in raw {
            let k = r as f64 / 4.0;
            dict.add(k, r);
            model.entry(r).or_insert(r);
        }

        prop_assert_eq!(dict.size(), model.len());
        for r in model.keys() {
            prop_assert_eq!(dict.get(&(*r as f64 / 4.0)), Ok(r));
        }
    }

    #[test]
    fn prop_ops_match_model(ops in proptest::collection::vec((0u8..=2u8, 0u16..64), 1..300)) {
        let mut dict = HashDict::new();
        let mut model = HashMap::new();

        for (op, k) in ops {
            match op {
                0 => {
                    dict.add(k, u32::from(k) * 3);
                    model.entry(k).or_insert(u32::from(k) * 3);
                }
                1 => {
                    let got = dict.pop(&k);
                    match model.remove(&k) {
                        Some(v) => {
                            prop_assert_eq!(got, Ok(v));
                        }
                        None => {
                            prop_assert_eq!(got, Err(Error::KeyNotFound));
                        }
                    }
                    prop_assert!(!dict.is_in(&k));
                }
                2 => {
                    prop_assert_eq!(dict.is_in(&k), model.contains_key(&k));
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(dict.size(), model.len());
        }

        let mut keys: Vec<_> = dict.keys().copied().collect();
        keys.sort();
        let mut expected: Vec<_> = model.keys().copied().collect();
        expected.sort();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn prop_capacity_grows_through_primes(n in 0usize..2000) {
        let mut set = HashSet::new();
        let mut last = set.capacity();

        for i in 0..n {
            set.add(i);
            let cap = set.capacity();
            prop_assert!(cap >= last);
            if cap != last {
                prop_assert!(is_prime(cap as i128));
            }
            last = cap;
        }

        prop_assert_eq!(set.size(), n);
        prop_assert!((0..n).all(|i| set.is_in(&i)));
    }
}
