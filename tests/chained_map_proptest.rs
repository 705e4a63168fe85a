// ChainedHashMap property tests.
//
// Property 1: behaves like std's HashMap for any sequence of set/remove/get.
//  - Model: std::collections::HashMap<String, i32>.
//  - Operations: set, remove, get, has over a small key pool to force updates
//    and collisions.
//  - Invariant after each step: len() matches the model, get()/has() agree with
//    the model for the touched key.
//  - Final: every model entry is retrievable, enumeration matches the model.
//
// Property 2: layout invariants after growth.
//  - keys()/values()/entries() agree in length and order.
//  - Bucket indices of keys() are non-decreasing, i.e. every entry sits in the
//    bucket its hash selects at the current capacity.
//  - Chain lengths sum to len(), capacity is a power-of-two multiple of the
//    initial one and the load stays below the threshold.
//
// Property 3: non-string keys are rejected without touching the map.
use chained_map::{ChainedHashMap, MapError};
use proptest::prelude::*;
use std::collections::HashMap;

fn key_pool() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}",
        "[A-Za-z0-9 ]{0,12}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn prop_matches_std_hash_map(ops in proptest::collection::vec((0u8..=3u8, key_pool(), any::<i32>()), 1..300)) {
        let mut map: ChainedHashMap<i32> = ChainedHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for (op, key, value) in ops {
            match op {
                // Insert or update, returning the previous value
                0 | 1 => {
                    let previous = map.set(key.as_str(), value).unwrap();
                    prop_assert_eq!(previous, model.insert(key.clone(), value));
                }
                // Remove, reporting whether the key was present
                2 => {
                    let removed = map.remove(&key).unwrap();
                    prop_assert_eq!(removed, model.remove(&key).is_some());
                }
                // Lookup only
                3 => {}
                _ => unreachable!(),
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.get(&key).unwrap(), model.get(&key));
            prop_assert_eq!(map.has(&key).unwrap(), model.contains_key(&key));
        }

        for (key, value) in &model {
            prop_assert_eq!(map.get(key).unwrap(), Some(value));
        }

        let mut entries = map.entries();
        entries.sort();
        let mut expected: Vec<(String, i32)> = model.into_iter().collect();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }
}

proptest! {
    #[test]
    fn prop_layout_after_growth(keys in proptest::collection::hash_set("[a-z0-9]{1,8}", 0..200), initial in 1usize..=32) {
        let mut map = ChainedHashMap::with_capacity(initial);
        for (i, key) in keys.iter().enumerate() {
            map.set(key, i).unwrap();
        }

        prop_assert_eq!(map.len(), keys.len());

        let listed = map.keys();
        let values = map.values();
        let entries = map.entries();
        prop_assert_eq!(listed.len(), map.len());
        prop_assert_eq!(values.len(), map.len());
        prop_assert_eq!(entries.len(), map.len());
        for (i, (key, value)) in entries.iter().enumerate() {
            prop_assert_eq!(key, &listed[i]);
            prop_assert_eq!(value, &values[i]);
        }

        let indices: Vec<usize> = listed.iter().map(|key| map.bucket_index(key).unwrap()).collect();
        prop_assert!(indices.windows(2).all(|pair| pair[0] <= pair[1]));

        prop_assert_eq!(map.bucket_lengths().iter().sum::<usize>(), map.len());

        let growth = map.capacity() / initial;
        prop_assert_eq!(map.capacity() % initial, 0);
        prop_assert!(growth.is_power_of_two());
        if initial >= 2 {
            prop_assert!(map.current_load() < map.load_factor());
        }

        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(map.get(key).unwrap(), Some(&i));
        }
    }
}

proptest! {
    #[test]
    fn prop_rejects_non_string_keys(existing in proptest::collection::vec("[a-z]{1,4}", 0..20), bad in any::<u32>()) {
        let mut map: ChainedHashMap<u32> = ChainedHashMap::new();
        for key in &existing {
            map.set(key, 0).unwrap();
        }
        let before = map.entries();

        let invalid = MapError::InvalidKeyType { type_name: "u32" };
        prop_assert_eq!(map.set(bad, bad), Err(invalid.clone()));
        prop_assert_eq!(map.get(&bad), Err(invalid.clone()));
        prop_assert_eq!(map.has(&bad), Err(invalid.clone()));
        prop_assert_eq!(map.remove(&bad), Err(invalid));

        prop_assert_eq!(map.entries(), before);
    }
}
