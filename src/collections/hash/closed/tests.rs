#![cfg(test)]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;
use crate::collections::hash::{DictionaryError, DuplicateKey, KeyNotFound, TableFull};
use crate::collections::traits::{Dictionary, EmptyCollection};
use crate::util::alloc::CountedDrop;
use crate::util::hash::ManualHash;

/// Returns the number of slots visited to find `key`.
fn search_len<E>(dict: &ClosedHashDictionary<i32, E>, key: &i32) -> usize {
    let slot = dict.find_slot(key).unwrap();
    (slot + dict.cap() - dict.home_slot(key)) % dict.cap() + 1
}

/// Asserts that no entry is separated from its home slot by a vacant slot.
fn assert_runs_intact<E>(dict: &ClosedHashDictionary<i32, E>) {
    for (slot, entry) in dict.slots.iter().enumerate() {
        if let Some((key, _)) = entry {
            let mut index = dict.home_slot(key);
            while index != slot {
                assert!(dict.slots[index].is_some(), "Key {key} in slot {slot} is cut off at {index}.");
                index = (index + 1) % dict.cap();
            }
        }
    }
}

fn keys_by_slot<E>(dict: &ClosedHashDictionary<i32, E>) -> Vec<Option<i32>> {
    dict.slots.iter().map(|slot| slot.as_ref().map(|(key, _)| *key)).collect()
}

#[test]
fn test_insert_get_update_remove() {
    let mut dict = ClosedHashDictionary::new();
    assert_eq!(dict.cap(), 20);
    dict.insert(1, "One").unwrap();
    dict.insert(2, "Two").unwrap();
    dict.insert(3, "Three").unwrap();

    assert_eq!(dict.get(&1), Ok(&"One"));
    assert_eq!(dict.update(&1, "New One"), Ok("One"), "Updating should return the old element.");
    assert_eq!(dict.get(&1), Ok(&"New One"));

    assert_eq!(dict.remove(&2), Ok("Two"));
    assert!(!dict.contains_key(&2));
    assert_eq!(dict.len(), 2);

    assert_eq!(dict.get(&2), Err(KeyNotFound.into()));
    assert_eq!(dict.remove(&2), Err(KeyNotFound.into()));
    assert_eq!(dict.update(&2, "Two"), Err(DictionaryError::KeyNotFound(KeyNotFound)));
    assert_eq!(dict.insert(3, "Drei"), Err(DuplicateKey.into()));
    assert_eq!(dict.get(&3), Ok(&"Three"), "A failed insert shouldn't replace the element.");
}

#[test]
fn test_empty() {
    let mut dict = ClosedHashDictionary::<i32, i32>::new();
    assert!(dict.is_empty());
    assert_eq!(dict.get(&0), Err(EmptyCollection.into()));
    assert_eq!(dict.remove(&0), Err(EmptyCollection.into()));
    assert!(dict.update(&0, 0).is_err_and(|err| err.is_empty_collection()));
    assert!(!dict.contains_key(&0));
    assert_eq!(dict.iter().next(), None);
}

#[test]
fn test_linear_probing() {
    let mut dict = ClosedHashDictionary::with_cap(10);
    dict.insert(3, 'a').unwrap();
    dict.insert(13, 'b').unwrap();
    dict.insert(4, 'c').unwrap();
    assert_eq!(
        keys_by_slot(&dict)[3..6],
        [Some(3), Some(13), Some(4)],
        "Colliding keys should take the next vacant slot."
    );

    dict.remove(&13).unwrap();
    assert_eq!(
        keys_by_slot(&dict)[3..6],
        [Some(3), Some(4), None],
        "A displaced entry should be shifted back into the vacated slot."
    );
    assert_eq!(dict.get(&4), Ok(&'c'));

    let mut dict = ClosedHashDictionary::with_cap(10);
    dict.insert(9, 'a').unwrap();
    dict.insert(19, 'b').unwrap();
    dict.insert(29, 'c').unwrap();
    assert_eq!(keys_by_slot(&dict)[..2], [Some(19), Some(29)], "Probing should wrap around.");
    assert_eq!(keys_by_slot(&dict)[9], Some(9));

    dict.remove(&9).unwrap();
    assert_eq!(keys_by_slot(&dict)[9], Some(19));
    assert_eq!(keys_by_slot(&dict)[..2], [Some(29), None]);
}

#[test]
fn test_removal_keeps_keys_reachable() {
    let mut dict = ClosedHashDictionary::with_cap(10);
    dict.insert(3, 'a').unwrap();
    dict.insert(4, 'b').unwrap();
    dict.insert(13, 'c').unwrap();
    assert_eq!(keys_by_slot(&dict)[3..6], [Some(3), Some(4), Some(13)]);

    // 4 sits in its home slot and stays, while 13 moves past it into the gap at its own home.
    dict.remove(&3).unwrap();
    assert_eq!(
        keys_by_slot(&dict)[3..6],
        [Some(13), Some(4), None],
        "Removal should shift back entries beyond one that sits in its home slot."
    );
    assert_eq!(search_len(&dict, &13), 1);

    assert!(dict.contains_key(&13));
    assert_eq!(dict.get(&13), Ok(&'c'));
    assert_eq!(dict.insert(13, 'd'), Err(DuplicateKey.into()));
    assert_eq!(dict.len(), 2);

    dict.insert(3, 'e').unwrap();
    assert_eq!(keys_by_slot(&dict)[5], Some(3));
    assert_eq!(dict.remove(&13), Ok('c'));
    assert_eq!(keys_by_slot(&dict)[3..6], [Some(3), Some(4), None]);
    assert_eq!(dict.keys().to_string(), "[3,4]");
    assert_runs_intact(&dict);
}

#[test]
fn test_removal_closes_gaps() {
    let mut dict = ClosedHashDictionary::with_cap(10);
    for key in [3, 4, 13, 23] {
        dict.insert(key, key).unwrap();
    }
    assert_eq!(search_len(&dict, &23), 4);

    dict.remove(&4).unwrap();
    assert_eq!(
        keys_by_slot(&dict)[3..7],
        [Some(3), Some(13), Some(23), None],
        "The whole run after the gap should move back."
    );
    assert_eq!(search_len(&dict, &23), 3, "Removal should shorten the search for later keys.");

    assert_eq!(dict.insert(13, 0), Err(DuplicateKey.into()));
    assert_eq!(dict.insert(23, 0), Err(DuplicateKey.into()));
    assert_eq!(dict.len(), 3, "A key after the gap should still be found as a duplicate.");

    dict.insert(4, 4).unwrap();
    assert_eq!(keys_by_slot(&dict)[6], Some(4), "A new key should take the first vacant slot.");
    assert_runs_intact(&dict);
}

#[test]
fn test_removal_against_model() {
    let mut dict = ClosedHashDictionary::with_cap(1);
    let mut model = HashMap::new();
    let mut state: u32 = 17;

    for step in 0..3000 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let key = ((state >> 8) % 40) as i32;

        if state % 3 == 0 {
            assert_eq!(dict.remove(&key).ok(), model.remove(&key), "Step {step} removed {key}.");
        } else {
            let expected = if model.contains_key(&key) {
                Err(DuplicateKey.into())
            } else {
                model.insert(key, step);
                Ok(())
            };
            assert_eq!(dict.insert(key, step), expected, "Step {step} inserted {key}.");
        }

        assert_eq!(dict.len(), model.len());
        assert_runs_intact(&dict);
    }

    for (key, element) in &model {
        assert_eq!(dict.get(key), Ok(element));
    }
}

#[test]
fn test_hash_collisions() {
    let mut dict = ClosedHashDictionary::with_cap(6);
    dict.insert(ManualHash::new(5, "zero"), ()).unwrap();
    dict.insert(ManualHash::new(5, "one"), ()).unwrap();
    dict.insert(ManualHash::new(1, "two"), ()).unwrap();
    dict.insert(ManualHash::new(5, "three"), ()).unwrap();

    dict.remove(&ManualHash::new(5, "zero")).unwrap();
    assert!(dict.contains_key(&ManualHash::new(5, "three")));

    assert_eq!(
        dict.into_iter().map(|(key, _)| key.value()).collect::<Vec<_>>(),
        ["three", "two", "one"],
        "Hash collisions should be handled in a wrapping manner, without losing entries."
    );
}

#[test]
fn test_growth() {
    let mut dict = ClosedHashDictionary::with_cap(4);
    for key in 0..3 {
        dict.insert(key, key * 10).unwrap();
    }
    assert_eq!(dict.cap(), 4, "The table shouldn't grow below the load factor.");

    assert!(dict.insert(0, 0).is_err());
    assert_eq!(dict.cap(), 4, "A rejected insert shouldn't grow the table.");

    dict.insert(3, 30).unwrap();
    assert_eq!(dict.cap(), 8, "The table should double once 3/4 of it is used.");
    for key in 0..4 {
        assert_eq!(dict.get(&key), Ok(&(key * 10)), "Growing should keep every entry.");
    }

    let mut dict = ClosedHashDictionary::new();
    for key in 0..100 {
        dict.insert(key, key.to_string()).unwrap();
    }
    assert_eq!(dict.len(), 100);
    assert_eq!(dict.cap(), 160);
    for key in 0..100 {
        assert_eq!(dict.get(&key), Ok(&key.to_string()));
    }

    let dict = ClosedHashDictionary::<u8, u8>::with_cap(0);
    assert_eq!(dict.cap(), 1);
}

#[test]
fn test_table_full() {
    let mut dict = ClosedHashDictionary::<i32, char>::with_cap(2);
    assert_eq!(dict.place(0, 'a'), Ok(()));
    assert_eq!(dict.place(7, 'b'), Ok(()));
    assert_eq!(
        dict.place(2, 'c'),
        Err(TableFull { capacity: 2 }),
        "A full probe cycle without a vacant slot should fail."
    );
    assert_eq!(dict.len(), 2);

    let error = DictionaryError::from(TableFull { capacity: 2 });
    assert!(error.is_table_full());
    assert_eq!(error.to_string(), "Unable to find a vacant slot in a table of 2 slots!");

    dict.insert(2, 'c').unwrap();
    assert_eq!(dict.cap(), 4, "Inserting through the dictionary should grow first.");
}

#[test]
fn test_key_uniqueness() {
    let mut dict = ClosedHashDictionary::with_cap(3);
    for round in 0..4 {
        for key in [1, 4, 7, 10] {
            let _ = dict.insert(key, round);
        }
        dict.remove(&4).unwrap();
    }

    let mut keys: Vec<i32> = dict.iter().map(|(key, _)| *key).collect();
    keys.sort();
    assert_eq!(keys, [1, 7, 10], "No key should be stored twice.");
    assert_eq!(dict.len(), 3);
    assert_eq!(dict.get(&1), Ok(&0));
}

#[test]
fn test_clear() {
    let mut dict = ClosedHashDictionary::with_cap(4);
    for key in 0..10 {
        dict.insert(key, ()).unwrap();
    }
    let cap = dict.cap();

    dict.clear();
    assert!(dict.is_empty());
    assert_eq!(dict.cap(), cap, "Clearing should keep the capacity.");
    assert_eq!(dict.get(&0), Err(EmptyCollection.into()));

    dict.insert(0, ()).unwrap();
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_keys_and_values() {
    let mut dict = ClosedHashDictionary::with_cap(10);
    dict.insert(7, 'c').unwrap();
    dict.insert(2, 'a').unwrap();
    dict.insert(5, 'b').unwrap();

    assert_eq!(dict.keys().to_string(), "[2,5,7]", "Keys should be produced in slot order.");
    assert_eq!(dict.values().to_string(), "[a,b,c]");
    assert_eq!(dict.iter().len(), 3);
}

#[test]
fn test_clone_and_equality() {
    let mut dict = ClosedHashDictionary::new();
    dict.insert(1, "One").unwrap();
    dict.insert(21, "Twenty One").unwrap();

    let mut clone = dict.clone();
    assert_eq!(clone, dict);
    assert_eq!(clone.cap(), dict.cap());

    clone.update(&21, "21").unwrap();
    assert_ne!(clone, dict, "Equality should compare elements as well as keys.");
    assert_eq!(dict.get(&21), Ok(&"Twenty One"), "The clone should be independent.");

    let mut other = ClosedHashDictionary::with_cap(3);
    other.insert(21, "Twenty One").unwrap();
    other.insert(1, "One").unwrap();
    assert_eq!(other, dict, "Equality shouldn't depend on capacity or placement.");

    other.remove(&1).unwrap();
    assert_ne!(other, dict);
}

#[test]
fn test_formatting() {
    let mut dict = ClosedHashDictionary::new();
    dict.insert(2, "Two").unwrap();
    dict.insert(1, "One").unwrap();
    assert_eq!(dict.to_string(), "{1: One, 2: Two}");

    let mut dict = ClosedHashDictionary::with_cap(3);
    dict.insert(1, 'a').unwrap();
    assert_eq!(
        format!("{dict:?}"),
        "ClosedHashDictionary { slots: [-, (1: 'a'), -], len: 1, cap: 3, hasher: RollingState }"
    );

    assert_eq!(ClosedHashDictionary::<u8, u8>::default().to_string(), "{}");
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let mut dict = ClosedHashDictionary::with_cap(2);
    for key in 0..5 {
        dict.insert(key, CountedDrop::new(&counter)).unwrap();
    }
    assert_eq!(counter.get(), 0, "Growing shouldn't drop any elements.");

    drop(dict.remove(&3));
    assert_eq!(counter.get(), 1);

    let old = dict.update(&4, CountedDrop::new(&counter));
    drop(old);
    assert_eq!(counter.get(), 2);

    drop(dict);
    assert_eq!(counter.get(), 6, "All remaining elements should be dropped with the dictionary.");
}
