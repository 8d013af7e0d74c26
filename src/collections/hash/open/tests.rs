#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::hash::{DictionaryError, DuplicateKey, KeyNotFound, RollingState};
use crate::collections::linked::LinkedSequence;
use crate::collections::traits::{Dictionary, EmptyCollection, PositionalSequence};
use crate::util::alloc::CountedDrop;
use crate::util::hash::ManualHash;

fn bucket_keys<E, S>(dict: &OpenHashDictionary<i32, E, S>, index: usize) -> Vec<i32>
where
    S: PositionalSequence<Element = (i32, E)>,
{
    dict.buckets[index].iter().map(|(key, _)| *key).collect()
}

#[test]
fn test_insert_get_update_remove() {
    let mut dict = OpenHashDictionary::new();
    assert_eq!(dict.buckets(), 20);
    dict.insert(1, "One").unwrap();
    dict.insert(2, "Two").unwrap();
    dict.insert(3, "Three").unwrap();

    assert_eq!(dict.get(&1), Ok(&"One"));
    assert_eq!(dict.update(&1, "New One"), Ok("One"));
    assert_eq!(dict.get(&1), Ok(&"New One"));

    assert_eq!(dict.remove(&2), Ok("Two"));
    assert!(!dict.contains_key(&2));
    assert_eq!(dict.len(), 2);

    assert_eq!(dict.get(&2), Err(KeyNotFound.into()));
    assert_eq!(dict.remove(&2), Err(DictionaryError::KeyNotFound(KeyNotFound)));
    assert_eq!(dict.update(&22, "Twenty Two"), Err(KeyNotFound.into()));
}

#[test]
fn test_empty() {
    let mut dict = OpenHashDictionary::<i32, i32>::new();
    assert!(dict.is_empty());
    assert_eq!(dict.get(&0), Err(EmptyCollection.into()));
    assert_eq!(dict.remove(&0), Err(EmptyCollection.into()));
    assert_eq!(dict.update(&0, 0), Err(EmptyCollection.into()));
    assert!(!dict.contains_key(&0));
    assert_eq!(dict.iter().next(), None);
}

#[test]
fn test_duplicate_insert() {
    let mut dict = OpenHashDictionary::with_cap(5);
    dict.insert(1, 'a').unwrap();
    dict.insert(6, 'b').unwrap();
    dict.insert(11, 'c').unwrap();

    let before = format!("{dict:?}");
    let snapshot = dict.clone();

    assert_eq!(dict.insert(6, 'z'), Err(DuplicateKey.into()));
    assert_eq!(dict.len(), 3, "A rejected insert shouldn't change the size.");
    assert_eq!(format!("{dict:?}"), before, "A rejected insert shouldn't touch any bucket.");
    assert_eq!(dict, snapshot);
    assert_eq!(dict.get(&6), Ok(&'b'));
}

#[test]
fn test_chaining() {
    let mut dict = OpenHashDictionary::with_cap(5);
    for key in [1, 6, 2, 11, 16] {
        dict.insert(key, key * 2).unwrap();
    }
    assert_eq!(bucket_keys(&dict, 1), [1, 6, 11, 16], "Entries should be appended to their bucket.");
    assert_eq!(bucket_keys(&dict, 2), [2]);

    assert_eq!(dict.remove(&6), Ok(12));
    assert_eq!(bucket_keys(&dict, 1), [1, 11, 16]);
    assert_eq!(dict.get(&16), Ok(&32));
    assert_eq!(dict.update(&11, 0), Ok(22));
    assert_eq!(dict.get(&11), Ok(&0));
}

#[test]
fn test_no_growth() {
    let mut dict = OpenHashDictionary::with_cap(2);
    for key in 0..50 {
        dict.insert(key, ()).unwrap();
    }
    assert_eq!(dict.buckets(), 2, "The number of buckets should never change.");
    assert_eq!(dict.len(), 50);
    assert_eq!(dict.buckets[0].len(), 25);
    assert_eq!(dict.buckets[1].len(), 25);
    assert!((0..50).all(|key| dict.contains_key(&key)));

    let dict = OpenHashDictionary::<u8, u8>::with_cap(0);
    assert_eq!(dict.buckets(), 1);
}

#[test]
fn test_linked_buckets() {
    let mut dict: OpenHashDictionary<i32, &str, LinkedSequence<(i32, &str)>> =
        OpenHashDictionary::with_cap_and_hasher(3, RollingState);
    dict.insert(0, "zero").unwrap();
    dict.insert(3, "three").unwrap();
    dict.insert(4, "four").unwrap();
    assert_eq!(dict.insert(3, "drei"), Err(DuplicateKey.into()));

    assert_eq!(bucket_keys(&dict, 0), [0, 3]);
    assert_eq!(dict.remove(&0), Ok("zero"));
    assert_eq!(dict.get(&3), Ok(&"three"));
    assert_eq!(dict.update(&4, "vier"), Ok("four"));
    assert_eq!(dict.to_string(), "{3: three, 4: vier}");
    assert_eq!(dict.len(), 2);
}

#[test]
fn test_hash_collisions() {
    let mut dict = OpenHashDictionary::with_cap(4);
    dict.insert(ManualHash::new(1, "zero"), 0).unwrap();
    dict.insert(ManualHash::new(1, "one"), 1).unwrap();
    dict.insert(ManualHash::new(5, "two"), 2).unwrap();
    dict.insert(ManualHash::new(3, "three"), 3).unwrap();

    assert_eq!(dict.remove(&ManualHash::new(1, "zero")), Ok(0));
    assert_eq!(dict.get(&ManualHash::new(5, "two")), Ok(&2));

    let order: Vec<i32> = dict.iter().map(|(_, element)| *element).collect();
    assert_eq!(order, [1, 2, 3], "Colliding entries should share a bucket in insertion order.");
}

#[test]
fn test_clear() {
    let mut dict = OpenHashDictionary::with_cap(3);
    for key in 0..10 {
        dict.insert(key, ()).unwrap();
    }

    dict.clear();
    assert!(dict.is_empty());
    assert_eq!(dict.buckets(), 3, "Clearing should keep the buckets.");
    assert_eq!(dict.get(&0), Err(EmptyCollection.into()));

    dict.insert(0, ()).unwrap();
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_keys_and_values() {
    let mut dict = OpenHashDictionary::with_cap(3);
    dict.insert(4, 'a').unwrap();
    dict.insert(1, 'b').unwrap();
    dict.insert(2, 'c').unwrap();
    dict.insert(5, 'd').unwrap();

    assert_eq!(dict.keys().to_string(), "[4,1,2,5]", "Keys should be produced bucket by bucket.");
    assert_eq!(dict.values().to_string(), "[a,b,c,d]");

    let mut iter = dict.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
}

#[test]
fn test_clone_and_equality() {
    let mut dict = OpenHashDictionary::new();
    dict.insert("a", 1).unwrap();
    dict.insert("b", 2).unwrap();

    let mut clone = dict.clone();
    assert_eq!(clone, dict);

    clone.update(&"a", 10).unwrap();
    assert_ne!(clone, dict, "Equality should compare elements as well as keys.");
    assert_eq!(dict.get(&"a"), Ok(&1), "The clone should be independent.");

    let mut other = OpenHashDictionary::with_cap(7);
    other.insert("b", 2).unwrap();
    other.insert("a", 1).unwrap();
    assert_eq!(other, dict, "Equality shouldn't depend on the number of buckets.");
}

#[test]
fn test_formatting() {
    let mut dict = OpenHashDictionary::with_cap(2);
    dict.insert(1, 'a').unwrap();
    dict.insert(3, 'b').unwrap();
    assert_eq!(dict.to_string(), "{1: a, 3: b}");
    assert_eq!(
        format!("{dict:?}"),
        "OpenHashDictionary { buckets: [[], [(1: 'a'), (3: 'b')]], len: 2, hasher: RollingState }"
    );

    assert_eq!(OpenHashDictionary::<u8, u8>::default().to_string(), "{}");
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let mut dict = OpenHashDictionary::with_cap(2);
    for key in 0..5 {
        dict.insert(key, CountedDrop::new(&counter)).unwrap();
    }

    drop(dict.remove(&3));
    assert_eq!(counter.get(), 1);

    assert!(dict.insert(4, CountedDrop::new(&counter)).is_err());
    assert_eq!(counter.get(), 2, "The rejected element should be dropped.");

    drop(dict);
    assert_eq!(counter.get(), 6, "All remaining elements should be dropped with the dictionary.");
}
