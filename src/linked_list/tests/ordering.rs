extern crate std;

use core::cmp::Ordering;
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    vec::Vec,
};

use hashbrown::HashSet;

use crate::linked_list::SingleLinkedList;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equality() {
    let a = SingleLinkedList::from([1, 2, 3]);
    let b: SingleLinkedList<_> = (1..=3).collect();
    assert_eq!(a, b);
    assert!(!(a != b));

    assert_ne!(a, SingleLinkedList::from([1, 2]));
    assert_ne!(a, SingleLinkedList::from([1, 2, 4]));
    assert_eq!(SingleLinkedList::<i32>::new(), SingleLinkedList::new());
}

#[test]
fn test_lexicographic_order() {
    let a = SingleLinkedList::from([1, 2, 3]);
    let b = SingleLinkedList::from([1, 2, 4]);
    let prefix = SingleLinkedList::from([1, 2]);
    let empty = SingleLinkedList::new();

    assert!(a < b);
    assert!(b > a);
    assert!(a <= b);
    assert!(b >= a);
    assert!(!(a > b));

    assert!(prefix < a);
    assert!(empty < prefix);
    assert!(SingleLinkedList::from([2]) > a);

    assert!(a <= a.clone());
    assert!(a >= a.clone());
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
}

#[test]
fn test_partial_order_with_nan() {
    let a = SingleLinkedList::from([1.0, f64::NAN]);
    let b = SingleLinkedList::from([1.0, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b));
    assert!(!(a >= b));
    assert_ne!(a, a.clone());
}

#[test]
fn test_sorting_lists() {
    let mut lists = Vec::from([
        SingleLinkedList::from([3]),
        SingleLinkedList::from([1, 2, 3]),
        SingleLinkedList::new(),
        SingleLinkedList::from([1, 2]),
    ]);
    lists.sort();
    let lengths: Vec<_> = lists.iter().map(SingleLinkedList::len).collect();
    assert_eq!(lengths, [0, 2, 3, 1]);
}

#[test]
fn test_hash_matches_equality() {
    let a = SingleLinkedList::from([1, 2, 3]);
    let b = a.clone();
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut set = HashSet::new();
    assert!(set.insert(a));
    assert!(!set.insert(b));
    assert!(set.insert(SingleLinkedList::from([1, 2])));
    assert!(set.insert(SingleLinkedList::new()));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&SingleLinkedList::from([1, 2, 3])));
}
