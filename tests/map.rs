//! Scenario tests for the key-value map adapter.

use arbor::{Map, TreeError};

#[test]
fn default_is_empty() {
    let map: Map<i32, i32> = Map::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get(&1), None);
}

#[test]
fn insert_and_lookup() {
    let mut map = Map::new();
    assert!(map.insert(1, "one").unwrap());
    assert!(map.insert(2, "two").unwrap());
    assert_eq!(map.get(&1), Some(&"one"));
    assert_eq!(map.get(&2), Some(&"two"));
    assert_eq!(map.len(), 2);
}

#[test]
fn duplicate_key_keeps_first_value() {
    let mut map = Map::new();
    assert!(map.insert(1, 10).unwrap());
    assert!(!map.insert(1, 99).unwrap());
    assert_eq!(map.get(&1), Some(&10));
    assert_eq!(map.len(), 1);
}

#[test]
fn at_surfaces_missing_keys() {
    let mut map = Map::new();
    map.insert(1, 100).unwrap();
    assert_eq!(map.at(&1), Ok(&100));
    assert_eq!(map.at(&2), Err(TreeError::KeyNotFound));
}

#[test]
fn at_mut_updates_in_place() {
    let mut map = Map::new();
    map.insert("k", 1).unwrap();
    *map.at_mut(&"k").unwrap() += 41;
    assert_eq!(map.get(&"k"), Some(&42));
    assert_eq!(map.at_mut(&"absent"), Err(TreeError::KeyNotFound));
}

#[test]
fn insert_or_assign_overwrites() {
    let mut map = Map::new();
    assert!(map.insert_or_assign(5, "old").unwrap());
    assert!(!map.insert_or_assign(5, "new").unwrap());
    assert_eq!(map.get(&5), Some(&"new"));
    assert_eq!(map.len(), 1);
}

#[test]
fn entry_or_default_inserts_once() {
    let mut map: Map<&str, Vec<i32>> = Map::new();
    map.entry_or_default("list").unwrap().push(1);
    map.entry_or_default("list").unwrap().push(2);
    assert_eq!(map.get(&"list"), Some(&vec![1, 2]));
    assert_eq!(map.len(), 1);
}

#[test]
fn index_returns_the_value() {
    let mut map = Map::new();
    map.insert(3, "three").unwrap();
    assert_eq!(map[&3], "three");
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_panics_on_missing_key() {
    let map: Map<i32, i32> = Map::new();
    let _ = map[&7];
}

#[test]
fn contains_key() {
    let mut map = Map::new();
    map.insert(1, ()).unwrap();
    assert!(map.contains_key(&1));
    assert!(!map.contains_key(&2));
}

#[test]
fn remove_returns_the_value() {
    let mut map = Map::new();
    map.insert(1, "a").unwrap();
    assert_eq!(map.remove(&1), Some("a"));
    assert_eq!(map.remove(&1), None);
    assert!(map.is_empty());
}

#[test]
fn iterates_in_key_order() {
    let map: Map<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    let entries: Vec<(i32, char)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, vec![(1, 'a'), (2, 'b'), (3, 'c')]);

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);
    let values: Vec<char> = map.values().copied().collect();
    assert_eq!(values, vec!['a', 'b', 'c']);
}

#[test]
fn merge_drops_colliding_entries() {
    let mut target: Map<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
    let mut source: Map<i32, &str> = [(2, "zwei"), (3, "drei")].into_iter().collect();

    target.merge(&mut source).unwrap();

    assert_eq!(target.len(), 3);
    assert_eq!(target.get(&2), Some(&"two"), "existing entry wins");
    assert_eq!(target.get(&3), Some(&"drei"));
    assert!(source.is_empty());
}

#[test]
fn insert_many_reports_per_pair() {
    let mut map = Map::new();
    let added = map
        .insert_many([(1, "a"), (2, "b"), (1, "dup")])
        .unwrap();
    assert_eq!(added, vec![true, true, false]);
    assert_eq!(map.len(), 2);
}

#[test]
fn clear_then_reuse() {
    let mut map: Map<i32, i32> = [(1, 1), (2, 4)].into_iter().collect();
    map.clear();
    assert!(map.is_empty());
    map.insert(3, 9).unwrap();
    assert_eq!(map.get(&3), Some(&9));
}

#[test]
fn clone_is_deep() {
    let original: Map<i32, String> = [(1, "a".to_string())].into_iter().collect();
    let mut copy = original.clone();
    copy.at_mut(&1).unwrap().push('!');
    assert_eq!(original.get(&1), Some(&"a".to_string()));
    assert_eq!(copy.get(&1), Some(&"a!".to_string()));
}

#[test]
fn into_iterator_consumes_entries() {
    let map: Map<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
    let entries: Vec<(i32, char)> = map.into_iter().collect();
    assert_eq!(entries, vec![(1, 'a'), (2, 'b')]);
}

#[test]
fn equality_compares_entries() {
    let a: Map<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
    let b: Map<i32, i32> = [(2, 20), (1, 10)].into_iter().collect();
    let c: Map<i32, i32> = [(1, 10), (2, 99)].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
