//! Ordered key-value map with unique keys.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use arbor_rbtree::{Comparator, RbTree, Result, TreeError};

/// Orders entries by key only; the value never participates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EntryKeyOrder;

impl<K: Ord, V> Comparator<(K, V)> for EntryKeyOrder {
    fn less(&self, a: &(K, V), b: &(K, V)) -> bool {
        a.0 < b.0
    }
}

/// Ordered map from unique keys to values.
///
/// Entries live in the tree as `(K, V)` pairs compared by key alone, so two
/// entries collide exactly when their keys are comparator-equal.
#[derive(Clone)]
pub struct Map<K: Ord, V> {
    tree: RbTree<(K, V), EntryKeyOrder>,
}

impl<K: Ord, V> Map<K, V> {
    pub fn new() -> Self {
        Self {
            tree: RbTree::with_comparator(EntryKeyOrder),
        }
    }

    /// Inserts the pair if the key is absent; reports whether it was added.
    /// A colliding key leaves the stored value untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool> {
        let (_, inserted) = self.tree.insert_unique((key, value))?;
        Ok(inserted)
    }

    /// Inserts, or overwrites the existing value. `true` when the key was
    /// newly added.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<bool> {
        match self.tree.find_by_mut(|entry| entry.0.cmp(&key)).into_mut() {
            Ok(entry) => {
                entry.1 = value;
                Ok(false)
            }
            Err(_) => {
                self.tree.insert_unique((key, value))?;
                Ok(true)
            }
        }
    }

    /// Value for `key`; an absent key is an error, never a default.
    pub fn at(&self, key: &K) -> Result<&V> {
        match self.tree.find_by(|entry| entry.0.cmp(key)).get() {
            Ok(entry) => Ok(&entry.1),
            Err(_) => Err(TreeError::KeyNotFound),
        }
    }

    /// Mutable value for `key`; an absent key is an error.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.tree.find_by_mut(|entry| entry.0.cmp(key)).into_mut() {
            Ok(entry) => Ok(&mut entry.1),
            Err(_) => Err(TreeError::KeyNotFound),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.at(key).ok()
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.at_mut(key).ok()
    }

    /// Value for `key`, inserting `V::default()` first when the key is
    /// absent. The classic indexing-inserts behavior.
    pub fn entry_or_default(&mut self, key: K) -> Result<&mut V>
    where
        K: Clone,
        V: Default,
    {
        if !self.contains_key(&key) {
            self.tree.insert_unique((key.clone(), V::default()))?;
        }
        self.at_mut(&key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        !self.tree.find_by(|entry| entry.0.cmp(key)).is_end()
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree
            .remove_by(|entry| entry.0.cmp(key))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Theoretical entry capacity.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Drains `other` into `self`; entries whose keys are already present
    /// stay as they are and the drained duplicates are dropped.
    pub fn merge(&mut self, other: &mut Self) -> Result<()> {
        self.tree.merge_unique(&mut other.tree)
    }

    /// Batch insert. Returns one "newly added" flag per pair, in input
    /// order.
    pub fn insert_many<I>(&mut self, entries: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut added = Vec::new();
        for (key, value) in entries {
            added.push(self.insert(key, value)?);
        }
        Ok(added)
    }
}

impl<K: Ord, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Index<&K> for Map<K, V> {
    type Output = V;

    /// Panics when `key` is absent, like the std map indexing idiom; use
    /// [`Map::at`] for the error-returning form.
    fn index(&self, key: &K) -> &V {
        match self.at(key) {
            Ok(value) => value,
            Err(_) => panic!("no entry found for key"),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for Map<K, V> {
    /// The trait signature is infallible, so a `CapacityExceeded` insert
    /// error is dropped and the remaining entries are still attempted.
    /// Use [`Map::insert_many`] to observe per-entry outcomes.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K: Ord, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = arbor_rbtree::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Ord, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Borrowed entry iterator in ascending key order.
pub struct Iter<'a, K, V> {
    inner: arbor_rbtree::Iter<'a, (K, V)>,
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Borrowed key iterator in ascending order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// Borrowed value iterator in ascending key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
impl<'a, K, V> FusedIterator for Values<'a, K, V> {}
