//! Ordered set admitting duplicate keys.

use core::fmt;

use arbor_rbtree::{Cursor, IntoIter, Iter, RbTree, Result};

/// Ordered multi-key set.
///
/// Duplicate keys are admitted and sit adjacent in traversal order; their
/// relative order among themselves is unspecified and may change as the
/// tree rebalances.
#[derive(Clone)]
pub struct MultiSet<K: Ord> {
    tree: RbTree<K>,
}

impl<K: Ord> MultiSet<K> {
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }

    /// Inserts `key`; duplicates are never rejected.
    pub fn insert(&mut self, key: K) -> Result<()> {
        self.tree.insert_multi(key)?;
        Ok(())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Number of stored keys equal to `key`.
    pub fn count(&self, key: &K) -> usize {
        let mut cursor = self.tree.lower_bound(key);
        let mut n = 0;
        while cursor.get().is_ok_and(|k| k == key) {
            n += 1;
            cursor.move_next();
        }
        n
    }

    /// First position not ordering before `key`.
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K> {
        self.tree.lower_bound(key)
    }

    /// First position ordering after `key`.
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K> {
        self.tree.upper_bound(key)
    }

    /// The `[lower_bound, upper_bound)` cursor pair for `key`.
    pub fn equal_range(&self, key: &K) -> (Cursor<'_, K>, Cursor<'_, K>) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Removes one occurrence of `key`.
    pub fn remove_one(&mut self, key: &K) -> Option<K> {
        self.tree.remove(key)
    }

    /// Removes every occurrence of `key`, returning how many were removed.
    pub fn remove_all(&mut self, key: &K) -> usize {
        let mut n = 0;
        while self.tree.remove(key).is_some() {
            n += 1;
        }
        n
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Theoretical element capacity.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Keys in ascending order; equal keys adjacent.
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }

    pub fn first(&self) -> Option<&K> {
        self.tree.cursor_front().get().ok()
    }

    pub fn last(&self) -> Option<&K> {
        self.tree.cursor_back().get().ok()
    }

    /// Cursor at some occurrence of `key`, or at the end position.
    pub fn find(&self, key: &K) -> Cursor<'_, K> {
        self.tree.find(key)
    }

    /// Drains `other` into `self`, keeping every occurrence.
    pub fn merge(&mut self, other: &mut Self) -> Result<()> {
        self.tree.merge_multi(&mut other.tree)
    }

    /// Batch insert. Every element is admitted, so every flag is `true`;
    /// the shape matches [`crate::Set::insert_many`].
    pub fn insert_many<I>(&mut self, keys: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = Vec::new();
        for key in keys {
            self.insert(key)?;
            added.push(true);
        }
        Ok(added)
    }
}

impl<K: Ord> Default for MultiSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for MultiSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for MultiSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = MultiSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for MultiSet<K> {
    /// The trait signature is infallible, so a `CapacityExceeded` insert
    /// error is dropped and the remaining elements are still attempted.
    /// Use [`MultiSet::insert_many`] to observe per-element outcomes.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<K: Ord> IntoIterator for MultiSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        self.tree.into_iter()
    }
}

impl<'a, K: Ord> IntoIterator for &'a MultiSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: Ord> PartialEq for MultiSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord> Eq for MultiSet<K> {}
