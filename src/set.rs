//! Ordered set of unique keys.

use core::fmt;

use arbor_rbtree::{Cursor, IntoIter, Iter, RbTree, Result};

/// Ordered set of unique keys.
///
/// A duplicate insert leaves the set untouched and reports `false`. Only
/// comparator equality decides collisions, never identity.
#[derive(Clone)]
pub struct Set<K: Ord> {
    tree: RbTree<K>,
}

impl<K: Ord> Set<K> {
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }

    /// Inserts `key`, reporting whether it was newly added.
    pub fn insert(&mut self, key: K) -> Result<bool> {
        let (_, inserted) = self.tree.insert_unique(key)?;
        Ok(inserted)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Borrows the stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.tree.find(key).get().ok()
    }

    /// Removes and returns the stored key equal to `key`.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        self.tree.remove(key)
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

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }

    pub fn first(&self) -> Option<&K> {
        self.tree.cursor_front().get().ok()
    }

    pub fn last(&self) -> Option<&K> {
        self.tree.cursor_back().get().ok()
    }

    /// Cursor at `key`, or at the end position if absent.
    pub fn find(&self, key: &K) -> Cursor<'_, K> {
        self.tree.find(key)
    }

    /// Drains `other` into `self`; keys already present stay as they are
    /// and the drained duplicates are dropped.
    pub fn merge(&mut self, other: &mut Self) -> Result<()> {
        self.tree.merge_unique(&mut other.tree)
    }

    /// Batch insert. Returns one "newly added" flag per element, in input
    /// order.
    pub fn insert_many<I>(&mut self, keys: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = Vec::new();
        for key in keys {
            added.push(self.insert(key)?);
        }
        Ok(added)
    }
}

impl<K: Ord> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for Set<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for Set<K> {
    /// The trait signature is infallible, so a `CapacityExceeded` insert
    /// error is dropped and the remaining elements are still attempted.
    /// Use [`Set::insert_many`] to observe per-element outcomes.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<K: Ord> IntoIterator for Set<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        self.tree.into_iter()
    }
}

impl<'a, K: Ord> IntoIterator for &'a Set<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: Ord> PartialEq for Set<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord> Eq for Set<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = Set::new();
        assert!(set.insert(3).unwrap());
        assert!(set.insert(1).unwrap());
        assert!(!set.insert(3).unwrap(), "duplicate must be rejected");
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(!set.contains(&2));
    }

    #[test]
    fn test_iterates_sorted() {
        let set: Set<i32> = [9, 4, 7, 1].into_iter().collect();
        let keys: Vec<i32> = set.iter().copied().collect();
        assert_eq!(keys, vec![1, 4, 7, 9]);
    }

    #[test]
    fn test_remove() {
        let mut set: Set<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(set.remove(&2), Some(2));
        assert_eq!(set.remove(&2), None);
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 2);
    }
}
