//! Cursor traversal over the tree.
//!
//! A cursor is a position in comparator order: either at an element or at
//! the single past-the-end position. Stepping runs through the positions
//! cyclically, so moving forward from the end lands on the minimum and
//! moving backward from the end lands on the maximum.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::{Result, TreeError};
use crate::node::{max_node, min_node, Link, Node};
use crate::{Comparator, NaturalOrder, RbTree};

/// Next node in comparator order, or `None` past the maximum.
///
/// # Safety
/// `node` must point into a live tree.
pub(crate) unsafe fn successor<T>(node: NonNull<Node<T>>) -> Link<T> {
    if let Some(right) = (*node.as_ptr()).right {
        return Some(min_node(right));
    }
    let mut current = node;
    let mut parent = (*node.as_ptr()).parent;
    while let Some(p) = parent {
        if Some(current) == (*p.as_ptr()).left {
            return Some(p);
        }
        current = p;
        parent = (*p.as_ptr()).parent;
    }
    None
}

/// Previous node in comparator order, or `None` before the minimum.
///
/// # Safety
/// `node` must point into a live tree.
pub(crate) unsafe fn predecessor<T>(node: NonNull<Node<T>>) -> Link<T> {
    if let Some(left) = (*node.as_ptr()).left {
        return Some(max_node(left));
    }
    let mut current = node;
    let mut parent = (*node.as_ptr()).parent;
    while let Some(p) = parent {
        if Some(current) == (*p.as_ptr()).right {
            return Some(p);
        }
        current = p;
        parent = (*p.as_ptr()).parent;
    }
    None
}

/// Read-only position over a tree.
pub struct Cursor<'a, T, C: Comparator<T> = NaturalOrder> {
    pub(crate) node: Link<T>,
    pub(crate) tree: &'a RbTree<T, C>,
}

// Thread-safety follows the shared borrow, not the node pointer.
unsafe impl<'a, T: Sync, C: Comparator<T> + Sync> Send for Cursor<'a, T, C> {}
unsafe impl<'a, T: Sync, C: Comparator<T> + Sync> Sync for Cursor<'a, T, C> {}

impl<'a, T, C: Comparator<T>> Cursor<'a, T, C> {
    /// Borrows the element under the cursor.
    ///
    /// The past-the-end position carries no element; dereferencing it is an
    /// error, never a default value.
    pub fn get(&self) -> Result<&'a T> {
        match self.node {
            Some(node) => unsafe { Ok(&(*node.as_ptr()).key) },
            None => Err(TreeError::OutOfBounds),
        }
    }

    /// `true` at the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Steps to the successor. Past the maximum lands on the end position;
    /// from the end position wraps to the minimum.
    pub fn move_next(&mut self) {
        self.node = match self.node {
            Some(node) => unsafe { successor(node) },
            None => self.tree.first_node(),
        };
    }

    /// Steps to the predecessor; from the end position lands on the maximum.
    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(node) => unsafe { predecessor(node) },
            None => self.tree.last_node(),
        };
    }
}

impl<'a, T, C: Comparator<T>> Clone for Cursor<'a, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, C: Comparator<T>> Copy for Cursor<'a, T, C> {}

impl<'a, T, C: Comparator<T>> PartialEq for Cursor<'a, T, C> {
    /// Position identity over the same tree.
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<'a, T, C: Comparator<T>> Eq for Cursor<'a, T, C> {}

impl<'a, T: fmt::Debug, C: Comparator<T>> fmt::Debug for Cursor<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get().ok()).finish()
    }
}

/// Exclusive position over a tree; can mutate and remove elements.
pub struct CursorMut<'a, T, C: Comparator<T> = NaturalOrder> {
    pub(crate) node: Link<T>,
    pub(crate) tree: &'a mut RbTree<T, C>,
}

// Thread-safety follows the exclusive borrow, not the node pointer.
unsafe impl<'a, T: Send, C: Comparator<T> + Send> Send for CursorMut<'a, T, C> {}
unsafe impl<'a, T: Sync, C: Comparator<T> + Sync> Sync for CursorMut<'a, T, C> {}

impl<'a, T, C: Comparator<T>> CursorMut<'a, T, C> {
    pub fn get(&self) -> Result<&T> {
        match self.node {
            Some(node) => unsafe { Ok(&(*node.as_ptr()).key) },
            None => Err(TreeError::OutOfBounds),
        }
    }

    /// Mutable borrow of the element under the cursor.
    ///
    /// The caller must not modify whatever the comparator inspects; the
    /// element's position is not re-derived.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        match self.node {
            Some(node) => unsafe { Ok(&mut (*node.as_ptr()).key) },
            None => Err(TreeError::OutOfBounds),
        }
    }

    /// Consumes the cursor into a mutable borrow living as long as the
    /// underlying tree borrow. Same contract as [`CursorMut::get_mut`].
    pub fn into_mut(self) -> Result<&'a mut T> {
        match self.node {
            Some(node) => unsafe { Ok(&mut (*node.as_ptr()).key) },
            None => Err(TreeError::OutOfBounds),
        }
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    pub fn move_next(&mut self) {
        self.node = match self.node {
            Some(node) => unsafe { successor(node) },
            None => self.tree.first_node(),
        };
    }

    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(node) => unsafe { predecessor(node) },
            None => self.tree.last_node(),
        };
    }

    /// Removes the element under the cursor, rebalancing the tree, and
    /// leaves the cursor at the end position.
    pub fn remove_current(&mut self) -> Result<T> {
        let node = self.node.take().ok_or(TreeError::OutOfBounds)?;
        Ok(unsafe { self.tree.remove_node(node) })
    }

    /// Read-only view of this position.
    pub fn as_cursor(&self) -> Cursor<'_, T, C> {
        Cursor {
            node: self.node,
            tree: &*self.tree,
        }
    }
}

/// Borrowed in-order iterator.
pub struct Iter<'a, T> {
    pub(crate) front: Link<T>,
    pub(crate) back: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _marker: PhantomData<&'a T>,
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        unsafe {
            self.front = successor(node);
            Some(&(*node.as_ptr()).key)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        unsafe {
            self.back = predecessor(node);
            Some(&(*node.as_ptr()).key)
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Consuming in-order iterator.
///
/// Tears the tree down as it goes: each step detaches the minimum and lets
/// its right subtree take its place. No color repair happens; the structure
/// is being destroyed, not kept.
pub struct IntoIter<T> {
    pub(crate) root: Link<T>,
    pub(crate) remaining: usize,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let root = self.root?;
        unsafe {
            let node = min_node(root);
            let right = (*node.as_ptr()).right;
            match (*node.as_ptr()).parent {
                Some(parent) => {
                    (*parent.as_ptr()).left = right;
                    if let Some(r) = right {
                        (*r.as_ptr()).parent = Some(parent);
                    }
                }
                None => {
                    self.root = right;
                    if let Some(r) = right {
                        (*r.as_ptr()).parent = None;
                    }
                }
            }
            self.remaining -= 1;
            Some(Node::dealloc(node))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
