//! Self-balancing ordered-tree engine.
//!
//! This crate contains:
//! - [`RbTree`]: a red-black tree over caller-supplied elements
//! - [`Comparator`]: the strict-weak-order seam adapters plug into
//! - [`Cursor`] / [`CursorMut`]: bidirectional positions over the tree
//! - [`TreeError`]: the deterministic error taxonomy
//!
//! The classic invariants hold after every mutation: the root is black, no
//! red node has a red parent, and every path from a node down to an absent
//! child crosses the same number of black nodes. Mutation is single-writer;
//! callers serialize concurrent access.

mod cursor;
mod error;
mod node;

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use tracing::trace;

pub use cursor::{Cursor, CursorMut, IntoIter, Iter};
pub use error::{Result, TreeError};

use node::{clone_subtree, free_subtree, is_red, max_node, min_node, sibling, uncle, Color, Link, Node};

/// Strict weak order over elements.
///
/// Two elements are equal exactly when neither is less than the other;
/// nothing else, identity included, decides uniqueness collisions.
pub trait Comparator<T> {
    fn less(&self, a: &T, b: &T) -> bool;

    /// Equivalence derived from the order.
    fn same(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Comparator delegating to `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Red-black tree over elements ordered by `C`.
///
/// Node ownership runs strictly root-to-leaf through the child edges; the
/// parent back-reference is navigation only, so teardown never follows it.
/// An empty tree is the `root == None` state, not a sentinel node.
pub struct RbTree<T, C: Comparator<T> = NaturalOrder> {
    root: Link<T>,
    len: usize,
    cmp: C,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send, C: Comparator<T> + Send> Send for RbTree<T, C> {}
unsafe impl<T: Sync, C: Comparator<T> + Sync> Sync for RbTree<T, C> {}

impl<T: Ord> RbTree<T> {
    /// Empty tree under the natural `Ord` order.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> RbTree<T, C> {
    /// Empty tree under a caller-supplied order.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Theoretical element capacity.
    pub fn max_size(&self) -> usize {
        usize::MAX / mem::size_of::<Node<T>>() / 2
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Position of a comparator-equal element, or the end position.
    pub fn find(&self, key: &T) -> Cursor<'_, T, C> {
        Cursor {
            node: self.find_node(key),
            tree: self,
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find_node(key).is_some()
    }

    /// Position described by `probe`, which reports how a probed element
    /// orders relative to the target. Lets adapters search without
    /// materializing a full element (the map probes by key alone).
    pub fn find_by<F>(&self, probe: F) -> Cursor<'_, T, C>
    where
        F: Fn(&T) -> Ordering,
    {
        Cursor {
            node: self.find_node_by(&probe),
            tree: self,
        }
    }

    /// Exclusive variant of [`RbTree::find_by`].
    pub fn find_by_mut<F>(&mut self, probe: F) -> CursorMut<'_, T, C>
    where
        F: Fn(&T) -> Ordering,
    {
        CursorMut {
            node: self.find_node_by(&probe),
            tree: self,
        }
    }

    /// First position whose element is not less than `key`.
    pub fn lower_bound(&self, key: &T) -> Cursor<'_, T, C> {
        let mut current = self.root;
        let mut candidate: Link<T> = None;
        while let Some(node) = current {
            unsafe {
                if self.cmp.less(&(*node.as_ptr()).key, key) {
                    current = (*node.as_ptr()).right;
                } else {
                    candidate = Some(node);
                    current = (*node.as_ptr()).left;
                }
            }
        }
        Cursor {
            node: candidate,
            tree: self,
        }
    }

    /// First position whose element is greater than `key`.
    pub fn upper_bound(&self, key: &T) -> Cursor<'_, T, C> {
        let mut current = self.root;
        let mut candidate: Link<T> = None;
        while let Some(node) = current {
            unsafe {
                if self.cmp.less(key, &(*node.as_ptr()).key) {
                    candidate = Some(node);
                    current = (*node.as_ptr()).left;
                } else {
                    current = (*node.as_ptr()).right;
                }
            }
        }
        Cursor {
            node: candidate,
            tree: self,
        }
    }

    fn find_node(&self, key: &T) -> Link<T> {
        let mut current = self.root;
        while let Some(node) = current {
            unsafe {
                if self.cmp.less(key, &(*node.as_ptr()).key) {
                    current = (*node.as_ptr()).left;
                } else if self.cmp.less(&(*node.as_ptr()).key, key) {
                    current = (*node.as_ptr()).right;
                } else {
                    return Some(node);
                }
            }
        }
        None
    }

    fn find_node_by<F>(&self, probe: &F) -> Link<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut current = self.root;
        while let Some(node) = current {
            match probe(unsafe { &(*node.as_ptr()).key }) {
                Ordering::Greater => current = unsafe { (*node.as_ptr()).left },
                Ordering::Less => current = unsafe { (*node.as_ptr()).right },
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts rejecting comparator-equal duplicates.
    ///
    /// Returns the position of the key and whether a new node was created.
    /// On a duplicate nothing is allocated and nothing moves.
    pub fn insert_unique(&mut self, key: T) -> Result<(Cursor<'_, T, C>, bool)> {
        let (node, inserted) = self.insert_node(key, true)?;
        Ok((
            Cursor {
                node: Some(node),
                tree: &*self,
            },
            inserted,
        ))
    }

    /// Inserts admitting duplicates. Equal keys end up adjacent in
    /// traversal order; their relative order is unspecified.
    pub fn insert_multi(&mut self, key: T) -> Result<Cursor<'_, T, C>> {
        let (node, _) = self.insert_node(key, false)?;
        Ok(Cursor {
            node: Some(node),
            tree: &*self,
        })
    }

    fn insert_node(&mut self, key: T, unique: bool) -> Result<(NonNull<Node<T>>, bool)> {
        if self.len >= self.max_size() {
            return Err(TreeError::CapacityExceeded);
        }

        // Binary-search descent to an absent child slot.
        let mut current = self.root;
        let mut parent: Link<T> = None;
        let mut went_left = false;
        while let Some(cur) = current {
            parent = Some(cur);
            unsafe {
                if self.cmp.less(&key, &(*cur.as_ptr()).key) {
                    current = (*cur.as_ptr()).left;
                    went_left = true;
                } else {
                    if unique && !self.cmp.less(&(*cur.as_ptr()).key, &key) {
                        return Ok((cur, false));
                    }
                    current = (*cur.as_ptr()).right;
                    went_left = false;
                }
            }
        }

        let node = Node::alloc(key);
        unsafe {
            match parent {
                None => {
                    // First element becomes the black root.
                    (*node.as_ptr()).color = Color::Black;
                    self.root = Some(node);
                }
                Some(p) => {
                    (*node.as_ptr()).parent = Some(p);
                    if went_left {
                        (*p.as_ptr()).left = Some(node);
                    } else {
                        (*p.as_ptr()).right = Some(node);
                    }
                }
            }
            self.len += 1;
            self.insert_fixup(node);
        }
        trace!(len = self.len, "inserted node");
        Ok((node, true))
    }

    /// Restores the color invariants after attaching a red leaf.
    ///
    /// A red uncle means recolor and push the violation toward the root. A
    /// black or absent uncle means straighten a zig-zag into a zig-zig,
    /// rotate the grandparent and swap its color with the promoted parent,
    /// which resolves locally. The root is forced black at the end.
    unsafe fn insert_fixup(&mut self, mut node: NonNull<Node<T>>) {
        loop {
            let Some(mut parent) = (*node.as_ptr()).parent else {
                break;
            };
            if (*node.as_ptr()).color != Color::Red || (*parent.as_ptr()).color != Color::Red {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(grand) = (*parent.as_ptr()).parent else {
                break;
            };
            let parent_is_left = Some(parent) == (*grand.as_ptr()).left;

            match uncle(node) {
                Some(u) if (*u.as_ptr()).color == Color::Red => {
                    (*parent.as_ptr()).color = Color::Black;
                    (*u.as_ptr()).color = Color::Black;
                    (*grand.as_ptr()).color = Color::Red;
                    node = grand;
                }
                _ => {
                    if parent_is_left && Some(node) == (*parent.as_ptr()).right {
                        self.rotate_left(parent);
                        mem::swap(&mut node, &mut parent);
                    } else if !parent_is_left && Some(node) == (*parent.as_ptr()).left {
                        self.rotate_right(parent);
                        mem::swap(&mut node, &mut parent);
                    }

                    if parent_is_left {
                        self.rotate_right(grand);
                    } else {
                        self.rotate_left(grand);
                    }
                    mem::swap(&mut (*parent.as_ptr()).color, &mut (*grand.as_ptr()).color);
                    node = parent;
                }
            }
        }

        if let Some(root) = self.root {
            (*root.as_ptr()).color = Color::Black;
        }
    }

    // ========================================================================
    // Rotation primitives
    // ========================================================================

    /// Promotes `node`'s right child into its position; `node` becomes the
    /// promoted child's left child and the displaced subtree becomes
    /// `node`'s new right subtree. In-order sequence is unchanged. Requires
    /// a right child.
    unsafe fn rotate_left(&mut self, node: NonNull<Node<T>>) {
        let Some(promoted) = (*node.as_ptr()).right else {
            return;
        };

        (*node.as_ptr()).right = (*promoted.as_ptr()).left;
        if let Some(moved) = (*promoted.as_ptr()).left {
            (*moved.as_ptr()).parent = Some(node);
        }

        let parent = (*node.as_ptr()).parent;
        (*promoted.as_ptr()).parent = parent;
        match parent {
            None => self.root = Some(promoted),
            Some(p) if Some(node) == (*p.as_ptr()).left => (*p.as_ptr()).left = Some(promoted),
            Some(p) => (*p.as_ptr()).right = Some(promoted),
        }

        (*promoted.as_ptr()).left = Some(node);
        (*node.as_ptr()).parent = Some(promoted);
    }

    /// Mirror of [`RbTree::rotate_left`]. Requires a left child.
    unsafe fn rotate_right(&mut self, node: NonNull<Node<T>>) {
        let Some(promoted) = (*node.as_ptr()).left else {
            return;
        };

        (*node.as_ptr()).left = (*promoted.as_ptr()).right;
        if let Some(moved) = (*promoted.as_ptr()).right {
            (*moved.as_ptr()).parent = Some(node);
        }

        let parent = (*node.as_ptr()).parent;
        (*promoted.as_ptr()).parent = parent;
        match parent {
            None => self.root = Some(promoted),
            Some(p) if Some(node) == (*p.as_ptr()).right => (*p.as_ptr()).right = Some(promoted),
            Some(p) => (*p.as_ptr()).left = Some(promoted),
        }

        (*promoted.as_ptr()).right = Some(node);
        (*node.as_ptr()).parent = Some(promoted);
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Removes one comparator-equal element, returning it.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let node = self.find_node(key)?;
        Some(unsafe { self.remove_node(node) })
    }

    /// Removes the element located by `probe`, returning it.
    pub fn remove_by<F>(&mut self, probe: F) -> Option<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let node = self.find_node_by(&probe)?;
        Some(unsafe { self.remove_node(node) })
    }

    /// Detaches the element held by `node`, freeing one physical node.
    ///
    /// # Safety
    /// `node` must belong to this tree.
    pub(crate) unsafe fn remove_node(&mut self, node: NonNull<Node<T>>) -> T {
        self.len -= 1;
        trace!(len = self.len, "removing node");
        self.remove_rec(node)
    }

    /// Case dispatch on color and child count. The two-child and one-child
    /// cases swap payloads with the in-order predecessor (or the sole
    /// child) and recurse on that strictly simpler node; recursion depth is
    /// bounded by the tree height. A black leaf is repaired by the side
    /// fixups before it is unlinked.
    unsafe fn remove_rec(&mut self, node: NonNull<Node<T>>) -> T {
        let left = (*node.as_ptr()).left;
        let right = (*node.as_ptr()).right;

        match ((*node.as_ptr()).color, left, right) {
            // A red leaf detaches directly; black heights are untouched.
            (Color::Red, None, None) => {
                self.unlink_leaf(node);
                Node::dealloc(node)
            }
            (_, Some(l), Some(_)) => {
                let pred = max_node(l);
                mem::swap(&mut (*node.as_ptr()).key, &mut (*pred.as_ptr()).key);
                self.remove_rec(pred)
            }
            (Color::Black, Some(child), None) | (Color::Black, None, Some(child)) => {
                mem::swap(&mut (*node.as_ptr()).key, &mut (*child.as_ptr()).key);
                self.remove_rec(child)
            }
            (Color::Black, None, None) => {
                match (*node.as_ptr()).parent {
                    Some(parent) => {
                        // The path through this leaf loses a black node;
                        // repair before physically removing it.
                        if Some(node) == (*parent.as_ptr()).left {
                            self.remove_fixup_left(node);
                        } else {
                            self.remove_fixup_right(node);
                        }
                        self.unlink_leaf(node);
                    }
                    // Sole remaining node: the tree reverts to the empty
                    // state.
                    None => self.root = None,
                }
                Node::dealloc(node)
            }
            // A red node with exactly one child cannot exist under the
            // invariants; treated like the one-child case.
            (Color::Red, Some(child), None) | (Color::Red, None, Some(child)) => {
                mem::swap(&mut (*node.as_ptr()).key, &mut (*child.as_ptr()).key);
                self.remove_rec(child)
            }
        }
    }

    unsafe fn unlink_leaf(&mut self, node: NonNull<Node<T>>) {
        match (*node.as_ptr()).parent {
            Some(parent) => {
                if Some(node) == (*parent.as_ptr()).left {
                    (*parent.as_ptr()).left = None;
                } else {
                    (*parent.as_ptr()).right = None;
                }
            }
            None => self.root = None,
        }
    }

    /// Left-side deletion fixup: `node` is a left child whose subtree is
    /// one black short. Mirrored by [`RbTree::remove_fixup_right`].
    unsafe fn remove_fixup_left(&mut self, node: NonNull<Node<T>>) {
        let Some(parent) = (*node.as_ptr()).parent else {
            return;
        };
        let Some(sib) = sibling(node) else {
            return;
        };

        if (*sib.as_ptr()).color == Color::Black {
            let near = (*sib.as_ptr()).left;
            let far = (*sib.as_ptr()).right;
            if is_red(far) {
                // Far nephew red: recolor, one rotation, done.
                (*sib.as_ptr()).color = (*parent.as_ptr()).color;
                (*parent.as_ptr()).color = Color::Black;
                if let Some(f) = far {
                    (*f.as_ptr()).color = Color::Black;
                }
                self.rotate_left(parent);
            } else if is_red(near) {
                // Near nephew red: rotate it into the far slot, then the
                // case above applies.
                if let Some(n) = near {
                    (*n.as_ptr()).color = Color::Black;
                }
                (*sib.as_ptr()).color = Color::Red;
                self.rotate_right(sib);
                self.remove_fixup_left(node);
            } else {
                // Both nephews black: give up one black on the sibling side
                // too, then absorb the deficit in a red parent or push it
                // one level up.
                (*sib.as_ptr()).color = Color::Red;
                if (*parent.as_ptr()).color == Color::Red {
                    (*parent.as_ptr()).color = Color::Black;
                } else {
                    self.remove_fixup_up(parent);
                }
            }
        } else {
            // Red sibling: rotate it above the parent and re-derive the
            // sibling relationship.
            (*sib.as_ptr()).color = Color::Black;
            (*parent.as_ptr()).color = Color::Red;
            self.rotate_left(parent);
            self.remove_fixup_left(node);
        }
    }

    /// Right-side deletion fixup: mirror of the left-side cases.
    unsafe fn remove_fixup_right(&mut self, node: NonNull<Node<T>>) {
        let Some(parent) = (*node.as_ptr()).parent else {
            return;
        };
        let Some(sib) = sibling(node) else {
            return;
        };

        if (*sib.as_ptr()).color == Color::Black {
            let near = (*sib.as_ptr()).right;
            let far = (*sib.as_ptr()).left;
            if is_red(far) {
                (*sib.as_ptr()).color = (*parent.as_ptr()).color;
                (*parent.as_ptr()).color = Color::Black;
                if let Some(f) = far {
                    (*f.as_ptr()).color = Color::Black;
                }
                self.rotate_right(parent);
            } else if is_red(near) {
                if let Some(n) = near {
                    (*n.as_ptr()).color = Color::Black;
                }
                (*sib.as_ptr()).color = Color::Red;
                self.rotate_left(sib);
                self.remove_fixup_right(node);
            } else {
                (*sib.as_ptr()).color = Color::Red;
                if (*parent.as_ptr()).color == Color::Red {
                    (*parent.as_ptr()).color = Color::Black;
                } else {
                    self.remove_fixup_up(parent);
                }
            }
        } else {
            (*sib.as_ptr()).color = Color::Black;
            (*parent.as_ptr()).color = Color::Red;
            self.rotate_right(parent);
            self.remove_fixup_right(node);
        }
    }

    /// The black deficit now covers `node`'s whole subtree; continue the
    /// repair one level up. A deficit reaching the root is absorbed: every
    /// path lost one black node alike.
    unsafe fn remove_fixup_up(&mut self, node: NonNull<Node<T>>) {
        if let Some(parent) = (*node.as_ptr()).parent {
            if Some(node) == (*parent.as_ptr()).left {
                self.remove_fixup_left(node);
            } else {
                self.remove_fixup_right(node);
            }
        }
    }

    // ========================================================================
    // Whole-tree operations
    // ========================================================================

    /// Removes every element, releasing each subtree root-to-leaf.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            unsafe { free_subtree(root) };
        }
        self.len = 0;
    }

    /// Consumes the contents in ascending order, leaving the tree empty.
    pub fn drain(&mut self) -> IntoIter<T> {
        trace!(len = self.len, "draining tree");
        IntoIter {
            root: self.root.take(),
            remaining: mem::replace(&mut self.len, 0),
        }
    }

    /// Drains `other`, re-inserting each element with unique semantics;
    /// duplicates of already-present keys are dropped. `other` ends up
    /// empty.
    pub fn merge_unique(&mut self, other: &mut Self) -> Result<()> {
        for key in other.drain() {
            self.insert_unique(key)?;
        }
        Ok(())
    }

    /// Drains `other`, re-inserting each element with multi semantics.
    pub fn merge_multi(&mut self, other: &mut Self) -> Result<()> {
        for key in other.drain() {
            self.insert_multi(key)?;
        }
        Ok(())
    }

    // ========================================================================
    // Cursors and iteration
    // ========================================================================

    /// Cursor at the minimum element, or at the end position when empty.
    pub fn cursor_front(&self) -> Cursor<'_, T, C> {
        Cursor {
            node: self.first_node(),
            tree: self,
        }
    }

    /// Cursor at the maximum element, or at the end position when empty.
    pub fn cursor_back(&self) -> Cursor<'_, T, C> {
        Cursor {
            node: self.last_node(),
            tree: self,
        }
    }

    /// Cursor at the past-the-end position.
    pub fn cursor_end(&self) -> Cursor<'_, T, C> {
        Cursor {
            node: None,
            tree: self,
        }
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, C> {
        CursorMut {
            node: self.first_node(),
            tree: self,
        }
    }

    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, C> {
        CursorMut {
            node: self.last_node(),
            tree: self,
        }
    }

    /// Borrowed in-order iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.first_node(),
            back: self.last_node(),
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    pub(crate) fn first_node(&self) -> Link<T> {
        match self.root {
            Some(root) => Some(unsafe { min_node(root) }),
            None => None,
        }
    }

    pub(crate) fn last_node(&self) -> Link<T> {
        match self.root {
            Some(root) => Some(unsafe { max_node(root) }),
            None => None,
        }
    }

    // ========================================================================
    // Validation (test support)
    // ========================================================================

    /// Walks the whole tree checking the color invariants, the parent
    /// back-references, the element count, and the traversal order.
    #[doc(hidden)]
    pub fn validate(&self) -> core::result::Result<(), String> {
        let Some(root) = self.root else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(format!("empty tree reports len {}", self.len))
            };
        };

        unsafe {
            if (*root.as_ptr()).color != Color::Black {
                return Err("root is red".into());
            }
            let (count, _black_height) = self.validate_subtree(root, None)?;
            if count != self.len {
                return Err(format!("len is {} but {} nodes are reachable", self.len, count));
            }
        }

        let mut prev: Option<&T> = None;
        for key in self.iter() {
            if let Some(p) = prev {
                if self.cmp.less(key, p) {
                    return Err("in-order traversal is not sorted".into());
                }
            }
            prev = Some(key);
        }
        Ok(())
    }

    unsafe fn validate_subtree(
        &self,
        node: NonNull<Node<T>>,
        parent: Link<T>,
    ) -> core::result::Result<(usize, usize), String> {
        if (*node.as_ptr()).parent != parent {
            return Err("parent back-reference does not match".into());
        }
        if (*node.as_ptr()).color == Color::Red && is_red(parent) {
            return Err("red node has a red parent".into());
        }

        let mut count = 1;
        let left_height = match (*node.as_ptr()).left {
            Some(left) => {
                if self.cmp.less(&(*node.as_ptr()).key, &(*left.as_ptr()).key) {
                    return Err("left child orders after its parent".into());
                }
                let (c, h) = self.validate_subtree(left, Some(node))?;
                count += c;
                h
            }
            None => 0,
        };
        let right_height = match (*node.as_ptr()).right {
            Some(right) => {
                if self.cmp.less(&(*right.as_ptr()).key, &(*node.as_ptr()).key) {
                    return Err("right child orders before its parent".into());
                }
                let (c, h) = self.validate_subtree(right, Some(node))?;
                count += c;
                h
            }
            None => 0,
        };
        if left_height != right_height {
            return Err(format!(
                "black heights differ: {left_height} left, {right_height} right"
            ));
        }

        let black = usize::from((*node.as_ptr()).color == Color::Black);
        Ok((count, left_height + black))
    }
}

impl<T, C: Comparator<T>> Drop for RbTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for RbTree<T, C> {
    /// Deep copy: every node is duplicated with its color and structure;
    /// the copy shares no storage with the original.
    fn clone(&self) -> Self {
        let root = match self.root {
            Some(root) => Some(unsafe { clone_subtree(root, None) }),
            None => None,
        };
        Self {
            root,
            len: self.len,
            cmp: self.cmp.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C: Comparator<T> + Default> Default for RbTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T>> IntoIterator for RbTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        self.drain()
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a RbTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
