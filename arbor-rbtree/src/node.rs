//! Node store for the tree engine.
//!
//! Nodes live on the heap and are wired together with raw pointers. The
//! `left`/`right` edges are the owning ones: teardown and deep copies walk
//! only those. The `parent` edge is a navigation aid and must never be used
//! to free memory.

use core::ptr::NonNull;

use static_assertions::assert_eq_size;

/// Node color tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Nullable link between nodes.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

// A link occupies one pointer; `None` lives in the null niche.
assert_eq_size!(Link<u64>, usize);

pub(crate) struct Node<T> {
    pub(crate) color: Color,
    pub(crate) parent: Link<T>,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) key: T,
}

impl<T> Node<T> {
    /// Allocates a fresh red node with no relations.
    pub(crate) fn alloc(key: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
            key,
        });
        // A Box is never null.
        unsafe { NonNull::new_unchecked(Box::into_raw(node)) }
    }

    /// Reclaims a detached node, returning its payload.
    ///
    /// # Safety
    /// `node` must come from [`Node::alloc`] and must no longer be reachable
    /// from any tree.
    pub(crate) unsafe fn dealloc(node: NonNull<Node<T>>) -> T {
        Box::from_raw(node.as_ptr()).key
    }
}

/// Parent's parent, if both levels exist.
///
/// # Safety
/// `node` must point into a live tree. Same for the rest of this module.
pub(crate) unsafe fn grandparent<T>(node: NonNull<Node<T>>) -> Link<T> {
    let parent = (*node.as_ptr()).parent?;
    (*parent.as_ptr()).parent
}

/// The parent's other child.
pub(crate) unsafe fn uncle<T>(node: NonNull<Node<T>>) -> Link<T> {
    let parent = (*node.as_ptr()).parent?;
    let grand = grandparent(node)?;
    if Some(parent) == (*grand.as_ptr()).left {
        (*grand.as_ptr()).right
    } else {
        (*grand.as_ptr()).left
    }
}

/// This node's other-side neighbor under the same parent.
pub(crate) unsafe fn sibling<T>(node: NonNull<Node<T>>) -> Link<T> {
    let parent = (*node.as_ptr()).parent?;
    if Some(node) == (*parent.as_ptr()).left {
        (*parent.as_ptr()).right
    } else {
        (*parent.as_ptr()).left
    }
}

pub(crate) unsafe fn is_red<T>(link: Link<T>) -> bool {
    match link {
        Some(node) => (*node.as_ptr()).color == Color::Red,
        None => false,
    }
}

/// Leftmost node of the subtree rooted at `node`.
pub(crate) unsafe fn min_node<T>(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(left) = (*node.as_ptr()).left {
        node = left;
    }
    node
}

/// Rightmost node of the subtree rooted at `node`.
pub(crate) unsafe fn max_node<T>(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(right) = (*node.as_ptr()).right {
        node = right;
    }
    node
}

/// Frees `node` and everything below it, following only the owning edges.
///
/// # Safety
/// `node` must be the root of a subtree no longer reachable elsewhere.
pub(crate) unsafe fn free_subtree<T>(node: NonNull<Node<T>>) {
    if let Some(left) = (*node.as_ptr()).left {
        free_subtree(left);
    }
    if let Some(right) = (*node.as_ptr()).right {
        free_subtree(right);
    }
    drop(Box::from_raw(node.as_ptr()));
}

/// Duplicates a subtree, preserving color and structure. The copy's nodes
/// point at `parent` and at each other only; no storage is shared.
///
/// # Safety
/// `node` must point into a live tree.
pub(crate) unsafe fn clone_subtree<T: Clone>(
    node: NonNull<Node<T>>,
    parent: Link<T>,
) -> NonNull<Node<T>> {
    let copy = Node::alloc((*node.as_ptr()).key.clone());
    (*copy.as_ptr()).color = (*node.as_ptr()).color;
    (*copy.as_ptr()).parent = parent;
    if let Some(left) = (*node.as_ptr()).left {
        (*copy.as_ptr()).left = Some(clone_subtree(left, Some(copy)));
    }
    if let Some(right) = (*node.as_ptr()).right {
        (*copy.as_ptr()).right = Some(clone_subtree(right, Some(copy)));
    }
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `grand -> parent(left) -> node(left)` with `uncle` as the
    /// grandparent's right child.
    unsafe fn link_chain(
        grand: NonNull<Node<i32>>,
        parent: NonNull<Node<i32>>,
        node: NonNull<Node<i32>>,
        uncle_node: NonNull<Node<i32>>,
    ) {
        (*grand.as_ptr()).left = Some(parent);
        (*grand.as_ptr()).right = Some(uncle_node);
        (*parent.as_ptr()).parent = Some(grand);
        (*uncle_node.as_ptr()).parent = Some(grand);
        (*parent.as_ptr()).left = Some(node);
        (*node.as_ptr()).parent = Some(parent);
    }

    #[test]
    fn test_alloc_is_red_and_unlinked() {
        let node = Node::alloc(42);
        unsafe {
            assert_eq!((*node.as_ptr()).color, Color::Red);
            assert!((*node.as_ptr()).parent.is_none());
            assert!((*node.as_ptr()).left.is_none());
            assert!((*node.as_ptr()).right.is_none());
            assert_eq!(Node::dealloc(node), 42);
        }
    }

    #[test]
    fn test_relation_lookups() {
        let grand = Node::alloc(4);
        let parent = Node::alloc(2);
        let node = Node::alloc(1);
        let uncle_node = Node::alloc(6);
        unsafe {
            link_chain(grand, parent, node, uncle_node);

            assert_eq!(grandparent(node), Some(grand));
            assert_eq!(uncle(node), Some(uncle_node));
            assert_eq!(sibling(parent), Some(uncle_node));
            assert_eq!(sibling(uncle_node), Some(parent));

            // The root has no relatives.
            assert_eq!(grandparent(grand), None);
            assert_eq!(uncle(grand), None);
            assert_eq!(sibling(grand), None);
            // A root's child has a sibling but no uncle.
            assert_eq!(uncle(parent), None);

            free_subtree(grand);
        }
    }

    #[test]
    fn test_min_max_walks() {
        let grand = Node::alloc(4);
        let parent = Node::alloc(2);
        let node = Node::alloc(1);
        let uncle_node = Node::alloc(6);
        unsafe {
            link_chain(grand, parent, node, uncle_node);
            assert_eq!((*min_node(grand).as_ptr()).key, 1);
            assert_eq!((*max_node(grand).as_ptr()).key, 6);
            free_subtree(grand);
        }
    }

    #[test]
    fn test_clone_subtree_is_independent() {
        let grand = Node::alloc(4);
        let parent = Node::alloc(2);
        let node = Node::alloc(1);
        let uncle_node = Node::alloc(6);
        unsafe {
            link_chain(grand, parent, node, uncle_node);
            (*grand.as_ptr()).color = Color::Black;

            let copy = clone_subtree(grand, None);
            assert_ne!(copy, grand);
            assert_eq!((*copy.as_ptr()).key, 4);
            assert_eq!((*copy.as_ptr()).color, Color::Black);
            let copy_left = (*copy.as_ptr()).left.unwrap();
            assert_ne!(copy_left, parent);
            assert_eq!((*copy_left.as_ptr()).key, 2);
            assert_eq!((*copy_left.as_ptr()).parent, Some(copy));

            free_subtree(grand);
            free_subtree(copy);
        }
    }
}
