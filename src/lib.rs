//! Ordered containers backed by a red-black tree.
//!
//! This crate contains:
//! - [`Set`]: ordered set of unique keys
//! - [`MultiSet`]: ordered set admitting duplicate keys
//! - [`Map`]: ordered key-value map with unique keys
//!
//! All three are thin adapters over [`arbor_rbtree::RbTree`]: they translate
//! domain operations (`contains`, `at`, `lower_bound`, ...) into the tree
//! primitives (`find`, `insert_unique`, `insert_multi`, `remove`) and carry
//! no balancing logic of their own.

pub mod map;
pub mod multiset;
pub mod set;

pub use map::Map;
pub use multiset::MultiSet;
pub use set::Set;

pub use arbor_rbtree::{
    Comparator, Cursor, CursorMut, NaturalOrder, RbTree, Result, TreeError,
};
