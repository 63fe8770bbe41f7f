//! Error taxonomy for tree operations.
//!
//! Every error here is a deterministic consequence of a caller-supplied key
//! or position and is reported synchronously. Nothing is transient and
//! nothing is retried.

/// Result type for tree operations.
pub type Result<T> = core::result::Result<T, TreeError>;

/// Errors surfaced by the tree and its adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Keyed lookup on a key that is not present.
    #[error("key not found")]
    KeyNotFound,

    /// Dereference of the past-the-end position, which carries no element.
    #[error("position is past the end")]
    OutOfBounds,

    /// The container already holds `max_size()` elements; raised before any
    /// allocation is attempted.
    #[error("capacity exceeded")]
    CapacityExceeded,
}
