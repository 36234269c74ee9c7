//! Error types for Trellis.
//!
//! Every fallible operation in the widget tree reports a typed reason instead
//! of a bare boolean. None of these errors are fatal: the tree is left exactly
//! as it was before the failed call.

use thiserror::Error;

use crate::skin::SkinError;
use crate::variant::VariantError;

/// The main error type for Trellis operations.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Tree-structure error.
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
    /// Focus-related error.
    #[error("focus error: {0}")]
    Focus(#[from] FocusError),
    /// Drag-and-drop error.
    #[error("drag error: {0}")]
    Drag(#[from] DragError),
    /// Variant access error.
    #[error("variant error: {0}")]
    Variant(#[from] VariantError),
    /// Skin loading error.
    #[error("skin error: {0}")]
    Skin(#[from] SkinError),
}

/// Errors reported by attach/detach operations on the widget tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The node id is invalid or the node has been destroyed.
    #[error("invalid or destroyed node")]
    InvalidNode,
    /// Attempted to attach a node to itself.
    #[error("a node cannot be its own child")]
    AttachSelf,
    /// The node to insert and the insertion anchor are the same node.
    #[error("a node cannot be inserted before itself")]
    AttachBeforeSelf,
    /// The node already has a parent and must be detached first.
    #[error("node already has a parent")]
    AlreadyParented,
    /// The node is not a direct child of the given parent.
    #[error("node is not a child of the given parent")]
    NotAChild,
    /// Attaching would make a node its own ancestor.
    #[error("cannot attach an ancestor as a descendant of itself")]
    CircularParentage,
}

/// Errors reported when moving keyboard focus.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    /// The node id is invalid or the node has been destroyed.
    #[error("invalid or destroyed node")]
    InvalidNode,
    /// The node or one of its ancestors is disabled.
    #[error("node or one of its ancestors is disabled")]
    Disabled,
    /// The current focus holder refused to give up focus.
    #[error("current focus holder refused to lose focus")]
    Refused,
}

/// Errors reported when starting a drag-and-drop session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    /// A drag-and-drop session is already in progress.
    #[error("a drag-and-drop session is already active")]
    AlreadyActive,
    /// The dragged payload is empty.
    #[error("cannot drag an empty payload")]
    EmptyPayload,
    /// The source node id is invalid or the node has been destroyed.
    #[error("invalid or destroyed drag source")]
    InvalidSource,
}

/// Result type for tree mutations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;

/// A specialized Result type for Trellis operations.
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umbrella_conversion() {
        let err: TrellisError = TreeError::AlreadyParented.into();
        assert!(matches!(err, TrellisError::Tree(TreeError::AlreadyParented)));
        assert_eq!(err.to_string(), "tree error: node already has a parent");

        let err: TrellisError = FocusError::Refused.into();
        assert_eq!(
            err.to_string(),
            "focus error: current focus holder refused to lose focus"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err: TrellisError = DragError::EmptyPayload.into();
        let source = err.source().expect("umbrella error keeps its source");
        assert_eq!(source.to_string(), "cannot drag an empty payload");
    }
}
