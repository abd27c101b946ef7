//! Scene error types

use thiserror::Error;

use crate::scene::{NodeId, NodeKind};

/// Structural misuse of the scene tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A group close with only the root frame left on the stack
    #[error("closeGroup called without a matching openGroup")]
    UnbalancedGroup,

    /// Handle does not refer to a live node (stale after a clear)
    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),

    /// Children were appended to a leaf
    #[error("{0:?} nodes cannot hold children")]
    NotAContainer(NodeKind),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
