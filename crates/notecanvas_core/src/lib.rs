//! notecanvas core
//!
//! Foundational types shared by the drawing context and the text estimator:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in `f64`
//! - **Attributes**: ordered SVG-style presentation attributes with
//!   inherited-value elision
//! - **Scene tree**: arena-backed tree of surface/group/path/rect/text nodes
//! - **Registry**: identifier and category lookups kept alongside the tree
//!
//! # Example
//!
//! ```rust
//! use notecanvas_core::{Attributes, NodeKind, SceneNode, SceneTree};
//!
//! let mut tree = SceneTree::new(Attributes::new());
//! let root = tree.root();
//! let group = tree
//!     .append(root, SceneNode::new(NodeKind::Group).with_category("vf-note"))
//!     .unwrap();
//!
//! assert_eq!(tree.registry().by_category("vf-note"), &[group]);
//! ```

pub mod attributes;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod scene;

pub use attributes::{fmt_num, keys, Attributes};
pub use error::{Result, SceneError};
pub use geometry::{Point, Rect, Size};
pub use registry::Registry;
pub use scene::{NodeId, NodeKey, NodeKind, SceneNode, SceneTree};
