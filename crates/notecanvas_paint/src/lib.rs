//! notecanvas paint API
//!
//! An immediate-mode, canvas-style drawing context that records what it is
//! told to draw as a retained scene tree instead of pixels.
//!
//! # Features
//!
//! - Paths (lines, cubic and quadratic curves, circular arcs) with fixed
//!   coordinate precision
//! - Rectangles, including invisible hit-test rectangles
//! - Text nodes and glyph-aware text measurement
//! - Save/restore of paint state
//! - Nested groups with inherited attributes, rotations about a pivot
//! - Surface scaling expressed through a view-box
//!
//! # Example
//!
//! ```rust
//! use notecanvas_paint::prelude::*;
//!
//! let mut ctx = SceneContext::new(400.0, 200.0);
//! let note = ctx.open_group(Some("note"), Some("0"));
//! ctx.begin_path().move_to(10.0, 20.0).line_to(100.0, 200.0).stroke();
//! ctx.close_group().unwrap();
//!
//! assert_eq!(ctx.element_by_id("0"), Some(note));
//! assert_eq!(ctx.node(note).unwrap().children().len(), 1);
//! ```

pub mod context;
pub mod error;
pub mod group;
pub mod options;
pub mod path;
pub mod render;
pub mod state;

pub use context::{GroupOptions, SceneContext};
pub use error::{PaintError, Result};
pub use group::GroupStack;
pub use options::ContextOptions;
pub use path::{normalize_angle, PathBuilder, Precision};
pub use render::RenderContext;
pub use state::{LineCap, PaintStack, PaintState, Shadow};

pub mod prelude {
    pub use crate::context::{GroupOptions, SceneContext};
    pub use crate::error::PaintError;
    pub use crate::options::ContextOptions;
    pub use crate::render::RenderContext;
    pub use crate::state::LineCap;
    pub use notecanvas_core::{Attributes, NodeId, NodeKind, Rect, SceneNode};
    pub use notecanvas_text::{FontInfo, FontSize, FontSpec, FontStyle, FontWeight};
}
