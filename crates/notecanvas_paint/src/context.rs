//! Scene context
//!
//! [`SceneContext`] implements [`RenderContext`] by recording every drawing
//! command as a node in a [`SceneTree`]. Paint state lives in a save/restore
//! stack, the pending path in a [`PathBuilder`], and open groups in a
//! [`GroupStack`] that also decides which attributes a new node must carry.

use std::fmt;

use notecanvas_core::{fmt_num, keys, Attributes, NodeId, NodeKind, Point, Rect, SceneNode, SceneTree};
use notecanvas_text::{FontInfo, FontSpec, GlyphEstimator, TextMeasurer};

use crate::error::Result;
use crate::group::GroupStack;
use crate::options::ContextOptions;
use crate::path::PathBuilder;
use crate::render::RenderContext;
use crate::state::{LineCap, PaintStack, PaintState};

/// Extra settings for [`SceneContext::open_group_with`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupOptions {
    /// Hit-test the group by its bounding box rather than its painted area
    pub pointer_bbox: bool,
}

/// Records drawing commands into a scene tree
pub struct SceneContext {
    options: ContextOptions,
    tree: SceneTree,
    paint: PaintStack,
    path: PathBuilder,
    groups: GroupStack,
    measurer: Box<dyn TextMeasurer>,
    background_fill: String,
    width: f64,
    height: f64,
    scale_x: f64,
    scale_y: f64,
    view_box: Option<String>,
}

impl SceneContext {
    /// Create a context for a `width` by `height` surface with default options
    pub fn new(width: f64, height: f64) -> Self {
        Self::build(width, height, ContextOptions::default(), PaintState::default())
    }

    /// Create a context with custom options.
    ///
    /// Fails only if the configured font cannot be normalized.
    pub fn with_options(width: f64, height: f64, options: ContextOptions) -> Result<Self> {
        let state = options.initial_state()?;
        Ok(Self::build(width, height, options, state))
    }

    fn build(width: f64, height: f64, options: ContextOptions, state: PaintState) -> Self {
        let effective = state.attributes();
        let root_attributes = Attributes::new()
            .with_number(keys::WIDTH, width)
            .with_number(keys::HEIGHT, height)
            .merged(&effective);
        let tree = SceneTree::new(root_attributes);
        let groups = GroupStack::new(tree.root(), effective);

        tracing::debug!(width, height, "created scene context");

        Self {
            path: PathBuilder::new(options.precision()),
            background_fill: options.background_fill.clone(),
            options,
            tree,
            paint: PaintStack::new(state),
            groups,
            measurer: Box::new(GlyphEstimator),
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            view_box: None,
        }
    }

    /// Replace the text measurer used by `measure_text`
    pub fn set_measurer(&mut self, measurer: impl TextMeasurer + 'static) -> &mut Self {
        self.measurer = Box::new(measurer);
        self
    }

    // Accessors

    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.tree.get(id)
    }

    /// Look up a node by its identifier, given without the namespace prefix
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.registry().by_id(&self.namespaced(id))
    }

    /// Nodes carrying `category`, given without the namespace prefix, in
    /// creation order
    pub fn elements_by_category(&self, category: &str) -> &[NodeId] {
        self.tree.registry().by_category(&self.namespaced(category))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Cumulative scale factors
    pub fn scale_factors(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// `min-x min-y width height`, present once `scale` has been called
    pub fn view_box(&self) -> Option<&str> {
        self.view_box.as_deref()
    }

    pub fn path_data(&self) -> &str {
        self.path.data()
    }

    pub fn pen(&self) -> Point {
        self.path.pen()
    }

    /// Number of open groups
    pub fn depth(&self) -> usize {
        self.groups.depth()
    }

    pub fn paint_state(&self) -> &PaintState {
        self.paint.current()
    }

    pub fn fill_style(&self) -> &str {
        &self.paint.current().fill
    }

    pub fn stroke_style(&self) -> &str {
        &self.paint.current().stroke
    }

    pub fn background_fill_style(&self) -> &str {
        &self.background_fill
    }

    pub fn line_width(&self) -> f64 {
        self.paint.current().line_width
    }

    pub fn font(&self) -> &FontInfo {
        &self.paint.current().font
    }

    /// Current font as a CSS shorthand string
    pub fn font_css(&self) -> String {
        self.paint.current().font.to_css_string()
    }

    // Commands with explicit attributes

    /// Rectangle with `attributes` in place of the default outline style
    pub fn rect_with(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attributes: Attributes,
    ) -> &mut Self {
        let bounds = Rect::normalized(x, y, width, height);
        let geometry = Attributes::new()
            .with_number(keys::X, bounds.x())
            .with_number(keys::Y, bounds.y())
            .with_number(keys::WIDTH, bounds.width())
            .with_number(keys::HEIGHT, bounds.height());
        self.append_leaf(NodeKind::Rect, geometry.merged(&attributes), None);
        self
    }

    /// Fill the pending path using exactly `attributes`
    pub fn fill_with(&mut self, attributes: Attributes) -> &mut Self {
        self.append_path(attributes)
    }

    /// Stroke the pending path using exactly `attributes`
    pub fn stroke_with(&mut self, attributes: Attributes) -> &mut Self {
        self.append_path(attributes)
    }

    /// Open a group, optionally hit-tested by its bounding box
    pub fn open_group_with(
        &mut self,
        category: Option<&str>,
        id: Option<&str>,
        options: GroupOptions,
    ) -> NodeId {
        let mut extra = Attributes::new();
        if options.pointer_bbox {
            extra.set(keys::POINTER_EVENTS, "bounding-box");
        }
        self.push_group(category, id, extra)
    }

    // Internals

    fn namespaced(&self, label: &str) -> String {
        format!("{}{}", self.options.namespace_prefix, label)
    }

    fn label(&self, raw: Option<&str>) -> Option<String> {
        raw.filter(|label| !label.is_empty())
            .map(|label| self.namespaced(label))
    }

    /// Append a node at the insertion point.
    ///
    /// The insertion point is always a live container. Debug builds panic
    /// if the group stack and the tree disagree; release builds log the
    /// error and return the null handle.
    fn insert(&mut self, node: SceneNode) -> NodeId {
        let parent = self.groups.insertion_point();
        debug_assert!(
            self.tree.get(parent).is_some_and(|node| node.kind().is_container()),
            "insertion point {parent:?} is not a live container"
        );
        match self.tree.append(parent, node) {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(%err, "scene node dropped");
                NodeId::default()
            }
        }
    }

    fn append_leaf(&mut self, kind: NodeKind, attributes: Attributes, text: Option<&str>) {
        let emitted = self.groups.emitted(kind, attributes);
        let mut node = SceneNode::new(kind).with_attributes(emitted);
        if let Some(text) = text {
            node = node.with_text(text);
        }
        self.insert(node);
    }

    fn append_path(&mut self, attributes: Attributes) -> &mut Self {
        let attributes = attributes.with(keys::D, self.path.data());
        self.append_leaf(NodeKind::Path, attributes, None);
        self
    }

    fn push_group(&mut self, category: Option<&str>, id: Option<&str>, extra: Attributes) -> NodeId {
        let paint = self.paint.current().attributes();
        let attributes = self.groups.emitted(NodeKind::Group, paint.clone()).merged(&extra);

        let mut node = SceneNode::new(NodeKind::Group).with_attributes(attributes);
        let category = self.label(category);
        let id = self.label(id);
        if let Some(category) = &category {
            node = node.with_category(category.as_str());
        }
        if let Some(id) = &id {
            node = node.with_id(id.as_str());
        }

        let group = self.insert(node);
        self.groups.push(group, &paint);

        tracing::debug!(
            category = category.as_deref(),
            id = id.as_deref(),
            depth = self.groups.depth(),
            "opened group"
        );
        group
    }

    fn update_view_box(&mut self) {
        let view_box = format!(
            "0 0 {} {}",
            fmt_num(self.width / self.scale_x),
            fmt_num(self.height / self.scale_y)
        );
        self.tree
            .root_node_mut()
            .attributes
            .set(keys::VIEW_BOX, view_box.as_str());
        self.view_box = Some(view_box);
    }
}

impl RenderContext for SceneContext {
    type Group = NodeId;

    fn save(&mut self) -> &mut Self {
        self.paint.save();
        self
    }

    fn restore(&mut self) -> &mut Self {
        if !self.paint.restore() {
            tracing::trace!("restore without a matching save");
        }
        self
    }

    fn set_fill_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.paint.current_mut().fill = style.into();
        self
    }

    fn set_background_fill_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.background_fill = style.into();
        self
    }

    fn set_stroke_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.paint.current_mut().stroke = style.into();
        self
    }

    fn set_line_width(&mut self, width: f64) -> &mut Self {
        let state = self.paint.current_mut();
        state.line_width = width;
        state.stroke_width = width;
        self
    }

    fn set_line_dash(&mut self, dash: &[f64]) -> &mut Self {
        self.paint.current_mut().line_dash = dash.iter().copied().collect();
        self
    }

    fn set_line_cap(&mut self, cap: LineCap) -> &mut Self {
        self.paint.current_mut().line_cap = Some(cap);
        self
    }

    fn set_font(&mut self, font: impl Into<FontSpec>) -> &mut Self {
        let spec = font.into();
        match spec.normalize(&self.paint.current().font) {
            Ok(font) => self.paint.current_mut().font = font,
            Err(err) => tracing::warn!(%err, ?spec, "ignoring unusable font"),
        }
        self
    }

    fn set_shadow_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.paint.current_mut().shadow.color = color.into();
        self
    }

    fn set_shadow_blur(&mut self, blur: f64) -> &mut Self {
        if blur > 0.0 {
            tracing::warn!(blur, "shadows are not rendered");
        }
        self.paint.current_mut().shadow.blur = blur;
        self
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let attributes = Attributes::new()
            .with(keys::FILL, "none")
            .with_number(keys::STROKE_WIDTH, self.line_width())
            .with(keys::STROKE, "black");
        self.rect_with(x, y, width, height, attributes)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let attributes = Attributes::new().with(keys::FILL, self.fill_style());
        self.rect_with(x, y, width, height, attributes)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let attributes = Attributes::new()
            .with(keys::FILL, self.background_fill.as_str())
            .with(keys::STROKE, self.background_fill.as_str());
        self.rect_with(x, y, width, height, attributes)
    }

    fn pointer_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let attributes = Attributes::new().with(keys::OPACITY, "0");
        self.rect_with(x, y, width, height, attributes)
    }

    fn begin_path(&mut self) -> &mut Self {
        self.path.begin();
        self
    }

    fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.path.move_to(x, y);
        self
    }

    fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.path.line_to(x, y);
        self
    }

    fn bezier_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.path.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
        self
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        self.path.quadratic_curve_to(cx, cy, x, y);
        self
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> &mut Self {
        self.path
            .arc(x, y, radius, start_angle, end_angle, counterclockwise);
        self
    }

    fn close_path(&mut self) -> &mut Self {
        self.path.close_path();
        self
    }

    fn fill(&mut self) -> &mut Self {
        let attributes = self.paint.current().attributes().with(keys::STROKE, "none");
        self.append_path(attributes)
    }

    fn stroke(&mut self) -> &mut Self {
        let attributes = self
            .paint
            .current()
            .attributes()
            .with(keys::FILL, "none")
            .with_number(keys::STROKE_WIDTH, self.line_width());
        self.append_path(attributes)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let attributes = self
            .paint
            .current()
            .attributes()
            .with(keys::STROKE, "none")
            .with_number(keys::X, x)
            .with_number(keys::Y, y);
        self.append_leaf(NodeKind::Text, attributes, Some(text));
        self
    }

    fn measure_text(&self, text: &str) -> Rect {
        self.measurer.measure(text, self.font()).bounds()
    }

    fn open_group(&mut self, category: Option<&str>, id: Option<&str>) -> NodeId {
        self.push_group(category, id, Attributes::new())
    }

    fn close_group(&mut self) -> Result<&mut Self> {
        let group = self.groups.pop()?;
        tracing::debug!(?group, depth = self.groups.depth(), "closed group");
        Ok(self)
    }

    fn open_rotation(&mut self, degrees: f64, x: f64, y: f64) -> NodeId {
        let transform = format!(
            "translate({},{}) rotate({}) translate({},{})",
            fmt_num(x),
            fmt_num(y),
            fmt_num(degrees),
            fmt_num(-x),
            fmt_num(-y)
        );
        let extra = Attributes::new().with(keys::TRANSFORM, transform);
        self.push_group(None, None, extra)
    }

    fn close_rotation(&mut self) -> Result<&mut Self> {
        self.close_group()
    }

    fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.scale_x *= x;
        self.scale_y *= y;
        self.update_view_box();
        tracing::debug!(
            scale_x = self.scale_x,
            scale_y = self.scale_y,
            view_box = self.view_box.as_deref(),
            "scaled surface"
        );
        self
    }

    fn resize(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        let root = &mut self.tree.root_node_mut().attributes;
        root.set_number(keys::WIDTH, width);
        root.set_number(keys::HEIGHT, height);
        if self.view_box.is_some() {
            self.update_view_box();
        }
        tracing::debug!(width, height, "resized surface");
        self
    }

    fn clear(&mut self) -> &mut Self {
        self.tree.clear();
        self.path.begin();
        self.groups.reset();
        tracing::debug!("cleared scene");
        self
    }
}

impl fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneContext")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("view_box", &self.view_box)
            .field("nodes", &self.tree.len())
            .field("depth", &self.groups.depth())
            .field("paint", self.paint.current())
            .finish_non_exhaustive()
    }
}
