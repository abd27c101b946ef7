//! Scene tree
//!
//! The tree every drawing pass writes into. Nodes live in a slot map owned by
//! [`SceneTree`] and reference their children by [`NodeId`]; handles are
//! generational, so an id held across [`SceneTree::clear`] resolves to nothing
//! instead of aliasing a newer node.
//!
//! # Node kinds
//!
//! - **Surface**: the root, carries the declared size and view-box
//! - **Group**: a container with optional category/identifier labels
//! - **Path**, **Rect**, **Text**: leaves

use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::attributes::{keys, Attributes};
use crate::error::{Result, SceneError};
use crate::registry::Registry;

new_key_type! {
    /// Handle to a node inside a [`SceneTree`]
    pub struct NodeId;
}

/// Creation key handed to host renderers for list diffing.
///
/// Drawn from a process-wide counter: strictly increasing and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(u64);

impl NodeKey {
    /// Allocate the next key
    pub fn next() -> Self {
        static NEXT_KEY: AtomicU64 = AtomicU64::new(1);
        NodeKey(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Kind of a scene node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Surface,
    Group,
    Path,
    Rect,
    Text,
}

const PATH_IGNORED: [&str; 8] = [
    keys::X,
    keys::Y,
    keys::WIDTH,
    keys::HEIGHT,
    keys::FONT_FAMILY,
    keys::FONT_SIZE,
    keys::FONT_WEIGHT,
    keys::FONT_STYLE,
];
const TEXT_IGNORED: [&str; 2] = [keys::WIDTH, keys::HEIGHT];

impl NodeKind {
    /// Whether nodes of this kind may hold children
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Surface | NodeKind::Group)
    }

    /// Attributes that are meaningless on this kind and never emitted
    pub fn ignored_attributes(self) -> &'static [&'static str] {
        match self {
            NodeKind::Path => &PATH_IGNORED,
            NodeKind::Rect => &keys::FONT_KEYS,
            NodeKind::Text => &TEXT_IGNORED,
            NodeKind::Surface | NodeKind::Group => &[],
        }
    }
}

/// A drawable or grouping unit of the scene
#[derive(Clone, Debug)]
pub struct SceneNode {
    kind: NodeKind,
    key: NodeKey,
    pub attributes: Attributes,
    children: SmallVec<[NodeId; 4]>,
    id: Option<String>,
    category: Option<String>,
    text: Option<String>,
}

impl SceneNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: NodeKey::next(),
            attributes: Attributes::new(),
            children: SmallVec::new(),
            id: None,
            category: None,
            text: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the stable identifier (already namespaced)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the category label (already namespaced)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn key(&self) -> NodeKey {
        self.key
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Owner of all scene nodes plus the identifier/category registry
#[derive(Debug)]
pub struct SceneTree {
    nodes: SlotMap<NodeId, SceneNode>,
    root: NodeId,
    registry: Registry,
}

impl SceneTree {
    /// Create a tree holding only a surface root with the given attributes
    pub fn new(root_attributes: Attributes) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new(NodeKind::Surface).with_attributes(root_attributes));
        Self {
            nodes,
            root,
            registry: Registry::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &SceneNode {
        &self.nodes[self.root]
    }

    pub fn root_node_mut(&mut self) -> &mut SceneNode {
        &mut self.nodes[self.root]
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Number of live nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children
    pub fn is_empty(&self) -> bool {
        self.root_node().children.is_empty()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Append `node` as the last child of `parent` and register its labels
    pub fn append(&mut self, parent: NodeId, node: SceneNode) -> Result<NodeId> {
        let parent_kind = self
            .nodes
            .get(parent)
            .map(SceneNode::kind)
            .ok_or(SceneError::UnknownNode(parent))?;
        if !parent_kind.is_container() {
            return Err(SceneError::NotAContainer(parent_kind));
        }

        let id = self.nodes.insert(node);
        self.nodes[parent].children.push(id);
        self.registry.register(id, &self.nodes[id]);

        tracing::trace!(
            kind = ?self.nodes[id].kind,
            key = self.nodes[id].key.get(),
            "appended scene node"
        );
        Ok(id)
    }

    /// Drop every node except the root, and empty the registry
    pub fn clear(&mut self) {
        let root = self.root;
        self.nodes.retain(|id, _| id == root);
        self.nodes[root].children.clear();
        self.registry.clear();
    }

    /// Depth-first, pre-order walk starting at the root
    pub fn traverse<F: FnMut(NodeId, &SceneNode, usize)>(&self, mut f: F) {
        self.traverse_from(self.root, 0, &mut f);
    }

    fn traverse_from<F: FnMut(NodeId, &SceneNode, usize)>(
        &self,
        id: NodeId,
        depth: usize,
        f: &mut F,
    ) {
        if let Some(node) = self.nodes.get(id) {
            f(id, node, depth);
            for child in &node.children {
                self.traverse_from(*child, depth + 1, f);
            }
        }
    }

    /// Recompute the registry from scratch by walking the tree.
    ///
    /// Category lists come back in creation order.
    pub fn rebuild_registry(&self) -> Registry {
        let mut visited: Vec<(NodeKey, NodeId)> = Vec::new();
        self.traverse(|id, node, _| visited.push((node.key, id)));
        visited.sort_by_key(|(key, _)| *key);

        let mut registry = Registry::new();
        for (_, id) in visited {
            registry.register(id, &self.nodes[id]);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(category: &str, id: &str) -> SceneNode {
        SceneNode::new(NodeKind::Group)
            .with_category(category)
            .with_id(id)
    }

    #[test]
    fn test_keys_are_increasing() {
        let a = SceneNode::new(NodeKind::Rect);
        let b = SceneNode::new(NodeKind::Rect);
        assert!(b.key() > a.key());
    }

    #[test]
    fn test_append_and_traverse() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let g = tree.append(root, group("vf-note", "vf-0")).unwrap();
        tree.append(g, SceneNode::new(NodeKind::Path)).unwrap();
        tree.append(root, SceneNode::new(NodeKind::Text).with_text("A"))
            .unwrap();

        let mut seen = Vec::new();
        tree.traverse(|_, node, depth| seen.push((node.kind(), depth)));
        assert_eq!(
            seen,
            vec![
                (NodeKind::Surface, 0),
                (NodeKind::Group, 1),
                (NodeKind::Path, 2),
                (NodeKind::Text, 1),
            ]
        );
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_append_to_leaf_fails() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let rect = tree.append(root, SceneNode::new(NodeKind::Rect)).unwrap();

        let err = tree.append(rect, SceneNode::new(NodeKind::Rect)).unwrap_err();
        assert!(matches!(err, SceneError::NotAContainer(NodeKind::Rect)));
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let g = tree.append(root, group("vf-note", "vf-0")).unwrap();

        tree.clear();

        assert!(tree.get(g).is_none());
        assert!(tree.is_empty());
        assert!(tree.registry().is_empty());
        assert_eq!(tree.len(), 1);
        assert!(matches!(
            tree.append(g, SceneNode::new(NodeKind::Rect)),
            Err(SceneError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_ignored_attributes() {
        assert!(NodeKind::Path.ignored_attributes().contains(&"x"));
        assert!(NodeKind::Rect.ignored_attributes().contains(&"font-size"));
        assert!(!NodeKind::Rect.ignored_attributes().contains(&"x"));
        assert!(NodeKind::Text.ignored_attributes().contains(&"width"));
        assert!(NodeKind::Group.ignored_attributes().is_empty());
    }
}
