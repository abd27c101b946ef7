//! Identifier and category lookups over the scene tree

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::scene::{NodeId, SceneNode};

/// Lookup tables populated as labelled nodes are appended.
///
/// Identifiers map to a single node (a later registration replaces an
/// earlier one). Categories map to every node carrying them, in creation
/// order. Keys are the namespaced labels stored on the nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    by_id: FxHashMap<String, NodeId>,
    by_category: FxHashMap<String, SmallVec<[NodeId; 4]>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the labels of `node`, stored under handle `id`
    pub fn register(&mut self, id: NodeId, node: &SceneNode) {
        if let Some(ident) = node.id() {
            if let Some(previous) = self.by_id.insert(ident.to_string(), id) {
                tracing::debug!(id = ident, ?previous, "identifier re-registered, last one wins");
            }
        }
        if let Some(category) = node.category() {
            self.by_category
                .entry(category.to_string())
                .or_default()
                .push(id);
        }
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    pub fn by_category(&self, category: &str) -> &[NodeId] {
        self.by_category
            .get(category)
            .map(|nodes| nodes.as_slice())
            .unwrap_or(&[])
    }

    pub fn id_count(&self) -> usize {
        self.by_id.len()
    }

    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_category.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_category.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::scene::{NodeKind, SceneTree};

    #[test]
    fn test_duplicate_id_last_wins() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let first = tree
            .append(root, SceneNode::new(NodeKind::Group).with_id("vf-a"))
            .unwrap();
        let second = tree
            .append(root, SceneNode::new(NodeKind::Group).with_id("vf-a"))
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(tree.registry().by_id("vf-a"), Some(second));
        assert_eq!(tree.registry().id_count(), 1);
    }

    #[test]
    fn test_category_keeps_creation_order() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let a = tree
            .append(root, SceneNode::new(NodeKind::Group).with_category("vf-note"))
            .unwrap();
        let b = tree
            .append(a, SceneNode::new(NodeKind::Group).with_category("vf-note"))
            .unwrap();
        let c = tree
            .append(root, SceneNode::new(NodeKind::Group).with_category("vf-note"))
            .unwrap();

        assert_eq!(tree.registry().by_category("vf-note"), &[a, b, c]);
        assert!(tree.registry().by_category("vf-stave").is_empty());
    }

    #[test]
    fn test_rebuild_matches_incremental() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let g = tree
            .append(
                root,
                SceneNode::new(NodeKind::Group)
                    .with_category("vf-stave")
                    .with_id("vf-s1"),
            )
            .unwrap();
        tree.append(g, SceneNode::new(NodeKind::Group).with_category("vf-note"))
            .unwrap();
        tree.append(root, SceneNode::new(NodeKind::Group).with_category("vf-note"))
            .unwrap();
        tree.append(g, SceneNode::new(NodeKind::Group).with_id("vf-s1"))
            .unwrap();

        assert_eq!(&tree.rebuild_registry(), tree.registry());
    }
}
