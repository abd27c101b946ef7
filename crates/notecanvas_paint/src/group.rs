//! Group stack and inherited-attribute elision

use notecanvas_core::{Attributes, NodeId, NodeKind, SceneError};
use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct GroupFrame {
    node: NodeId,
    /// Attributes a child inherits at this depth
    effective: Attributes,
}

/// Open groups, innermost last. The root frame is never popped.
#[derive(Clone, Debug)]
pub struct GroupStack {
    frames: SmallVec<[GroupFrame; 8]>,
}

impl GroupStack {
    pub fn new(root: NodeId, effective: Attributes) -> Self {
        let mut frames = SmallVec::new();
        frames.push(GroupFrame {
            node: root,
            effective,
        });
        Self { frames }
    }

    fn top(&self) -> &GroupFrame {
        // frames[0] is the root and is never removed
        &self.frames[self.frames.len() - 1]
    }

    /// Where new nodes are appended
    pub fn insertion_point(&self) -> NodeId {
        self.top().node
    }

    /// Effective attributes at the insertion point
    pub fn effective(&self) -> &Attributes {
        &self.top().effective
    }

    /// Number of open groups, the root excluded
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Attributes to store on a new node of `kind` inserted here.
    ///
    /// Keys meaningless for `kind` are dropped, then anything equal to the
    /// inherited value.
    pub fn emitted(&self, kind: NodeKind, attributes: Attributes) -> Attributes {
        attributes
            .without(kind.ignored_attributes())
            .elide_inherited(self.effective())
    }

    /// Enter `node`; children inherit the current effective set overlaid
    /// with `applied`
    pub fn push(&mut self, node: NodeId, applied: &Attributes) {
        let effective = self.effective().merged(applied);
        self.frames.push(GroupFrame { node, effective });
    }

    /// Leave the innermost group. The root frame is never popped.
    pub fn pop(&mut self) -> Result<NodeId, SceneError> {
        match self.frames.len() {
            0 | 1 => Err(SceneError::UnbalancedGroup),
            _ => Ok(self.frames.remove(self.frames.len() - 1).node),
        }
    }

    /// Drop every frame but the root
    pub fn reset(&mut self) {
        self.frames.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notecanvas_core::{SceneNode, SceneTree};

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_push_merges_and_pop_restores() {
        let mut tree = SceneTree::new(Attributes::new());
        let root = tree.root();
        let group = tree
            .append(root, SceneNode::new(NodeKind::Group))
            .unwrap();

        let mut stack = GroupStack::new(root, attrs(&[("fill", "black"), ("stroke", "black")]));
        stack.push(group, &attrs(&[("fill", "red")]));

        assert_eq!(stack.insertion_point(), group);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.effective().get("fill"), Some("red"));
        assert_eq!(stack.effective().get("stroke"), Some("black"));

        assert_eq!(stack.pop(), Ok(group));
        assert_eq!(stack.insertion_point(), root);
        assert_eq!(stack.pop(), Err(SceneError::UnbalancedGroup));
        assert_eq!(stack.insertion_point(), root);
    }

    #[test]
    fn test_emitted_filters_then_elides() {
        let tree = SceneTree::new(Attributes::new());
        let stack = GroupStack::new(tree.root(), attrs(&[("fill", "black"), ("font-size", "10pt")]));

        let path = stack.emitted(
            NodeKind::Path,
            attrs(&[("fill", "black"), ("stroke", "none"), ("x", "4"), ("d", "M0 0")]),
        );
        assert_eq!(path, attrs(&[("stroke", "none"), ("d", "M0 0")]));

        let text = stack.emitted(
            NodeKind::Text,
            attrs(&[("font-size", "12pt"), ("width", "3"), ("x", "4")]),
        );
        assert_eq!(text, attrs(&[("font-size", "12pt"), ("x", "4")]));
    }
}
