//! Sibling order between a candidate node and a node anchor

use crate::dom::Node;

/// `candidate` comes after `anchor`: the anchor is one of its preceding siblings
pub fn is_after(candidate: &Node, anchor: &Node) -> bool {
    candidate
        .preceding_siblings()
        .iter()
        .any(|sibling| sibling == anchor)
}

/// `candidate` comes before `anchor`: the anchor is one of its following siblings
pub fn is_before(candidate: &Node, anchor: &Node) -> bool {
    candidate
        .following_siblings()
        .iter()
        .any(|sibling| sibling == anchor)
}
