// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node and path types for option trees.

use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

/// A selected path through an option tree.
///
/// Entry `i` is the chosen key at depth `i`; `path[i]` must name a child of
/// the node addressed by `path[0..i]` for the path to resolve fully. An empty
/// path denotes "nothing selected". Paths rarely exceed three levels, so the
/// inline capacity keeps the common case off the heap.
pub type SelectionPath = SmallVec<[String; 3]>;

/// A labeled node in an option tree.
///
/// Keys (`value`) must be unique within a sibling list but need not be
/// globally unique. A node with a non-empty `children` list is an internal
/// node; a node with an empty list is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionNode {
    /// Key identifying this node among its siblings.
    pub value: String,
    /// Human-readable display text.
    pub label: String,
    /// Whether this node can be selected.
    ///
    /// A disabled internal node also makes its subtree unreachable, since the
    /// only way to it runs through the disabled node.
    pub disabled: bool,
    /// Child options. Empty means leaf.
    pub children: Vec<OptionNode>,
}

impl OptionNode {
    /// Creates a leaf node with the given key and label.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Attaches children, turning this node into an internal node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Marks the node as disabled.
    #[must_use]
    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn leaf_and_internal_nodes() {
        let leaf = OptionNode::new("x", "X");
        assert!(leaf.is_leaf());

        let internal = OptionNode::new("p", "P").with_children(vec![OptionNode::new("c", "C")]);
        assert!(!internal.is_leaf());
        assert_eq!(internal.children[0].value, "c");
    }

    #[test]
    fn disable_marks_node() {
        let node = OptionNode::new("x", "X").disable();
        assert!(node.disabled);
        assert!(!OptionNode::new("y", "Y").disabled);
    }
}
