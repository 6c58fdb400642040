// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: the option-tree data model for hierarchical selectors.
//!
//! This crate provides the shared vocabulary for drill-down selection UIs:
//!
//! - [`OptionNode`]: a labeled tree node with a sibling-unique key, an optional
//!   disabled state, and child options. A node with no children is a leaf.
//! - [`SelectionPath`]: an ordered sequence of keys, one per tree depth. An
//!   empty path means nothing is selected.
//! - Resolution helpers ([`find_option`], [`resolve_chain`],
//!   [`options_at_depth`]) that walk a tree from its root level using a path.
//!
//! Resolution is deliberately tolerant: a path whose suffix no longer matches
//! the tree (for example, a value held by a form across a dataset swap)
//! resolves to the longest matching prefix instead of failing. Callers decide
//! what to do with a shortened chain; nothing here panics or errors.
//!
//! Option trees are immutable once built. Lookups are linear scans over
//! sibling lists, which is the right trade-off while fan-out stays at a few
//! dozen entries per level. For large datasets, the `indexed` feature provides
//! [`TreeIndex`], a prebuilt hash map over full paths with the same tolerant
//! contract.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_tree::{OptionNode, resolve_chain, options_at_depth};
//!
//! let options = vec![
//!     OptionNode::new("a", "Alpha").with_children(vec![
//!         OptionNode::new("a1", "Alpha One"),
//!         OptionNode::new("a2", "Alpha Two"),
//!     ]),
//!     OptionNode::new("b", "Beta"),
//! ];
//!
//! // Walk the tree with a two-level path.
//! let path = ["a".to_string(), "a2".to_string()];
//! let chain = resolve_chain(&options, &path);
//! assert_eq!(chain.len(), 2);
//! assert_eq!(chain[1].label, "Alpha Two");
//!
//! // The sibling list shown at depth 1 for this path is Alpha's children.
//! let level = options_at_depth(&options, &path, 1);
//! assert_eq!(level.len(), 2);
//!
//! // A stale suffix resolves to the matching prefix.
//! let stale = ["a".to_string(), "gone".to_string()];
//! assert_eq!(resolve_chain(&options, &stale).len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "indexed")]
mod index;
mod node;
mod resolve;

#[cfg(feature = "indexed")]
pub use index::TreeIndex;
pub use node::{OptionNode, SelectionPath};
pub use resolve::{find_option, options_at_depth, resolve_chain};
