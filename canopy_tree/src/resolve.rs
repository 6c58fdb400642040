// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path resolution over sibling lists.
//!
//! These helpers are linear scans: sibling fan-out in selector datasets stays
//! at a few dozen entries, so re-finding a child by key on every resolution is
//! cheaper and simpler than maintaining an index. The `indexed` feature offers
//! a map-backed alternative with the same contract.

use alloc::vec::Vec;

use crate::OptionNode;

/// Finds the option with the given key in a sibling list.
#[must_use]
pub fn find_option<'a>(options: &'a [OptionNode], value: &str) -> Option<&'a OptionNode> {
    options.iter().find(|o| o.value == value)
}

/// Resolves as many nodes along `path` as the tree can match.
///
/// Walks from the root sibling list using each key in turn. Resolution stops
/// at the first key with no matching sibling; the unmatched suffix is dropped
/// rather than reported as an error, so stale externally-held paths degrade
/// to their longest valid prefix. An empty path resolves to an empty chain.
#[must_use]
pub fn resolve_chain<'a, S: AsRef<str>>(options: &'a [OptionNode], path: &[S]) -> Vec<&'a OptionNode> {
    let mut chain = Vec::with_capacity(path.len());
    let mut level = options;
    for key in path {
        let Some(node) = find_option(level, key.as_ref()) else {
            break;
        };
        chain.push(node);
        level = &node.children;
    }
    chain
}

/// Returns the sibling list visible at `depth` for the given path.
///
/// Depth 0 is the root `options` slice itself. At depth `d > 0` the result is
/// the children of the node addressed by `path[0..d]`. Returns an empty slice
/// when the path does not reach `depth` or when the addressed node is a leaf,
/// which callers treat as "no column at this depth".
#[must_use]
pub fn options_at_depth<'a, S: AsRef<str>>(
    options: &'a [OptionNode],
    path: &[S],
    depth: usize,
) -> &'a [OptionNode] {
    let mut level = options;
    for d in 0..depth {
        let Some(key) = path.get(d) else {
            return &[];
        };
        let Some(node) = find_option(level, key.as_ref()) else {
            return &[];
        };
        level = &node.children;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> Vec<OptionNode> {
        vec![
            OptionNode::new("a", "Alpha").with_children(vec![
                OptionNode::new("a1", "Alpha One")
                    .with_children(vec![OptionNode::new("a1x", "Alpha One X")]),
                OptionNode::new("a2", "Alpha Two"),
            ]),
            OptionNode::new("b", "Beta"),
        ]
    }

    #[test]
    fn find_matches_by_key() {
        let options = sample();
        assert_eq!(find_option(&options, "b").unwrap().label, "Beta");
        assert!(find_option(&options, "nope").is_none());
    }

    #[test]
    fn chain_resolves_full_path() {
        let options = sample();
        let path = ["a".to_string(), "a1".to_string(), "a1x".to_string()];
        let chain = resolve_chain(&options, &path);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[2].label, "Alpha One X");
    }

    #[test]
    fn chain_drops_stale_suffix() {
        let options = sample();
        // "a" matches; "zz" does not; the trailing key is never consulted.
        let path = ["a", "zz", "a1x"];
        let chain = resolve_chain(&options, &path);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].value, "a");
    }

    #[test]
    fn chain_of_empty_path_is_empty() {
        let options = sample();
        let path: [&str; 0] = [];
        assert!(resolve_chain(&options, &path).is_empty());
    }

    #[test]
    fn depth_zero_is_root_level() {
        let options = sample();
        let path: [&str; 0] = [];
        assert_eq!(options_at_depth(&options, &path, 0).len(), 2);
    }

    #[test]
    fn deeper_levels_follow_the_path() {
        let options = sample();
        let path = ["a", "a1"];
        assert_eq!(options_at_depth(&options, &path, 1).len(), 2);
        assert_eq!(options_at_depth(&options, &path, 2).len(), 1);
    }

    #[test]
    fn missing_path_entry_yields_empty_level() {
        let options = sample();
        let path = ["a"];
        // Depth 2 needs path[1], which is absent.
        assert!(options_at_depth(&options, &path, 2).is_empty());
    }

    #[test]
    fn leaf_yields_empty_level() {
        let options = sample();
        let path = ["b"];
        assert!(options_at_depth(&options, &path, 1).is_empty());
    }
}
