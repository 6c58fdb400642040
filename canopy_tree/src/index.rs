// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prebuilt path-to-node map for O(1) lookups.
//!
//! [`TreeIndex`] trades a one-time DFS plus memory proportional to the node
//! count for constant-time resolution per level. It only pays off for large
//! datasets; the linear-scan helpers in [`crate::resolve_chain`] remain the
//! default.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::OptionNode;

// Keys within a sibling list are free-form strings, so path components are
// joined with a separator that cannot appear in sane option keys.
const SEP: char = '\u{1f}';

/// A prebuilt index over an option tree, keyed by full paths.
///
/// The index borrows the tree it was built from; rebuilding after a dataset
/// swap is expected (trees are immutable once constructed).
#[derive(Clone, Debug)]
pub struct TreeIndex<'a> {
    map: HashMap<String, &'a OptionNode>,
}

impl<'a> TreeIndex<'a> {
    /// Builds an index over the given root sibling list.
    #[must_use]
    pub fn new(options: &'a [OptionNode]) -> Self {
        let mut map = HashMap::new();
        let mut prefix = String::new();
        build(&mut map, &mut prefix, options);
        Self { map }
    }

    /// Resolves the node addressed by the full `path`, if every key matches.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&'a OptionNode> {
        if path.is_empty() {
            return None;
        }
        self.map.get(&join(path)).copied()
    }

    /// Resolves as many nodes along `path` as the tree can match.
    ///
    /// Same tolerant contract as [`crate::resolve_chain`]: the chain stops at
    /// the first unmatched key.
    #[must_use]
    pub fn chain<S: AsRef<str>>(&self, path: &[S]) -> Vec<&'a OptionNode> {
        let mut chain = Vec::with_capacity(path.len());
        let mut key = String::new();
        for component in path {
            if !key.is_empty() {
                key.push(SEP);
            }
            key.push_str(component.as_ref());
            match self.map.get(&key) {
                Some(node) => chain.push(*node),
                None => break,
            }
        }
        chain
    }

    /// Number of indexed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the indexed tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn join<S: AsRef<str>>(path: &[S]) -> String {
    let mut key = String::new();
    for component in path {
        if !key.is_empty() {
            key.push(SEP);
        }
        key.push_str(component.as_ref());
    }
    key
}

fn build<'a>(map: &mut HashMap<String, &'a OptionNode>, prefix: &mut String, level: &'a [OptionNode]) {
    for node in level {
        let saved = prefix.len();
        if !prefix.is_empty() {
            prefix.push(SEP);
        }
        prefix.push_str(&node.value);
        map.insert(prefix.clone(), node);
        build(map, prefix, &node.children);
        prefix.truncate(saved);
    }
}
