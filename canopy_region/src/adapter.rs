// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation between the region dataset and the generic engine vocabulary.

use alloc::vec::Vec;

use canopy_tree::{OptionNode, SelectionPath, resolve_chain};

use crate::value::{RegionLevel, RegionNode, RegionRef, RegionValue};

/// Maps a region dataset into generic option nodes.
///
/// A pure, deterministic, recursive map: each node becomes an option with
/// `value` = code and `label` = name, children translated in order.
#[must_use]
pub fn tree_to_options(nodes: &[RegionNode]) -> Vec<OptionNode> {
    nodes
        .iter()
        .map(|node| {
            OptionNode::new(node.code.clone(), node.name.clone())
                .with_children(tree_to_options(&node.children))
        })
        .collect()
}

/// Materializes a selection path as a structured [`RegionValue`].
///
/// Walks `root` with the path keys, assigning province/city/area from the
/// resolved chain in order. The configured `level` is re-applied as a
/// ceiling: even if a deeper path arrives, a city-level field never
/// materializes an `area` (the engine's own depth ceiling already prevents
/// over-deep paths; this is a second check at the boundary). Stale suffixes
/// resolve to the matching prefix, per the engine's tolerant contract.
#[must_use]
pub fn path_to_region_value<S: AsRef<str>>(
    path: &[S],
    root: &[OptionNode],
    level: RegionLevel,
) -> RegionValue {
    let chain = resolve_chain(root, path);
    let ceiling = level.max_level().get();
    let mut value = RegionValue::empty();
    let mut levels = chain
        .iter()
        .take(ceiling)
        .map(|node| RegionRef::new(node.value.clone(), node.label.clone()));
    value.province = levels.next();
    value.city = levels.next();
    value.area = levels.next();
    value
}

/// Emits the selection path a [`RegionValue`] corresponds to.
///
/// The inverse of [`path_to_region_value`] for prefix-closed values: province
/// code first, then city, then area, stopping at the first absent level.
#[must_use]
pub fn region_value_to_path(value: &RegionValue) -> SelectionPath {
    let mut path = SelectionPath::new();
    let levels = [&value.province, &value.city, &value.area];
    for level in levels {
        match level {
            Some(region) => path.push(region.code.clone()),
            None => break,
        }
    }
    path
}
