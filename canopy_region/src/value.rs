// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain types: region dataset nodes, selection values, and field levels.

use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// A node of the static administrative-region dataset.
///
/// The dataset is loaded once and treated as read-only; provinces carry
/// cities as children, cities carry districts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionNode {
    /// Administrative division code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Subdivisions. Empty at the deepest level.
    pub children: Vec<RegionNode>,
}

impl RegionNode {
    /// Creates a childless node.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Attaches subdivisions.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }
}

/// A selected region at one level: code plus display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionRef {
    /// Administrative division code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl RegionRef {
    /// Creates a reference from code and name.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A structured region selection.
///
/// Prefix-closed: `city` may be present only alongside `province`, and
/// `area` only alongside `city`. A value is exactly the materialization of a
/// selection-path prefix; absent levels are absent, never empty placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RegionValue {
    /// Selected province, set once any selection is made.
    pub province: Option<RegionRef>,
    /// Selected city, set only when the selection reached depth 2.
    pub city: Option<RegionRef>,
    /// Selected district, set only when the selection reached depth 3.
    pub area: Option<RegionRef>,
}

impl RegionValue {
    /// The empty selection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// How many levels are selected (0 through 3).
    #[must_use]
    pub fn depth(&self) -> usize {
        match (&self.province, &self.city, &self.area) {
            (None, ..) => 0,
            (Some(_), None, _) => 1,
            (Some(_), Some(_), None) => 2,
            (Some(_), Some(_), Some(_)) => 3,
        }
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.province.is_none()
    }

    /// Checks the prefix-closure invariant: `city` implies `province`, and
    /// `area` implies `city`.
    #[must_use]
    pub fn is_prefix_closed(&self) -> bool {
        (self.city.is_none() || self.province.is_some())
            && (self.area.is_none() || self.city.is_some())
    }
}

/// The deepest level a region field lets the user select.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionLevel {
    /// Province only: a flat one-level choice.
    Province,
    /// Province and city: a two-column cascade.
    City,
    /// Province, city, and district: a three-column cascade.
    Area,
}

impl RegionLevel {
    /// The column/depth ceiling this level implies.
    #[must_use]
    pub fn max_level(self) -> NonZeroUsize {
        let levels = match self {
            Self::Province => 1,
            Self::City => 2,
            Self::Area => 3,
        };
        NonZeroUsize::new(levels).expect("level counts are 1..=3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_selected_levels() {
        let mut value = RegionValue::empty();
        assert_eq!(value.depth(), 0);
        assert!(value.is_empty());

        value.province = Some(RegionRef::new("440000", "广东省"));
        assert_eq!(value.depth(), 1);
        value.city = Some(RegionRef::new("440100", "广州市"));
        assert_eq!(value.depth(), 2);
        value.area = Some(RegionRef::new("440103", "荔湾区"));
        assert_eq!(value.depth(), 3);
        assert!(value.is_prefix_closed());
    }

    #[test]
    fn prefix_closure_detects_holes() {
        let orphan_city = RegionValue {
            city: Some(RegionRef::new("440100", "广州市")),
            ..RegionValue::empty()
        };
        assert!(!orphan_city.is_prefix_closed());

        let orphan_area = RegionValue {
            province: Some(RegionRef::new("440000", "广东省")),
            area: Some(RegionRef::new("440103", "荔湾区")),
            ..RegionValue::empty()
        };
        assert!(!orphan_area.is_prefix_closed());
    }

    #[test]
    fn levels_map_to_depth_ceilings() {
        assert_eq!(RegionLevel::Province.max_level().get(), 1);
        assert_eq!(RegionLevel::City.max_level().get(), 2);
        assert_eq!(RegionLevel::Area.max_level().get(), 3);
    }
}
