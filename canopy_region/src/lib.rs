// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Region: an administrative-region adapter over the cascader engine.
//!
//! Administrative datasets are three-level trees (province → city →
//! district), each node a `{code, name}` pair. This crate translates between
//! that domain and the generic [`canopy_cascader`] vocabulary:
//!
//! - [`tree_to_options`] maps [`RegionNode`] trees into
//!   [`canopy_tree::OptionNode`] trees (`value` = code, `label` = name).
//! - [`path_to_region_value`] materializes a committed selection path as a
//!   structured [`RegionValue`], enforcing the configured [`RegionLevel`]
//!   ceiling.
//! - [`region_value_to_path`] goes the other way, to seed a field from an
//!   externally held value.
//! - [`RegionField`] bundles it all into a per-field state machine that picks
//!   its strategy once at construction: a flat [`canopy_cascader::Dropdown`]
//!   for province-only fields (one level needs no drilling), or a
//!   [`canopy_cascader::Cascader`] with a depth ceiling of 2 or 3 for city
//!   and area fields.
//!
//! [`RegionValue`] is prefix-closed by construction: `city` is only ever set
//! alongside `province`, and `area` alongside `city`. A field moves forward
//! through Empty → province → city → area via clicks, collapses to Empty via
//! [`RegionField::clear`], and jumps to any prefix-closed state via
//! [`RegionField::set_value`].
//!
//! The `change_on_select` passthrough matters for municipalities directly
//! under central administration: their city level repeats the province name,
//! so letting the user confirm at the province level spares a meaningless
//! extra click even in city/area mode.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_region::{
//!     RegionField, RegionFieldConfig, RegionLevel, RegionNode, RegionOutcome,
//! };
//!
//! let dataset = vec![
//!     RegionNode::new("440000", "广东省").with_children(vec![
//!         RegionNode::new("440100", "广州市").with_children(vec![
//!             RegionNode::new("440103", "荔湾区"),
//!         ]),
//!     ]),
//! ];
//!
//! let mut field = RegionField::new(&dataset, RegionLevel::City, RegionFieldConfig::default());
//! field.open_panel();
//! field.click(0, "440000");
//! match field.click(1, "440100") {
//!     RegionOutcome::Committed { value, close } => {
//!         assert!(close);
//!         assert_eq!(value.province.as_ref().unwrap().name, "广东省");
//!         assert_eq!(value.city.as_ref().unwrap().code, "440100");
//!         assert!(value.area.is_none());
//!     }
//!     other => panic!("expected commit, got {other:?}"),
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod field;
mod value;

pub use adapter::{path_to_region_value, region_value_to_path, tree_to_options};
pub use field::{RegionField, RegionFieldConfig, RegionOutcome};
pub use value::{RegionLevel, RegionNode, RegionRef, RegionValue};
