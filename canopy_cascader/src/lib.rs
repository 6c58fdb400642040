// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Cascader: a headless N-level cascading selector engine.
//!
//! A [`Cascader`] owns an option tree (from [`canopy_tree`]) and the transient
//! interaction state of a multi-column drill-down panel: the in-progress path
//! being built as the user clicks through levels, the committed selection, and
//! whether the panel is open. It knows nothing about rendering; hosts read
//! [`Cascader::visible_columns`] / [`Cascader::options_at`] to lay out columns
//! and feed clicks back in through [`Cascader::click`].
//!
//! Every interaction returns an outcome value instead of invoking callbacks:
//!
//! - [`ClickOutcome::Ignored`]: the click targeted a disabled or unknown
//!   option; no state changed.
//! - [`ClickOutcome::Advanced`]: the in-progress path grew and the next
//!   column became visible, but nothing was committed.
//! - [`ClickOutcome::Committed`]: the selection changed; the payload carries
//!   the new path and the resolved option chain, plus whether the panel
//!   should close.
//!
//! ## Commit and close rules
//!
//! With [`CascaderFlags::CHANGE_ON_SELECT`] clear (the default), a click
//! commits only when it lands on a leaf or on the last allowed level
//! ([`CascaderConfig::max_level`]), and committing always closes the panel.
//! With the flag set, every click commits the path accumulated so far, but
//! the panel closes only on a leaf or the last level — the user can confirm
//! an intermediate level and keep drilling. The two branches are deliberately
//! not unified; the asymmetry is part of the contract.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use canopy_cascader::{Cascader, CascaderConfig, ClickOutcome};
//! use canopy_tree::OptionNode;
//!
//! let options = vec![
//!     OptionNode::new("fruit", "Fruit").with_children(vec![
//!         OptionNode::new("apple", "Apple"),
//!         OptionNode::new("pear", "Pear"),
//!     ]),
//! ];
//! let config = CascaderConfig::new(NonZeroUsize::new(2).unwrap());
//! let mut cascader = Cascader::new(options, config);
//!
//! cascader.open_panel();
//! assert_eq!(cascader.visible_columns(), 1);
//!
//! // Clicking an internal node advances without committing.
//! assert!(matches!(cascader.click(0, "fruit"), ClickOutcome::Advanced));
//! assert_eq!(cascader.visible_columns(), 2);
//!
//! // Clicking a leaf commits and closes.
//! match cascader.click(1, "apple") {
//!     ClickOutcome::Committed { change, close } => {
//!         assert!(close);
//!         assert_eq!(change.path.as_slice(), ["fruit", "apple"]);
//!         assert_eq!(change.chain[1].label, "Apple");
//!     }
//!     other => panic!("expected commit, got {other:?}"),
//! }
//! assert_eq!(cascader.display_text(), "Fruit / Apple");
//! ```
//!
//! The crate also provides [`Dropdown`], a flat single-level select with the
//! same outcome-based contract, for cases where a one-level choice does not
//! warrant a cascading panel.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cascader;
mod config;
mod dropdown;

pub use cascader::{Cascader, CascaderChange, ClickOutcome, PathEntry};
pub use config::{CascaderConfig, CascaderFlags, TriggerWidth};
pub use dropdown::{Dropdown, SelectOutcome};
