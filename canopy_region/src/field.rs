// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-field region selector state machine.

use alloc::string::String;
use alloc::vec::Vec;

use canopy_cascader::{
    Cascader, CascaderConfig, CascaderFlags, ClickOutcome, Dropdown, SelectOutcome, TriggerWidth,
};
use canopy_tree::OptionNode;

use crate::adapter::{path_to_region_value, region_value_to_path, tree_to_options};
use crate::value::{RegionLevel, RegionNode, RegionRef, RegionValue};

/// Configuration for a [`RegionField`].
#[derive(Clone, Debug)]
pub struct RegionFieldConfig {
    /// Commit on every click at every depth. Useful for municipalities whose
    /// city level repeats the province name: the user can confirm at the
    /// province level even in city/area mode.
    pub change_on_select: bool,
    /// Offer a clear affordance while a non-empty value exists.
    pub allow_clear: bool,
    /// The whole field is inert.
    pub disabled: bool,
    /// Text shown while nothing is selected.
    pub placeholder: String,
    /// Trigger sizing hint.
    pub width: TriggerWidth,
}

impl Default for RegionFieldConfig {
    fn default() -> Self {
        Self {
            change_on_select: false,
            allow_clear: true,
            disabled: false,
            placeholder: String::new(),
            width: TriggerWidth::Auto,
        }
    }
}

impl RegionFieldConfig {
    fn flags(&self) -> CascaderFlags {
        let mut flags = CascaderFlags::empty();
        if self.change_on_select {
            flags |= CascaderFlags::CHANGE_ON_SELECT;
        }
        if self.allow_clear {
            flags |= CascaderFlags::ALLOW_CLEAR;
        }
        if self.disabled {
            flags |= CascaderFlags::DISABLED;
        }
        flags
    }
}

/// Result of processing a click on a region field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionOutcome {
    /// The click targeted a disabled or unknown option; nothing changed.
    Ignored,
    /// The cascade advanced to the next column without committing.
    Advanced,
    /// The field's value changed.
    Committed {
        /// The newly committed region selection.
        value: RegionValue,
        /// Whether the panel should close alongside this commit.
        close: bool,
    },
}

/// The selection strategy, fixed at construction per the field's level.
///
/// A one-level choice needs no drilling, so province-only fields carry a flat
/// dropdown and never route through the cascader.
#[derive(Clone, Debug)]
enum FieldMode {
    Flat(Dropdown),
    Cascading(Cascader),
}

/// A region selector field: dataset in, [`RegionValue`] out.
///
/// Wraps either a [`Dropdown`] or a [`Cascader`] depending on the configured
/// [`RegionLevel`] and translates every interaction into the region
/// vocabulary. The field is stateless across renders apart from the wrapped
/// engine's transient panel state; externally held values flow in through
/// [`RegionField::set_value`] and out through [`RegionOutcome::Committed`].
#[derive(Clone, Debug)]
pub struct RegionField {
    level: RegionLevel,
    mode: FieldMode,
}

impl RegionField {
    /// Builds a field over the given dataset.
    #[must_use]
    pub fn new(regions: &[RegionNode], level: RegionLevel, config: RegionFieldConfig) -> Self {
        let mode = match level {
            RegionLevel::Province => {
                // Flat province list: top level only, children stripped.
                let provinces: Vec<OptionNode> = regions
                    .iter()
                    .map(|node| OptionNode::new(node.code.clone(), node.name.clone()))
                    .collect();
                FieldMode::Flat(Dropdown::new(provinces, config.flags(), config.placeholder))
            }
            RegionLevel::City | RegionLevel::Area => {
                let engine_config = CascaderConfig::new(level.max_level())
                    .with_flags(config.flags())
                    .with_placeholder(config.placeholder)
                    .with_width(config.width);
                FieldMode::Cascading(Cascader::new(tree_to_options(regions), engine_config))
            }
        };
        Self { level, mode }
    }

    /// The field's configured level.
    #[must_use]
    pub fn level(&self) -> RegionLevel {
        self.level
    }

    /// The current selection as a structured value.
    #[must_use]
    pub fn value(&self) -> RegionValue {
        match &self.mode {
            FieldMode::Flat(dropdown) => match dropdown.selected() {
                Some(node) => RegionValue {
                    province: Some(RegionRef::new(node.value.clone(), node.label.clone())),
                    ..RegionValue::empty()
                },
                None => RegionValue::empty(),
            },
            FieldMode::Cascading(cascader) => {
                path_to_region_value(cascader.value(), cascader.options(), self.level)
            }
        }
    }

    /// Seeds the field from an externally held value.
    ///
    /// Any prefix-closed value is accepted without a previous-state check;
    /// codes that no longer match the dataset degrade to the resolvable
    /// prefix on the next read.
    pub fn set_value(&mut self, value: &RegionValue) {
        match &mut self.mode {
            FieldMode::Flat(dropdown) => {
                dropdown.set_value(value.province.as_ref().map(|p| p.code.clone()));
            }
            FieldMode::Cascading(cascader) => {
                cascader.set_value(region_value_to_path(value));
            }
        }
    }

    /// Returns `true` while the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        match &self.mode {
            FieldMode::Flat(dropdown) => dropdown.is_open(),
            FieldMode::Cascading(cascader) => cascader.is_open(),
        }
    }

    /// Opens the panel. No-op while the field is disabled.
    pub fn open_panel(&mut self) {
        match &mut self.mode {
            FieldMode::Flat(dropdown) => dropdown.open_panel(),
            FieldMode::Cascading(cascader) => cascader.open_panel(),
        }
    }

    /// Closes the panel, discarding any in-progress cascade.
    pub fn close_panel(&mut self) {
        match &mut self.mode {
            FieldMode::Flat(dropdown) => dropdown.close_panel(),
            FieldMode::Cascading(cascader) => cascader.close_panel(),
        }
    }

    /// The sibling options shown in the column at `depth`.
    ///
    /// Province fields have a single column at depth 0.
    #[must_use]
    pub fn options_at(&self, depth: usize) -> &[OptionNode] {
        match &self.mode {
            FieldMode::Flat(dropdown) => {
                if depth == 0 {
                    dropdown.options()
                } else {
                    &[]
                }
            }
            FieldMode::Cascading(cascader) => cascader.options_at(depth),
        }
    }

    /// How many columns the panel currently shows.
    #[must_use]
    pub fn visible_columns(&self) -> usize {
        match &self.mode {
            FieldMode::Flat(dropdown) => usize::from(!dropdown.options().is_empty()),
            FieldMode::Cascading(cascader) => cascader.visible_columns(),
        }
    }

    /// Processes a click on the option with `code` in the column at `depth`.
    pub fn click(&mut self, depth: usize, code: &str) -> RegionOutcome {
        match &mut self.mode {
            FieldMode::Flat(dropdown) => {
                if depth != 0 {
                    return RegionOutcome::Ignored;
                }
                match dropdown.click(code) {
                    SelectOutcome::Ignored => RegionOutcome::Ignored,
                    SelectOutcome::Committed(entry) => RegionOutcome::Committed {
                        value: RegionValue {
                            province: Some(RegionRef::new(entry.value, entry.label)),
                            ..RegionValue::empty()
                        },
                        close: true,
                    },
                }
            }
            FieldMode::Cascading(cascader) => match cascader.click(depth, code) {
                ClickOutcome::Ignored => RegionOutcome::Ignored,
                ClickOutcome::Advanced => RegionOutcome::Advanced,
                ClickOutcome::Committed { change, close } => RegionOutcome::Committed {
                    value: path_to_region_value(&change.path, cascader.options(), self.level),
                    close,
                },
            },
        }
    }

    /// The text the trigger displays.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.mode {
            FieldMode::Flat(dropdown) => dropdown.display_text(),
            FieldMode::Cascading(cascader) => cascader.display_text(),
        }
    }

    /// Whether the clear affordance should be shown.
    #[must_use]
    pub fn can_clear(&self) -> bool {
        match &self.mode {
            FieldMode::Flat(dropdown) => dropdown.can_clear(),
            FieldMode::Cascading(cascader) => cascader.can_clear(),
        }
    }

    /// Clears the selection, emitting the empty value. Returns `None` when
    /// there is nothing to clear or clearing is not allowed.
    pub fn clear(&mut self) -> Option<RegionValue> {
        let cleared = match &mut self.mode {
            FieldMode::Flat(dropdown) => dropdown.clear(),
            FieldMode::Cascading(cascader) => cascader.clear().is_some(),
        };
        cleared.then(RegionValue::empty)
    }
}
