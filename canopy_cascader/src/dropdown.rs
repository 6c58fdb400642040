// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat single-level select.
//!
//! One-level choices do not warrant a cascading panel: there is no drilling,
//! no in-progress path, and every click either commits or is ignored. The
//! [`Dropdown`] mirrors the [`crate::Cascader`] trigger contract (placeholder,
//! clear affordance, disabled state, outcome-based clicks) so adapters can
//! swap between the two per mode.

use alloc::string::String;
use alloc::vec::Vec;

use canopy_tree::{OptionNode, find_option};

use crate::cascader::PathEntry;
use crate::config::CascaderFlags;

/// Result of processing a dropdown click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The click targeted a disabled or unknown option, or the control is
    /// disabled or closed. No state changed.
    Ignored,
    /// The selection changed to this option; the panel closes.
    Committed(PathEntry),
}

/// Headless state for a flat single-level select.
#[derive(Clone, Debug)]
pub struct Dropdown {
    options: Vec<OptionNode>,
    flags: CascaderFlags,
    placeholder: String,
    value: Option<String>,
    open: bool,
}

impl Dropdown {
    /// Creates a dropdown over a flat option list.
    ///
    /// `CHANGE_ON_SELECT` has no meaning at a single level and is ignored.
    #[must_use]
    pub fn new(options: Vec<OptionNode>, flags: CascaderFlags, placeholder: impl Into<String>) -> Self {
        Self {
            options,
            flags,
            placeholder: placeholder.into(),
            value: None,
            open: false,
        }
    }

    /// The option list.
    #[must_use]
    pub fn options(&self) -> &[OptionNode] {
        &self.options
    }

    /// The committed selection key, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The committed option, if the stored key still matches the list.
    #[must_use]
    pub fn selected(&self) -> Option<&OptionNode> {
        find_option(&self.options, self.value.as_deref()?)
    }

    /// Replaces the committed selection from the outside.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Returns `true` while the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel. No-op while the control is disabled.
    pub fn open_panel(&mut self) {
        if !self.flags.contains(CascaderFlags::DISABLED) {
            self.open = true;
        }
    }

    /// Closes the panel.
    pub fn close_panel(&mut self) {
        self.open = false;
    }

    /// Processes a click on the option with the given key.
    ///
    /// A successful click commits the option and closes the panel.
    pub fn click(&mut self, value: &str) -> SelectOutcome {
        if !self.open || self.flags.contains(CascaderFlags::DISABLED) {
            return SelectOutcome::Ignored;
        }
        let entry = {
            let Some(node) = find_option(&self.options, value) else {
                return SelectOutcome::Ignored;
            };
            if node.disabled {
                return SelectOutcome::Ignored;
            }
            PathEntry::from(node)
        };
        self.value = Some(entry.value.clone());
        self.open = false;
        SelectOutcome::Committed(entry)
    }

    /// The text the trigger displays: the selected label, or the placeholder
    /// when nothing is selected or the stored key no longer matches.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.selected() {
            Some(node) => node.label.clone(),
            None => self.placeholder.clone(),
        }
    }

    /// Whether the clear affordance should be shown.
    #[must_use]
    pub fn can_clear(&self) -> bool {
        self.flags.contains(CascaderFlags::ALLOW_CLEAR)
            && !self.flags.contains(CascaderFlags::DISABLED)
            && self.value.is_some()
    }

    /// Clears the committed selection and closes the panel. Returns `true`
    /// if there was a value to clear.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.value = None;
        self.open = false;
        true
    }
}
