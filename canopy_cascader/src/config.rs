// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: behavior flags, depth ceiling, trigger sizing.

use alloc::string::String;
use core::num::NonZeroUsize;

bitflags::bitflags! {
    /// Behavior flags for a [`crate::Cascader`] or [`crate::Dropdown`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CascaderFlags: u8 {
        /// Commit a change on every click at every depth, not only on leaves
        /// or the last allowed level. See the crate docs for the close rules
        /// this implies.
        const CHANGE_ON_SELECT = 0b0000_0001;
        /// Offer a clear affordance while a non-empty value exists.
        const ALLOW_CLEAR      = 0b0000_0010;
        /// The whole control is inert: the panel cannot open and clicks are
        /// ignored.
        const DISABLED         = 0b0000_0100;
    }
}

impl Default for CascaderFlags {
    fn default() -> Self {
        Self::ALLOW_CLEAR
    }
}

/// How the trigger control sizes itself. Purely advisory for hosts; the
/// engine does not consume it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TriggerWidth {
    /// Size to the displayed content.
    #[default]
    Auto,
    /// Fill the available width.
    Fill,
}

/// Configuration for a [`crate::Cascader`].
#[derive(Clone, Debug)]
pub struct CascaderConfig {
    /// Maximum number of columns/depths ever shown, regardless of how deep
    /// the data tree goes.
    pub max_level: NonZeroUsize,
    /// Behavior flags.
    pub flags: CascaderFlags,
    /// Text shown while nothing is selected.
    pub placeholder: String,
    /// Trigger sizing hint.
    pub width: TriggerWidth,
}

impl CascaderConfig {
    /// Creates a configuration with default flags, an empty placeholder, and
    /// the given depth ceiling.
    #[must_use]
    pub fn new(max_level: NonZeroUsize) -> Self {
        Self {
            max_level,
            flags: CascaderFlags::default(),
            placeholder: String::new(),
            width: TriggerWidth::default(),
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replaces the behavior flags.
    #[must_use]
    pub fn with_flags(mut self, flags: CascaderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the trigger sizing hint.
    #[must_use]
    pub fn with_width(mut self, width: TriggerWidth) -> Self {
        self.width = width;
        self
    }
}
