// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cascading drill-down engine.

use alloc::string::String;
use alloc::vec::Vec;

use canopy_tree::{OptionNode, SelectionPath, find_option, options_at_depth, resolve_chain};

use crate::config::{CascaderConfig, CascaderFlags};

/// One resolved step of a committed path: the option's key and display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathEntry {
    /// The option's key at this depth.
    pub value: String,
    /// The option's display label at this depth.
    pub label: String,
}

impl From<&OptionNode> for PathEntry {
    fn from(node: &OptionNode) -> Self {
        Self {
            value: node.value.clone(),
            label: node.label.clone(),
        }
    }
}

/// A committed selection change: the new path and the option chain resolved
/// along it. Clearing emits the empty path with an empty chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascaderChange {
    /// The newly committed selection path.
    pub path: SelectionPath,
    /// The resolved option at each depth of `path`.
    pub chain: Vec<PathEntry>,
}

impl CascaderChange {
    fn cleared() -> Self {
        Self {
            path: SelectionPath::new(),
            chain: Vec::new(),
        }
    }
}

/// Result of processing an option click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click targeted a disabled or unknown option, or the control is
    /// disabled or closed. No state changed, nothing was emitted.
    Ignored,
    /// The in-progress path advanced; the next column is now visible. No
    /// change was committed and the panel stays open.
    Advanced,
    /// A selection was committed.
    Committed {
        /// The committed path and resolved chain.
        change: CascaderChange,
        /// Whether the panel should close alongside this commit.
        close: bool,
    },
}

/// Headless state for an N-level cascading selector.
///
/// Owns the immutable option tree, the committed selection (`value`), and the
/// transient interaction state: the in-progress path built while the panel is
/// open, and the open flag itself. Hosts drive it from UI events and render
/// from its accessors; see the crate docs for the full protocol.
#[derive(Clone, Debug)]
pub struct Cascader {
    options: Vec<OptionNode>,
    config: CascaderConfig,
    value: SelectionPath,
    working: SelectionPath,
    open: bool,
}

impl Cascader {
    /// Creates an engine over the given root options.
    #[must_use]
    pub fn new(options: Vec<OptionNode>, config: CascaderConfig) -> Self {
        Self {
            options,
            config,
            value: SelectionPath::new(),
            working: SelectionPath::new(),
            open: false,
        }
    }

    /// The root option level.
    #[must_use]
    pub fn options(&self) -> &[OptionNode] {
        &self.options
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &CascaderConfig {
        &self.config
    }

    /// The committed selection path.
    #[must_use]
    pub fn value(&self) -> &SelectionPath {
        &self.value
    }

    /// Replaces the committed selection from the outside.
    ///
    /// The path is stored as given; resolution is tolerant, so a path whose
    /// suffix no longer matches the tree displays (and resolves) as its
    /// longest valid prefix.
    pub fn set_value(&mut self, value: SelectionPath) {
        self.value = value;
        if self.open {
            self.working = self.value.clone();
        }
    }

    /// Returns `true` while the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel, seeding the in-progress path from the committed value.
    ///
    /// No-op while the control is disabled.
    pub fn open_panel(&mut self) {
        if self.config.flags.contains(CascaderFlags::DISABLED) {
            return;
        }
        self.working = self.value.clone();
        self.open = true;
    }

    /// Closes the panel, discarding the uncommitted in-progress path.
    pub fn close_panel(&mut self) {
        self.open = false;
        self.working = self.value.clone();
    }

    /// The sibling options shown in the column at `depth`, following the
    /// in-progress path. Empty when the path does not reach that depth.
    #[must_use]
    pub fn options_at(&self, depth: usize) -> &[OptionNode] {
        options_at_depth(&self.options, &self.working, depth)
    }

    /// How many columns the panel currently shows.
    ///
    /// Columns are counted from depth 0 while each level resolves to a
    /// non-empty option list, bounded by `max_level`. An empty option tree
    /// shows no columns at all (the trigger renders with its placeholder
    /// only).
    #[must_use]
    pub fn visible_columns(&self) -> usize {
        if self.options.is_empty() {
            return 0;
        }
        let max = self.config.max_level.get();
        let mut columns = 1;
        while columns < max && !self.options_at(columns).is_empty() {
            columns += 1;
        }
        columns
    }

    /// Processes a click on the option with key `value` in the column at
    /// `depth`.
    ///
    /// The new in-progress path is the old one truncated to `depth` entries
    /// plus the clicked key. The click commits when `CHANGE_ON_SELECT` is set
    /// (every click commits), when `depth` is the last allowed level, or when
    /// the clicked option is a leaf. A commit closes the panel unless
    /// `CHANGE_ON_SELECT` is set and the clicked option still has levels
    /// below the ceiling to drill into. Clicks at depths at or beyond
    /// `max_level` are ignored; a committed path never exceeds the ceiling.
    pub fn click(&mut self, depth: usize, value: &str) -> ClickOutcome {
        if !self.open || self.config.flags.contains(CascaderFlags::DISABLED) {
            return ClickOutcome::Ignored;
        }
        // The ceiling binds here as well as in the column count: a committed
        // path must never grow deeper than `max_level` entries, even when the
        // in-progress path was seeded from an over-deep external value.
        if depth >= self.config.max_level.get() {
            return ClickOutcome::Ignored;
        }
        let (key, is_leaf) = {
            let Some(node) = find_option(self.options_at(depth), value) else {
                return ClickOutcome::Ignored;
            };
            if node.disabled {
                return ClickOutcome::Ignored;
            }
            (node.value.clone(), node.is_leaf())
        };

        self.working.truncate(depth);
        self.working.push(key);

        let change_on_select = self.config.flags.contains(CascaderFlags::CHANGE_ON_SELECT);
        let last_level = depth == self.config.max_level.get() - 1;
        if !(change_on_select || last_level || is_leaf) {
            return ClickOutcome::Advanced;
        }

        let path = self.working.clone();
        let chain = resolve_chain(&self.options, &path)
            .into_iter()
            .map(PathEntry::from)
            .collect();
        self.value = path.clone();

        let close = if change_on_select {
            last_level || is_leaf
        } else {
            true
        };
        if close {
            self.open = false;
        }

        ClickOutcome::Committed {
            change: CascaderChange { path, chain },
            close,
        }
    }

    /// The text the trigger displays for the committed value.
    ///
    /// Empty and fully unresolvable values show the placeholder; otherwise
    /// the labels of the resolvable prefix are joined with `" / "`.
    #[must_use]
    pub fn display_text(&self) -> String {
        let chain = resolve_chain(&self.options, &self.value);
        if chain.is_empty() {
            return self.config.placeholder.clone();
        }
        let mut text = String::new();
        for (i, node) in chain.iter().enumerate() {
            if i > 0 {
                text.push_str(" / ");
            }
            text.push_str(&node.label);
        }
        text
    }

    /// Whether the clear affordance should be shown.
    #[must_use]
    pub fn can_clear(&self) -> bool {
        self.config.flags.contains(CascaderFlags::ALLOW_CLEAR)
            && !self.config.flags.contains(CascaderFlags::DISABLED)
            && !self.value.is_empty()
    }

    /// Clears the committed value.
    ///
    /// Emits the empty change (empty path, empty chain), collapses the
    /// in-progress path, and closes the panel. Returns `None` when there is
    /// nothing to clear or clearing is not allowed.
    pub fn clear(&mut self) -> Option<CascaderChange> {
        if !self.can_clear() {
            return None;
        }
        self.value.clear();
        self.working.clear();
        self.open = false;
        Some(CascaderChange::cleared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::num::NonZeroUsize;
    use smallvec::smallvec;

    // The administrative-region shape from the engine's primary consumer: a
    // municipality whose city level repeats the province label.
    fn beijing() -> Vec<OptionNode> {
        vec![
            OptionNode::new("110000", "北京市").with_children(vec![
                OptionNode::new("110100", "北京市")
                    .with_children(vec![OptionNode::new("110101", "东城区")]),
            ]),
        ]
    }

    fn config(max_level: usize) -> CascaderConfig {
        CascaderConfig::new(NonZeroUsize::new(max_level).unwrap()).with_placeholder("请选择")
    }

    #[test]
    fn change_on_select_commits_without_closing_on_internal_node() {
        // Clicking the root municipality with change-on-select commits the
        // one-entry path but keeps the panel open for further drilling.
        let config = config(3).with_flags(CascaderFlags::CHANGE_ON_SELECT | CascaderFlags::ALLOW_CLEAR);
        let mut cascader = Cascader::new(beijing(), config);
        cascader.open_panel();

        match cascader.click(0, "110000") {
            ClickOutcome::Committed { change, close } => {
                assert!(!close);
                assert_eq!(change.path.as_slice(), ["110000"]);
                assert_eq!(change.chain.len(), 1);
                assert_eq!(change.chain[0].label, "北京市");
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert!(cascader.is_open());
        assert_eq!(cascader.visible_columns(), 2);
    }

    #[test]
    fn change_on_select_closes_on_last_level() {
        let config = config(3).with_flags(CascaderFlags::CHANGE_ON_SELECT);
        let mut cascader = Cascader::new(beijing(), config);
        cascader.open_panel();

        cascader.click(0, "110000");
        cascader.click(1, "110100");
        assert!(cascader.is_open());

        match cascader.click(2, "110101") {
            ClickOutcome::Committed { change, close } => {
                assert!(close);
                assert_eq!(change.path.as_slice(), ["110000", "110100", "110101"]);
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert!(!cascader.is_open());
    }

    #[test]
    fn without_change_on_select_internal_click_only_advances() {
        let mut cascader = Cascader::new(beijing(), config(3));
        cascader.open_panel();

        assert_eq!(cascader.click(0, "110000"), ClickOutcome::Advanced);
        assert!(cascader.is_open());
        assert!(cascader.value().is_empty());
        // The next column shows the municipality's city level.
        assert_eq!(cascader.options_at(1).len(), 1);
        assert_eq!(cascader.options_at(1)[0].label, "北京市");
    }

    #[test]
    fn leaf_click_commits_and_closes() {
        let mut cascader = Cascader::new(beijing(), config(3));
        cascader.open_panel();

        cascader.click(0, "110000");
        cascader.click(1, "110100");
        match cascader.click(2, "110101") {
            ClickOutcome::Committed { change, close } => {
                assert!(close);
                assert_eq!(change.chain[2].label, "东城区");
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(cascader.display_text(), "北京市 / 北京市 / 东城区");
    }

    #[test]
    fn max_level_commits_even_with_deeper_data() {
        // Ceiling of 2 over a 3-deep tree: the depth-1 click is the last
        // allowed level and commits despite having children.
        let mut cascader = Cascader::new(beijing(), config(2));
        cascader.open_panel();

        cascader.click(0, "110000");
        match cascader.click(1, "110100") {
            ClickOutcome::Committed { change, close } => {
                assert!(close);
                assert_eq!(change.path.len(), 2);
            }
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn visible_columns_bounded_by_max_level() {
        let mut cascader = Cascader::new(beijing(), config(2));
        cascader.open_panel();
        cascader.click(0, "110000");
        assert_eq!(cascader.visible_columns(), 2);
    }

    #[test]
    fn truncating_reselect_discards_deeper_working_state() {
        let config = config(3).with_flags(CascaderFlags::CHANGE_ON_SELECT);
        let mut cascader = Cascader::new(
            vec![
                OptionNode::new("a", "A")
                    .with_children(vec![OptionNode::new("a1", "A1")]),
                OptionNode::new("b", "B")
                    .with_children(vec![OptionNode::new("b1", "B1")]),
            ],
            config,
        );
        cascader.open_panel();

        cascader.click(0, "a");
        cascader.click(1, "a1");
        cascader.open_panel();
        // Re-clicking depth 0 truncates the path before appending.
        match cascader.click(0, "b") {
            ClickOutcome::Committed { change, .. } => {
                assert_eq!(change.path.as_slice(), ["b"]);
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(cascader.options_at(1)[0].value, "b1");
    }

    #[test]
    fn disabled_option_click_is_ignored() {
        let options = vec![
            OptionNode::new("on", "On"),
            OptionNode::new("off", "Off").disable(),
        ];
        let mut cascader = Cascader::new(options, config(2));
        cascader.open_panel();

        assert_eq!(cascader.click(0, "off"), ClickOutcome::Ignored);
        assert!(cascader.value().is_empty());
        assert!(cascader.is_open());
    }

    #[test]
    fn unknown_option_click_is_ignored() {
        let mut cascader = Cascader::new(beijing(), config(3));
        cascader.open_panel();
        assert_eq!(cascader.click(0, "999999"), ClickOutcome::Ignored);
        assert_eq!(cascader.click(5, "110000"), ClickOutcome::Ignored);
    }

    #[test]
    fn clicks_beyond_max_level_are_ignored() {
        // An over-deep external value must not let a click extend the
        // committed path past the ceiling: with max_level = 2, depth 2 is
        // out of bounds even though the data tree goes deeper.
        let mut cascader = Cascader::new(beijing(), config(2));
        cascader.set_value(smallvec!["110000".into(), "110100".into()]);
        cascader.open_panel();

        assert_eq!(cascader.click(2, "110101"), ClickOutcome::Ignored);
        assert_eq!(cascader.value().as_slice(), ["110000", "110100"]);
        assert!(cascader.is_open());
    }

    #[test]
    fn disabled_control_neither_opens_nor_clicks() {
        let config = config(3).with_flags(CascaderFlags::DISABLED);
        let mut cascader = Cascader::new(beijing(), config);
        cascader.open_panel();
        assert!(!cascader.is_open());
        assert_eq!(cascader.click(0, "110000"), ClickOutcome::Ignored);
    }

    #[test]
    fn empty_options_show_no_columns() {
        let mut cascader = Cascader::new(Vec::new(), config(3));
        cascader.open_panel();
        assert_eq!(cascader.visible_columns(), 0);
        assert_eq!(cascader.display_text(), "请选择");
    }

    #[test]
    fn stale_value_displays_resolvable_prefix() {
        let mut cascader = Cascader::new(beijing(), config(3));
        cascader.set_value(smallvec!["110000".into(), "999999".into()]);
        assert_eq!(cascader.display_text(), "北京市");

        // A value with no match at all falls back to the placeholder.
        cascader.set_value(smallvec!["440000".into()]);
        assert_eq!(cascader.display_text(), "请选择");
    }

    #[test]
    fn clear_emits_empty_change_and_resets() {
        let mut cascader = Cascader::new(beijing(), config(3));
        cascader.set_value(smallvec!["110000".into(), "110100".into(), "110101".into()]);
        assert!(cascader.can_clear());

        let change = cascader.clear().unwrap();
        assert!(change.path.is_empty());
        assert!(change.chain.is_empty());
        assert!(cascader.value().is_empty());
        assert!(!cascader.is_open());
        assert_eq!(cascader.display_text(), "请选择");

        // Nothing left to clear.
        assert!(!cascader.can_clear());
        assert!(cascader.clear().is_none());
    }

    #[test]
    fn clear_respects_allow_clear_flag() {
        let config = config(3).with_flags(CascaderFlags::empty());
        let mut cascader = Cascader::new(beijing(), config);
        cascader.set_value(smallvec!["110000".into()]);
        assert!(!cascader.can_clear());
        assert!(cascader.clear().is_none());
        assert_eq!(cascader.value().len(), 1);
    }

    #[test]
    fn close_panel_discards_working_path() {
        let mut cascader = Cascader::new(beijing(), config(3));
        cascader.open_panel();
        cascader.click(0, "110000");
        cascader.close_panel();

        // Reopening starts over from the committed (empty) value.
        cascader.open_panel();
        assert_eq!(cascader.visible_columns(), 1);
    }

    #[test]
    fn clicks_while_closed_are_ignored() {
        let mut cascader = Cascader::new(beijing(), config(3));
        assert_eq!(cascader.click(0, "110000"), ClickOutcome::Ignored);
    }
}
