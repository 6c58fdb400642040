// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Overlay: floating panel placement and dismissal primitives.
//!
//! This crate models the "show a panel near a trigger" contract without any
//! knowledge of a windowing system or DOM. It combines:
//!
//! - A pure placement computation ([`place_panel`]) that decides whether a
//!   panel opens below or above its trigger and clamps it horizontally into
//!   the viewport.
//! - A small open/close state machine ([`OverlayState`]) that caches the
//!   current [`Placement`], recomputes it on [`RepositionTrigger`] events,
//!   and closes on outside clicks.
//!
//! Hosts own the event loop: they feed trigger/viewport rectangles from
//! whatever layout system they use, re-invoke [`OverlayState::reposition`]
//! when the viewport resizes, an ancestor scrolls, or the panel's content
//! width changes, and route pointer-down events through
//! [`OverlayState::on_pointer_down`] for scrim-style dismissal. No debouncing
//! or frame deferral happens here; that belongs to the host's event dispatch.
//!
//! ## Placement rules
//!
//! Vertically, the panel prefers to open downward: it does so when the space
//! below the trigger fits the panel, or when there is at least as much space
//! below as above. Otherwise it opens upward, with its bottom edge on the
//! trigger's top edge. Horizontally, the panel's left edge aligns with the
//! trigger's left edge unless that would overflow the viewport's right edge,
//! in which case it shifts left just enough to fit, bounded by a minimum
//! margin on both sides.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use canopy_overlay::{OpenDirection, OverlayState, RepositionTrigger, place_panel};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let trigger = Rect::new(100.0, 60.0, 260.0, 92.0);
//! let panel = Size::new(320.0, 240.0);
//!
//! // Plenty of space below: the panel opens downward under the trigger.
//! let placement = place_panel(trigger, panel, viewport, 8.0);
//! assert_eq!(placement.direction, OpenDirection::Down);
//! assert_eq!(placement.panel.y0, trigger.y1);
//!
//! // Drive the same computation through the state machine.
//! let mut overlay = OverlayState::new();
//! overlay.open(trigger, panel, viewport);
//! assert!(overlay.is_open());
//!
//! // A wider panel (more columns) forces a re-placement.
//! let wider = Size::new(480.0, 240.0);
//! let replaced = overlay.reposition(RepositionTrigger::ColumnsChanged, trigger, wider, viewport);
//! assert_eq!(replaced.unwrap().panel.width(), 480.0);
//!
//! // Clicking outside the panel dismisses it.
//! assert!(overlay.on_pointer_down(Point::new(780.0, 580.0)));
//! assert!(!overlay.is_open());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

/// Default minimum distance kept between the panel and the viewport edges.
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 8.0;

/// Which way the panel opens relative to its trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenDirection {
    /// Panel top edge sits on the trigger's bottom edge.
    Down,
    /// Panel bottom edge sits on the trigger's top edge.
    Up,
}

/// A resolved panel position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Panel rectangle in the same coordinate space as the trigger/viewport.
    pub panel: Rect,
    /// Vertical direction the panel opened in.
    pub direction: OpenDirection,
}

/// The events that force a placement recomputation while the panel is open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RepositionTrigger {
    /// The panel was just opened.
    Opened,
    /// The set of visible columns (and thus the panel width) changed.
    ColumnsChanged,
    /// The viewport was resized.
    ViewportResized,
    /// An ancestor of the trigger scrolled.
    AncestorScrolled,
}

/// Computes where a panel of the given size should sit next to `trigger`.
///
/// `margin` is the minimum distance kept between the panel and the viewport's
/// left/right edges when horizontal clamping kicks in. Vertical placement
/// follows the rules in the crate docs; the panel is allowed to overflow
/// vertically when neither side fits (the direction choice still picks the
/// roomier side).
#[must_use]
pub fn place_panel(trigger: Rect, panel: Size, viewport: Rect, margin: f64) -> Placement {
    let space_below = viewport.y1 - trigger.y1;
    let space_above = trigger.y0 - viewport.y0;
    let direction = if space_below >= panel.height || space_below >= space_above {
        OpenDirection::Down
    } else {
        OpenDirection::Up
    };
    let y0 = match direction {
        OpenDirection::Down => trigger.y1,
        OpenDirection::Up => trigger.y0 - panel.height,
    };

    let mut x0 = trigger.x0;
    let max_x0 = viewport.x1 - margin - panel.width;
    if x0 > max_x0 {
        // Shift left just enough to fit, but never past the left margin.
        x0 = max_x0.max(viewport.x0 + margin);
    }

    Placement {
        panel: Rect::new(x0, y0, x0 + panel.width, y0 + panel.height),
        direction,
    }
}

/// Open/close state machine for a single floating panel.
///
/// The state is transient UI state only: hosts own the trigger and viewport
/// geometry and pass it in whenever placement may have changed.
#[derive(Clone, Debug)]
pub struct OverlayState {
    margin: f64,
    placement: Option<Placement>,
}

impl OverlayState {
    /// Creates a closed overlay with [`DEFAULT_VIEWPORT_MARGIN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            margin: DEFAULT_VIEWPORT_MARGIN,
            placement: None,
        }
    }

    /// Creates a closed overlay with a custom viewport margin.
    #[must_use]
    pub fn with_margin(margin: f64) -> Self {
        Self {
            margin: margin.max(0.0),
            placement: None,
        }
    }

    /// Returns `true` while the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.placement.is_some()
    }

    /// Returns the current placement, if the panel is open.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Opens the panel and computes its initial placement.
    pub fn open(&mut self, trigger: Rect, panel: Size, viewport: Rect) -> Placement {
        let placement = place_panel(trigger, panel, viewport, self.margin);
        self.placement = Some(placement);
        placement
    }

    /// Recomputes placement in response to a [`RepositionTrigger`].
    ///
    /// Returns `None` when the panel is closed; reposition events arriving
    /// after dismissal are expected (late scroll/resize notifications) and
    /// ignored.
    pub fn reposition(
        &mut self,
        _trigger_event: RepositionTrigger,
        trigger: Rect,
        panel: Size,
        viewport: Rect,
    ) -> Option<Placement> {
        self.placement?;
        let placement = place_panel(trigger, panel, viewport, self.margin);
        self.placement = Some(placement);
        Some(placement)
    }

    /// Handles a pointer-down event for outside-click dismissal.
    ///
    /// Closes the panel and returns `true` when the panel is open and the
    /// point lies outside it. Points inside the panel (option clicks) leave
    /// the overlay open; routing those to the selection engine is the host's
    /// job.
    pub fn on_pointer_down(&mut self, point: Point) -> bool {
        match self.placement {
            Some(placement) if !placement.panel.contains(point) => {
                self.placement = None;
                true
            }
            _ => false,
        }
    }

    /// Closes the panel unconditionally.
    pub fn close(&mut self) {
        self.placement = None;
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}
