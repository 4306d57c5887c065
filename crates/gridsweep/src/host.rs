#![forbid(unsafe_code)]

//! Boundary traits between the recognizer and its host.
//!
//! The recognizer owns no view, no storage, and no clock. Everything it needs
//! from the outside world goes through [`GridHost`] (geometry and scroll
//! commands) and [`SelectionDelegate`] (selection state and change
//! notifications). Both are borrowed per call, so a host can hand in `&mut`
//! references to its own state without wrapper types.
//!
//! # Failure Modes
//!
//! There are none that surface: a point that resolves to no item makes the
//! move a no-op, and a host that refuses a scroll command simply leaves the
//! content where it is. The recognizer never panics on host answers.

use crate::coord::{GridCoord, Point, Size};

// ---------------------------------------------------------------------------
// GridHost
// ---------------------------------------------------------------------------

/// Geometry queries and scroll commands answered by the hosting grid view.
pub trait GridHost {
    /// Hit-test a content-space point to the item under it, if any.
    fn coord_at(&self, point: Point) -> Option<GridCoord>;

    /// Current scroll offset (top-left of the viewport in content space).
    fn content_offset(&self) -> Point;

    /// Total content extent.
    fn content_extent(&self) -> Size;

    /// Visible viewport extent.
    fn viewport_extent(&self) -> Size;

    /// Move the viewport to `offset`. Returns whether the host applied it.
    fn scroll_to(&mut self, offset: Point) -> bool;

    /// Enable or disable the host's own scrolling.
    ///
    /// Called on every phase change: selection disables host scrolling so the
    /// drag is not fought by the pan of the underlying view; all other phases
    /// re-enable it. Hosts without that affordance keep the default no-op.
    fn set_scroll_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }
}

// ---------------------------------------------------------------------------
// SelectionDelegate
// ---------------------------------------------------------------------------

/// Selection state source and change sink.
///
/// `pending` arguments are snapshots of the in-gesture change list, in the
/// order coordinates were toggled; the list is duplicate-free. Callbacks fire
/// synchronously, one coordinate at a time, in row-iteration order:
/// [`will_change`](Self::will_change) before the pending list mutates,
/// [`did_change`](Self::did_change) after. A delegate may repaint items from
/// inside either callback.
pub trait SelectionDelegate {
    /// A range selection just started on the item at `coord`. Return whether
    /// that item is currently selected; the gesture's intent is the negation
    /// of the answer.
    fn began_selection(&mut self, coord: GridCoord) -> bool;

    /// Whether the item at `coord` is currently selected, as displayed.
    fn is_selected(&self, coord: GridCoord) -> bool;

    /// `changing` is about to be toggled toward `to_selected`. `pending` does
    /// not yet contain the mutation.
    fn will_change(&mut self, pending: &[GridCoord], changing: GridCoord, to_selected: bool) {
        let _ = (pending, changing, to_selected);
    }

    /// `changing` was toggled toward `to_selected`. `pending` reflects the
    /// mutation.
    fn did_change(&mut self, pending: &[GridCoord], changing: GridCoord, to_selected: bool);

    /// The gesture ended or was cancelled. `changed` holds every coordinate
    /// still pending, in toggle order; `should_select` is the gesture intent.
    /// The delegate applies the changes to its persisted selection.
    fn completed(&mut self, changed: &[GridCoord], should_select: bool);
}
