#![forbid(unsafe_code)]

//! Directional scroll arithmetic.
//!
//! Two pure functions: [`compute_scroll`] nudges an offset along one axis and
//! clamps it to the scrollable range, and [`in_hot_zone`] decides whether a
//! touch point sits in the edge band that should trigger auto-scrolling.
//!
//! # Invariants
//!
//! 1. `compute_scroll` never returns an offset outside
//!    `[0, content - viewport]` on either axis; when the content fits inside
//!    the viewport the range collapses to `[0, 0]`.
//! 2. The `moved` flag is false exactly when the clamped offset equals the
//!    input offset; callers treat that as "this direction is exhausted for
//!    the current tick" and issue no scroll command.
//! 3. Hot-zone bands are half-open toward the interior: a point exactly on
//!    the band boundary does not trigger.

use crate::coord::{Point, ScrollDirection, Size};

/// Offset `current` by `distance` along `direction`'s axis, clamped to the
/// scrollable range of `content` inside `viewport`.
///
/// Both axes are clamped, so an offset that was already out of bounds on the
/// off-axis is repaired as a side effect.
#[must_use]
pub fn compute_scroll(
    current: Point,
    content: Size,
    viewport: Size,
    direction: ScrollDirection,
    distance: f32,
) -> (Point, bool) {
    let mut target = current;
    match direction {
        ScrollDirection::Up => target.y -= distance,
        ScrollDirection::Left => target.x -= distance,
        ScrollDirection::Down => target.y += distance,
        ScrollDirection::Right => target.x += distance,
    }

    let max_x = (content.width - viewport.width).max(0.0);
    let max_y = (content.height - viewport.height).max(0.0);
    target.x = target.x.clamp(0.0, max_x);
    target.y = target.y.clamp(0.0, max_y);

    let moved = target != current;
    (target, moved)
}

/// Whether `point` lies in the edge band of `viewport` that triggers
/// auto-scrolling toward `direction`.
///
/// The viewport extent on the relevant axis is split by `fraction`: `Up` and
/// `Left` trigger inside the leading band (`< offset + extent * fraction`),
/// `Down` and `Right` inside the trailing band
/// (`> offset + extent * (1 - fraction)`). `point` is in content space, so
/// the current `offset` anchors the bands.
#[must_use]
pub fn in_hot_zone(
    viewport: Size,
    offset: Point,
    point: Point,
    direction: ScrollDirection,
    fraction: f32,
) -> bool {
    match direction {
        ScrollDirection::Up => point.y < offset.y + viewport.height * fraction,
        ScrollDirection::Left => point.x < offset.x + viewport.width * fraction,
        ScrollDirection::Down => point.y > offset.y + viewport.height * (1.0 - fraction),
        ScrollDirection::Right => point.x > offset.x + viewport.width * (1.0 - fraction),
    }
}
