#![forbid(unsafe_code)]

//! Range selection engine.
//!
//! [`select_range`] and [`cancel_range`] walk a row range and grow or shrink
//! the gesture's pending change list, notifying the delegate per coordinate.
//! The pending list is the single source of truth for what the gesture has
//! already toggled: membership in it, not host state, is the duplicate guard.
//!
//! # Invariants
//!
//! 1. The pending list never holds the same coordinate twice.
//! 2. Applying the same call twice with unchanged host answers is a no-op
//!    the second time (idempotence).
//! 3. `cancel_range` over the rows a `select_range` touched restores the
//!    pending list exactly (inverse), provided nothing else mutated it.
//! 4. Delegate callbacks fire per coordinate in row-iteration order, with
//!    `will_change` before the mutation and `did_change` after, never
//!    batched at the end of the range.
//!
//! Every produced coordinate takes `end.section`, even when the two ends
//! disagree on section. Cross-section drags are outside the defined contract;
//! the behavior is kept as-is rather than interpolated.

use crate::coord::GridCoord;
use crate::host::SelectionDelegate;

/// Toggle every unhandled row in `begin..=end` toward `intent`.
///
/// A row is appended (and announced) only when the delegate reports its
/// current state differs from `intent` and it is not already pending.
pub fn select_range<D: SelectionDelegate + ?Sized>(
    pending: &mut Vec<GridCoord>,
    delegate: &mut D,
    begin: GridCoord,
    end: GridCoord,
    intent: bool,
) {
    let lo = begin.row.min(end.row);
    let hi = begin.row.max(end.row);
    for row in lo..=hi {
        let coord = GridCoord::new(row, end.section);
        if delegate.is_selected(coord) != intent && !pending.contains(&coord) {
            delegate.will_change(pending, coord, intent);
            pending.push(coord);
            delegate.did_change(pending, coord, intent);
        }
    }
}

/// Undo the toggles of `begin..=end`: rows whose current state already equals
/// `intent` and that are pending are removed (and announced with `!intent`).
pub fn cancel_range<D: SelectionDelegate + ?Sized>(
    pending: &mut Vec<GridCoord>,
    delegate: &mut D,
    begin: GridCoord,
    end: GridCoord,
    intent: bool,
) {
    let lo = begin.row.min(end.row);
    let hi = begin.row.max(end.row);
    for row in lo..=hi {
        let coord = GridCoord::new(row, end.section);
        if delegate.is_selected(coord) == intent && pending.contains(&coord) {
            delegate.will_change(pending, coord, !intent);
            pending.retain(|c| *c != coord);
            delegate.did_change(pending, coord, !intent);
        }
    }
}
