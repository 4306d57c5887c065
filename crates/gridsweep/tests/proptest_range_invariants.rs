//! Property-based invariant tests for the range engine and scroll helper.
//!
//! These verify, over arbitrary inputs:
//!
//! 1. `select_range` is idempotent against an unchanged host.
//! 2. `cancel_range` inverts `select_range`, leaving untouched rows alone.
//! 3. No sequence of select/cancel calls ever duplicates a pending entry.
//! 4. Every produced coordinate carries the end coordinate's section.
//! 5. `compute_scroll` never leaves the clamp range on either axis.
//! 6. At most one vertical hot zone can claim a point.

use gridsweep::range::{cancel_range, select_range};
use gridsweep::scroll::{compute_scroll, in_hot_zone};
use gridsweep::{GridCoord, Point, ScrollDirection, Size};
use gridsweep_harness::RecordingDelegate;
use proptest::prelude::*;
use std::collections::HashSet;

// ── Helpers ─────────────────────────────────────────────────────────────

fn coords(max_row: usize) -> impl Strategy<Value = Vec<GridCoord>> {
    proptest::collection::vec((0..max_row, 0usize..3), 0..20)
        .prop_map(|pairs| pairs.into_iter().map(GridCoord::from).collect())
}

fn direction() -> impl Strategy<Value = ScrollDirection> {
    prop_oneof![
        Just(ScrollDirection::Up),
        Just(ScrollDirection::Left),
        Just(ScrollDirection::Down),
        Just(ScrollDirection::Right),
    ]
}

fn assert_no_duplicates(pending: &[GridCoord]) {
    let unique: HashSet<&GridCoord> = pending.iter().collect();
    assert_eq!(unique.len(), pending.len(), "pending holds a duplicate");
}

proptest! {
    #[test]
    fn select_is_idempotent(
        seeded in coords(50),
        begin_row in 0usize..50,
        end_row in 0usize..50,
        section in 0usize..3,
        intent in any::<bool>(),
    ) {
        let mut delegate = RecordingDelegate::with_selected(seeded);
        let mut pending = Vec::new();
        let begin = GridCoord::new(begin_row, section);
        let end = GridCoord::new(end_row, section);

        select_range(&mut pending, &mut delegate, begin, end, intent);
        let once = pending.clone();
        select_range(&mut pending, &mut delegate, begin, end, intent);
        prop_assert_eq!(&pending, &once);
        assert_no_duplicates(&pending);
    }

    #[test]
    fn cancel_inverts_select(
        seeded in coords(50),
        begin_row in 0usize..50,
        end_row in 0usize..50,
        section in 0usize..3,
        intent in any::<bool>(),
    ) {
        let mut delegate = RecordingDelegate::with_selected(seeded);
        let mut pending = Vec::new();

        // A prior run on rows far outside the tested range must survive.
        let prior_begin = GridCoord::new(100, section);
        let prior_end = GridCoord::new(110, section);
        select_range(&mut pending, &mut delegate, prior_begin, prior_end, intent);
        let prior = pending.clone();

        let begin = GridCoord::new(begin_row, section);
        let end = GridCoord::new(end_row, section);
        select_range(&mut pending, &mut delegate, begin, end, intent);
        cancel_range(&mut pending, &mut delegate, begin, end, intent);
        prop_assert_eq!(&pending, &prior);
    }

    #[test]
    fn mixed_calls_never_duplicate(
        seeded in coords(30),
        ops in proptest::collection::vec(
            (any::<bool>(), 0usize..30, 0usize..30),
            1..12,
        ),
        intent in any::<bool>(),
    ) {
        let mut delegate = RecordingDelegate::with_selected(seeded);
        let mut pending = Vec::new();
        for (is_select, begin_row, end_row) in ops {
            let begin = GridCoord::new(begin_row, 0);
            let end = GridCoord::new(end_row, 0);
            if is_select {
                select_range(&mut pending, &mut delegate, begin, end, intent);
            } else {
                cancel_range(&mut pending, &mut delegate, begin, end, intent);
            }
            assert_no_duplicates(&pending);
        }
    }

    #[test]
    fn produced_coords_use_end_section(
        begin_row in 0usize..20,
        end_row in 0usize..20,
        begin_section in 0usize..4,
        end_section in 0usize..4,
    ) {
        let mut delegate = RecordingDelegate::default();
        let mut pending = Vec::new();
        select_range(
            &mut pending,
            &mut delegate,
            GridCoord::new(begin_row, begin_section),
            GridCoord::new(end_row, end_section),
            true,
        );
        prop_assert!(pending.iter().all(|c| c.section == end_section));
        prop_assert_eq!(pending.len(), begin_row.abs_diff(end_row) + 1);
    }

    #[test]
    fn compute_scroll_stays_clamped(
        ox in -500.0f32..2000.0,
        oy in -500.0f32..2000.0,
        cw in 0.0f32..1500.0,
        ch in 0.0f32..1500.0,
        vw in 1.0f32..800.0,
        vh in 1.0f32..800.0,
        dir in direction(),
        distance in 0.0f32..200.0,
    ) {
        let content = Size::new(cw, ch);
        let viewport = Size::new(vw, vh);
        let (offset, _) =
            compute_scroll(Point::new(ox, oy), content, viewport, dir, distance);
        let max_x = (cw - vw).max(0.0);
        let max_y = (ch - vh).max(0.0);
        prop_assert!(offset.x >= 0.0 && offset.x <= max_x);
        prop_assert!(offset.y >= 0.0 && offset.y <= max_y);
    }

    #[test]
    fn vertical_hot_zones_are_disjoint(
        oy in 0.0f32..1000.0,
        py in -100.0f32..2000.0,
        vh in 1.0f32..800.0,
    ) {
        let viewport = Size::new(300.0, vh);
        let offset = Point::new(0.0, oy);
        let point = Point::new(150.0, py);
        let up = in_hot_zone(viewport, offset, point, ScrollDirection::Up, 0.2);
        let down = in_hot_zone(viewport, offset, point, ScrollDirection::Down, 0.2);
        prop_assert!(!(up && down));
    }
}
