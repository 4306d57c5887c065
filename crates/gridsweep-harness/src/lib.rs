#![forbid(unsafe_code)]

//! Deterministic fixtures for exercising `gridsweep` without a UI.
//!
//! This crate provides:
//! - [`FakeGrid`]: an in-memory grid host with real layout math: sections of
//!   items flowing into columns, hit-testing, offset clamping, a scroll
//!   command log.
//! - [`RecordingDelegate`]: a selection delegate that owns committed and
//!   displayed selection state and records every callback as a structured
//!   [`DelegateEvent`], serializable for trace comparison.
//! - [`ScenarioTrace`]: the JSON shape the runner binary prints.
//!
//! Everything here is deterministic: no clocks, no randomness, no I/O. The
//! same gesture script always yields byte-identical traces, which is what
//! makes the end-to-end tests in `gridsweep` stable.

use ahash::AHashSet;
use gridsweep::{GridCoord, GridHost, Point, SelectionDelegate, Size};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FakeGrid
// ---------------------------------------------------------------------------

/// In-memory grid host: `sections` sections of `items_per_section` items,
/// flowing left-to-right into `columns` columns, sections stacked vertically.
#[derive(Debug, Clone)]
pub struct FakeGrid {
    columns: usize,
    sections: usize,
    items_per_section: usize,
    cell: Size,
    viewport: Size,
    offset: Point,
    /// Every offset the recognizer commanded, in order.
    pub scroll_log: Vec<Point>,
    /// Every `set_scroll_enabled` value received, in order.
    pub scroll_enabled_log: Vec<bool>,
}

impl FakeGrid {
    /// Create a grid. `cell` is the extent of one item; items have no gaps.
    #[must_use]
    pub fn new(
        sections: usize,
        items_per_section: usize,
        columns: usize,
        cell: Size,
        viewport: Size,
    ) -> Self {
        assert!(columns > 0, "grid needs at least one column");
        Self {
            columns,
            sections,
            items_per_section,
            cell,
            viewport,
            offset: Point::new(0.0, 0.0),
            scroll_log: Vec::new(),
            scroll_enabled_log: Vec::new(),
        }
    }

    fn lines_per_section(&self) -> usize {
        self.items_per_section.div_ceil(self.columns)
    }

    /// Content-space center of an item, for scripting pointer positions.
    #[must_use]
    pub fn cell_center(&self, coord: GridCoord) -> Point {
        let line = coord.section * self.lines_per_section() + coord.row / self.columns;
        let col = coord.row % self.columns;
        Point::new(
            col as f32 * self.cell.width + self.cell.width / 2.0,
            line as f32 * self.cell.height + self.cell.height / 2.0,
        )
    }

    /// Current offset, for assertions.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Overwrite the offset without logging, for scenario setup.
    pub fn jump_to(&mut self, offset: Point) {
        self.offset = offset;
    }
}

impl GridHost for FakeGrid {
    fn coord_at(&self, point: Point) -> Option<GridCoord> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell.width) as usize;
        if col >= self.columns {
            return None;
        }
        let line = (point.y / self.cell.height) as usize;
        let lines = self.lines_per_section();
        if line >= self.sections * lines {
            return None;
        }
        let row = (line % lines) * self.columns + col;
        if row >= self.items_per_section {
            return None;
        }
        Some(GridCoord::new(row, line / lines))
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn content_extent(&self) -> Size {
        Size::new(
            self.columns as f32 * self.cell.width,
            (self.sections * self.lines_per_section()) as f32 * self.cell.height,
        )
    }

    fn viewport_extent(&self) -> Size {
        self.viewport
    }

    fn scroll_to(&mut self, offset: Point) -> bool {
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.scroll_log.push(offset);
        true
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled_log.push(enabled);
    }
}

// ---------------------------------------------------------------------------
// RecordingDelegate
// ---------------------------------------------------------------------------

/// One delegate callback, as recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DelegateEvent {
    Began {
        coord: GridCoord,
        was_selected: bool,
    },
    WillChange {
        pending: Vec<GridCoord>,
        changing: GridCoord,
        to_selected: bool,
    },
    DidChange {
        pending: Vec<GridCoord>,
        changing: GridCoord,
        to_selected: bool,
    },
    Completed {
        changed: Vec<GridCoord>,
        should_select: bool,
    },
}

/// Delegate that behaves like a live screen: `did_change` repaints the
/// displayed state immediately, `completed` commits to storage and reloads
/// the display from it.
#[derive(Debug, Default, Clone)]
pub struct RecordingDelegate {
    committed: AHashSet<GridCoord>,
    displayed: AHashSet<GridCoord>,
    /// Every callback, in arrival order.
    pub events: Vec<DelegateEvent>,
}

impl RecordingDelegate {
    /// Delegate with an initially committed selection.
    #[must_use]
    pub fn with_selected(selected: impl IntoIterator<Item = GridCoord>) -> Self {
        let committed: AHashSet<GridCoord> = selected.into_iter().collect();
        Self {
            displayed: committed.clone(),
            committed,
            events: Vec::new(),
        }
    }

    /// Whether `coord` is committed (post-gesture storage).
    #[must_use]
    pub fn is_committed(&self, coord: GridCoord) -> bool {
        self.committed.contains(&coord)
    }

    /// Committed coordinates, sorted by `(section, row)` for stable output.
    #[must_use]
    pub fn committed_sorted(&self) -> Vec<GridCoord> {
        let mut all: Vec<GridCoord> = self.committed.iter().copied().collect();
        all.sort_by_key(|c| (c.section, c.row));
        all
    }

    /// Only the `DidChange` events, for compact assertions.
    #[must_use]
    pub fn did_changes(&self) -> Vec<&DelegateEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DelegateEvent::DidChange { .. }))
            .collect()
    }
}

impl SelectionDelegate for RecordingDelegate {
    fn began_selection(&mut self, coord: GridCoord) -> bool {
        let was_selected = self.displayed.contains(&coord);
        self.events.push(DelegateEvent::Began {
            coord,
            was_selected,
        });
        was_selected
    }

    fn is_selected(&self, coord: GridCoord) -> bool {
        self.displayed.contains(&coord)
    }

    fn will_change(&mut self, pending: &[GridCoord], changing: GridCoord, to_selected: bool) {
        self.events.push(DelegateEvent::WillChange {
            pending: pending.to_vec(),
            changing,
            to_selected,
        });
    }

    fn did_change(&mut self, pending: &[GridCoord], changing: GridCoord, to_selected: bool) {
        if to_selected {
            self.displayed.insert(changing);
        } else {
            self.displayed.remove(&changing);
        }
        self.events.push(DelegateEvent::DidChange {
            pending: pending.to_vec(),
            changing,
            to_selected,
        });
    }

    fn completed(&mut self, changed: &[GridCoord], should_select: bool) {
        tracing::debug!(
            message = "harness.completed",
            changed = changed.len(),
            should_select
        );
        for coord in changed {
            if should_select {
                self.committed.insert(*coord);
            } else {
                self.committed.remove(coord);
            }
        }
        self.displayed = self.committed.clone();
        self.events.push(DelegateEvent::Completed {
            changed: changed.to_vec(),
            should_select,
        });
    }
}

// ---------------------------------------------------------------------------
// ScenarioTrace
// ---------------------------------------------------------------------------

/// What a scripted run leaves behind.
#[derive(Debug, Serialize)]
pub struct ScenarioTrace {
    pub events: Vec<DelegateEvent>,
    pub scrolls: Vec<(f32, f32)>,
    pub committed: Vec<GridCoord>,
}

impl ScenarioTrace {
    /// Assemble a trace from a finished grid/delegate pair.
    #[must_use]
    pub fn collect(grid: &FakeGrid, delegate: &RecordingDelegate) -> Self {
        Self {
            events: delegate.events.clone(),
            scrolls: grid.scroll_log.iter().map(|p| (p.x, p.y)).collect(),
            committed: delegate.committed_sorted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> FakeGrid {
        // 2 sections x 12 items in 3 columns; 100x100 cells; 300x400 viewport.
        FakeGrid::new(
            2,
            12,
            3,
            Size::new(100.0, 100.0),
            Size::new(300.0, 400.0),
        )
    }

    #[test]
    fn hit_test_first_item() {
        assert_eq!(
            grid().coord_at(Point::new(10.0, 10.0)),
            Some(GridCoord::new(0, 0))
        );
    }

    #[test]
    fn hit_test_flows_across_columns() {
        let g = grid();
        assert_eq!(
            g.coord_at(Point::new(250.0, 50.0)),
            Some(GridCoord::new(2, 0))
        );
        assert_eq!(
            g.coord_at(Point::new(50.0, 150.0)),
            Some(GridCoord::new(3, 0))
        );
    }

    #[test]
    fn hit_test_second_section() {
        // Section 0 occupies lines 0..4 (12 items / 3 columns).
        assert_eq!(
            grid().coord_at(Point::new(50.0, 450.0)),
            Some(GridCoord::new(0, 1))
        );
    }

    #[test]
    fn hit_test_outside_is_none() {
        let g = grid();
        assert_eq!(g.coord_at(Point::new(-1.0, 50.0)), None);
        assert_eq!(g.coord_at(Point::new(350.0, 50.0)), None);
        assert_eq!(g.coord_at(Point::new(50.0, 900.0)), None);
    }

    #[test]
    fn cell_center_round_trips() {
        let g = grid();
        for section in 0..2 {
            for row in 0..12 {
                let coord = GridCoord::new(row, section);
                assert_eq!(g.coord_at(g.cell_center(coord)), Some(coord));
            }
        }
    }

    #[test]
    fn content_extent_covers_all_lines() {
        let extent = grid().content_extent();
        assert_eq!(extent, Size::new(300.0, 800.0));
    }

    #[test]
    fn scroll_to_same_offset_reports_unapplied() {
        let mut g = grid();
        assert!(!g.scroll_to(Point::new(0.0, 0.0)));
        assert!(g.scroll_to(Point::new(0.0, 30.0)));
        assert_eq!(g.scroll_log, vec![Point::new(0.0, 30.0)]);
    }

    #[test]
    fn recording_delegate_commits_on_completion() {
        let mut delegate = RecordingDelegate::default();
        let a = GridCoord::new(1, 0);
        let b = GridCoord::new(2, 0);
        delegate.did_change(&[a], a, true);
        delegate.did_change(&[a, b], b, true);
        assert!(delegate.is_selected(a));
        assert!(!delegate.is_committed(a));

        delegate.completed(&[a, b], true);
        assert!(delegate.is_committed(a));
        assert!(delegate.is_committed(b));
        assert_eq!(delegate.committed_sorted(), vec![a, b]);
    }

    #[test]
    fn recording_delegate_removes_on_deselect_completion() {
        let a = GridCoord::new(1, 0);
        let mut delegate = RecordingDelegate::with_selected([a]);
        delegate.completed(&[a], false);
        assert!(!delegate.is_committed(a));
    }
}
