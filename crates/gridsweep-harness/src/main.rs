#![forbid(unsafe_code)]

//! Scenario runner: replays a scripted sweep gesture against the in-memory
//! grid and prints the delegate trace as JSON.
//!
//! The script mirrors the canonical photo-picker flow: touch down on one
//! item, sweep sideways to enter selection, drag down the grid, park the
//! finger in the bottom edge band until auto-scroll runs dry or the tick cap
//! is hit, then lift.
//!
//! # Running
//!
//! ```sh
//! cargo run -p gridsweep-harness
//! RUST_LOG=debug cargo run -p gridsweep-harness   # with tracing output
//! ```

use gridsweep::{AutoScrollTick, GridCoord, Size, SweepRecognizer};
use gridsweep_harness::{FakeGrid, RecordingDelegate, ScenarioTrace};

/// Ticks before the runner gives up on auto-scroll, so the printed trace
/// stays a readable length even on a tall grid.
const MAX_TICKS: usize = 8;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // One section of 60 items in 3 columns; 120x100 cells; 360x500 viewport.
    let mut grid = FakeGrid::new(
        1,
        60,
        3,
        Size::new(120.0, 100.0),
        Size::new(360.0, 500.0),
    );
    let mut delegate = RecordingDelegate::with_selected([GridCoord::new(0, 0)]);
    let mut sweep = SweepRecognizer::default();

    let item = |row: usize| GridCoord::new(row, 0);

    sweep.began(grid.cell_center(item(4)));
    for row in [5, 8, 11, 14] {
        let point = grid.cell_center(item(row));
        let result = sweep.moved(&mut grid, &mut delegate, point);
        tracing::debug!(message = "runner.moved", row, ?result);
    }

    for tick in 0..MAX_TICKS {
        let outcome = sweep.auto_scroll_tick(&mut grid, &mut delegate);
        tracing::debug!(message = "runner.tick", tick, ?outcome);
        if !matches!(outcome, AutoScrollTick::Scrolled) {
            break;
        }
    }

    sweep.ended(&mut grid, &mut delegate);

    let trace = ScenarioTrace::collect(&grid, &delegate);
    println!(
        "{}",
        serde_json::to_string_pretty(&trace).expect("trace serializes")
    );
}
