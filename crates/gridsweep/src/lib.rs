#![forbid(unsafe_code)]

//! Drag-based multi-selection for grid item lists.
//!
//! # Role
//! `gridsweep` is the interaction core for sweep-to-select: pan over one
//! item, drag across its neighbors, and a contiguous run of items toggles
//! toward a fixed intent, with edge-band auto-scrolling while the drag is in
//! flight. Rendering, layout, and selection storage stay in the host behind
//! two traits.
//!
//! # Primary pieces
//! - **[`SweepRecognizer`]**: the gesture state machine: classification,
//!   the directional cursor, reversal handling, the auto-scroll loop.
//! - **[`range`]**: grows and shrinks the pending change list, one notified
//!   coordinate at a time.
//! - **[`scroll`]**: pure offset clamping and hot-zone math.
//! - **[`GridHost`] / [`SelectionDelegate`]**: what the host answers and
//!   what it gets told.
//!
//! # How it fits together
//! The host forwards its pointer lifecycle (`began` / `moved` / `ended` /
//! `cancelled`) with points in content space and drives
//! [`SweepRecognizer::auto_scroll_tick`] from a timer. Everything is
//! single-threaded and synchronous; the recognizer owns no clock, no thread,
//! and no view, which is also what keeps it deterministic under test.

pub mod config;
pub mod coord;
pub mod host;
pub mod range;
pub mod recognizer;
pub mod scroll;

pub use config::SweepConfig;
pub use coord::{GridCoord, Point, ScrollDirection, Size};
pub use host::{GridHost, SelectionDelegate};
pub use recognizer::{AutoScrollTick, MoveResult, SweepPhase, SweepRecognizer};
