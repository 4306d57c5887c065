#![forbid(unsafe_code)]

//! The sweep gesture state machine.
//!
//! [`SweepRecognizer`] classifies a pan over a grid and, once it decides the
//! user is sweep-selecting, tracks a directional cursor across items and
//! keeps the pending change list in step with every move.
//!
//! # State Machine
//!
//! A gesture starts in [`SweepPhase::Idle`] and is classified on its first
//! effective move:
//!
//! - one item of vertical travel (`|row delta| == 1`, same section) enters
//!   [`SweepPhase::Selecting`];
//! - anything further away enters [`SweepPhase::Scrolling`], which performs
//!   no selection work for the rest of the gesture;
//! - a move that resolves to the begin item itself is a no-op.
//!
//! Both phases reset to `Idle` when the gesture ends or cancels; there is no
//! path between `Selecting` and `Scrolling` within one gesture.
//!
//! # Invariants
//!
//! 1. The intent (select vs. deselect) is fixed once, when `Selecting` is
//!    entered, from the begin item's state at that instant. Reversing the
//!    cursor never re-derives it.
//! 2. The pending list only grows ahead of the cursor and shrinks behind it;
//!    it never holds a coordinate twice.
//! 3. The cursor is updated at the end of every processed move, whatever
//!    branch ran.
//! 4. The auto-scroll loop holds no cancellation token: every tick re-checks
//!    the phase and stops itself the moment the gesture leaves `Selecting`.
//!
//! # Failure Modes
//!
//! Nothing surfaces as an error. A move whose begin or current point resolves
//! to no item is dropped; a disabled recognizer ignores every entry point;
//! a scroll command the host refuses leaves the virtual touch point where it
//! was. The recognizer stays inert rather than guessing.

use std::time::Duration;

use crate::config::SweepConfig;
use crate::coord::{GridCoord, Point, ScrollDirection};
use crate::host::{GridHost, SelectionDelegate};
use crate::{range, scroll};

// ---------------------------------------------------------------------------
// Phases and results
// ---------------------------------------------------------------------------

/// Lifecycle phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepPhase {
    /// No classification yet (or no gesture in flight).
    #[default]
    Idle,
    /// Sweeping a selection across items.
    Selecting,
    /// An ordinary scroll; selection is out for this gesture.
    Scrolling,
}

/// What a call to [`SweepRecognizer::moved`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was dropped: recognizer disabled, no begin point recorded,
    /// either hit test failed, or the pointer is still on the begin item.
    Ignored,
    /// The gesture is (now) a plain scroll.
    Scrolling,
    /// This move entered `Selecting`; the host should start driving
    /// [`SweepRecognizer::auto_scroll_tick`].
    SelectionStarted,
    /// The move was processed while selecting.
    Selecting,
}

/// Outcome of one [`SweepRecognizer::auto_scroll_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoScrollTick {
    /// The loop is over; stop ticking until a gesture next enters selection.
    Stopped,
    /// Nothing scrolled; tick again after the given delay.
    Retry(Duration),
    /// Content scrolled and move handling re-ran; tick again without delay.
    Scrolled,
}

// ---------------------------------------------------------------------------
// SweepRecognizer
// ---------------------------------------------------------------------------

/// Stateful drag multi-selection recognizer.
///
/// Feed it the gesture lifecycle ([`began`](Self::began) on touch-down,
/// [`moved`](Self::moved) for every pointer move,
/// [`ended`](Self::ended)/[`cancelled`](Self::cancelled) on touch-up) and
/// drive [`auto_scroll_tick`](Self::auto_scroll_tick) from a timer while a
/// selection is in flight. All points are in content space.
pub struct SweepRecognizer {
    config: SweepConfig,
    phase: SweepPhase,
    /// Touch-down location; fixed in content space for the whole gesture.
    begin_point: Option<Point>,
    /// Latest touch location, shifted along with auto-scroll.
    current_point: Option<Point>,
    /// Item under the pointer after the previous processed move.
    cursor: Option<GridCoord>,
    /// Travel direction of the selection cursor (vertical only).
    direction: ScrollDirection,
    /// Begin item's selection state at classification time.
    begin_was_selected: bool,
    /// Set once vertical travel exceeds the arm distance; sticky per gesture.
    armed: bool,
    pending: Vec<GridCoord>,
}

impl std::fmt::Debug for SweepRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepRecognizer")
            .field("phase", &self.phase)
            .field("pending", &self.pending.len())
            .field("armed", &self.armed)
            .finish()
    }
}

impl Default for SweepRecognizer {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}

impl SweepRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            phase: SweepPhase::Idle,
            begin_point: None,
            current_point: None,
            cursor: None,
            direction: ScrollDirection::Up,
            begin_was_selected: false,
            armed: false,
            pending: Vec::new(),
        }
    }

    /// Record the touch-down point. No classification happens yet.
    pub fn began(&mut self, point: Point) {
        if !self.config.enabled {
            return;
        }
        self.begin_point = Some(point);
    }

    /// Process a pointer move at `point`.
    ///
    /// Both the begin point and `point` must resolve to items; otherwise the
    /// move is dropped without touching any state. The begin coordinate is
    /// re-resolved from the stored begin point on every call, so it tracks
    /// content that has scrolled since touch-down.
    pub fn moved<G, D>(&mut self, grid: &mut G, delegate: &mut D, point: Point) -> MoveResult
    where
        G: GridHost + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        if !self.config.enabled {
            return MoveResult::Ignored;
        }
        let Some(begin_point) = self.begin_point else {
            return MoveResult::Ignored;
        };
        let Some(begin) = grid.coord_at(begin_point) else {
            return MoveResult::Ignored;
        };
        let Some(moving) = grid.coord_at(point) else {
            return MoveResult::Ignored;
        };
        self.current_point = Some(point);

        let was_idle = self.phase == SweepPhase::Idle;
        if was_idle {
            let row_delta = moving.row as isize - begin.row as isize;
            let section_delta = moving.section as isize - begin.section as isize;
            if row_delta == 0 && section_delta == 0 {
                return MoveResult::Ignored;
            }
            if row_delta.abs() == 1 && section_delta == 0 {
                self.set_phase(grid, SweepPhase::Selecting);
                self.begin_was_selected = delegate.began_selection(begin);
                self.direction = if row_delta == -1 {
                    ScrollDirection::Up
                } else {
                    ScrollDirection::Down
                };
            } else {
                self.set_phase(grid, SweepPhase::Scrolling);
            }
        }

        if !self.armed && (point.y - begin_point.y).abs() > self.config.arm_distance {
            self.armed = true;
        }

        if self.phase == SweepPhase::Selecting {
            let intent = self.intent();
            if let Some(cursor) = self.cursor {
                match self.direction {
                    ScrollDirection::Up => {
                        if moving.row < cursor.row {
                            range::select_range(&mut self.pending, delegate, cursor, moving, intent);
                        } else if moving.row > cursor.row {
                            if moving.row >= begin.row {
                                // Overshot the begin item: fold the old run
                                // back, re-grow from begin, flip direction.
                                range::cancel_range(
                                    &mut self.pending,
                                    delegate,
                                    cursor,
                                    begin,
                                    intent,
                                );
                                range::select_range(
                                    &mut self.pending,
                                    delegate,
                                    begin,
                                    moving,
                                    intent,
                                );
                                self.direction = ScrollDirection::Down;
                            } else {
                                range::cancel_range(
                                    &mut self.pending,
                                    delegate,
                                    cursor,
                                    moving,
                                    intent,
                                );
                            }
                        }
                    }
                    ScrollDirection::Down => {
                        if moving.row > cursor.row {
                            range::select_range(&mut self.pending, delegate, cursor, moving, intent);
                        } else if moving.row < cursor.row {
                            if moving.row <= begin.row {
                                range::cancel_range(
                                    &mut self.pending,
                                    delegate,
                                    cursor,
                                    begin,
                                    intent,
                                );
                                range::select_range(
                                    &mut self.pending,
                                    delegate,
                                    begin,
                                    moving,
                                    intent,
                                );
                                self.direction = ScrollDirection::Up;
                            } else {
                                range::cancel_range(
                                    &mut self.pending,
                                    delegate,
                                    moving,
                                    cursor,
                                    intent,
                                );
                            }
                        }
                    }
                    // The cursor never travels horizontally.
                    ScrollDirection::Left | ScrollDirection::Right => {}
                }
            } else {
                range::select_range(&mut self.pending, delegate, begin, moving, intent);
            }
        }
        self.cursor = Some(moving);

        match self.phase {
            SweepPhase::Selecting if was_idle => MoveResult::SelectionStarted,
            SweepPhase::Selecting => MoveResult::Selecting,
            SweepPhase::Scrolling => MoveResult::Scrolling,
            SweepPhase::Idle => MoveResult::Ignored,
        }
    }

    /// Finish the gesture: report the pending changes to the delegate and
    /// reset to idle. A disabled recognizer does nothing.
    pub fn ended<G, D>(&mut self, grid: &mut G, delegate: &mut D)
    where
        G: GridHost + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        if !self.config.enabled {
            return;
        }
        #[cfg(feature = "tracing")]
        self.log_completion();
        delegate.completed(&self.pending, self.intent());
        self.reset(grid);
    }

    /// Cancel the gesture. Identical to [`ended`](Self::ended): the delegate
    /// still receives the pending changes and decides what to keep.
    pub fn cancelled<G, D>(&mut self, grid: &mut G, delegate: &mut D)
    where
        G: GridHost + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        self.ended(grid, delegate);
    }

    /// Run one tick of the cooperative auto-scroll loop.
    ///
    /// Probes the four directions in priority order against the last touch
    /// point and issues at most one scroll command. When content moved, the
    /// stored touch point shifts by the realized scroll delta (a stationary
    /// finger keeps its place on screen, not in content space) and move
    /// handling re-runs at the shifted point.
    ///
    /// The caller owns the timer: [`AutoScrollTick::Scrolled`] asks for an
    /// immediate re-tick, [`AutoScrollTick::Retry`] for one after the delay,
    /// and [`AutoScrollTick::Stopped`] ends the loop. Liveness is re-checked
    /// from the phase on every entry, so a stale timer tick after the gesture
    /// ends is harmless.
    pub fn auto_scroll_tick<G, D>(&mut self, grid: &mut G, delegate: &mut D) -> AutoScrollTick
    where
        G: GridHost + ?Sized,
        D: SelectionDelegate + ?Sized,
    {
        if self.phase != SweepPhase::Selecting || !self.config.enabled || !self.config.auto_scroll {
            return AutoScrollTick::Stopped;
        }
        let Some(point) = self.current_point else {
            return AutoScrollTick::Stopped;
        };
        if !self.armed {
            return AutoScrollTick::Retry(self.config.retry_delay);
        }

        let offset = grid.content_offset();
        let viewport = grid.viewport_extent();
        let fraction = self.config.hot_zone_fraction;
        let Some(direction) = ScrollDirection::ALL
            .into_iter()
            .find(|d| scroll::in_hot_zone(viewport, offset, point, *d, fraction))
        else {
            return AutoScrollTick::Retry(self.config.retry_delay);
        };

        let (target, moved) = scroll::compute_scroll(
            offset,
            grid.content_extent(),
            viewport,
            direction,
            self.config.scroll_step,
        );
        if !moved {
            // Direction exhausted; nothing to command this tick.
            return AutoScrollTick::Retry(self.config.retry_delay);
        }

        grid.scroll_to(target);
        let realized = grid.content_offset();
        let shifted = Point::new(
            point.x + (realized.x - offset.x),
            point.y + (realized.y - offset.y),
        );
        self.moved(grid, delegate, shifted);
        AutoScrollTick::Scrolled
    }

    // -- read side ----------------------------------------------------------

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    /// Whether a sweep selection is in flight.
    #[inline]
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.phase == SweepPhase::Selecting
    }

    /// The gesture intent: `true` means the swept items end up selected.
    /// Fixed when `Selecting` is entered; `true` before that.
    #[inline]
    #[must_use]
    pub fn intent(&self) -> bool {
        !self.begin_was_selected
    }

    /// Pending change list, in toggle order.
    #[must_use]
    pub fn pending(&self) -> &[GridCoord] {
        &self.pending
    }

    /// Mid-gesture preview for item rendering: `None` unless selecting,
    /// otherwise whether `coord` is part of the pending change list.
    #[must_use]
    pub fn pending_state(&self, coord: GridCoord) -> Option<bool> {
        (self.phase == SweepPhase::Selecting).then(|| self.pending.contains(&coord))
    }

    /// Whether auto-scrolling has been armed this gesture.
    #[inline]
    #[must_use]
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SweepConfig) {
        self.config = config;
    }

    // -- internals ----------------------------------------------------------

    fn set_phase<G: GridHost + ?Sized>(&mut self, grid: &mut G, phase: SweepPhase) {
        #[cfg(feature = "tracing")]
        let from = self.phase;
        self.phase = phase;
        // Selecting owns the drag; every other phase hands scrolling back.
        grid.set_scroll_enabled(phase != SweepPhase::Selecting);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sweep.phase", ?from, to = ?phase, armed = self.armed);
    }

    fn reset<G: GridHost + ?Sized>(&mut self, grid: &mut G) {
        self.set_phase(grid, SweepPhase::Idle);
        self.begin_point = None;
        self.current_point = None;
        self.cursor = None;
        self.direction = ScrollDirection::Up;
        self.begin_was_selected = false;
        self.armed = false;
        self.pending.clear();
    }

    #[cfg(feature = "tracing")]
    fn log_completion(&self) {
        tracing::debug!(
            message = "sweep.completed",
            phase = ?self.phase,
            changed = self.pending.len(),
            select = self.intent()
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
