//! Popover Module - Open/closed state machine and placement
//!
//! Placement is a pure function of viewport geometry and the configured
//! direction preference, computed once per opening. The controller owns
//! the `CLOSED -> OPEN_UP | OPEN_DOWN -> CLOSED` transitions and the
//! one-tick transition flag that lets the surface animate in from its
//! off-state instead of snapping.
//!
//! # Example
//!
//! ```ignore
//! use spark_datepicker::state::popover::PopoverController;
//! use spark_datepicker::types::{PopoverDirection, Rect, Viewport};
//!
//! let popover = PopoverController::new(PopoverDirection::Auto);
//! popover.open(Viewport::new(1024, 768), Some(Rect::new(0, 700, 300, 200)));
//! assert!(popover.is_open());
//! popover.close();
//! ```

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::types::{Placement, PopoverDirection, PopoverState, Rect, Viewport};

// =============================================================================
// PLACEMENT
// =============================================================================

/// Viewport width above which the popover may flip upward.
pub const DESKTOP_MIN_WIDTH: u16 = 767;

/// Clearance kept below the viewport's bottom edge.
pub const BOTTOM_MARGIN: u16 = 100;

/// Decide which side of the anchor the popover attaches to.
///
/// A forced direction is honored unconditionally; geometry is never
/// consulted. Otherwise the popover opens downward unless the viewport is
/// desktop-sized and the projected bottom edge would crowd the viewport's
/// bottom margin.
pub fn compute_placement(
    viewport: Viewport,
    popover: Rect,
    direction: PopoverDirection,
) -> Placement {
    match direction {
        PopoverDirection::Up => Placement::Up,
        PopoverDirection::Down => Placement::Down,
        PopoverDirection::Auto => {
            if viewport.width > DESKTOP_MIN_WIDTH
                && popover.bottom() > viewport.height.saturating_sub(BOTTOM_MARGIN)
            {
                Placement::Up
            } else {
                Placement::Down
            }
        }
    }
}

// =============================================================================
// TRANSITION TICK
// =============================================================================

/// Delay before the transition-trigger flag flips on.
const TICK: Duration = Duration::from_millis(1);

/// One-shot deferred trigger for the enter transition.
///
/// A background timer flips `fired` after one tick unless cancelled; the
/// flag is synced into the reactive signal on read, so no thread ever
/// touches a signal directly.
struct TransitionTick {
    fired: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl TransitionTick {
    fn schedule() -> Self {
        let fired = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::new(AtomicBool::new(false));

        let fired_flag = fired.clone();
        let cancelled_flag = cancelled.clone();
        thread::spawn(move || {
            thread::sleep(TICK);
            if !cancelled_flag.load(Ordering::SeqCst) {
                fired_flag.store(true, Ordering::SeqCst);
            }
        });

        Self { fired, cancelled }
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// The popover's open/closed machine.
///
/// Opening computes placement once; re-requesting open while open is a
/// no-op and does not recompute placement even if geometry has changed.
/// Closing cancels any pending transition tick so a torn-down surface is
/// never touched by a stray callback.
pub struct PopoverController {
    state: Signal<PopoverState>,
    entered: Signal<bool>,
    pending: RefCell<Option<TransitionTick>>,
    direction: PopoverDirection,
}

impl PopoverController {
    pub fn new(direction: PopoverDirection) -> Self {
        Self {
            state: signal(PopoverState::CLOSED),
            entered: signal(false),
            pending: RefCell::new(None),
            direction,
        }
    }

    pub fn state(&self) -> PopoverState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().open
    }

    pub fn placement(&self) -> Placement {
        self.state.get().placement
    }

    /// Open the popover, computing placement for this opening.
    ///
    /// `popover_rect` is the surface's projected rectangle; `None` (not
    /// measured yet) safely defaults to opening downward.
    pub fn open(&self, viewport: Viewport, popover_rect: Option<Rect>) {
        if self.state.get().open {
            return;
        }

        let placement = match popover_rect {
            Some(rect) => compute_placement(viewport, rect, self.direction),
            None => Placement::Down,
        };

        // Base visibility flips synchronously; the transition trigger is
        // deferred one tick so the slide/fade starts from its off-state
        self.state.set(PopoverState {
            open: true,
            placement,
        });
        self.entered.set(false);
        *self.pending.borrow_mut() = Some(TransitionTick::schedule());
    }

    /// Close the popover. No-op while already closed.
    pub fn close(&self) {
        if !self.state.get().open {
            return;
        }
        self.cancel_pending();
        self.entered.set(false);
        self.state.set(PopoverState::CLOSED);
    }

    /// Toggle between open and closed.
    pub fn toggle(&self, viewport: Viewport, popover_rect: Option<Rect>) {
        if self.is_open() {
            self.close();
        } else {
            self.open(viewport, popover_rect);
        }
    }

    /// Whether the enter transition has been triggered.
    ///
    /// Syncs the timer's atomic flag into the signal, like the blink phase
    /// accessor does for cursor animation.
    pub fn transition_entered(&self) -> bool {
        let fired = self
            .pending
            .borrow()
            .as_ref()
            .is_some_and(|tick| tick.fired.load(Ordering::SeqCst));
        if fired {
            self.pending.borrow_mut().take();
            self.entered.set(true);
        }
        self.state.get().open && self.entered.get()
    }

    fn cancel_pending(&self) {
        if let Some(tick) = self.pending.borrow_mut().take() {
            tick.cancel();
        }
    }
}

impl Drop for PopoverController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

// =============================================================================
// TESTS
// =============================================================================
