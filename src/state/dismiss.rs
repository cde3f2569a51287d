//! Dismiss Module - Outside-press watching
//!
//! A process-wide press dispatcher with scoped subscriptions. Each mounted
//! widget acquires one subscription and releases it through the returned
//! cleanup closure, so registration is exactly-once by construction — no
//! boolean guard flags, no double-registration, no leaks.
//!
//! Dismissal is decided by containment: a press inside the anchor field or
//! the popover surface never dismisses, everything else requests close.
//! When either surface has not reported geometry yet the watcher stays
//! silent rather than guessing.
//!
//! # Example
//!
//! ```ignore
//! use spark_datepicker::state::dismiss::{DismissWatcher, dispatch_press, subscribe};
//!
//! let cleanup = subscribe(DismissWatcher {
//!     anchor: Rc::new(|| Some(anchor_rect)),
//!     popover: Rc::new(|| Some(popover_rect)),
//!     on_dismiss: Rc::new(|| popover.close()),
//! });
//!
//! dispatch_press(200, 300);
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::Rect;

// =============================================================================
// TYPES
// =============================================================================

/// Getter for a surface's live rectangle (`None` while unmeasured).
pub type RectGetter = Rc<dyn Fn() -> Option<Rect>>;

/// One widget's outside-press subscription.
pub struct DismissWatcher {
    /// The anchor field's rectangle.
    pub anchor: RectGetter,
    /// The popover surface's rectangle.
    pub popover: RectGetter,
    /// Close request, fired for presses outside both surfaces.
    pub on_dismiss: Rc<dyn Fn()>,
}

impl DismissWatcher {
    /// Whether a press at the given point should dismiss.
    ///
    /// Requires both surfaces to be measured; missing geometry no-ops.
    fn should_dismiss(&self, x: u16, y: u16) -> bool {
        match ((self.anchor)(), (self.popover)()) {
            (Some(anchor), Some(popover)) => !anchor.contains(x, y) && !popover.contains(x, y),
            _ => false,
        }
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

struct WatcherRegistry {
    watchers: Vec<(usize, Rc<DismissWatcher>)>,
    next_id: usize,
}

impl WatcherRegistry {
    fn new() -> Self {
        Self {
            watchers: Vec::new(),
            next_id: 0,
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<WatcherRegistry> = RefCell::new(WatcherRegistry::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Register a watcher. Returns a cleanup function that releases it.
pub fn subscribe(watcher: DismissWatcher) -> impl FnOnce() {
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.watchers.push((id, Rc::new(watcher)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            reg.borrow_mut()
                .watchers
                .retain(|(watcher_id, _)| *watcher_id != id);
        });
    }
}

/// Dispatch a press to every live watcher.
///
/// Containment checks run against the registry borrow; dismiss callbacks
/// fire afterwards so a callback may unsubscribe (unmount) safely.
pub fn dispatch_press(x: u16, y: u16) {
    let to_dismiss: Vec<Rc<DismissWatcher>> = REGISTRY.with(|reg| {
        reg.borrow()
            .watchers
            .iter()
            .filter(|(_, watcher)| watcher.should_dismiss(x, y))
            .map(|(_, watcher)| watcher.clone())
            .collect()
    });

    for watcher in to_dismiss {
        (watcher.on_dismiss)();
    }
}

/// Number of live subscriptions (for tests).
pub fn watcher_count() -> usize {
    REGISTRY.with(|reg| reg.borrow().watchers.len())
}

/// Clear all subscriptions (for tests).
pub fn reset_dismiss_state() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.watchers.clear();
        reg.next_id = 0;
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_dismiss_state();
    }

    fn watcher(
        anchor: Option<Rect>,
        popover: Option<Rect>,
        dismissed: &Rc<Cell<u32>>,
    ) -> DismissWatcher {
        let dismissed = dismissed.clone();
        DismissWatcher {
            anchor: Rc::new(move || anchor),
            popover: Rc::new(move || popover),
            on_dismiss: Rc::new(move || dismissed.set(dismissed.get() + 1)),
        }
    }

    const ANCHOR: Rect = Rect::new(10, 10, 100, 3);
    const POPOVER: Rect = Rect::new(10, 13, 120, 20);

    #[test]
    fn test_outside_press_dismisses() {
        setup();

        let dismissed = Rc::new(Cell::new(0));
        let _cleanup = subscribe(watcher(Some(ANCHOR), Some(POPOVER), &dismissed));

        dispatch_press(500, 500);
        assert_eq!(dismissed.get(), 1);
    }

    #[test]
    fn test_press_inside_anchor_does_not_dismiss() {
        setup();

        let dismissed = Rc::new(Cell::new(0));
        let _cleanup = subscribe(watcher(Some(ANCHOR), Some(POPOVER), &dismissed));

        dispatch_press(50, 11);
        assert_eq!(dismissed.get(), 0);
    }

    #[test]
    fn test_press_inside_popover_does_not_dismiss() {
        setup();

        let dismissed = Rc::new(Cell::new(0));
        let _cleanup = subscribe(watcher(Some(ANCHOR), Some(POPOVER), &dismissed));

        dispatch_press(100, 20);
        assert_eq!(dismissed.get(), 0);
    }

    #[test]
    fn test_unmeasured_geometry_never_dismisses() {
        setup();

        let dismissed = Rc::new(Cell::new(0));
        let _c1 = subscribe(watcher(None, Some(POPOVER), &dismissed));
        let _c2 = subscribe(watcher(Some(ANCHOR), None, &dismissed));

        dispatch_press(500, 500);
        assert_eq!(dismissed.get(), 0);
    }

    #[test]
    fn test_cleanup_releases_subscription() {
        setup();

        let dismissed = Rc::new(Cell::new(0));
        let cleanup = subscribe(watcher(Some(ANCHOR), Some(POPOVER), &dismissed));
        assert_eq!(watcher_count(), 1);

        cleanup();
        assert_eq!(watcher_count(), 0);

        dispatch_press(500, 500);
        assert_eq!(dismissed.get(), 0);
    }

    #[test]
    fn test_dismiss_callback_may_unsubscribe() {
        setup();

        // The callback drops its own subscription mid-dispatch
        let slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(None));
        let slot_clone = slot.clone();

        let cleanup = subscribe(DismissWatcher {
            anchor: Rc::new(|| Some(ANCHOR)),
            popover: Rc::new(|| Some(POPOVER)),
            on_dismiss: Rc::new(move || {
                if let Some(cleanup) = slot_clone.borrow_mut().take() {
                    cleanup();
                }
            }),
        });
        *slot.borrow_mut() = Some(Box::new(cleanup));

        dispatch_press(500, 500);
        assert_eq!(watcher_count(), 0);
    }

    #[test]
    fn test_multiple_watchers_independent() {
        setup();

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let far_anchor = Rect::new(300, 300, 50, 3);

        let _c1 = subscribe(watcher(Some(ANCHOR), Some(POPOVER), &first));
        let _c2 = subscribe(watcher(Some(far_anchor), Some(POPOVER), &second));

        // Inside the shared popover surface, so neither dismisses
        dispatch_press(50, 14);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 0);

        // Inside the second anchor only
        dispatch_press(320, 301);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }
}
