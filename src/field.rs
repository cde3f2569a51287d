//! Field Module - The assembled date field widget
//!
//! Wires the shared context, the input controller, the popover controller
//! and the outside-dismiss subscription into one mountable component. The
//! returned handle routes host events in and exposes the reactive state a
//! renderer needs; `unmount` releases every registration.
//!
//! # Example
//!
//! ```ignore
//! use spark_datepicker::field::{DateFieldProps, date_field};
//! use spark_datepicker::state::context::{DatepickerContext, PickerConfig};
//!
//! let ctx = DatepickerContext::new(PickerConfig::default());
//! let field = date_field(DateFieldProps::new(ctx));
//!
//! field.set_anchor_rect(anchor);
//! field.handle_press(press);          // toggles the popover
//! field.handle_key(&key_event);       // types into the field
//! field.unmount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{KeyboardEvent, PressEvent};
use crate::state::context::DatepickerContext;
use crate::state::dismiss::{self, DismissWatcher};
use crate::state::input::InputController;
use crate::state::popover::PopoverController;
use crate::types::{Period, Placement, PopoverState, Rect, ToggleIcon, Viewport};

// =============================================================================
// PROPS
// =============================================================================

/// Renders the toggle glyph from the is-empty flag.
pub type ToggleIconRenderer = Rc<dyn Fn(bool) -> ToggleIcon>;

/// Configuration for mounting a date field.
pub struct DateFieldProps {
    /// Shared datepicker state.
    pub context: Rc<DatepickerContext>,
    /// Fired whenever a period is committed to shared state.
    pub on_period_change: Option<Rc<dyn Fn(Period)>>,
    /// Custom toggle icon; the default shows a chevron that rotates open.
    pub toggle_icon: Option<ToggleIconRenderer>,
    /// Live viewport dimensions, queried at open time.
    pub viewport: Rc<dyn Fn() -> Viewport>,
}

impl DateFieldProps {
    pub fn new(context: Rc<DatepickerContext>) -> Self {
        Self {
            context,
            on_period_change: None,
            toggle_icon: None,
            viewport: Rc::new(|| Viewport::default()),
        }
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// Handle to a mounted date field.
pub struct DateField {
    ctx: Rc<DatepickerContext>,
    input: InputController,
    popover: Rc<PopoverController>,
    anchor_rect: Rc<RefCell<Option<Rect>>>,
    popover_rect: Rc<RefCell<Option<Rect>>>,
    viewport: Rc<dyn Fn() -> Viewport>,
    toggle_icon: Option<ToggleIconRenderer>,
    dismiss_cleanup: Option<Box<dyn FnOnce()>>,
    watch_cleanup: Option<Box<dyn FnOnce()>>,
}

/// Mount a date field.
pub fn date_field(props: DateFieldProps) -> DateField {
    let ctx = props.context;

    let popover = Rc::new(PopoverController::new(ctx.config().popover_direction));

    let popover_for_commit = popover.clone();
    let input = InputController::new(ctx.clone(), Rc::new(move || popover_for_commit.close()));

    // Live geometry, reported by the host layout through the setters
    let anchor_rect = Rc::new(RefCell::new(None));
    let popover_rect = Rc::new(RefCell::new(None));

    // Outside presses close the popover; presses on either surface do not
    let anchor_for_watch = anchor_rect.clone();
    let popover_for_watch = popover_rect.clone();
    let popover_for_dismiss = popover.clone();
    let dismiss_cleanup = dismiss::subscribe(DismissWatcher {
        anchor: Rc::new(move || *anchor_for_watch.borrow()),
        popover: Rc::new(move || *popover_for_watch.borrow()),
        on_dismiss: Rc::new(move || popover_for_dismiss.close()),
    });

    // Relay committed periods to the host callback
    let watch_cleanup = props.on_period_change.map(|on_change| {
        let cleanup = ctx.watch_period(move |period| on_change(period));
        Box::new(cleanup) as Box<dyn FnOnce()>
    });

    DateField {
        ctx,
        input,
        popover,
        anchor_rect,
        popover_rect,
        viewport: props.viewport,
        toggle_icon: props.toggle_icon,
        dismiss_cleanup: Some(Box::new(dismiss_cleanup)),
        watch_cleanup,
    }
}

impl DateField {
    // -------------------------------------------------------------------------
    // Geometry registration
    // -------------------------------------------------------------------------

    /// Report where the anchor field landed on screen.
    pub fn set_anchor_rect(&self, rect: Rect) {
        *self.anchor_rect.borrow_mut() = Some(rect);
    }

    /// Report the popover surface's projected rectangle.
    pub fn set_popover_rect(&self, rect: Rect) {
        *self.popover_rect.borrow_mut() = Some(rect);
    }

    // -------------------------------------------------------------------------
    // Event entry points
    // -------------------------------------------------------------------------

    /// Route a key event to the input controller.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        self.input.handle_key(event)
    }

    /// Route a pointer press.
    ///
    /// A press on the anchor focuses the field (restarting selection when
    /// it was already filled) and toggles the popover. Every press also
    /// feeds the outside-dismiss dispatcher; containment checks keep the
    /// opening click from dismissing its own popover.
    pub fn handle_press(&self, press: PressEvent) {
        if self.ctx.is_disabled() {
            return;
        }

        let on_anchor = self
            .anchor_rect
            .borrow()
            .is_some_and(|rect| rect.contains(press.x, press.y));

        if on_anchor {
            if !self.input.is_focused() {
                self.input.handle_refocus();
            }
            self.popover
                .toggle((self.viewport)(), *self.popover_rect.borrow());
        }

        dismiss::dispatch_press(press.x, press.y);
    }

    /// Focus the field directly (a host-driven tab stop, for instance).
    pub fn focus(&self) {
        self.input.handle_refocus();
    }

    pub fn blur(&self) {
        self.input.blur();
    }

    // -------------------------------------------------------------------------
    // Reads for the renderer
    // -------------------------------------------------------------------------

    pub fn context(&self) -> &Rc<DatepickerContext> {
        &self.ctx
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    pub fn popover_state(&self) -> PopoverState {
        self.popover.state()
    }

    pub fn placement(&self) -> Placement {
        self.popover.placement()
    }

    /// Whether the enter transition has been triggered for this opening.
    pub fn transition_entered(&self) -> bool {
        self.popover.transition_entered()
    }

    pub fn placeholder(&self) -> String {
        self.ctx.placeholder()
    }

    /// The toggle control's current glyph.
    pub fn toggle_icon(&self) -> ToggleIcon {
        let is_empty = self.ctx.input_text().is_empty();
        match self.toggle_icon {
            Some(ref renderer) => renderer(is_empty),
            None => {
                if self.popover.is_open() {
                    ToggleIcon::ChevronOpen
                } else {
                    ToggleIcon::Chevron
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Unmount
    // -------------------------------------------------------------------------

    /// Tear the widget down, releasing every registration.
    pub fn unmount(mut self) {
        if let Some(cleanup) = self.dismiss_cleanup.take() {
            cleanup();
        }
        if let Some(cleanup) = self.watch_cleanup.take() {
            cleanup();
        }
        self.popover.close();
    }
}

// =============================================================================
// TESTS
// =============================================================================
