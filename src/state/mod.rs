//! State Module - Runtime state management systems
//!
//! The reactive state systems that power the widget's interactivity:
//!
//! - **Context** - Shared datepicker state (period, input text, day hover)
//! - **Input** - Text buffer ownership, caret editing, commit/refocus
//! - **Popover** - Open/closed machine, placement, transition tick
//! - **Dismiss** - Outside-press watching with scoped subscriptions

pub mod context;
pub mod dismiss;
pub mod input;
pub mod popover;

pub use context::{DatepickerContext, PickerConfig};
pub use dismiss::{DismissWatcher, dispatch_press, subscribe};
pub use input::InputController;
pub use popover::{BOTTOM_MARGIN, DESKTOP_MIN_WIDTH, PopoverController, compute_placement};
