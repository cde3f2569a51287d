//! # spark-datepicker
//!
//! Reactive date range picker widget for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The widget is a text field paired with a popover calendar surface. The
//! field turns free-text keyboard input into a validated date or date pair;
//! the popover machine decides when the calendar shows and which side of
//! the anchor it attaches to. Rendering is the host's job — this crate owns
//! state and semantics only.
//!
//! ```text
//! keystroke → InputController → interpret → (valid?) → DatepickerContext
//!                                                          ↓ watchers
//! press → DateField / dismiss registry → PopoverController → open/placement
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Period, Placement, Rect, ...)
//! - [`date`] - Display formats, range interpretation, shortcut presets
//! - [`state`] - Shared context, input controller, popover, dismissal
//! - [`events`] - Widget events and the crossterm bridge
//! - [`field`] - The assembled, mountable widget

pub mod date;
pub mod events;
pub mod field;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use date::{
    DATE_FORMAT, DisplayFormat, ParsedDate, Shortcut, ShortcutsItem, default_shortcuts,
    format_date, format_display, interpret, parse_formatted_date,
};

pub use events::{KeyboardEvent, Modifiers, PressEvent};

pub use state::{
    DatepickerContext, DismissWatcher, InputController, PickerConfig, PopoverController,
    compute_placement, dispatch_press, subscribe,
};

pub use field::{DateField, DateFieldProps, date_field};
