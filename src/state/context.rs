//! Context Module - Shared datepicker state
//!
//! The state every part of the widget reads: the selected period, the raw
//! input text, and the transient day-hover marker, each a reactive signal.
//! Mutation happens only through the setter methods, so exactly one event
//! handler writes at a time and the flow stays auditable.
//!
//! # Example
//!
//! ```ignore
//! use spark_datepicker::state::context::{DatepickerContext, PickerConfig};
//!
//! let ctx = DatepickerContext::new(PickerConfig::default());
//!
//! let cleanup = ctx.watch_period(|period| {
//!     println!("selected: {:?}", period);
//! });
//!
//! // ... widget pushes periods through the setters ...
//! cleanup();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::NaiveDate;
use spark_signals::{Signal, signal};

use crate::date::{DisplayFormat, format_display};
use crate::types::{FieldFlags, Period, PickerMode, PopoverDirection};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Widget configuration, immutable for the lifetime of a mount.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub mode: PickerMode,
    pub display_format: DisplayFormat,
    /// Delimiter between the two halves of range text.
    pub separator: String,
    pub flags: FieldFlags,
    pub popover_direction: PopoverDirection,
    /// Explicit placeholder; derived from the display format when `None`.
    pub placeholder: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: PickerMode::Range,
            display_format: DisplayFormat::default(),
            separator: " ~ ".to_string(),
            flags: FieldFlags::empty(),
            popover_direction: PopoverDirection::Auto,
            placeholder: None,
        }
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

type PeriodWatcher = Rc<dyn Fn(Period)>;

/// Shared datepicker state.
///
/// Owned by the mount, handed around as `Rc`. The input controller and the
/// calendar collaborator both read it and both request mutations through
/// the setters; last writer wins.
pub struct DatepickerContext {
    period: Signal<Period>,
    input_text: Signal<String>,
    day_hover: Signal<Option<NaiveDate>>,
    config: PickerConfig,
    watchers: RefCell<Vec<(usize, PeriodWatcher)>>,
    next_watcher_id: Cell<usize>,
}

impl DatepickerContext {
    pub fn new(config: PickerConfig) -> Rc<Self> {
        Rc::new(Self {
            period: signal(Period::EMPTY),
            input_text: signal(String::new()),
            day_hover: signal(None),
            config,
            watchers: RefCell::new(Vec::new()),
            next_watcher_id: Cell::new(0),
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn is_disabled(&self) -> bool {
        self.config.flags.contains(FieldFlags::DISABLED)
    }

    pub fn is_read_only(&self) -> bool {
        self.config.flags.contains(FieldFlags::READ_ONLY)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn period(&self) -> Period {
        self.period.get()
    }

    pub fn input_text(&self) -> String {
        self.input_text.get()
    }

    pub fn day_hover(&self) -> Option<NaiveDate> {
        self.day_hover.get()
    }

    /// Placeholder text: the explicit override, else the display pattern
    /// (doubled around the separator in range mode).
    pub fn placeholder(&self) -> String {
        if let Some(ref placeholder) = self.config.placeholder {
            return placeholder.clone();
        }
        let pattern = self.config.display_format.pattern();
        match self.config.mode {
            PickerMode::Single => pattern.to_string(),
            PickerMode::Range => {
                format!("{pattern}{}{pattern}", self.config.separator)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Setters - the only mutation surface
    // -------------------------------------------------------------------------

    /// Commit a period to shared state and notify watchers.
    ///
    /// A complete period is also echoed into the input text in display
    /// format (callers that own the raw text overwrite it right after).
    /// Clearing to empty deliberately leaves the text alone.
    pub fn change_datepicker_value(&self, period: Period) {
        self.period.set(period);

        if let (Some(start), Some(end)) = (period.start, period.end) {
            let fmt = &self.config.display_format;
            let text = match self.config.mode {
                PickerMode::Single => format_display(start, fmt),
                PickerMode::Range => format!(
                    "{}{}{}",
                    format_display(start, fmt),
                    self.config.separator,
                    format_display(end, fmt)
                ),
            };
            self.input_text.set(text);
        }

        // Collect first so a watcher may unsubscribe without re-entering
        // the registry borrow
        let watchers: Vec<PeriodWatcher> = self
            .watchers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for watcher in watchers {
            watcher(period);
        }
    }

    pub fn change_input_text(&self, text: &str) {
        self.input_text.set(text.to_string());
    }

    pub fn change_day_hover(&self, hover: Option<NaiveDate>) {
        self.day_hover.set(hover);
    }

    // -------------------------------------------------------------------------
    // Watchers
    // -------------------------------------------------------------------------

    /// Subscribe to committed periods. Returns a cleanup function.
    pub fn watch_period<F>(self: &Rc<Self>, watcher: F) -> impl FnOnce() + use<F>
    where
        F: Fn(Period) + 'static,
    {
        let id = self.next_watcher_id.get();
        self.next_watcher_id.set(id + 1);
        self.watchers.borrow_mut().push((id, Rc::new(watcher)));

        let ctx: Weak<Self> = Rc::downgrade(self);
        move || {
            if let Some(ctx) = ctx.upgrade() {
                ctx.watchers
                    .borrow_mut()
                    .retain(|(watcher_id, _)| *watcher_id != id);
            }
        }
    }

    #[cfg(test)]
    fn watcher_count(&self) -> usize {
        self.watchers.borrow().len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
