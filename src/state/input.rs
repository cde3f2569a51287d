//! Input Module - Text buffer ownership and the typing-to-period flow
//!
//! The controller owns the field's transient state: the raw text and the
//! caret. Every keystroke funnels through [`InputController::handle_text_change`],
//! which stores the text unconditionally (the field always shows exactly
//! what was typed, valid or not) and commits a period to shared state only
//! when the interpreter produces one. Invalid text is silently waited out.
//!
//! # API
//!
//! - `handle_key(event)` - Caret editing, character input, Enter commit
//! - `handle_text_change(text)` - Full replace, e.g. from a paste
//! - `handle_refocus()` - Restart selection on refocusing a filled field
//! - `blur()` - Drop interactive focus

use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;

use crate::date::interpret;
use crate::events::KeyboardEvent;
use crate::state::context::DatepickerContext;
use crate::types::{Period, PickerMode};

use spark_signals::{Signal, signal};

// =============================================================================
// GRAPHEME HELPERS
// =============================================================================

fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset of the grapheme at `index` (text length when past the end).
fn byte_at(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

fn insert_at(text: &str, index: usize, insert: &str) -> String {
    let at = byte_at(text, index);
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

fn remove_at(text: &str, index: usize) -> String {
    let start = byte_at(text, index);
    let end = byte_at(text, index + 1);
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    out
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Owns the input field's transient state and pushes validated periods
/// into the shared context.
pub struct InputController {
    ctx: Rc<DatepickerContext>,
    caret: Signal<usize>,
    focused: Signal<bool>,
    close_popover: Rc<dyn Fn()>,
}

impl InputController {
    pub fn new(ctx: Rc<DatepickerContext>, close_popover: Rc<dyn Fn()>) -> Self {
        Self {
            ctx,
            caret: signal(0),
            focused: signal(false),
            close_popover,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    /// Caret position in graphemes, clamped to the current text.
    pub fn caret(&self) -> usize {
        self.caret.get().min(grapheme_len(&self.ctx.input_text()))
    }

    pub fn blur(&self) {
        self.focused.set(false);
    }

    // -------------------------------------------------------------------------
    // Text changes
    // -------------------------------------------------------------------------

    /// Store new text and interpret it.
    ///
    /// The text is stored exactly as given. When interpretation yields a
    /// period it is committed together with the hover marker (range mode
    /// previews the day before the end; single mode the date itself).
    /// A `None` interpretation leaves shared state untouched.
    pub fn handle_text_change(&self, new_text: &str) {
        let config = self.ctx.config();

        if let Some(period) = interpret(
            new_text,
            config.mode,
            &config.display_format,
            &config.separator,
        ) {
            let hover = match config.mode {
                PickerMode::Range => period.end.and_then(|end| end.pred_opt()),
                PickerMode::Single => period.start,
            };
            self.ctx.change_datepicker_value(period);
            self.ctx.change_day_hover(hover);
        }

        // Last, so the field reflects the keystroke even over the echo a
        // committed period just wrote
        self.ctx.change_input_text(new_text);
    }

    // -------------------------------------------------------------------------
    // Keys
    // -------------------------------------------------------------------------

    /// Handle a key event while focused. Returns true if consumed.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if !self.focused.get() || self.ctx.is_disabled() {
            return false;
        }

        let text = self.ctx.input_text();
        let len = grapheme_len(&text);
        let pos = self.caret.get().min(len);
        let editable = !self.ctx.is_read_only();

        match event.key.as_str() {
            "Enter" => {
                self.handle_commit_key();
                true
            }
            "ArrowLeft" => {
                self.caret.set(pos.saturating_sub(1));
                true
            }
            "ArrowRight" => {
                self.caret.set((pos + 1).min(len));
                true
            }
            "Home" => {
                self.caret.set(0);
                true
            }
            "End" => {
                self.caret.set(len);
                true
            }
            "Backspace" => {
                if editable && pos > 0 {
                    self.caret.set(pos - 1);
                    self.handle_text_change(&remove_at(&text, pos - 1));
                }
                true
            }
            "Delete" => {
                if editable && pos < len {
                    self.handle_text_change(&remove_at(&text, pos));
                }
                true
            }
            key => {
                // Single printable grapheme, no command modifiers
                if key.chars().count() == 1
                    && !event.modifiers.ctrl
                    && !event.modifiers.alt
                    && !event.modifiers.meta
                {
                    if editable {
                        self.caret.set(pos + 1);
                        self.handle_text_change(&insert_at(&text, pos, key));
                    }
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Explicit commit: drop focus and force the popover closed.
    ///
    /// Text and period stay exactly as they are.
    pub fn handle_commit_key(&self) {
        self.focused.set(false);
        (self.close_popover)();
    }

    // -------------------------------------------------------------------------
    // Refocus
    // -------------------------------------------------------------------------

    /// The field (re)gains interactive focus.
    ///
    /// Refocusing a filled field restarts selection: the hover marker and
    /// the selected period are cleared. The displayed text is deliberately
    /// left as-is.
    pub fn handle_refocus(&self) {
        self.focused.set(true);

        if self.ctx.input_text().is_empty() {
            return;
        }
        if self.ctx.day_hover().is_some() {
            self.ctx.change_day_hover(None);
        }
        if self.ctx.period().is_complete() {
            self.ctx.change_datepicker_value(Period::EMPTY);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
