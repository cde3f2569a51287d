//! Core types for spark-datepicker.
//!
//! These types define the foundation everything builds on: the selected
//! period, the popover placement vocabulary, and the geometry values the
//! positioning logic consumes.

use bitflags::bitflags;
use chrono::NaiveDate;

// =============================================================================
// Period
// =============================================================================

/// A selected date range (or a degenerate single day in single mode).
///
/// Invariant: when both ends are `Some`, `start <= end`. Both `None` means
/// "no selection". The interpreter and the setters are the only producers,
/// and neither constructs an out-of-order pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Period {
    /// The empty selection.
    pub const EMPTY: Self = Self {
        start: None,
        end: None,
    };

    /// Create a period from an ordered pair.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A degenerate single-day period.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: Some(date),
        }
    }

    /// True when neither end is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True when both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

// =============================================================================
// Picker mode
// =============================================================================

/// Whether the field selects one day or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    Single,
    #[default]
    Range,
}

// =============================================================================
// Popover placement
// =============================================================================

/// Vertical side of the anchor the popover attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Up,
    #[default]
    Down,
}

/// Which corner of the popover carries the connecting arrow.
///
/// Paired with placement: a popover below the anchor points up from its
/// top-left corner, a popover above points down from its bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowCorner {
    TopLeft,
    BottomRight,
}

/// Configured direction preference for the popover.
///
/// `Up` and `Down` are honored unconditionally; `Auto` consults viewport
/// geometry at open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverDirection {
    #[default]
    Auto,
    Up,
    Down,
}

/// Open/closed flag plus the placement chosen for the current opening.
///
/// Created closed; transitions only through the popover controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopoverState {
    pub open: bool,
    pub placement: Placement,
}

impl PopoverState {
    /// Closed, placement reset.
    pub const CLOSED: Self = Self {
        open: false,
        placement: Placement::Down,
    };

    /// The arrow decoration matching the current placement.
    pub fn arrow_corner(&self) -> ArrowCorner {
        match self.placement {
            Placement::Up => ArrowCorner::BottomRight,
            Placement::Down => ArrowCorner::TopLeft,
        }
    }
}

// =============================================================================
// Field flags
// =============================================================================

bitflags! {
    /// Behavior flags for the input field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u8 {
        /// Field ignores all interaction.
        const DISABLED = 1 << 0;
        /// Field can focus and toggle but rejects edits.
        const READ_ONLY = 1 << 1;
    }
}

// =============================================================================
// Toggle icon
// =============================================================================

/// What the toggle control shows.
///
/// The default renderer uses the chevron pair (rotating while open);
/// `Close` is for custom renderers that swap in a dismiss glyph instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Chevron,
    ChevronOpen,
    Close,
}

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned rectangle in abstract pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Viewport dimensions in the same pixel space as [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

// =============================================================================
// TESTS
// =============================================================================
