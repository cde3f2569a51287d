//! Date Module - Parsing, formatting, range interpretation, shortcuts
//!
//! Everything that turns text into calendar dates and back:
//!
//! - **Format** - Display-format parsing/formatting, canonical storage format
//! - **Range** - Free-text interpretation into a validated period
//! - **Shortcuts** - Named preset periods ("Today", "Last 7 days", ...)

mod format;
mod range;
mod shortcuts;

pub use format::*;
pub use range::*;
pub use shortcuts::*;
