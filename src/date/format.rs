//! Format Module - Display formats and the canonical date format
//!
//! The display format is the user-facing token pattern (`YYYY-MM-DD`,
//! `DD/MM/YYYY`, ...) used both to parse typed text and to render dates
//! back into the field. The canonical format is the fixed machine format
//! every stored or shared date uses, independent of what the user sees.
//!
//! # Example
//!
//! ```ignore
//! use spark_datepicker::date::{parse_formatted_date, DisplayFormat};
//!
//! let fmt = DisplayFormat::new("DD/MM/YYYY");
//! let parsed = parse_formatted_date("05/01/2024", &fmt);
//! assert!(parsed.is_valid());
//! ```

use chrono::NaiveDate;

/// Canonical machine-readable date format (chrono syntax).
///
/// This is what gets stored and handed to collaborators, never what the
/// user typed.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// DISPLAY FORMAT
// =============================================================================

/// User-facing token pattern controlling how dates are typed and shown.
///
/// Patterns use day.js-style tokens (`YYYY`, `YY`, `MM`, `M`, `DD`, `D`);
/// any other character is a literal. The pattern is compiled to a chrono
/// format string once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    pattern: String,
    chrono: String,
}

impl DisplayFormat {
    /// Compile a token pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let chrono = compile_pattern(&pattern);
        Self { pattern, chrono }
    }

    /// The token pattern as given (used for placeholder text).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled chrono format string.
    pub fn chrono_format(&self) -> &str {
        &self.chrono
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::new("YYYY-MM-DD")
    }
}

/// Translate day.js tokens to chrono specifiers, longest token first.
fn compile_pattern(pattern: &str) -> String {
    const TOKENS: &[(&str, &str)] = &[
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MM", "%m"),
        ("M", "%-m"),
        ("DD", "%d"),
        ("D", "%-d"),
    ];

    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        // Literal character; '%' must be escaped for chrono
        let ch = rest.chars().next().expect("non-empty rest");
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    out
}

// =============================================================================
// PARSED DATE
// =============================================================================

/// Result of parsing user text: a real day, or the invalid marker.
///
/// Parsing never fails loudly; invalid text produces an invalid value the
/// same way an unparseable string produces an "Invalid Date" object in a
/// browser. Callers branch on [`ParsedDate::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate(Option<NaiveDate>);

impl ParsedDate {
    /// The invalid marker.
    pub const INVALID: Self = Self(None);

    /// True iff the value denotes a real calendar day.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying day, if valid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }
}

impl From<NaiveDate> for ParsedDate {
    fn from(date: NaiveDate) -> Self {
        Self(Some(date))
    }
}

// =============================================================================
// PARSE / FORMAT
// =============================================================================

/// Parse text according to the display format's token order.
///
/// Surrounding whitespace is tolerated (range halves arrive with the
/// separator's padding still attached). Anything that does not match the
/// pattern exactly, or names a day that does not exist, yields the invalid
/// marker.
pub fn parse_formatted_date(text: &str, format: &DisplayFormat) -> ParsedDate {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedDate::INVALID;
    }
    ParsedDate(NaiveDate::parse_from_str(trimmed, format.chrono_format()).ok())
}

/// Render a date in the canonical storage format (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a date in the user-facing display format.
pub fn format_display(date: NaiveDate, format: &DisplayFormat) -> String {
    date.format(format.chrono_format()).to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compile_pattern() {
        assert_eq!(compile_pattern("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(compile_pattern("DD/MM/YYYY"), "%d/%m/%Y");
        assert_eq!(compile_pattern("M/D/YY"), "%-m/%-d/%y");
        assert_eq!(compile_pattern("YYYY.MM.DD"), "%Y.%m.%d");
    }

    #[test]
    fn test_compile_pattern_escapes_percent() {
        assert_eq!(compile_pattern("YYYY%MM"), "%Y%%%m");
    }

    #[test]
    fn test_parse_default_format() {
        let fmt = DisplayFormat::default();

        let parsed = parse_formatted_date("2024-01-05", &fmt);
        assert!(parsed.is_valid());
        assert_eq!(parsed.date(), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let fmt = DisplayFormat::default();
        let parsed = parse_formatted_date("  2024-01-05 ", &fmt);
        assert_eq!(parsed.date(), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let fmt = DisplayFormat::default();

        assert!(!parse_formatted_date("", &fmt).is_valid());
        assert!(!parse_formatted_date("hello", &fmt).is_valid());
        assert!(!parse_formatted_date("2024-01", &fmt).is_valid());
        assert!(!parse_formatted_date("2024-01-05x", &fmt).is_valid());
    }

    #[test]
    fn test_parse_rejects_impossible_days() {
        let fmt = DisplayFormat::default();

        assert!(!parse_formatted_date("2024-02-30", &fmt).is_valid());
        assert!(!parse_formatted_date("2024-13-01", &fmt).is_valid());
        // 2023 is not a leap year
        assert!(!parse_formatted_date("2023-02-29", &fmt).is_valid());
        assert!(parse_formatted_date("2024-02-29", &fmt).is_valid());
    }

    #[test]
    fn test_parse_alternate_token_orders() {
        let dmy = DisplayFormat::new("DD/MM/YYYY");
        assert_eq!(
            parse_formatted_date("05/01/2024", &dmy).date(),
            Some(date(2024, 1, 5))
        );

        let mdy = DisplayFormat::new("MM-DD-YYYY");
        assert_eq!(
            parse_formatted_date("01-05-2024", &mdy).date(),
            Some(date(2024, 1, 5))
        );
    }

    #[test]
    fn test_format_date_is_canonical() {
        assert_eq!(format_date(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_date(date(987, 12, 31)), "0987-12-31");
    }

    #[test]
    fn test_round_trip_display_formats() {
        let formats = ["YYYY-MM-DD", "DD/MM/YYYY", "MM.DD.YYYY"];
        let days = [date(2024, 1, 5), date(1999, 12, 31), date(2024, 2, 29)];

        for pattern in formats {
            let fmt = DisplayFormat::new(pattern);
            for d in days {
                let rendered = format_display(d, &fmt);
                let parsed = parse_formatted_date(&rendered, &fmt);
                assert_eq!(parsed.date(), Some(d), "round trip via {pattern}");
            }
        }
    }

    #[test]
    fn test_invalid_marker() {
        assert!(!ParsedDate::INVALID.is_valid());
        assert_eq!(ParsedDate::INVALID.date(), None);

        let valid = ParsedDate::from(date(2024, 6, 1));
        assert!(valid.is_valid());
    }
}
