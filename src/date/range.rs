//! Range Module - Free-text interpretation into a validated period
//!
//! Decides whether typed text encodes one date or two, splits it, and
//! produces a candidate period. Returning `None` means "not yet a valid
//! selection" and the caller must leave prior state untouched; malformed
//! text is a normal state here, never an error.

use crate::date::format::{DisplayFormat, parse_formatted_date};
use crate::types::{Period, PickerMode};

/// Interpret raw typed text as a period.
///
/// Single mode parses the whole string and yields a degenerate single-day
/// period. Range mode splits at the first occurrence of `separator`; when
/// that does not produce two non-empty halves (the user has not typed the
/// separator yet), the text is split at its midpoint character instead.
/// The midpoint split is a deliberate heuristic: it only succeeds when the
/// halves happen to parse into a valid, strictly ordered pair.
///
/// Equal start and end dates are rejected in range mode — the candidate
/// pair must satisfy `start < end` strictly.
pub fn interpret(
    raw: &str,
    mode: PickerMode,
    format: &DisplayFormat,
    separator: &str,
) -> Option<Period> {
    match mode {
        PickerMode::Single => parse_formatted_date(raw, format).date().map(Period::day),
        PickerMode::Range => {
            let (head, tail) = match raw.split_once(separator) {
                Some((head, tail)) if !head.is_empty() && !tail.is_empty() => (head, tail),
                _ => midpoint_split(raw),
            };

            let start = parse_formatted_date(head, format);
            let end = parse_formatted_date(tail, format);

            match (start.date(), end.date()) {
                (Some(start), Some(end)) if start < end => Some(Period::new(start, end)),
                _ => None,
            }
        }
    }
}

/// Split at `floor(char_count / 2)`, on a character boundary.
fn midpoint_split(raw: &str) -> (&str, &str) {
    let middle = raw.chars().count() / 2;
    let at = raw
        .char_indices()
        .nth(middle)
        .map_or(raw.len(), |(i, _)| i);
    raw.split_at(at)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fmt() -> DisplayFormat {
        DisplayFormat::default()
    }

    const SEP: &str = " ~ ";

    #[test]
    fn test_single_mode_valid() {
        let period = interpret("2024-01-05", PickerMode::Single, &fmt(), SEP);
        assert_eq!(period, Some(Period::day(date(2024, 1, 5))));
    }

    #[test]
    fn test_single_mode_invalid() {
        assert_eq!(interpret("2024-01", PickerMode::Single, &fmt(), SEP), None);
        assert_eq!(interpret("", PickerMode::Single, &fmt(), SEP), None);
    }

    #[test]
    fn test_range_ordered_pair() {
        let period = interpret("2024-01-05 ~ 2024-01-10", PickerMode::Range, &fmt(), SEP);
        assert_eq!(
            period,
            Some(Period::new(date(2024, 1, 5), date(2024, 1, 10)))
        );
    }

    #[test]
    fn test_range_end_before_start_rejected() {
        assert_eq!(
            interpret("2024-01-10 ~ 2024-01-05", PickerMode::Range, &fmt(), SEP),
            None
        );
    }

    #[test]
    fn test_range_equal_days_rejected() {
        // start < end is strict; a single-day range cannot be typed
        assert_eq!(
            interpret("2024-01-05 ~ 2024-01-05", PickerMode::Range, &fmt(), SEP),
            None
        );
    }

    #[test]
    fn test_range_half_invalid_rejected() {
        assert_eq!(
            interpret("2024-01-05 ~ 2024-99-10", PickerMode::Range, &fmt(), SEP),
            None
        );
        assert_eq!(
            interpret("garbage ~ 2024-01-10", PickerMode::Range, &fmt(), SEP),
            None
        );
    }

    #[test]
    fn test_range_midpoint_fallback_succeeds() {
        // No separator typed; 20 chars split evenly into two parseable dates
        let period = interpret("2024-01-052024-01-10", PickerMode::Range, &fmt(), SEP);
        assert_eq!(
            period,
            Some(Period::new(date(2024, 1, 5), date(2024, 1, 10)))
        );
    }

    #[test]
    fn test_range_midpoint_fallback_fails() {
        assert_eq!(
            interpret("2024-01-05 2024-01-1", PickerMode::Range, &fmt(), SEP),
            None
        );
        assert_eq!(interpret("2024-01-05", PickerMode::Range, &fmt(), SEP), None);
    }

    #[test]
    fn test_range_empty_half_falls_back() {
        // Trailing separator leaves an empty tail; the midpoint split of the
        // whole string cannot parse either, so nothing is produced
        assert_eq!(
            interpret("2024-01-05 ~ ", PickerMode::Range, &fmt(), SEP),
            None
        );
    }

    #[test]
    fn test_range_splits_at_first_separator() {
        // Second occurrence stays inside the tail and poisons the parse
        assert_eq!(
            interpret(
                "2024-01-05 ~ 2024-01-10 ~ 2024-01-12",
                PickerMode::Range,
                &fmt(),
                SEP
            ),
            None
        );
    }

    #[test]
    fn test_range_separator_padding_tolerated() {
        // Halves keep stray whitespace from a loosely typed separator
        let period = interpret("2024-01-05  ~  2024-01-10", PickerMode::Range, &fmt(), SEP);
        assert_eq!(
            period,
            Some(Period::new(date(2024, 1, 5), date(2024, 1, 10)))
        );
    }

    #[test]
    fn test_midpoint_split_char_boundary() {
        assert_eq!(midpoint_split("abcd"), ("ab", "cd"));
        assert_eq!(midpoint_split("abcde"), ("ab", "cde"));
        assert_eq!(midpoint_split(""), ("", ""));
        // Multi-byte characters split on a boundary, not mid-codepoint
        assert_eq!(midpoint_split("日本語です"), ("日本", "語です"));
    }
}
