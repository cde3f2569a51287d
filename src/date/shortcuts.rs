//! Shortcuts Module - Named preset periods
//!
//! Static map from shortcut keys to concrete periods ("Today", "Last 7
//! days", "Quarter to date"). Bounds are computed from a reference day at
//! construction time and are immutable data afterwards — the interactive
//! core never touches them.

use chrono::{Datelike, Days, NaiveDate};

use crate::types::Period;

// =============================================================================
// TYPES
// =============================================================================

/// Shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Today,
    Yesterday,
    /// Parameterized family: "Last N days".
    Past,
    PastMonth,
    CurrentMonth,
    CurrentQuarter,
}

/// One labeled preset period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutsItem {
    pub text: &'static str,
    /// Set for entries of the "Last N days" family.
    pub days_number: Option<u64>,
    pub period: Period,
}

impl ShortcutsItem {
    fn new(text: &'static str, period: Period) -> Self {
        Self {
            text,
            days_number: None,
            period,
        }
    }
}

// =============================================================================
// CALENDAR HELPERS
// =============================================================================

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next.and_then(|first| first.pred_opt()).unwrap_or(date)
}

/// Some day inside the month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date).pred_opt().unwrap_or(date)
}

/// First and last day of the quarter containing `date`.
pub fn quarter_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let quarter = (date.month0()) / 3;
    let start_month = quarter * 3 + 1;
    let end_month = start_month + 2;

    let start = NaiveDate::from_ymd_opt(date.year(), start_month, 1).unwrap_or(date);
    let end = NaiveDate::from_ymd_opt(date.year(), end_month, 1)
        .map_or(date, end_of_month);
    (start, end)
}

fn days_back(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap_or(date)
}

// =============================================================================
// DEFAULT SHORTCUTS
// =============================================================================

/// Build the default shortcut table relative to `today`.
///
/// Keys map to one entry each, except [`Shortcut::Past`] which carries the
/// ordered "Last N days" family.
pub fn default_shortcuts(today: NaiveDate) -> Vec<(Shortcut, Vec<ShortcutsItem>)> {
    let yesterday = days_back(today, 1);
    let last_month = previous_month(today);
    let (quarter_start, quarter_end) = quarter_bounds(today);

    let past_family = [(7, "Last 7 days"), (30, "Last 30 days"), (90, "Last 90 days")]
        .into_iter()
        .map(|(n, text)| ShortcutsItem {
            text,
            days_number: Some(n),
            period: Period::new(days_back(today, n), today),
        })
        .collect();

    vec![
        (
            Shortcut::Today,
            vec![ShortcutsItem::new("Today", Period::day(today))],
        ),
        (
            Shortcut::Yesterday,
            vec![ShortcutsItem::new("Yesterday", Period::day(yesterday))],
        ),
        (Shortcut::Past, past_family),
        (
            Shortcut::PastMonth,
            vec![ShortcutsItem::new(
                "Last month",
                Period::new(start_of_month(last_month), end_of_month(last_month)),
            )],
        ),
        (
            Shortcut::CurrentMonth,
            vec![ShortcutsItem::new(
                "Month to date",
                Period::new(start_of_month(today), end_of_month(today)),
            )],
        ),
        (
            Shortcut::CurrentQuarter,
            vec![ShortcutsItem::new(
                "Quarter to date",
                Period::new(quarter_start, quarter_end),
            )],
        ),
    ]
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

    fn find(table: &[(Shortcut, Vec<ShortcutsItem>)], key: Shortcut) -> Vec<ShortcutsItem> {
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, items)| items.clone())
            .unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(start_of_month(date(2024, 2, 15)), date(2024, 2, 1));
        assert_eq!(end_of_month(date(2024, 2, 15)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2023, 2, 15)), date(2023, 2, 28));
        assert_eq!(end_of_month(date(2024, 12, 3)), date(2024, 12, 31));
    }

    #[test]
    fn test_previous_month_crosses_year() {
        assert_eq!(previous_month(date(2024, 1, 20)), date(2023, 12, 31));
        assert_eq!(previous_month(date(2024, 3, 1)), date(2024, 2, 29));
    }

    #[test]
    fn test_quarter_bounds() {
        assert_eq!(
            quarter_bounds(date(2024, 2, 10)),
            (date(2024, 1, 1), date(2024, 3, 31))
        );
        assert_eq!(
            quarter_bounds(date(2024, 5, 1)),
            (date(2024, 4, 1), date(2024, 6, 30))
        );
        assert_eq!(
            quarter_bounds(date(2024, 12, 31)),
            (date(2024, 10, 1), date(2024, 12, 31))
        );
    }

    #[test]
    fn test_today_and_yesterday() {
        let table = default_shortcuts(date(2024, 6, 15));

        let today = find(&table, Shortcut::Today);
        assert_eq!(today[0].text, "Today");
        assert_eq!(today[0].period, Period::day(date(2024, 6, 15)));

        let yesterday = find(&table, Shortcut::Yesterday);
        assert_eq!(yesterday[0].period, Period::day(date(2024, 6, 14)));
    }

    #[test]
    fn test_past_family_ordered() {
        let table = default_shortcuts(date(2024, 6, 15));
        let past = find(&table, Shortcut::Past);

        assert_eq!(past.len(), 3);
        assert_eq!(
            past.iter().map(|i| i.days_number).collect::<Vec<_>>(),
            vec![Some(7), Some(30), Some(90)]
        );
        assert_eq!(past[0].text, "Last 7 days");
        assert_eq!(
            past[0].period,
            Period::new(date(2024, 6, 8), date(2024, 6, 15))
        );
        assert_eq!(
            past[2].period,
            Period::new(date(2024, 3, 17), date(2024, 6, 15))
        );
    }

    #[test]
    fn test_month_shortcuts() {
        let table = default_shortcuts(date(2024, 3, 10));

        let last = find(&table, Shortcut::PastMonth);
        assert_eq!(
            last[0].period,
            Period::new(date(2024, 2, 1), date(2024, 2, 29))
        );

        let current = find(&table, Shortcut::CurrentMonth);
        assert_eq!(
            current[0].period,
            Period::new(date(2024, 3, 1), date(2024, 3, 31))
        );
    }

    #[test]
    fn test_quarter_shortcut() {
        let table = default_shortcuts(date(2024, 8, 7));
        let quarter = find(&table, Shortcut::CurrentQuarter);
        assert_eq!(
            quarter[0].period,
            Period::new(date(2024, 7, 1), date(2024, 9, 30))
        );
    }

    #[test]
    fn test_periods_are_ordered() {
        let table = default_shortcuts(date(2024, 1, 1));
        for (_, items) in &table {
            for item in items {
                let (start, end) = (item.period.start.unwrap(), item.period.end.unwrap());
                assert!(start <= end, "{} must be ordered", item.text);
            }
        }
    }
}
