//! Property tests for the streak engine.
//!
//! Entries are generated as (day offset, minute of day) pairs relative to a
//! fixed "now" so every run is deterministic for a given seed.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use echopersona_core::streak::{compute, next_milestone, MILESTONES};
use echopersona_core::JournalEntry;
use proptest::prelude::*;

fn now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 15, 18, 45, 0)
        .unwrap()
}

fn entry_at(days_ago: i64, minute: i64) -> JournalEntry {
    let midnight = now()
        .timezone()
        .from_local_datetime(&now().date_naive().and_hms_opt(0, 0, 0).unwrap())
        .unwrap();
    let instant = midnight - Duration::days(days_ago) + Duration::minutes(minute);
    JournalEntry {
        prompt: "What brings you joy in unexpected moments?".into(),
        response: format!("{days_ago}/{minute}"),
        timestamp: instant.with_timezone(&Utc).to_rfc3339(),
        recording_uri: None,
        recording_duration: None,
    }
}

fn entries_strategy() -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec((0i64..40, 0i64..1440), 0..60)
        .prop_map(|pairs| pairs.into_iter().map(|(d, m)| entry_at(d, m)).collect())
}

proptest! {
    #[test]
    fn best_is_never_below_current(entries in entries_strategy()) {
        let result = compute(&entries, &now());
        prop_assert!(result.best_streak >= result.current_streak);
    }

    #[test]
    fn compute_is_idempotent(entries in entries_strategy()) {
        prop_assert_eq!(compute(&entries, &now()), compute(&entries, &now()));
    }

    #[test]
    fn order_does_not_matter(entries in entries_strategy()) {
        let mut reversed = entries.clone();
        reversed.reverse();
        let mut rotated = entries.clone();
        if !rotated.is_empty() {
            let mid = rotated.len() / 2;
            rotated.rotate_left(mid);
        }
        let expected = compute(&entries, &now());
        prop_assert_eq!(compute(&reversed, &now()), expected);
        prop_assert_eq!(compute(&rotated, &now()), expected);
    }

    #[test]
    fn duplicating_entries_changes_nothing(entries in entries_strategy()) {
        let mut doubled = entries.clone();
        doubled.extend(entries.iter().cloned());
        prop_assert_eq!(compute(&doubled, &now()), compute(&entries, &now()));
    }

    #[test]
    fn streaks_are_bounded_by_distinct_days(entries in entries_strategy()) {
        let days: std::collections::BTreeSet<_> = entries
            .iter()
            .filter_map(|e| e.calendar_day(&now().timezone()))
            .collect();
        let result = compute(&entries, &now());
        prop_assert!(result.best_streak as usize <= days.len());
        prop_assert_eq!(result.best_streak == 0, days.is_empty());
    }

    #[test]
    fn next_milestone_is_above_or_saturated(streak in 0u32..1000) {
        let next = next_milestone(streak);
        prop_assert!(MILESTONES.contains(&next));
        if streak < 365 {
            prop_assert!(next > streak);
        } else {
            prop_assert_eq!(next, 365);
        }
    }
}

#[test]
fn broken_then_resumed_history() {
    let entries: Vec<_> = [0, 1, 5, 6, 7].iter().map(|&d| entry_at(d, 600)).collect();
    let result = compute(&entries, &now());
    assert_eq!(result.current_streak, 2);
    assert_eq!(result.best_streak, 3);
}
