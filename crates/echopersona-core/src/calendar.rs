//! Local calendar-day bucketing of journal entries.
//!
//! The streak engine and calendar views both go through [`marked_days`], so
//! they always agree on which day an entry belongs to.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, TimeZone};
use tracing::debug;

use crate::journal::JournalEntry;

/// Distinct calendar days in `tz` carrying at least one entry.
///
/// Entries with an unparseable timestamp are skipped.
pub fn marked_days<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> BTreeSet<NaiveDate> {
    day_counts(entries, tz).into_keys().collect()
}

/// Number of entries per calendar day in `tz`.
pub fn day_counts<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        match entry.calendar_day(tz) {
            Some(day) => *counts.entry(day).or_insert(0) += 1,
            None => debug!(timestamp = %entry.timestamp, "skipping entry with unparseable timestamp"),
        }
    }
    counts
}

/// Entries written on `day` in `tz`, in input order.
pub fn entries_on<'a, Tz: TimeZone>(
    entries: &'a [JournalEntry],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<&'a JournalEntry> {
    entries
        .iter()
        .filter(|e| e.calendar_day(tz) == Some(day))
        .collect()
}
