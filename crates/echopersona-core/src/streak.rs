//! Journaling streak engine.
//!
//! A streak is a run of consecutive local calendar days with at least one
//! journal entry. The current streak is the run ending today or yesterday
//! (zero once a full day passes without an entry); the best streak is the
//! longest run anywhere in the history.
//!
//! Everything here is a pure function of the entry snapshot and the injected
//! `now`, whose timezone defines the local day boundary.

use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar::marked_days;
use crate::journal::JournalEntry;

/// Streak lengths that earn a badge, ascending.
pub const MILESTONES: [u32; 8] = [3, 7, 14, 30, 60, 90, 180, 365];

/// Current and best streak, in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Everything a streak badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub best_streak: u32,
    pub next_milestone: u32,
    pub active: bool,
}

/// Compute streaks for `entries` as of `now`.
///
/// Entries are bucketed into calendar days in `now`'s timezone; entries with
/// unparseable timestamps are ignored. Input order does not matter.
pub fn compute<Tz: TimeZone>(entries: &[JournalEntry], now: &DateTime<Tz>) -> StreakResult {
    let days = marked_days(entries, &now.timezone());
    from_days(&days, now.date_naive())
}

/// [`compute`] against the system clock and local timezone.
pub fn compute_local(entries: &[JournalEntry]) -> StreakResult {
    compute(entries, &Local::now())
}

/// Streaks over a set of distinct days, relative to `today`.
///
/// The run is live only when the newest day is today or yesterday; a day
/// after today therefore ends the current streak. The best streak scans
/// every day, future ones included.
pub fn from_days(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakResult {
    let mut newest_first = days.iter().rev().copied();
    let Some(newest) = newest_first.next() else {
        return StreakResult::default();
    };

    let live = newest == today || today.pred_opt() == Some(newest);
    let mut current = u32::from(live);
    let mut in_current = live;
    let mut run = 1;
    let mut best = 1;
    let mut previous = newest;

    for day in newest_first {
        if previous.pred_opt() == Some(day) {
            run += 1;
            if in_current {
                current += 1;
            }
        } else {
            run = 1;
            in_current = false;
        }
        best = best.max(run);
        previous = day;
    }

    StreakResult {
        current_streak: current,
        best_streak: best.max(current),
    }
}

/// Whether the user has a live streak as of `now`.
pub fn is_streak_active<Tz: TimeZone>(entries: &[JournalEntry], now: &DateTime<Tz>) -> bool {
    compute(entries, now).current_streak > 0
}

/// Smallest milestone strictly above `current_streak`, saturating at the last one.
pub fn next_milestone(current_streak: u32) -> u32 {
    MILESTONES
        .iter()
        .copied()
        .find(|&m| m > current_streak)
        .unwrap_or(MILESTONES[MILESTONES.len() - 1])
}

/// Badge data for `entries` as of `now`.
pub fn summarize<Tz: TimeZone>(entries: &[JournalEntry], now: &DateTime<Tz>) -> StreakSummary {
    let StreakResult {
        current_streak,
        best_streak,
    } = compute(entries, now);
    StreakSummary {
        current_streak,
        best_streak,
        next_milestone: next_milestone(current_streak),
        active: current_streak > 0,
    }
}
