//! Integration tests for the persisted journal.
//!
//! Covers the full flow from answering prompts through a file-backed
//! database to streak computation after reopening.

use chrono::{Duration, TimeZone, Utc};
use echopersona_core::{streak, AppState, Config, Database, JournalEntry, SAMPLE_PROMPTS};
use rand::rngs::mock::StepRng;

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("echopersona.db");
    let today = Utc.with_ymd_and_hms(2024, 6, 10, 7, 30, 0).unwrap();
    let mut rng = StepRng::new(0, 1);

    {
        let db = Database::open_at(&path).unwrap();
        let mut state = db.load_state().unwrap();
        state.prompt.ensure_prompt(&mut rng);
        for days_ago in [3, 2, 1] {
            state
                .save_response("Walked to work", None, today - Duration::days(days_ago), &mut rng)
                .unwrap();
        }
        state.premium.set_premium_status(true);
        db.save_state(&state).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let state = db.load_state().unwrap();
    assert_eq!(state.journal.len(), 3);
    assert!(state.premium.is_premium);
    assert!(SAMPLE_PROMPTS.contains(&state.prompt.current_prompt.as_str()));

    // Run ended yesterday, so it is still live today.
    let result = streak::compute(state.journal.entries(), &today);
    assert_eq!(result.current_streak, 3);
    assert_eq!(result.best_streak, 3);

    // Two days later without an entry the streak is gone, best remains.
    let later = today + Duration::days(2);
    let result = streak::compute(state.journal.entries(), &later);
    assert_eq!(result.current_streak, 0);
    assert_eq!(result.best_streak, 3);
}

#[test]
fn test_deleting_middle_day_splits_streak() {
    let db = Database::open_memory().unwrap();
    let today = Utc.with_ymd_and_hms(2024, 6, 10, 20, 0, 0).unwrap();
    for days_ago in 0..5 {
        let entry = JournalEntry::new(
            SAMPLE_PROMPTS[2],
            "Keep going",
            today - Duration::days(days_ago),
        );
        db.insert_entry(&entry).unwrap();
    }
    assert_eq!(streak::compute(&db.entries().unwrap(), &today).current_streak, 5);

    let middle = JournalEntry::new(SAMPLE_PROMPTS[2], "x", today - Duration::days(2));
    assert!(db.delete_entry(&middle.timestamp).unwrap());

    let result = streak::compute(&db.entries().unwrap(), &today);
    assert_eq!(result.current_streak, 2);
    assert_eq!(result.best_streak, 2);
}

#[test]
fn test_imported_snapshot_with_bad_record() {
    let snapshot = r#"{
        "journal": {
            "entries": [
                {"prompt": "p", "response": "a", "timestamp": "2024-06-10T08:00:00.000Z"},
                {"prompt": "p", "response": "b", "timestamp": "Invalid Date"},
                {"prompt": "p", "response": "c", "timestamp": "2024-06-09T08:00:00.000Z",
                 "recordingUri": "file:///voice.m4a", "recordingDuration": 4200}
            ]
        },
        "premium": {"isPremium": false}
    }"#;
    let state: AppState = serde_json::from_str(snapshot).unwrap();
    let state = state.with_config(&Config::default());
    assert_eq!(state.journal.len(), 3);

    let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
    let summary = state.streak_summary(&now);
    assert_eq!(summary.current_streak, 2);
    assert_eq!(summary.best_streak, 2);
    assert!(summary.active);
    assert_eq!(summary.next_milestone, 3);

    let db = Database::open_memory().unwrap();
    db.save_state(&state).unwrap();
    assert_eq!(db.load_state().unwrap(), state);
}
