use chrono::{Local, Utc};
use clap::Subcommand;
use echopersona_core::{streak, JournalEntry, Recording};

use super::open_state;

#[derive(Subcommand)]
pub enum EntryAction {
    /// Answer the current prompt
    Add {
        /// Response text
        response: String,
        /// Answer this prompt instead of the current one
        #[arg(long)]
        prompt: Option<String>,
        /// Voice recording URI
        #[arg(long)]
        recording_uri: Option<String>,
        /// Voice recording length in milliseconds
        #[arg(long, requires = "recording_uri")]
        recording_duration: Option<f64>,
    },
    /// List entries, newest first
    List {
        /// Only entries whose prompt or response contains this text (any case)
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print an entry as shareable text
    Share {
        /// Entry timestamp (as shown by `entry list`)
        timestamp: String,
    },
    /// Delete the entry with this timestamp
    Delete {
        /// Entry timestamp (as shown by `entry list`)
        timestamp: String,
    },
    /// Delete every entry
    Clear,
}

pub fn run(action: EntryAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut state) = open_state()?;

    match action {
        EntryAction::Add {
            response,
            prompt,
            recording_uri,
            recording_duration,
        } => {
            let mut rng = rand::thread_rng();
            match prompt {
                Some(p) => state.prompt.set_current_prompt(p),
                None => {
                    state.prompt.ensure_prompt(&mut rng);
                }
            }
            let recording = recording_uri.map(|uri| Recording {
                uri,
                duration_ms: recording_duration,
            });
            let entry = state.save_response(&response, recording, Utc::now(), &mut rng)?;
            db.insert_entry(&entry)?;
            db.save_prompt(&state.prompt)?;

            let summary = state.streak_summary(&Local::now());
            println!("Entry saved: {}", entry.timestamp);
            println!(
                "Current streak: {} (best {})",
                summary.current_streak, summary.best_streak
            );
        }
        EntryAction::List { search, json } => {
            let entries: Vec<&JournalEntry> = match search.as_deref() {
                Some(query) => state.journal.search(query),
                None => state.journal.entries().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() && search.is_some() {
                println!("No matching entries.");
            } else if entries.is_empty() {
                println!("No entries yet.");
            } else {
                for entry in entries {
                    let voice = if entry.recording_uri.is_some() { " [voice]" } else { "" };
                    println!("{}  {}{}", entry.timestamp, entry.prompt, voice);
                    println!("    {}", entry.response);
                }
            }
        }
        EntryAction::Share { timestamp } => {
            let entry = state
                .journal
                .get(&timestamp)
                .ok_or_else(|| format!("no entry with timestamp {timestamp}"))?;
            println!("{}", entry.share_text());
        }
        EntryAction::Delete { timestamp } => {
            if !db.delete_entry(&timestamp)? {
                return Err(format!("no entry with timestamp {timestamp}").into());
            }
            state.journal.delete_entry(&timestamp);
            let active = streak::is_streak_active(state.journal.entries(), &Local::now());
            println!("Entry deleted: {timestamp}");
            if !active {
                println!("Streak is no longer active.");
            }
        }
        EntryAction::Clear => {
            let removed = db.clear_entries()?;
            println!("Deleted {removed} entries");
        }
    }
    Ok(())
}
