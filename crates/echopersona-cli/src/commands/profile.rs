use chrono::{SecondsFormat, Utc};
use clap::Subcommand;
use echopersona_core::PersonaProfile;

use super::open_state;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current persona profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Make a profile current and add it to the timeline
    Record {
        /// Profile summary
        summary: String,
        /// Personality trait (repeatable)
        #[arg(long = "trait")]
        traits: Vec<String>,
    },
    /// Earlier profiles, newest first
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Drop the current profile and its timeline
    Clear,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut state) = open_state()?;

    match action {
        ProfileAction::Show { json } => match &state.profile.current_profile {
            Some(profile) if json => println!("{}", serde_json::to_string_pretty(profile)?),
            Some(profile) => {
                println!("{}", profile.summary);
                if !profile.traits.is_empty() {
                    println!("Traits: {}", profile.traits.join(", "));
                }
                println!("Updated: {}", profile.last_updated);
            }
            None if json => println!("null"),
            None => println!("No profile yet."),
        },
        ProfileAction::Record { summary, traits } => {
            if summary.trim().is_empty() {
                return Err("profile summary must not be empty".into());
            }
            let profile = PersonaProfile {
                summary,
                traits,
                last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            };
            println!("Profile recorded: {}", profile.last_updated);
            state.profile.record_profile(profile);
            db.save_profile(&state.profile)?;
        }
        ProfileAction::History { json } => {
            let history = &state.profile.historical_profiles;
            if json {
                println!("{}", serde_json::to_string_pretty(history)?);
            } else if history.is_empty() {
                println!("No earlier profiles.");
            } else {
                for snapshot in history {
                    println!("{}  {}", snapshot.timestamp, snapshot.summary);
                }
            }
        }
        ProfileAction::Clear => {
            state.profile.clear_profile();
            db.save_profile(&state.profile)?;
            println!("Profile cleared");
        }
    }
    Ok(())
}
