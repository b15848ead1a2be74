use chrono::Local;
use clap::Subcommand;
use echopersona_core::{streak, Config};

use super::open_state;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current and best streak
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Next milestone after a given streak length
    Milestone {
        /// Streak length in days
        days: u32,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StreakAction::Show { json } => {
            let (_db, state) = open_state()?;
            let summary = state.streak_summary(&Local::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Current streak: {} days", summary.current_streak);
                println!("Best streak:    {} days", summary.best_streak);
                if Config::load_or_default().streak.show_milestone {
                    println!("Next milestone: {} days", summary.next_milestone);
                }
            }
        }
        StreakAction::Milestone { days } => {
            println!("{}", streak::next_milestone(days));
        }
    }
    Ok(())
}
