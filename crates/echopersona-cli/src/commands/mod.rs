pub mod calendar;
pub mod config;
pub mod entry;
pub mod premium;
pub mod profile;
pub mod prompt;
pub mod streak;

use echopersona_core::{AppState, Config, Database};

/// Open the database and rehydrate the state with configured limits applied.
pub fn open_state() -> Result<(Database, AppState), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let state = db.load_state()?.with_config(&config);
    tracing::debug!(entries = state.journal.len(), "state loaded");
    Ok((db, state))
}
