//! Root application state.
//!
//! Combines the journal, prompt, profile and premium slices. The whole value
//! is what [`Database::save_state`](crate::storage::Database::save_state)
//! persists and [`Database::load_state`](crate::storage::Database::load_state)
//! rehydrates.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::journal::{JournalEntry, JournalState};
use crate::profile::{PremiumState, ProfileState};
use crate::prompt::{PromptState, Recording};
use crate::storage::Config;
use crate::streak::{self, StreakSummary};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub journal: JournalState,
    #[serde(default)]
    pub prompt: PromptState,
    #[serde(default)]
    pub profile: ProfileState,
    #[serde(default)]
    pub premium: PremiumState,
}

impl AppState {
    /// Apply the configured history limits to the prompt and profile slices.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.prompt = self
            .prompt
            .with_history_limit(config.journal.prompt_history_limit);
        self.profile = self
            .profile
            .with_history_limit(config.journal.profile_history_limit);
        self
    }

    /// Answer the current prompt, store the entry and move on to a new prompt.
    ///
    /// # Errors
    /// Fails when there is no current prompt, the response is blank, or the
    /// generated timestamp collides with an existing entry.
    pub fn save_response<R: Rng + ?Sized>(
        &mut self,
        response: &str,
        recording: Option<Recording>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<JournalEntry> {
        let entry = self.prompt.compose_entry(response, recording, now)?;
        self.journal.add_entry(entry.clone())?;
        self.prompt.rotate_prompt(rng);
        Ok(entry)
    }

    /// Streak badge for the current journal as of `now`.
    pub fn streak_summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> StreakSummary {
        streak::summarize(self.journal.entries(), now)
    }
}
