//! Daily reflection prompts.
//!
//! Holds the prompt currently offered to the user plus a short history of
//! prompts shown, and composes journal entries that answer the current one.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::journal::JournalEntry;

/// Built-in prompts drawn from when none is set.
pub const SAMPLE_PROMPTS: [&str; 5] = [
    "What does growth mean to you today?",
    "How do you feel about your current path in life?",
    "What would you tell your younger self?",
    "What brings you joy in unexpected moments?",
    "How do you define success for yourself?",
];

/// Default number of prompts kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A voice recording attached to a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub uri: String,
    pub duration_ms: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptState {
    #[serde(default)]
    pub current_prompt: String,
    /// Prompts shown, newest first.
    #[serde(default)]
    pub prompt_history: Vec<String>,
    #[serde(skip, default = "default_history_limit")]
    history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            current_prompt: String::new(),
            prompt_history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PromptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the history at `limit` prompts (at least one).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self.prompt_history.truncate(self.history_limit);
        self
    }

    pub fn current(&self) -> Option<&str> {
        let prompt = self.current_prompt.as_str();
        (!prompt.trim().is_empty()).then_some(prompt)
    }

    /// Make `prompt` current and record it in history.
    pub fn set_current_prompt(&mut self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.prompt_history.insert(0, prompt.clone());
        self.prompt_history.truncate(self.history_limit);
        self.current_prompt = prompt;
    }

    pub fn clear_prompt_history(&mut self) {
        self.current_prompt.clear();
        self.prompt_history.clear();
    }

    /// Pick a sample prompt if none is set. Returns the current prompt.
    pub fn ensure_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        if self.current().is_none() {
            self.rotate_prompt(rng);
        }
        &self.current_prompt
    }

    /// Replace the current prompt with a random sample prompt.
    pub fn rotate_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let next = SAMPLE_PROMPTS
            .choose(rng)
            .copied()
            .unwrap_or(SAMPLE_PROMPTS[0]);
        self.set_current_prompt(next);
        &self.current_prompt
    }

    /// Build an entry answering the current prompt.
    ///
    /// # Errors
    /// Fails when no prompt is set or the response is blank.
    pub fn compose_entry(
        &self,
        response: &str,
        recording: Option<Recording>,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry, ValidationError> {
        let prompt = self.current().ok_or(ValidationError::MissingPrompt)?;
        if response.trim().is_empty() {
            return Err(ValidationError::EmptyResponse);
        }
        let entry = JournalEntry::new(prompt, response, now);
        Ok(match recording {
            Some(rec) => entry.with_recording(rec.uri, rec.duration_ms),
            None => entry,
        })
    }
}
