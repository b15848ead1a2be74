//! Persona profile and premium status slices.
//!
//! Profiles are produced elsewhere; this module only keeps the current one
//! and a bounded timeline of earlier snapshots.

use serde::{Deserialize, Serialize};

/// Default number of historical profiles kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    pub summary: String,
    pub traits: Vec<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalProfile {
    pub summary: String,
    pub traits: Vec<String>,
    pub timestamp: String,
}

impl From<&PersonaProfile> for HistoricalProfile {
    fn from(profile: &PersonaProfile) -> Self {
        Self {
            summary: profile.summary.clone(),
            traits: profile.traits.clone(),
            timestamp: profile.last_updated.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    #[serde(default)]
    pub current_profile: Option<PersonaProfile>,
    /// Snapshots, newest first.
    #[serde(default)]
    pub historical_profiles: Vec<HistoricalProfile>,
    #[serde(skip, default = "default_history_limit")]
    history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            current_profile: None,
            historical_profiles: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ProfileState {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self.historical_profiles.truncate(self.history_limit);
        self
    }

    pub fn set_current_profile(&mut self, profile: PersonaProfile) {
        self.current_profile = Some(profile);
    }

    pub fn add_historical_profile(&mut self, snapshot: HistoricalProfile) {
        self.historical_profiles.insert(0, snapshot);
        self.historical_profiles.truncate(self.history_limit);
    }

    /// Make `profile` current and append it to the timeline.
    pub fn record_profile(&mut self, profile: PersonaProfile) {
        self.add_historical_profile(HistoricalProfile::from(&profile));
        self.set_current_profile(profile);
    }

    pub fn clear_profile(&mut self) {
        self.current_profile = None;
        self.historical_profiles.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumState {
    #[serde(default)]
    pub is_premium: bool,
}

impl PremiumState {
    pub fn set_premium_status(&mut self, is_premium: bool) {
        self.is_premium = is_premium;
    }

    pub fn clear_subscription(&mut self) {
        self.is_premium = false;
    }
}
