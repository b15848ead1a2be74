//! # EchoPersona Core Library
//!
//! This library provides the core logic behind the EchoPersona journaling
//! app: the journal data contract, the streak engine that drives the streak
//! badge, and the locally persisted app state. The CLI binary is a thin
//! host over the same library.
//!
//! ## Architecture
//!
//! - **Journal**: entries keyed by their ISO-8601 timestamp, newest first
//! - **Streak engine**: pure current/best streak computation over local
//!   calendar days, with the clock injected by the caller
//! - **State**: prompt, persona profile and premium slices next to the journal
//! - **Storage**: SQLite persistence and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`streak::compute`]: current and best streak for an entry snapshot
//! - [`JournalState`]: in-memory journal slice
//! - [`Database`]: entry and state persistence
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod error;
pub mod journal;
pub mod profile;
pub mod prompt;
pub mod state;
pub mod storage;
pub mod streak;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use journal::{JournalEntry, JournalState};
pub use profile::{HistoricalProfile, PersonaProfile, PremiumState, ProfileState};
pub use prompt::{PromptState, Recording, SAMPLE_PROMPTS};
pub use state::AppState;
pub use storage::{Config, Database};
pub use streak::{StreakResult, StreakSummary, MILESTONES};
