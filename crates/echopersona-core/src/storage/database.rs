//! SQLite-based persistence for the app state.
//!
//! Provides persistent storage for:
//! - Journal entries, one row each, keyed by timestamp
//! - Key-value store holding the JSON of the prompt, profile and premium slices

use std::path::Path;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use super::data_dir;
use crate::error::{CoreError, DatabaseError, Result, ValidationError};
use crate::journal::{JournalEntry, JournalState};
use crate::profile::{PremiumState, ProfileState};
use crate::prompt::PromptState;
use crate::state::AppState;

const PROMPT_KEY: &str = "prompt";
const PROFILE_KEY: &str = "profile";
const PREMIUM_KEY: &str = "premium";

/// SQLite database for journal entries and state slices.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/echopersona.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory is unavailable or the database
    /// cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("echopersona.db");
        Self::open_at(&path)
    }

    /// Open (or create) a database file at `path`.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS journal_entries (
                seq                INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp          TEXT NOT NULL UNIQUE,
                prompt             TEXT NOT NULL,
                response           TEXT NOT NULL,
                recording_uri      TEXT,
                recording_duration REAL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Store a new entry. It becomes the newest entry.
    ///
    /// # Errors
    /// Returns a validation error for a blank response or a timestamp that is
    /// already stored.
    pub fn insert_entry(&self, entry: &JournalEntry) -> Result<()> {
        entry.validate()?;
        let inserted = self.conn.execute(
            "INSERT INTO journal_entries (timestamp, prompt, response, recording_uri, recording_duration)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.timestamp,
                entry.prompt,
                entry.response,
                entry.recording_uri,
                entry.recording_duration,
            ],
        );
        match inserted {
            Ok(_) => {
                info!(timestamp = %entry.timestamp, "journal entry stored");
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(ValidationError::DuplicateTimestamp(entry.timestamp.clone()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Delete the entry keyed by `timestamp`. Returns whether a row was removed.
    pub fn delete_entry(&self, timestamp: &str) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM journal_entries WHERE timestamp = ?1",
            params![timestamp],
        )?;
        Ok(removed > 0)
    }

    /// Delete every entry. Returns the number removed.
    pub fn clear_entries(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM journal_entries", [])?)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT timestamp, prompt, response, recording_uri, recording_duration
             FROM journal_entries
             ORDER BY seq DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(JournalEntry {
                timestamp: row.get(0)?,
                prompt: row.get(1)?,
                response: row.get(2)?,
                recording_uri: row.get(3)?,
                recording_duration: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn load_slice<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.kv_get(key)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                CoreError::from(DatabaseError::CorruptState {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            }),
            None => Ok(T::default()),
        }
    }

    fn save_slice<T: Serialize>(&self, key: &str, slice: &T) -> Result<()> {
        self.kv_set(key, &serde_json::to_string(slice)?)
    }

    pub fn load_prompt(&self) -> Result<PromptState> {
        self.load_slice(PROMPT_KEY)
    }

    pub fn save_prompt(&self, prompt: &PromptState) -> Result<()> {
        self.save_slice(PROMPT_KEY, prompt)
    }

    pub fn load_profile(&self) -> Result<ProfileState> {
        self.load_slice(PROFILE_KEY)
    }

    pub fn save_profile(&self, profile: &ProfileState) -> Result<()> {
        self.save_slice(PROFILE_KEY, profile)
    }

    pub fn load_premium(&self) -> Result<PremiumState> {
        self.load_slice(PREMIUM_KEY)
    }

    pub fn save_premium(&self, premium: &PremiumState) -> Result<()> {
        self.save_slice(PREMIUM_KEY, premium)
    }

    /// Rehydrate the full app state.
    pub fn load_state(&self) -> Result<AppState> {
        Ok(AppState {
            journal: JournalState::from_entries(self.entries()?),
            prompt: self.load_prompt()?,
            profile: self.load_profile()?,
            premium: self.load_premium()?,
        })
    }

    /// Persist the full app state, replacing stored entries atomically.
    pub fn save_state(&self, state: &AppState) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM journal_entries", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO journal_entries (timestamp, prompt, response, recording_uri, recording_duration)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            // Oldest first so that seq order matches newest-first reads.
            for entry in state.journal.entries().iter().rev() {
                stmt.execute(params![
                    entry.timestamp,
                    entry.prompt,
                    entry.response,
                    entry.recording_uri,
                    entry.recording_duration,
                ])?;
            }
        }
        self.save_prompt(&state.prompt)?;
        self.save_profile(&state.profile)?;
        self.save_premium(&state.premium)?;
        tx.commit()?;
        info!(entries = state.journal.len(), "app state saved");
        Ok(())
    }
}
