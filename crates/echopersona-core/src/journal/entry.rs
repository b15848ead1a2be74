//! Journal entry type and timestamp handling.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Layout accepted for timestamps that carry no UTC offset.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One saved reflection.
///
/// Field names serialize in camelCase so journal snapshots exported by the
/// mobile app deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Prompt text shown when the entry was written.
    pub prompt: String,
    /// Free-text answer.
    pub response: String,
    /// ISO-8601 creation instant. Unique per entry; doubles as the delete key.
    pub timestamp: String,
    /// Voice recording on the device file system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_uri: Option<String>,
    /// Recording length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_duration: Option<f64>,
}

impl JournalEntry {
    /// Create an entry stamped with `created_at` at millisecond precision.
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            recording_uri: None,
            recording_duration: None,
        }
    }

    /// Attach a voice recording reference.
    pub fn with_recording(mut self, uri: impl Into<String>, duration_ms: Option<f64>) -> Self {
        self.recording_uri = Some(uri.into());
        self.recording_duration = duration_ms;
        self
    }

    /// Check the entry is fit to be stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.response.trim().is_empty() {
            return Err(ValidationError::EmptyResponse);
        }
        if self.timestamp.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "timestamp".into(),
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Plain-text rendering used when sharing an entry.
    pub fn share_text(&self) -> String {
        format!("Question: {}\nAnswer: {}", self.prompt, self.response)
    }

    /// Calendar date of this entry as seen from `tz`.
    ///
    /// RFC 3339 timestamps are converted into `tz` first. Timestamps without
    /// an offset are taken as wall-clock time already in `tz`. Returns `None`
    /// for anything unparseable.
    pub fn calendar_day<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        let raw = self.timestamp.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(tz).date_naive());
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .ok()
            .map(|naive| naive.date())
    }
}
