//! JSON form of the persisted progress state.
//!
//! Layout, stored under [`PROGRESS_STORAGE_KEY`]:
//!
//! ```json
//! { "<stackId>": { "completedSections": [], "completedSteps": ["..."], "lastUpdated": "2024-01-01T00:00:00.000Z" } }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use stacks_core::model::{ProgressRecord, ProgressState, SectionId, StackId, StepId};
use tracing::warn;

use crate::repository::StorageError;

/// Well-known key the progress state lives under.
pub const PROGRESS_STORAGE_KEY: &str = "dev-stack-progress";

/// Persisted shape of a single record.
///
/// Kept separate from the domain `ProgressRecord` so storage concerns stay out
/// of the core crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedRecord {
    #[serde(default)]
    completed_sections: Vec<String>,
    #[serde(default)]
    completed_steps: Vec<String>,
    last_updated: String,
}

impl PersistedRecord {
    fn from_record(record: &ProgressRecord) -> Self {
        Self {
            completed_sections: record
                .completed_sections()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            completed_steps: record
                .completed_steps()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            last_updated: record
                .last_updated()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn into_record(self, stack_id: &StackId, loaded_at: DateTime<Utc>) -> ProgressRecord {
        let last_updated = parse_timestamp(&self.last_updated).unwrap_or_else(|| {
            warn!(
                %stack_id,
                raw = %self.last_updated,
                "unreadable lastUpdated; using load time"
            );
            loaded_at
        });
        ProgressRecord::from_persisted(
            self.completed_steps.into_iter().map(StepId::new),
            self.completed_sections.into_iter().map(SectionId::new),
            last_updated,
        )
    }
}

/// RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serialize the full state.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_state(state: &ProgressState) -> Result<String, StorageError> {
    let persisted: BTreeMap<&str, PersistedRecord> = state
        .iter()
        .map(|(stack_id, record)| (stack_id.as_str(), PersistedRecord::from_record(record)))
        .collect();
    serde_json::to_string(&persisted).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse a previously encoded state.
///
/// A record whose `lastUpdated` cannot be read keeps its steps and takes
/// `loaded_at` as its timestamp.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or a payload that
/// does not have the record layout.
pub fn decode_state(raw: &str, loaded_at: DateTime<Utc>) -> Result<ProgressState, StorageError> {
    let persisted: BTreeMap<String, PersistedRecord> =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    let records = persisted.into_iter().map(|(stack_id, record)| {
        let stack_id = StackId::new(stack_id);
        let record = record.into_record(&stack_id, loaded_at);
        (stack_id, record)
    });
    Ok(ProgressState::from_records(records))
}
