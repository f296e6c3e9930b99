use crate::model::lenient::{lenient_timestamp, or_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapshot_framework::{Record, RecordId};

/// One line of the audit trail. Never edited or removed once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    #[serde(default, deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "or_default")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Record for ActivityLogEntry {
    /// The message; the timestamp is taken when the entry is created.
    type Draft = String;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, message: String) -> Self {
        Self {
            id,
            message,
            timestamp: Utc::now(),
        }
    }
}
