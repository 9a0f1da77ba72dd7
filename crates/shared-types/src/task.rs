use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A to-do item tracked by the task list.
///
/// `id` and the two timestamps are assigned by the backend; a draft built
/// client-side carries neither. Wire field names are camelCase (`dueDate`,
/// `createdAt`, `updatedAt`) per the backend contract, and absent optionals
/// are omitted from serialized payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date only, encoded as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a draft for creation: no id, not completed, no timestamps.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description,
            due_date,
            completed: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Full-replace payload for a completion toggle: the same task with only
    /// `completed` inverted. Timestamps pass through untouched — the backend
    /// owns them.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
