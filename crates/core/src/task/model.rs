//! Task model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task on the board
///
/// Serialized in the stored-board format: `id`, `title`, `description`,
/// `status` and `isPriority`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "status", alias = "stage")]
    pub stage: String,
    #[serde(default)]
    pub is_priority: bool,
}

impl Task {
    /// Create a new task in `stage` with a fresh id
    ///
    /// Title and description are trimmed. Callers are expected to have
    /// rejected blank titles already.
    pub fn new(title: &str, description: &str, stage: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            stage: stage.into(),
            is_priority: false,
        }
    }

    /// Case-insensitive substring match on title or description.
    /// `query` must already be lower-cased.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty()
            || self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
    }
}

/// Replacement fields for an existing task
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TaskUpdate {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
