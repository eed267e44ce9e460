//! Caller-owned view parameters

use serde::{Deserialize, Serialize};

/// Search text and priority filter currently applied to the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub priority_only: bool,
}

impl ViewParams {
    pub fn new(search_text: impl Into<String>, priority_only: bool) -> Self {
        Self {
            search_text: search_text.into(),
            priority_only,
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn set_priority_only(&mut self, priority_only: bool) {
        self.priority_only = priority_only;
    }

    pub fn toggle_priority_only(&mut self) {
        self.priority_only = !self.priority_only;
    }

    /// Trimmed, lower-cased search text
    pub fn normalized_query(&self) -> String {
        self.search_text.trim().to_lowercase()
    }

    pub fn has_active_filters(&self) -> bool {
        super::has_active_filters(&self.search_text, self.priority_only)
    }
}
