//! Workflow stage configuration
//!
//! A board is an ordered set of stages. Tasks only ever carry a stage key;
//! labels live here and are used for display.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single workflow column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub key: String,
    pub label: String,
}

impl Stage {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Ordered, non-empty set of stages with unique keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSet {
    stages: Vec<Stage>,
}

impl StageSet {
    /// Build a stage set, rejecting empty sets, blank keys and duplicate keys
    pub fn new(stages: Vec<Stage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(Error::InvalidInput(
                "Stage set must contain at least one stage".to_string(),
            ));
        }

        for (index, stage) in stages.iter().enumerate() {
            if stage.key.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "Stage at position {} has an empty key",
                    index
                )));
            }
            if stages[..index].iter().any(|s| s.key == stage.key) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate stage key: {}",
                    stage.key
                )));
            }
        }

        Ok(Self { stages })
    }

    /// Parse a `key:Label,key:Label` list. A missing label falls back to the key.
    pub fn parse(raw: &str) -> Result<Self> {
        let stages = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((key, label)) if !label.trim().is_empty() => {
                    Stage::new(key.trim(), label.trim())
                }
                Some((key, _)) => Stage::new(key.trim(), key.trim()),
                None => Stage::new(entry, entry),
            })
            .collect();

        Self::new(stages)
    }

    /// The stage new tasks are created in
    pub fn first(&self) -> &Stage {
        // Non-emptiness is checked in `new`.
        &self.stages[0]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.stages.iter().any(|s| s.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for StageSet {
    /// The reference three-column board
    fn default() -> Self {
        Self {
            stages: vec![
                Stage::new("todo", "To Do"),
                Stage::new("in-progress", "In Progress"),
                Stage::new("done", "Done"),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for StageSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            stages: Vec<Stage>,
        }

        let raw = Raw::deserialize(deserializer)?;
        StageSet::new(raw.stages).map_err(serde::de::Error::custom)
    }
}
