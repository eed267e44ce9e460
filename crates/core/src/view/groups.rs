//! Stage-keyed collections, kept in stage order

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::task::Task;

/// Tasks grouped by stage key, one entry per configured stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageGroups {
    groups: Vec<(String, Vec<Task>)>,
}

impl StageGroups {
    pub(crate) fn from_groups(groups: Vec<(String, Vec<Task>)>) -> Self {
        Self { groups }
    }

    /// Tasks in `key`, empty for keys that are not configured
    pub fn get(&self, key: &str) -> &[Task] {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, tasks)| tasks.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.groups.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Task])> {
        self.groups.iter().map(|(k, tasks)| (k.as_str(), tasks.as_slice()))
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for StageGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, tasks) in &self.groups {
            map.serialize_entry(key, tasks)?;
        }
        map.end()
    }
}

/// Task count per stage key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageCounts {
    counts: Vec<(String, usize)>,
}

impl StageCounts {
    pub(crate) fn from_counts(counts: Vec<(String, usize)>) -> Self {
        Self { counts }
    }

    /// Count for `key`, zero for keys that are not configured
    pub fn get(&self, key: &str) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, count)| (k.as_str(), *count))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Serialize for StageCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
