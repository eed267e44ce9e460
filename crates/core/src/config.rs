//! Board configuration
//!
//! Values come from the environment with fixed fallbacks:
//! - `DK_STORAGE_KEY`: key the collection is stored under
//! - `DK_DATA_DIR`: root directory for file-backed storage
//! - `DK_STAGES`: `key:Label,key:Label` stage list

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::stage::StageSet;
use crate::storage::FileStore;
use crate::task::TaskStore;
use crate::Result;

pub const DEFAULT_STORAGE_KEY: &str = "dynamic-kanban.tasks";
pub const DEFAULT_DATA_DIR: &str = ".dk-data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub storage_key: String,
    pub data_dir: PathBuf,
    pub stages: StageSet,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            stages: StageSet::default(),
        }
    }
}

impl BoardConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let stages = match var("DK_STAGES") {
            Some(raw) => StageSet::parse(&raw)?,
            None => defaults.stages,
        };

        Ok(Self {
            storage_key: var("DK_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_key),
            data_dir: var("DK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            stages,
        })
    }

    /// Open a task store persisted under `data_dir`
    pub fn open_file_store(&self) -> TaskStore {
        TaskStore::open(
            self.stages.clone(),
            Arc::new(FileStore::new(&self.data_dir)),
            self.storage_key.clone(),
        )
    }
}
