//! Task store
//!
//! Sole owner of the canonical task collection. Every applied mutation
//! installs a fresh `Arc<[Task]>` and writes it through to storage; no-op
//! paths leave both the collection and storage untouched.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::codec::{decode_tasks, encode_tasks};
use super::model::{Task, TaskUpdate};
use crate::config::DEFAULT_STORAGE_KEY;
use crate::stage::StageSet;
use crate::storage::{KeyValueStore, MemoryStore};

pub struct TaskStore {
    /// Newest first
    tasks: Arc<[Task]>,
    stages: StageSet,
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    generation: u64,
}

impl TaskStore {
    /// Open a store, loading whatever was previously persisted under `storage_key`
    ///
    /// Unreadable or corrupt state is logged and replaced by an empty board.
    pub fn open(
        stages: StageSet,
        storage: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let tasks = load_tasks(&stages, storage.as_ref(), &storage_key);
        info!("Opened task store {} with {} tasks", storage_key, tasks.len());

        Self {
            tasks: tasks.into(),
            stages,
            storage,
            storage_key,
            generation: 0,
        }
    }

    /// Open an empty store backed by a private in-memory map
    pub fn in_memory(stages: StageSet) -> Self {
        Self::open(stages, Arc::new(MemoryStore::new()), DEFAULT_STORAGE_KEY)
    }

    /// Current collection snapshot. The same `Arc` is returned until the next
    /// applied mutation.
    pub fn list(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Number of applied mutations since the store was opened
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Create a task at the top of the first stage
    ///
    /// Returns `None` without touching state when the title is blank.
    pub fn create(&mut self, title: &str, description: &str) -> Option<Task> {
        if title.trim().is_empty() {
            debug!("Ignoring create with blank title");
            return None;
        }

        let task = Task::new(title, description, self.stages.first().key.clone());

        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.push(task.clone());
        tasks.extend(self.tasks.iter().cloned());

        debug!("Created task {}", task.id);
        self.commit(tasks);
        Some(task)
    }

    /// Move a task to another stage
    ///
    /// No-op for unknown tasks, unknown stages, or when the task is already there.
    pub fn move_task(&mut self, task_id: &str, target_stage: &str) -> bool {
        if !self.stages.contains(target_stage) {
            debug!("Ignoring move of {} to unknown stage {}", task_id, target_stage);
            return false;
        }

        match self.get(task_id) {
            Some(task) if task.stage != target_stage => {}
            _ => return false,
        }

        let tasks = self.map_task(task_id, |task| Task {
            stage: target_stage.to_string(),
            ..task.clone()
        });

        debug!("Moved task {} to {}", task_id, target_stage);
        self.commit(tasks);
        true
    }

    /// Flip the priority flag of a task
    pub fn toggle_priority(&mut self, task_id: &str) -> bool {
        if self.get(task_id).is_none() {
            return false;
        }

        let tasks = self.map_task(task_id, |task| Task {
            is_priority: !task.is_priority,
            ..task.clone()
        });

        debug!("Toggled priority of task {}", task_id);
        self.commit(tasks);
        true
    }

    /// Replace the title and description of a task
    ///
    /// No-op for unknown tasks or a blank title.
    pub fn update(&mut self, task_id: &str, update: TaskUpdate) -> bool {
        let title = update.title.trim();
        if title.is_empty() || self.get(task_id).is_none() {
            return false;
        }

        let description = update.description.trim();
        let tasks = self.map_task(task_id, |task| Task {
            title: title.to_string(),
            description: description.to_string(),
            ..task.clone()
        });

        debug!("Updated task {}", task_id);
        self.commit(tasks);
        true
    }

    /// Delete a task, returning it if it existed
    pub fn delete(&mut self, task_id: &str) -> Option<Task> {
        let removed = self.get(task_id)?.clone();

        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.id != task_id)
            .cloned()
            .collect();

        debug!("Deleted task {}", task_id);
        self.commit(tasks);
        Some(removed)
    }

    fn map_task(&self, task_id: &str, f: impl Fn(&Task) -> Task) -> Vec<Task> {
        self.tasks
            .iter()
            .map(|t| if t.id == task_id { f(t) } else { t.clone() })
            .collect()
    }

    /// Install a new collection and write it through
    fn commit(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks.into();
        self.generation += 1;
        self.persist();
    }

    /// Best-effort write; the in-memory state stays authoritative on failure
    fn persist(&self) {
        let result = encode_tasks(&self.tasks)
            .and_then(|content| self.storage.write(&self.storage_key, &content));

        match result {
            Ok(()) => debug!(
                "Persisted {} tasks to {} (generation {})",
                self.tasks.len(),
                self.storage_key,
                self.generation
            ),
            Err(e) => warn!("Unable to save tasks to {}: {}", self.storage_key, e),
        }
    }
}

fn load_tasks(stages: &StageSet, storage: &dyn KeyValueStore, key: &str) -> Vec<Task> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return Vec::new(),
        Err(e) => {
            warn!("Unable to read tasks from {}: {}", key, e);
            return Vec::new();
        }
    };

    decode_tasks(&raw, stages).unwrap_or_else(|e| {
        warn!("Unable to parse tasks from {}: {}", key, e);
        Vec::new()
    })
}
