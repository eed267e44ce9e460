//! Shared task store handle
//!
//! Wraps a [`TaskStore`] for hosts that serve a board from async tasks.
//! Writers are serialized by the lock; readers only ever see whole snapshots.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::task::{Task, TaskStore, TaskUpdate};
use crate::view::{BoardView, ViewParams, ViewProjector};

/// Thread-safe task store handle
#[derive(Clone)]
pub struct SharedTaskStore {
    store: Arc<RwLock<TaskStore>>,
    projector: Arc<Mutex<ViewProjector>>,
}

impl SharedTaskStore {
    pub fn new(store: TaskStore) -> Self {
        let projector = ViewProjector::new(store.stages().clone());
        Self {
            store: Arc::new(RwLock::new(store)),
            projector: Arc::new(Mutex::new(projector)),
        }
    }

    /// Get the current task snapshot
    pub async fn list(&self) -> Arc<[Task]> {
        self.store.read().await.list()
    }

    pub async fn get(&self, task_id: &str) -> Option<Task> {
        self.store.read().await.get(task_id).cloned()
    }

    pub async fn create(&self, title: &str, description: &str) -> Option<Task> {
        self.store.write().await.create(title, description)
    }

    pub async fn move_task(&self, task_id: &str, target_stage: &str) -> bool {
        self.store.write().await.move_task(task_id, target_stage)
    }

    pub async fn toggle_priority(&self, task_id: &str) -> bool {
        self.store.write().await.toggle_priority(task_id)
    }

    pub async fn update(&self, task_id: &str, update: TaskUpdate) -> bool {
        self.store.write().await.update(task_id, update)
    }

    pub async fn delete(&self, task_id: &str) -> Option<Task> {
        self.store.write().await.delete(task_id)
    }

    /// Project the current snapshot through `params`
    pub async fn project(&self, params: &ViewParams) -> Arc<BoardView> {
        let tasks = self.list().await;
        self.projector.lock().await.project(&tasks, params)
    }
}
