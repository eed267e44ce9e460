//! Core library for Dynamic Kanban
//!
//! This crate contains the board's state management, including:
//! - Stage configuration
//! - The task store and its persistence
//! - Derived views (grouping, filtering, column summaries)

pub mod config;
pub mod error;
pub mod shared;
pub mod stage;
pub mod storage;
pub mod task;
pub mod view;

pub use config::BoardConfig;
pub use error::Error;
pub use shared::SharedTaskStore;
pub use stage::{Stage, StageSet};
pub use task::{Task, TaskStore, TaskUpdate};
pub use view::{BoardView, ViewParams, ViewProjector};

pub type Result<T> = std::result::Result<T, Error>;
