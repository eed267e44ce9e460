//! Task module
//!
//! The task model, the stored-board codec and the task store.

mod codec;
mod model;
mod store;

pub use codec::{decode_tasks, encode_tasks};
pub use model::*;
pub use store::TaskStore;
