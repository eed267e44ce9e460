//! Key-value storage
//!
//! The board persists its whole task collection under a single key. Any
//! medium that can get and set strings can back it.

mod file_store;
mod key_value;
mod memory_store;

pub use file_store::FileStore;
pub use key_value::KeyValueStore;
pub use memory_store::MemoryStore;
