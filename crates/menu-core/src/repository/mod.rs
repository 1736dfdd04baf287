//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod snapshot_repo;


pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use snapshot_repo::{SnapshotRepository, StorageKeys};
