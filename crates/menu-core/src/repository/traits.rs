//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for device-local storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::DomainResult;

/// String-keyed durable storage scoped to one device
///
/// Values are opaque strings; callers store JSON.
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;

    /// Erase a key. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> DomainResult<()>;
}
