//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: ?Sized + Eq;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Find an entity by ID in an ordered collection
pub fn find_by_id<'a, T>(entities: &'a [T], id: &T::Id) -> Option<&'a T>
where
    T: Entity,
{
    entities.iter().find(|entity| entity.id() == id)
}

/// Mutable variant of [`find_by_id`]
pub fn find_by_id_mut<'a, T>(entities: &'a mut [T], id: &T::Id) -> Option<&'a mut T>
where
    T: Entity,
{
    entities.iter_mut().find(|entity| entity.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image error: {0}")]
    Ingestion(String),

    #[error("External service error: {0}")]
    External(String),
}

impl DomainError {
    /// Message suitable for showing inline next to the offending control
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::NotFound(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Storage(msg)
            | DomainError::Ingestion(msg)
            | DomainError::External(msg) => msg,
        }
    }
}
