//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod menu_item;
mod snapshot;

pub use entity::{find_by_id, find_by_id_mut, DomainError, DomainResult, Entity};
pub use menu_item::{MenuItem, NewMenuItem, EMBEDDED_IMAGE_PREFIX};
pub use snapshot::{CategoryImages, MenuSnapshot};
