//! Dezzerto Menu Core
//!
//! Layered architecture:
//! - domain: Core entities and errors
//! - repository: Device-local storage abstractions and implementations
//! - catalog: The default menu
//! - menu / cart: Session state owned by the frontend
//! - checkout, images, chef_note, qr: Boundaries to the outside world

pub mod catalog;
pub mod cart;
pub mod chef_note;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod images;
pub mod menu;
pub mod qr;
pub mod repository;

pub use cart::{Cart, CartLine};
pub use config::{ChefNoteConfig, MenuConfig};
pub use domain::{DomainError, DomainResult, MenuItem, MenuSnapshot, NewMenuItem};
pub use menu::MenuState;
pub use repository::{KeyValueStore, MemoryStore, SnapshotRepository, StorageKeys};
