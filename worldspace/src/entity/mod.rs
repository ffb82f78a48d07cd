//! Entity module - what the partition needs from an indexed entity.
//!
//! The concrete entity type belongs to the simulation server; this module
//! only defines the capability trait, the identity type, and the mailbox
//! through which back-references are handed over.

mod world_entity;
mod mailbox;
pub mod mock_entity;

pub use world_entity::{EntityGuid, EntityMessage, EntityRef, WorldEntity};
pub use mailbox::Mailbox;
pub use mock_entity::MockEntity;
