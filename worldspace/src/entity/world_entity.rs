/// Entity capability consumed by spatial partitions.
///
/// The partition only needs three things from an entity: a stable identity,
/// its current position, and a way to hand it a message on its own
/// execution context. Everything else about the entity is opaque.

use std::fmt;
use std::sync::Arc;
use glam::Vec3;
use crate::partition::NodeKey;

/// Stable identity of a world entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityGuid(pub u64);

impl fmt::Display for EntityGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Message posted by a partition to an entity's owning context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityMessage {
    /// The leaf now indexing the entity (`None` once removed)
    NodeAssigned(Option<NodeKey>),
}

/// Entity capability required by `SpacePartition`.
///
/// Implementations must be cheap to query: `position` is read on every
/// structural decision (descend, split, merge, query filter).
pub trait WorldEntity: Send + Sync {
    /// Identity used for removal and duplicate detection
    fn guid(&self) -> EntityGuid;

    /// Current world-space position
    fn position(&self) -> Vec3;

    /// Queue a message for the entity's own context.
    ///
    /// Fire-and-forget: must not block and must not apply the message
    /// synchronously on the caller's thread.
    fn post_async(&self, message: EntityMessage);
}

/// Shared handle to an indexed entity
pub type EntityRef = Arc<dyn WorldEntity>;
