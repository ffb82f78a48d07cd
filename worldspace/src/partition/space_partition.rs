/// Spatial partitions for world entities.
///
/// A SpacePartition indexes entities by position for range queries
/// ("who is near this point?") from the simulation loop.
///
/// Ownership: the caller owns the partition. Shared access across
/// threads goes through `World`, which wraps each registered partition
/// in a single exclusive lock.

use glam::Vec3;
use crate::entity::{EntityRef, WorldEntity};
use crate::error::Result;
use crate::geometry::SearchArea;
use super::quadtree_node::NodeKey;

/// Entity filter applied during queries
pub type Criteria<'a> = &'a dyn Fn(&dyn WorldEntity) -> bool;

/// Trait for spatial indexing of world entities.
pub trait SpacePartition: Send + Sync {
    /// Index an entity at its current position.
    ///
    /// Returns the leaf now holding the entity; the same key is posted to
    /// the entity's mailbox.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the position is outside the partition, or
    /// `DuplicateEntity` if the identity is already held by the target leaf.
    fn add_entity(&mut self, entity: EntityRef) -> Result<NodeKey>;

    /// Remove an entity, locating it by its current position.
    ///
    /// Only guaranteed to find the entity when its position still maps to
    /// the leaf it was inserted into; moved entities must go through
    /// `update_entity`.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` if the leaf the position maps to does not hold it.
    fn remove_entity(&mut self, entity: &dyn WorldEntity) -> Result<()>;

    /// Re-index an entity that moved from `previous_position`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a new position outside the partition (the entity
    /// stays indexed at its old place), `EntityNotFound` if it was not
    /// indexed at `previous_position`.
    fn update_entity(&mut self, entity: EntityRef, previous_position: Vec3) -> Result<NodeKey>;

    /// Query entities inside `area` that satisfy `criteria`.
    ///
    /// Stops as soon as `max_count` results are collected. No ordering
    /// guarantee.
    fn find_entities(
        &self,
        criteria: Criteria<'_>,
        area: &SearchArea,
        max_count: Option<usize>,
    ) -> Vec<EntityRef>;

    /// Query a single entity inside `area` that satisfies `criteria`.
    fn find_entity(&self, criteria: Criteria<'_>, area: &SearchArea) -> Option<EntityRef> {
        self.find_entities(criteria, area, Some(1)).pop()
    }

    /// Number of indexed entities
    fn entity_count(&self) -> usize;

    /// Remove every entity from the partition.
    fn clear(&mut self);
}
