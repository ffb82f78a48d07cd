//! Partition module - spatial indexing of world entities.
//!
//! `SpacePartition` is the seam the simulation talks to;
//! `DynamicQuadTree` is the implementation.

mod space_partition;
mod quadtree_config;
mod quadtree_node;
mod dynamic_quadtree;

pub use space_partition::{Criteria, SpacePartition};
pub use quadtree_config::QuadTreeConfig;
pub use quadtree_node::{Bucket, NodeKey, NodeState, QuadNode};
pub use dynamic_quadtree::DynamicQuadTree;
