//! Geometry module - boxes, spheres and search areas.
//!
//! Passive value types used by the partition to place entities and to
//! prune nodes during range queries. Positions are `glam::Vec3`; the
//! partition plane is X/Y.

mod bounding_box;
mod bounding_sphere;
mod search_area;

pub use bounding_box::{BoundingBox, Quadrant, MIN_HEIGHT, MAX_HEIGHT};
pub use bounding_sphere::BoundingSphere;
pub use search_area::SearchArea;

/// Result of classifying a box against a query volume.
///
/// Lets a traversal skip a subtree (`Disjoint`), take it whole
/// (`Contains`), or test its entities one by one (`Intersects`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// No overlap at all
    Disjoint,
    /// Partial overlap
    Intersects,
    /// The box lies entirely inside the volume
    Contains,
}
