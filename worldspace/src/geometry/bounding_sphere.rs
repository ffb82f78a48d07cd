/// Bounding sphere used for radius queries ("everything within N units").

use glam::Vec3;
use super::{BoundingBox, Containment};

/// Sphere defined by a center and a radius (closed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center of the sphere
    pub center: Vec3,
    /// Radius of the sphere (non-negative)
    pub radius: f32,
}

impl BoundingSphere {
    /// Create a sphere; a negative radius is clamped to zero
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Test if a point lies inside or on the surface of the sphere
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Test if the sphere overlaps or touches a box.
    ///
    /// Clamps the center onto the box and compares the distance of that
    /// closest point against the radius.
    pub fn intersects_box(&self, bounds: &BoundingBox) -> bool {
        let closest = self.center.clamp(bounds.min, bounds.max);
        self.contains_point(closest)
    }

    /// Classify a box relative to this sphere.
    ///
    /// `Contains` requires every corner to be inside, so boxes with an
    /// unbounded Z range (partition nodes) are never `Contains`.
    pub fn classify_box(&self, bounds: &BoundingBox) -> Containment {
        if !self.intersects_box(bounds) {
            return Containment::Disjoint;
        }

        // Farthest corner from the center along each axis
        let far = Vec3::new(
            if (self.center.x - bounds.min.x).abs() > (bounds.max.x - self.center.x).abs() { bounds.min.x } else { bounds.max.x },
            if (self.center.y - bounds.min.y).abs() > (bounds.max.y - self.center.y).abs() { bounds.min.y } else { bounds.max.y },
            if (self.center.z - bounds.min.z).abs() > (bounds.max.z - self.center.z).abs() { bounds.min.z } else { bounds.max.z },
        );

        if self.contains_point(far) {
            Containment::Contains
        } else {
            Containment::Intersects
        }
    }
}

#[cfg(test)]
#[path = "bounding_sphere_tests.rs"]
mod tests;
