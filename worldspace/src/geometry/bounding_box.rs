/// Axis-aligned bounding box and quadrant arithmetic.
///
/// The partition plane is X/Y. Boxes produced for quadtree nodes always
/// span the whole representable Z range so that an entity's height never
/// excludes it from a node.

use glam::{Vec2, Vec3};
use super::Containment;

/// Lowest representable height, used for full-height boxes
pub const MIN_HEIGHT: f32 = f32::MIN;
/// Highest representable height, used for full-height boxes
pub const MAX_HEIGHT: f32 = f32::MAX;

/// Axis-Aligned Bounding Box (closed on every face)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

/// One of the four children of a partitioned node.
///
/// Ordered clockwise starting from the positive-X/positive-Y quadrant.
/// The discriminant is the child's slot in `NodeState::Internal::children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast = 0,
    SouthEast = 1,
    SouthWest = 2,
    NorthWest = 3,
}

impl Quadrant {
    /// All quadrants in child slot order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
        Quadrant::NorthWest,
    ];

    /// Child slot index (0..4)
    pub fn index(self) -> usize {
        self as usize
    }

    fn is_east(self) -> bool {
        matches!(self, Quadrant::NorthEast | Quadrant::SouthEast)
    }

    fn is_north(self) -> bool {
        matches!(self, Quadrant::NorthEast | Quadrant::NorthWest)
    }
}

impl BoundingBox {
    /// Create a box from two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box covering an X/Y rectangle at every height
    pub fn from_xy(min: Vec2, max: Vec2) -> Self {
        Self {
            min: Vec3::new(min.x, min.y, MIN_HEIGHT),
            max: Vec3::new(max.x, max.y, MAX_HEIGHT),
        }
    }

    /// Same X/Y rectangle, Z widened to the full representable range
    pub fn with_full_height(self) -> Self {
        Self::from_xy(self.min.truncate(), self.max.truncate())
    }

    /// Whether the X/Y rectangle has a positive, finite area
    pub fn is_valid_area(&self) -> bool {
        self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
            && self.max.x > self.min.x
            && self.max.y > self.min.y
    }

    /// Extent along X
    pub fn length(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along Y
    pub fn width(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Midpoint of the X/Y rectangle
    pub fn center_xy(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.length() * 0.5,
            self.min.y + self.width() * 0.5,
        )
    }

    /// Test if a point lies inside or on the boundary of this box
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.contains_point_xy(point)
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Test if a point's X/Y projection lies inside or on the boundary of this box
    pub fn contains_point_xy(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Test if this box fully contains another box
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this box intersects (overlaps or touches) another box
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Classify `other` relative to this box
    pub fn classify(&self, other: &BoundingBox) -> Containment {
        if !self.intersects(other) {
            Containment::Disjoint
        } else if self.contains(other) {
            Containment::Contains
        } else {
            Containment::Intersects
        }
    }

    /// Compute the quadrant a point falls into relative to the X/Y midpoint.
    ///
    /// Points on a midline go east/north, so exactly one quadrant matches.
    pub fn quadrant_of(&self, point: Vec3) -> Quadrant {
        let center = self.center_xy();
        match (point.x >= center.x, point.y >= center.y) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::SouthEast,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::NorthWest,
        }
    }

    /// Full-height box covering one quadrant of this box
    ///
    /// ```text
    /// min.x   half.x   max.x
    ///   +-------+-------+ max.y
    ///   |  NW   |  NE   |
    ///   +-------+-------+ half.y
    ///   |  SW   |  SE   |
    ///   +-------+-------+ min.y
    /// ```
    pub fn quadrant(&self, quadrant: Quadrant) -> BoundingBox {
        let half = self.center_xy();
        let (min_x, max_x) = if quadrant.is_east() {
            (half.x, self.max.x)
        } else {
            (self.min.x, half.x)
        };
        let (min_y, max_y) = if quadrant.is_north() {
            (half.y, self.max.y)
        } else {
            (self.min.y, half.y)
        };
        BoundingBox::from_xy(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// All four quadrant boxes in child slot order
    pub fn quadrants(&self) -> [BoundingBox; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
