/// Query region accepted by `SpacePartition::find_entities`.

use glam::Vec3;
use super::{BoundingBox, BoundingSphere, Containment};

/// Region a range query is restricted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchArea {
    /// No spatial restriction: every node is visited
    Everywhere,
    /// Axis-aligned box (closed)
    Box(BoundingBox),
    /// Sphere (closed)
    Sphere(BoundingSphere),
}

impl SearchArea {
    /// Node-inclusion test: does the area touch these node bounds at all?
    ///
    /// Conservative: a node passing this test may still hold no entity
    /// inside the area.
    pub fn overlaps(&self, bounds: &BoundingBox) -> bool {
        match self {
            SearchArea::Everywhere => true,
            SearchArea::Box(area) => area.intersects(bounds),
            SearchArea::Sphere(area) => area.intersects_box(bounds),
        }
    }

    /// Classify node bounds against the area
    pub fn classify(&self, bounds: &BoundingBox) -> Containment {
        match self {
            SearchArea::Everywhere => Containment::Contains,
            SearchArea::Box(area) => area.classify(bounds),
            SearchArea::Sphere(area) => area.classify_box(bounds),
        }
    }

    /// Exact entity test against a position
    pub fn contains_point(&self, point: Vec3) -> bool {
        match self {
            SearchArea::Everywhere => true,
            SearchArea::Box(area) => area.contains_point(point),
            SearchArea::Sphere(area) => area.contains_point(point),
        }
    }
}

impl From<BoundingBox> for SearchArea {
    fn from(area: BoundingBox) -> Self {
        SearchArea::Box(area)
    }
}

impl From<BoundingSphere> for SearchArea {
    fn from(area: BoundingSphere) -> Self {
        SearchArea::Sphere(area)
    }
}

#[cfg(test)]
#[path = "search_area_tests.rs"]
mod tests;
