/// Tests for SearchArea

use super::*;
use glam::{Vec2, Vec3};

fn node() -> BoundingBox {
    BoundingBox::from_xy(Vec2::ZERO, Vec2::splat(50.0))
}

#[test]
fn test_everywhere_overlaps_and_contains_all() {
    let area = SearchArea::Everywhere;
    assert!(area.overlaps(&node()));
    assert_eq!(area.classify(&node()), Containment::Contains);
    assert!(area.contains_point(Vec3::splat(-1.0e20)));
}

#[test]
fn test_box_area() {
    let area: SearchArea = BoundingBox::from_xy(Vec2::splat(40.0), Vec2::splat(60.0)).into();
    assert!(area.overlaps(&node()));
    assert_eq!(area.classify(&node()), Containment::Intersects);
    assert!(area.contains_point(Vec3::new(45.0, 45.0, 3.0)));
    assert!(!area.contains_point(Vec3::new(30.0, 45.0, 3.0)));

    let elsewhere: SearchArea = BoundingBox::from_xy(Vec2::splat(60.0), Vec2::splat(70.0)).into();
    assert!(!elsewhere.overlaps(&node()));
}

#[test]
fn test_sphere_area() {
    let area: SearchArea = BoundingSphere::new(Vec3::new(55.0, 25.0, 0.0), 6.0).into();
    assert!(area.overlaps(&node()));
    assert!(area.contains_point(Vec3::new(50.0, 25.0, 0.0)));
    assert!(!area.contains_point(Vec3::new(48.0, 25.0, 0.0)));

    let far: SearchArea = BoundingSphere::new(Vec3::new(100.0, 100.0, 0.0), 6.0).into();
    assert!(!far.overlaps(&node()));
    assert_eq!(far.classify(&node()), Containment::Disjoint);
}
