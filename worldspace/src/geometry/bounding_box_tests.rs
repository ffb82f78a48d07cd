/// Tests for BoundingBox and Quadrant

use super::*;
use glam::{Vec2, Vec3};

fn square(size: f32) -> BoundingBox {
    BoundingBox::from_xy(Vec2::ZERO, Vec2::splat(size))
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_xy_spans_full_height() {
    let bounds = square(100.0);
    assert_eq!(bounds.min.z, f32::MIN);
    assert_eq!(bounds.max.z, f32::MAX);
    assert!(bounds.contains_point(Vec3::new(50.0, 50.0, 1.0e30)));
    assert!(bounds.contains_point(Vec3::new(50.0, 50.0, -1.0e30)));
}

#[test]
fn test_with_full_height_keeps_rectangle() {
    let flat = BoundingBox::new(Vec3::new(1.0, 2.0, 0.0), Vec3::new(3.0, 4.0, 0.0));
    let tall = flat.with_full_height();
    assert_eq!(tall.min.truncate(), Vec2::new(1.0, 2.0));
    assert_eq!(tall.max.truncate(), Vec2::new(3.0, 4.0));
    assert_eq!(tall.max.z, f32::MAX);
}

#[test]
fn test_is_valid_area() {
    assert!(square(1.0).is_valid_area());
    assert!(!square(0.0).is_valid_area());
    assert!(!BoundingBox::from_xy(Vec2::ZERO, Vec2::new(f32::INFINITY, 1.0)).is_valid_area());
    assert!(!BoundingBox::from_xy(Vec2::splat(5.0), Vec2::ZERO).is_valid_area());
}

#[test]
fn test_dimensions() {
    let bounds = BoundingBox::from_xy(Vec2::new(10.0, 20.0), Vec2::new(50.0, 30.0));
    assert_eq!(bounds.length(), 40.0);
    assert_eq!(bounds.width(), 10.0);
    assert_eq!(bounds.center_xy(), Vec2::new(30.0, 25.0));
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_contains_point_is_closed() {
    let bounds = square(20.0);
    assert!(bounds.contains_point(Vec3::new(0.0, 0.0, 0.0)));
    assert!(bounds.contains_point(Vec3::new(20.0, 20.0, 0.0)));
    assert!(!bounds.contains_point(Vec3::new(20.1, 10.0, 0.0)));
    assert!(!bounds.contains_point(Vec3::new(10.0, -0.1, 0.0)));
}

#[test]
fn test_contains_point_respects_height_of_flat_box() {
    let flat = BoundingBox::new(Vec3::ZERO, Vec3::new(10.0, 10.0, 1.0));
    assert!(flat.contains_point(Vec3::new(5.0, 5.0, 0.5)));
    assert!(!flat.contains_point(Vec3::new(5.0, 5.0, 2.0)));
    assert!(flat.contains_point_xy(Vec3::new(5.0, 5.0, 2.0)));
}

#[test]
fn test_intersects_and_contains() {
    let big = square(10.0);
    let small = BoundingBox::from_xy(Vec2::splat(2.0), Vec2::splat(4.0));
    let straddling = BoundingBox::from_xy(Vec2::splat(8.0), Vec2::splat(12.0));
    let outside = BoundingBox::from_xy(Vec2::splat(11.0), Vec2::splat(12.0));
    let touching = BoundingBox::from_xy(Vec2::new(10.0, 0.0), Vec2::new(12.0, 5.0));

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
    assert!(big.intersects(&straddling));
    assert!(!big.intersects(&outside));
    assert!(big.intersects(&touching));
}

#[test]
fn test_classify() {
    let big = square(10.0);
    assert_eq!(big.classify(&BoundingBox::from_xy(Vec2::splat(1.0), Vec2::splat(2.0))), Containment::Contains);
    assert_eq!(big.classify(&BoundingBox::from_xy(Vec2::splat(9.0), Vec2::splat(11.0))), Containment::Intersects);
    assert_eq!(big.classify(&BoundingBox::from_xy(Vec2::splat(20.0), Vec2::splat(21.0))), Containment::Disjoint);
}

// ============================================================================
// Quadrants
// ============================================================================

#[test]
fn test_quadrant_order_is_clockwise_from_north_east() {
    let quads = square(100.0).quadrants();
    assert_eq!(quads[0].min.truncate(), Vec2::new(50.0, 50.0));
    assert_eq!(quads[1].min.truncate(), Vec2::new(50.0, 0.0));
    assert_eq!(quads[2].min.truncate(), Vec2::new(0.0, 0.0));
    assert_eq!(quads[3].min.truncate(), Vec2::new(0.0, 50.0));
    assert_eq!(Quadrant::ALL[2].index(), 2);
}

#[test]
fn test_quadrants_tile_parent_exactly() {
    let parent = BoundingBox::from_xy(Vec2::new(-30.0, 10.0), Vec2::new(70.0, 50.0));
    let quads = parent.quadrants();

    let area: f32 = quads.iter().map(|q| q.length() * q.width()).sum();
    assert_eq!(area, parent.length() * parent.width());

    let min_x = quads.iter().map(|q| q.min.x).fold(f32::MAX, f32::min);
    let max_x = quads.iter().map(|q| q.max.x).fold(f32::MIN, f32::max);
    let min_y = quads.iter().map(|q| q.min.y).fold(f32::MAX, f32::min);
    let max_y = quads.iter().map(|q| q.max.y).fold(f32::MIN, f32::max);
    assert_eq!((min_x, max_x, min_y, max_y), (-30.0, 70.0, 10.0, 50.0));
}

#[test]
fn test_quadrant_of_midline_goes_north_east() {
    let bounds = square(100.0);
    assert_eq!(bounds.quadrant_of(Vec3::new(50.0, 50.0, 0.0)), Quadrant::NorthEast);
    assert_eq!(bounds.quadrant_of(Vec3::new(50.0, 10.0, 0.0)), Quadrant::SouthEast);
    assert_eq!(bounds.quadrant_of(Vec3::new(10.0, 50.0, 0.0)), Quadrant::NorthWest);
    assert_eq!(bounds.quadrant_of(Vec3::new(10.0, 10.0, 0.0)), Quadrant::SouthWest);
}

#[test]
fn test_quadrant_of_point_is_inside_that_quadrant() {
    let bounds = square(100.0);
    for &(x, y) in &[(0.0, 0.0), (100.0, 100.0), (49.9, 50.0), (75.0, 3.0), (100.0, 0.0)] {
        let point = Vec3::new(x, y, 0.0);
        let quadrant = bounds.quadrant_of(point);
        assert!(
            bounds.quadrant(quadrant).contains_point(point),
            "({}, {}) not inside {:?}", x, y, quadrant
        );
    }
}
