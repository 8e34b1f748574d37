use super::*;
use crate::shape::Shape;

fn committed(surface: &mut Surface, coords: &[(f64, f64)]) -> ShapeId {
    let id = surface.issue_id();
    let points = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
    surface.add(Shape::committed(id, points));
    id
}

#[test]
fn hit_test_finds_shape_within_tolerance() {
    let mut surface = Surface::new();
    let id = committed(&mut surface, &[(10.0, 10.0), (50.0, 10.0)]);
    assert_eq!(surface.hit_test(Point::new(30.0, 14.0)), Some(id));
    assert_eq!(surface.hit_test(Point::new(30.0, 40.0)), None);
}

#[test]
fn draw_tolerance_is_tighter_than_select_tolerance() {
    let mut surface = Surface::new();
    let id = committed(&mut surface, &[(10.0, 10.0), (50.0, 10.0)]);
    // Five pixels off the segment: a hit while selecting, a miss while
    // drawing.
    let probe = Point::new(30.0, 15.0);
    surface.target_find_tolerance = SELECT_TOLERANCE;
    assert_eq!(surface.hit_test(probe), Some(id));
    surface.target_find_tolerance = DRAW_TOLERANCE;
    assert_eq!(surface.hit_test(probe), None);
}

#[test]
fn hit_test_skips_unselectable_shapes() {
    let mut surface = Surface::new();
    committed(&mut surface, &[(10.0, 10.0), (50.0, 10.0)]);
    surface.set_all_selectable(false);
    assert_eq!(surface.hit_test(Point::new(30.0, 10.0)), None);
}

#[test]
fn hit_test_prefers_topmost_shape() {
    let mut surface = Surface::new();
    let _bottom = committed(&mut surface, &[(0.0, 0.0), (100.0, 0.0)]);
    let top = committed(&mut surface, &[(0.0, 0.0), (100.0, 0.0)]);
    assert_eq!(surface.hit_test(Point::new(50.0, 0.0)), Some(top));
}

#[test]
fn hit_test_accounts_for_view_transform() {
    let mut surface = Surface::new();
    let id = committed(&mut surface, &[(10.0, 10.0), (50.0, 10.0)]);
    surface.viewport.set_zoom(2.0);
    surface.viewport.pan_by(100.0, 0.0);
    // World (30, 10) lands at screen (160, 20).
    assert_eq!(surface.hit_test(Point::new(160.0, 20.0)), Some(id));
    assert_eq!(surface.hit_test(Point::new(30.0, 10.0)), None);
}

#[test]
fn single_point_shape_is_hit_by_radius() {
    let mut surface = Surface::new();
    let id = committed(&mut surface, &[(20.0, 20.0)]);
    assert_eq!(surface.hit_test(Point::new(24.0, 20.0)), Some(id));
    assert_eq!(surface.hit_test(Point::new(40.0, 20.0)), None);
}

#[test]
fn bounding_box_hit_without_per_pixel_flag() {
    let mut surface = Surface::new();
    let id = surface.issue_id();
    let mut shape = Shape::committed(
        id,
        vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 40.0),
            Point::new(0.0, 40.0),
        ],
    );
    shape.per_pixel_target_find = false;
    surface.add(shape);
    // Inside the box but far from every segment.
    assert_eq!(surface.hit_test(Point::new(28.0, 12.0)), Some(id));
}

#[test]
fn remove_returns_the_shape() {
    let mut surface = Surface::new();
    let id = committed(&mut surface, &[(0.0, 0.0), (1.0, 1.0)]);
    assert!(surface.remove(id).is_some());
    assert!(surface.remove(id).is_none());
    assert!(surface.shapes().is_empty());
}

#[test]
fn clear_keeps_the_viewport() {
    let mut surface = Surface::new();
    committed(&mut surface, &[(0.0, 0.0), (1.0, 1.0)]);
    surface.viewport.set_zoom(2.0);
    surface.viewport.pan_by(5.0, 7.0);
    surface.clear();
    assert!(surface.shapes().is_empty());
    assert_eq!(surface.viewport.zoom, 2.0);
    assert_eq!(surface.viewport.pan_x, 5.0);
    assert_eq!(surface.viewport.pan_y, 7.0);
}

#[test]
fn render_requests_coalesce() {
    let mut surface = Surface::new();
    assert!(!surface.take_render_request());
    committed(&mut surface, &[(0.0, 0.0)]);
    surface.request_render();
    assert!(surface.take_render_request());
    assert!(!surface.take_render_request());
}
