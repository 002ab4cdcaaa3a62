#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn pointer_maps_to_containing_cell() {
    assert_eq!(pointer_to_cell(Point::new(0.0, 0.0)), Some((0, 0)));
    assert_eq!(pointer_to_cell(Point::new(9.9, 9.9)), Some((0, 0)));
    assert_eq!(pointer_to_cell(Point::new(10.0, 10.0)), Some((1, 1)));
    assert_eq!(pointer_to_cell(Point::new(635.0, 395.0)), Some((39, 63)));
}

#[test]
fn pointer_outside_canvas_is_none() {
    assert_eq!(pointer_to_cell(Point::new(-0.1, 5.0)), None);
    assert_eq!(pointer_to_cell(Point::new(5.0, -0.1)), None);
    assert_eq!(pointer_to_cell(Point::new(CANVAS_W, 5.0)), None);
    assert_eq!(pointer_to_cell(Point::new(5.0, CANVAS_H)), None);
}

#[test]
fn cell_origin_matches_pointer_mapping() {
    let origin = cell_origin(12, 30);
    assert_eq!(origin.x, 300.0);
    assert_eq!(origin.y, 120.0);
    assert_eq!(pointer_to_cell(origin), Some((12, 30)));
}
