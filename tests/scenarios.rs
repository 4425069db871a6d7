#![allow(clippy::unwrap_used)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use geoprim::query::{intersection, intersection_of_planes};
use geoprim::{Line, Plane, Point, Polygon};

fn p(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

#[test]
fn segment_length_is_five() {
    let line = Line::new(p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0));
    assert_relative_eq!(line.length(), 5.0);
}

#[test]
fn diagonals_cross_at_center() {
    let a = Line::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0));
    let b = Line::new(p(0.0, 2.0, 0.0), p(2.0, 0.0, 0.0));
    assert!(a.intersects(&b));
    assert_relative_eq!(a.intersection_point(&b).unwrap(), p(1.0, 1.0, 0.0));
    assert_relative_eq!(intersection(&a, &b).unwrap(), p(1.0, 1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn square_properties() {
    let mut square = Polygon::new();
    square.add_vertex(p(0.0, 0.0, 0.0));
    square.add_vertex(p(2.0, 0.0, 0.0));
    square.add_vertex(p(2.0, 2.0, 0.0));
    square.add_vertex(p(0.0, 2.0, 0.0));
    assert_relative_eq!(square.area(), 4.0);
    assert_relative_eq!(square.perimeter(), 8.0);
    assert_relative_eq!(square.centroid().unwrap(), p(1.0, 1.0, 0.0));
    assert!(square.is_convex());
}

#[test]
fn xy_plane_distance_and_crossing() {
    let plane =
        Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0)).unwrap();
    assert_relative_eq!(plane.distance_to(&p(0.0, 0.0, 5.0)), 5.0);
    let vertical = Line::new(p(1.0, 1.0, -1.0), p(1.0, 1.0, 3.0));
    assert_relative_eq!(plane.intersection_with(&vertical).unwrap(), p(1.0, 1.0, 0.0));
}

#[test]
fn axis_planes_meet_at_origin() {
    let x0 = Plane::new(p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0)).unwrap();
    let y0 = Plane::new(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)).unwrap();
    let z0 = Plane::new(p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0)).unwrap();
    assert_abs_diff_eq!(intersection_of_planes(&x0, &y0, &z0).unwrap(), p(0.0, 0.0, 0.0));
}

#[test]
fn hull_is_ccw_from_lowest_vertex() {
    let cloud = Polygon::from_vertices(vec![
        p(3.0, 1.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(2.0, 2.0, 0.0),
        p(2.0, 3.0, 0.0),
        p(3.0, 3.0, 0.0),
        p(4.0, 2.0, 0.0),
    ]);
    let hull = cloud.convex_hull();
    assert_eq!(
        hull.vertices(),
        &[
            p(1.0, 1.0, 0.0),
            p(3.0, 1.0, 0.0),
            p(4.0, 2.0, 0.0),
            p(3.0, 3.0, 0.0),
            p(2.0, 3.0, 0.0),
        ]
    );
    assert!(hull.signed_area() > 0.0);
}
