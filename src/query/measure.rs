use crate::geometry::{Line, Plane, Polygon};
use crate::math::{Point, Vector, EPSILON};

/// Returns `true` if `point` lies on the segment within `epsilon`.
#[must_use]
pub fn is_point_on_line(point: &Point, line: &Line, epsilon: f64) -> bool {
    line.contains(point, epsilon)
}

/// Returns `true` if `point` lies on the plane within `epsilon`.
#[must_use]
pub fn is_point_on_plane(point: &Point, plane: &Plane, epsilon: f64) -> bool {
    plane.contains(point, epsilon)
}

/// Returns `true` if the three points are collinear within `epsilon`.
#[must_use]
pub fn are_collinear(a: &Point, b: &Point, c: &Point, epsilon: f64) -> bool {
    Line::are_collinear(a, b, c, epsilon)
}

/// Returns `true` if the four points are coplanar within `epsilon`.
///
/// Compares the scalar triple product `(b - a) × (c - a) · (d - a)` to zero.
#[must_use]
pub fn are_coplanar(a: &Point, b: &Point, c: &Point, d: &Point, epsilon: f64) -> bool {
    triple_product(a, b, c, d).abs() < epsilon
}

/// Area of the triangle `abc`.
#[must_use]
pub fn triangle_area(a: &Point, b: &Point, c: &Point) -> f64 {
    (*b - *a).cross(&(*c - *a)).magnitude() * 0.5
}

/// Volume of the tetrahedron `abcd`.
#[must_use]
pub fn tetrahedron_volume(a: &Point, b: &Point, c: &Point, d: &Point) -> f64 {
    triple_product(a, b, c, d).abs() / 6.0
}

/// Angle between two vectors in `[0, π]`.
///
/// Returns `0` if either vector is shorter than [`EPSILON`].
#[must_use]
pub fn angle_between(v1: &Vector, v2: &Vector) -> f64 {
    let mag1 = v1.magnitude();
    let mag2 = v2.magnitude();
    if mag1 < EPSILON || mag2 < EPSILON {
        return 0.0;
    }
    (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0).acos()
}

/// Convex hull of a point set in the XY plane.
#[must_use]
pub fn convex_hull_2d(points: &[Point]) -> Polygon {
    Polygon::from_vertices(points.to_vec()).convex_hull()
}

fn triple_product(a: &Point, b: &Point, c: &Point, d: &Point) -> f64 {
    (*b - *a).cross(&(*c - *a)).dot(&(*d - *a))
}
