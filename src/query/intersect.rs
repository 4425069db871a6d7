use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};

use crate::geometry::{Line, Plane};
use crate::math::linalg::solve_3x3;
use crate::math::{Point, EPSILON};

/// Intersection between two geometric values.
pub trait Intersect<Rhs: ?Sized = Self> {
    /// What the intersection produces.
    type Output;

    /// Computes the intersection of `self` with `other`.
    fn intersection(&self, other: &Rhs) -> Self::Output;
}

/// Intersection of `a` and `b`, for any supported pair of types.
#[must_use]
pub fn intersection<A, B>(a: &A, b: &B) -> A::Output
where
    A: Intersect<B> + ?Sized,
    B: ?Sized,
{
    a.intersection(b)
}

impl Intersect<Plane> for Line {
    type Output = Option<Point>;

    fn intersection(&self, other: &Plane) -> Option<Point> {
        other.intersection_with(self)
    }
}

impl Intersect<Line> for Plane {
    type Output = Option<Point>;

    fn intersection(&self, other: &Line) -> Option<Point> {
        self.intersection_with(other)
    }
}

/// Crossing point of the infinite lines through two segments, solved in the
/// XY plane.
///
/// Returns `None` for parallel or degenerate segments. Use
/// [`Line::intersection_point`] for the bounded version.
impl Intersect for Line {
    type Output = Option<Point>;

    fn intersection(&self, other: &Line) -> Option<Point> {
        let d1 = self.direction().ok()?;
        let d2 = other.direction().ok()?;
        let cross = d1.x * d2.y - d1.y * d2.x;
        if cross.abs() < EPSILON {
            return None;
        }
        let offset = other.start - self.start;
        let t = (offset.x * d2.y - offset.y * d2.x) / cross;
        Some(self.start + d1 * t)
    }
}

/// Line of intersection of two planes.
///
/// The direction is the unit `n1 × n2`. The point on the line is found by
/// zeroing the coordinate where `n1 × n2` is largest and solving the
/// remaining 2×2 system, whose determinant is that component. The returned
/// segment runs from that point to `point + direction`. Parallel planes
/// yield `None`.
impl Intersect for Plane {
    type Output = Option<Line>;

    fn intersection(&self, other: &Plane) -> Option<Line> {
        if self.is_parallel_to(other) {
            return None;
        }
        let (n1, n2) = (self.normal(), other.normal());
        let axis = n1.cross(n2);
        let direction = axis.normalized().ok()?;

        let zeroed = axis.iamax();
        let (i, j) = match zeroed {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let m = Matrix2::new(n1[i], n1[j], n2[i], n2[j]);
        let Some(inverse) = m.try_inverse() else {
            tracing::debug!(axis = zeroed, "plane pair system singular");
            return None;
        };
        let solution = inverse * Vector2::new(-self.d(), -other.d());

        let mut coords = Vector3::zeros();
        coords[i] = solution[0];
        coords[j] = solution[1];
        let point = Point::from(coords);
        Some(Line::new(point, point + direction))
    }
}

/// Common point of three planes, by Cramer's rule.
///
/// Returns `None` if any two planes are parallel or the system is singular.
#[must_use]
pub fn intersection_of_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point> {
    if p1.is_parallel_to(p2) || p1.is_parallel_to(p3) || p2.is_parallel_to(p3) {
        return None;
    }
    let (n1, n2, n3) = (p1.normal(), p2.normal(), p3.normal());
    let m = Matrix3::new(
        n1.x, n1.y, n1.z, //
        n2.x, n2.y, n2.z, //
        n3.x, n3.y, n3.z,
    );
    let rhs = Vector3::new(-p1.d(), -p2.d(), -p3.d());
    let solution = solve_3x3(&m, &rhs);
    if solution.is_none() {
        tracing::debug!("three planes share no single point");
    }
    solution.map(Point::from)
}
