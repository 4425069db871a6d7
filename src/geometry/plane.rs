use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::math::{Point, Vector, EPSILON};

use super::Line;

/// An infinite plane in 3D space.
///
/// Stored as a unit normal and a reference point. The implicit form is
/// `ax + by + cz + d = 0` with `(a, b, c) = normal` and `d = -normal · point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector,
    point: Point,
}

impl Plane {
    /// Creates a plane from a normal vector and a point on the plane.
    ///
    /// The normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroNormal`] if `‖normal‖ < EPSILON`.
    pub fn new(normal: Vector, point: Point) -> Result<Self> {
        let len = normal.magnitude();
        if len < EPSILON {
            return Err(ConstructionError::ZeroNormal.into());
        }
        Ok(Self {
            normal: normal * (1.0 / len),
            point,
        })
    }

    /// Creates the plane through three points.
    ///
    /// The normal follows the right-hand rule on `(p2 - p1) × (p3 - p1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::CollinearPoints`] if the points are
    /// collinear (or coincident).
    pub fn from_points(p1: &Point, p2: &Point, p3: &Point) -> Result<Self> {
        let normal = (*p2 - *p1).cross(&(*p3 - *p1));
        let len = normal.magnitude();
        if len < EPSILON {
            return Err(ConstructionError::CollinearPoints.into());
        }
        Ok(Self {
            normal: normal * (1.0 / len),
            point: *p1,
        })
    }

    /// Creates a plane from implicit coefficients `ax + by + cz + d = 0`.
    ///
    /// The reference point is found by solving along the axis with the
    /// largest coefficient magnitude, with the other two coordinates set to
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroNormal`] if `‖(a, b, c)‖ < EPSILON`.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        let normal = Vector::new(a, b, c);
        if normal.magnitude() < EPSILON {
            return Err(ConstructionError::ZeroNormal.into());
        }
        let point = if a.abs() >= b.abs() && a.abs() >= c.abs() {
            Point::new(-d / a, 0.0, 0.0)
        } else if b.abs() >= c.abs() {
            Point::new(0.0, -d / b, 0.0)
        } else {
            Point::new(0.0, 0.0, -d / c)
        };
        Self::new(normal, point)
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    /// Returns the reference point.
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Constant term of the implicit form: `-(normal · point)`.
    #[must_use]
    pub fn d(&self) -> f64 {
        -self.normal.dot(&self.point)
    }

    /// Implicit-form coefficients `[a, b, c, d]` with a unit `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d()]
    }

    /// Signed distance, positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance_to(&self, point: &Point) -> f64 {
        self.normal.dot(point) + self.d()
    }

    /// Unsigned distance from `point` to the plane.
    #[must_use]
    pub fn distance_to(&self, point: &Point) -> f64 {
        self.signed_distance_to(point).abs()
    }

    /// Returns `true` if `point` is within `epsilon` of the plane.
    #[must_use]
    pub fn contains(&self, point: &Point, epsilon: f64) -> bool {
        self.distance_to(point) < epsilon
    }

    /// Returns `true` if the line through `line` meets the plane.
    ///
    /// The segment is treated as an infinite line: any non-parallel segment
    /// intersects. A parallel (or degenerate) segment intersects only when
    /// its start lies on the plane.
    #[must_use]
    pub fn intersects(&self, line: &Line) -> bool {
        match line.direction() {
            Ok(dir) if self.normal.dot(&dir).abs() >= EPSILON => true,
            _ => self.contains(&line.start, EPSILON),
        }
    }

    /// Intersection of the infinite line through `line` with the plane.
    ///
    /// The result is not clamped to the segment's extent. Returns `None` if
    /// the line is parallel to the plane or the segment is degenerate.
    #[must_use]
    pub fn intersection_with(&self, line: &Line) -> Option<Point> {
        let dir = line.direction().ok()?;
        let denom = self.normal.dot(&dir);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -self.signed_distance_to(&line.start) / denom;
        Some(line.start + dir * t)
    }

    /// Like [`Plane::intersection_with`], but only returns a point that lies
    /// on the finite segment.
    #[must_use]
    pub fn segment_intersection(&self, line: &Line) -> Option<Point> {
        let point = self.intersection_with(line)?;
        line.contains(&point, EPSILON).then_some(point)
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: &Point) -> Point {
        *point - self.normal * self.signed_distance_to(point)
    }

    /// Mirror image of `point` across the plane.
    #[must_use]
    pub fn reflect(&self, point: &Point) -> Point {
        *point - self.normal * (2.0 * self.signed_distance_to(point))
    }

    /// Dihedral angle between the planes, in `[0, π/2]`.
    #[must_use]
    pub fn angle_with(&self, other: &Plane) -> f64 {
        self.normal.dot(&other.normal).abs().min(1.0).acos()
    }

    /// Returns `true` if the normals are parallel or anti-parallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal.cross(&other.normal).magnitude() < EPSILON
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Plane(normal: ")?;
        fmt::Display::fmt(&self.normal, f)?;
        f.write_str(", point: ")?;
        fmt::Display::fmt(&self.point, f)?;
        f.write_str(")")
    }
}
