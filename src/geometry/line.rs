use std::fmt;

use crate::error::{OperationError, Result};
use crate::math::{on_segment, orient, Orientation, Point, Vector, EPSILON};

/// A finite line segment from `start` to `end`.
///
/// Length, containment and intersection treat the segment as bounded.
/// [`Line::direction`] and plane intersection treat it as a ray along
/// `end - start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Creates a new segment. `start == end` is allowed and yields a
    /// zero-length segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// The non-normalized vector `end - start`.
    #[must_use]
    pub fn delta(&self) -> Vector {
        self.end - self.start
    }

    /// Returns the unit direction from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the segment is degenerate.
    pub fn direction(&self) -> Result<Vector> {
        self.delta().normalized()
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    /// Evaluates `start + (end - start) * t`. `t` is not clamped.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        self.start.lerp(&self.end, t)
    }

    /// Returns `true` if `point` lies on the segment within `epsilon`.
    ///
    /// The point must be collinear with the segment and inside its
    /// per-axis bounding box, expanded by `epsilon` on all three axes.
    #[must_use]
    pub fn contains(&self, point: &Point, epsilon: f64) -> bool {
        let cross = self.delta().cross(&(*point - self.start));
        if cross.magnitude() >= epsilon {
            return false;
        }
        let (s, e) = (&self.start, &self.end);
        point.x >= s.x.min(e.x) - epsilon
            && point.x <= s.x.max(e.x) + epsilon
            && point.y >= s.y.min(e.y) - epsilon
            && point.y <= s.y.max(e.y) + epsilon
            && point.z >= s.z.min(e.z) - epsilon
            && point.z <= s.z.max(e.z) + epsilon
    }

    /// Returns the minimum distance from `point` to the segment.
    #[must_use]
    pub fn distance_to(&self, point: &Point) -> f64 {
        point.distance_to(&self.project(point))
    }

    /// Projects `point` orthogonally onto the segment.
    ///
    /// The projection parameter is clamped to `[0, 1]`, so the result always
    /// lies on the segment. A degenerate segment projects everything to
    /// `start`.
    #[must_use]
    pub fn project(&self, point: &Point) -> Point {
        let d = self.delta();
        let len_sq = d.magnitude_squared();
        if len_sq < EPSILON * EPSILON {
            return self.start;
        }
        let t = ((*point - self.start).dot(&d) / len_sq).clamp(0.0, 1.0);
        self.point_at(t)
    }

    /// Reflects `point` through its projection onto the segment.
    #[must_use]
    pub fn reflect(&self, point: &Point) -> Point {
        self.project(point) * 2.0 - *point
    }

    /// Angle between the two segment directions, in `[0, π/2]`.
    ///
    /// Parallel and anti-parallel segments both report `0`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if either segment is degenerate.
    pub fn angle_with(&self, other: &Line) -> Result<f64> {
        let d1 = self.direction()?;
        let d2 = other.direction()?;
        Ok(d1.dot(&d2).abs().min(1.0).acos())
    }

    /// Returns `true` if the two segments intersect in the XY plane.
    ///
    /// Uses orientation signs for the general case, falling back to
    /// bounding-box checks when an endpoint is collinear with the other
    /// segment.
    #[must_use]
    pub fn intersects(&self, other: &Line) -> bool {
        let (a0, a1) = (&self.start, &self.end);
        let (b0, b1) = (&other.start, &other.end);

        let o1 = orient(a0, a1, b0);
        let o2 = orient(a0, a1, b1);
        let o3 = orient(b0, b1, a0);
        let o4 = orient(b0, b1, a1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && on_segment(b0, a0, a1, EPSILON))
            || (o2 == Orientation::Collinear && on_segment(b1, a0, a1, EPSILON))
            || (o3 == Orientation::Collinear && on_segment(a0, b0, b1, EPSILON))
            || (o4 == Orientation::Collinear && on_segment(a1, b0, b1, EPSILON))
    }

    /// Returns the crossing point of two intersecting segments.
    ///
    /// Solved in the XY plane; `z` is interpolated along `self`. Returns
    /// `None` if the segments don't intersect or are parallel (including
    /// collinear overlap, which has no single crossing point).
    #[must_use]
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        if !self.intersects(other) {
            return None;
        }
        let da = self.delta();
        let db = other.delta();
        let cross = da.x * db.y - da.y * db.x;
        if cross.abs() <= EPSILON * da.magnitude() * db.magnitude() {
            return None;
        }
        let offset = other.start - self.start;
        let t = (offset.x * db.y - offset.y * db.x) / cross;
        Some(self.point_at(t))
    }

    /// Returns `true` if `a`, `b` and `c` are collinear within `epsilon`.
    #[must_use]
    pub fn are_collinear(a: &Point, b: &Point, c: &Point, epsilon: f64) -> bool {
        (*b - *a).cross(&(*c - *a)).magnitude() < epsilon
    }

    /// Linear Bézier interpolation. `t` is not clamped.
    #[must_use]
    pub fn bezier_linear(p0: &Point, p1: &Point, t: f64) -> Point {
        p0.lerp(p1, t)
    }

    /// Quadratic Bézier interpolation by blending two linear results.
    #[must_use]
    pub fn bezier_quadratic(p0: &Point, p1: &Point, p2: &Point, t: f64) -> Point {
        let a = Self::bezier_linear(p0, p1, t);
        let b = Self::bezier_linear(p1, p2, t);
        Self::bezier_linear(&a, &b, t)
    }

    /// Cubic Bézier interpolation by blending two quadratic results.
    #[must_use]
    pub fn bezier_cubic(p0: &Point, p1: &Point, p2: &Point, p3: &Point, t: f64) -> Point {
        let a = Self::bezier_quadratic(p0, p1, p2, t);
        let b = Self::bezier_quadratic(p1, p2, p3, t);
        Self::bezier_linear(&a, &b, t)
    }

    /// Evaluates a Bézier curve of arbitrary degree with de Casteljau's
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyInput`] if `control` is empty.
    pub fn bezier_interpolate(control: &[Point], t: f64) -> Result<Point> {
        if control.is_empty() {
            return Err(OperationError::EmptyInput("bezier control polygon").into());
        }
        let mut points = control.to_vec();
        for level in (1..points.len()).rev() {
            for i in 0..level {
                points[i] = points[i].lerp(&points[i + 1], t);
            }
        }
        Ok(points[0])
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Line(")?;
        fmt::Display::fmt(&self.start, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.end, f)?;
        f.write_str(")")
    }
}
