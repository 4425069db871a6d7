use crate::geometry::{Line, Plane, Polygon};
use crate::math::{Point, EPSILON};

/// Shortest distance between two geometric values.
pub trait Distance<Rhs: ?Sized = Self> {
    /// Returns the non-negative distance between `self` and `other`.
    fn distance(&self, other: &Rhs) -> f64;
}

/// Shortest distance between `a` and `b`, for any supported pair of types.
#[must_use]
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: Distance<B> + ?Sized,
    B: ?Sized,
{
    a.distance(b)
}

impl Distance for Point {
    fn distance(&self, other: &Point) -> f64 {
        self.distance_to(other)
    }
}

impl Distance<Line> for Point {
    fn distance(&self, other: &Line) -> f64 {
        other.distance_to(self)
    }
}

impl Distance<Point> for Line {
    fn distance(&self, other: &Point) -> f64 {
        self.distance_to(other)
    }
}

impl Distance<Plane> for Point {
    fn distance(&self, other: &Plane) -> f64 {
        other.distance_to(self)
    }
}

impl Distance<Point> for Plane {
    fn distance(&self, other: &Point) -> f64 {
        self.distance_to(other)
    }
}

impl Distance<Polygon> for Point {
    fn distance(&self, other: &Polygon) -> f64 {
        other.distance_to(self)
    }
}

impl Distance<Point> for Polygon {
    fn distance(&self, other: &Point) -> f64 {
        self.distance_to(other)
    }
}

/// Distance between the lines carrying two segments.
///
/// Non-parallel lines use the skew-line formula `|(s2 - s1) · c| / ‖c‖`
/// with `c = d1 × d2`. Parallel lines fall back to the distance from
/// `other.start` to `self`. A degenerate segment is treated as a point.
impl Distance for Line {
    fn distance(&self, other: &Line) -> f64 {
        let (d1, d2) = match (self.direction(), other.direction()) {
            (Ok(d1), Ok(d2)) => (d1, d2),
            (Err(_), _) => return other.distance_to(&self.start),
            (_, Err(_)) => return self.distance_to(&other.start),
        };
        let cross = d1.cross(&d2);
        let cross_len = cross.magnitude();
        if cross_len < EPSILON {
            return self.distance_to(&other.start);
        }
        (other.start - self.start).dot(&cross).abs() / cross_len
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z)
    }

    #[test]
    fn point_pairs_are_symmetric() {
        let a = p(1.0, 2.0, 3.0);
        let b = p(4.0, 6.0, 3.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
        assert_relative_eq!(distance(&b, &a), 5.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn point_line_both_orders() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0));
        let q = p(2.0, 3.0, 0.0);
        assert_relative_eq!(distance(&q, &line), 3.0);
        assert_relative_eq!(distance(&line, &q), 3.0);
    }

    #[test]
    fn point_plane_both_orders() {
        let plane = Plane::new(p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0)).unwrap();
        let q = p(7.0, -1.0, -4.0);
        assert_relative_eq!(distance(&q, &plane), 4.0);
        assert_relative_eq!(distance(&plane, &q), 4.0);
    }

    #[test]
    fn point_polygon() {
        let square = Polygon::from_vertices(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]);
        assert_relative_eq!(distance(&p(3.0, 0.5, 0.0), &square), 2.0);
        assert_eq!(distance(&square, &p(0.5, 0.5, 0.0)), 0.0);
    }

    #[test]
    fn skew_lines() {
        // x-axis and a y-parallel line at z = 2.
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(0.0, 0.0, 2.0), p(0.0, 1.0, 2.0));
        assert_relative_eq!(distance(&a, &b), 2.0);
    }

    #[test]
    fn intersecting_lines_have_zero_distance() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0));
        let b = Line::new(p(0.0, 2.0, 0.0), p(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(distance(&a, &b), 0.0);
    }

    #[test]
    fn parallel_lines_use_segment_distance() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Line::new(p(0.0, 3.0, 0.0), p(1.0, 3.0, 0.0));
        assert_relative_eq!(distance(&a, &b), 3.0);
    }

    #[test]
    fn degenerate_segment_acts_as_point() {
        let a = Line::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0));
        let dot = Line::new(p(2.0, 5.0, 0.0), p(2.0, 5.0, 0.0));
        assert_relative_eq!(distance(&a, &dot), 5.0);
        assert_relative_eq!(distance(&dot, &a), 5.0);
    }
}
