use super::{Point, EPSILON};

/// Turn direction of an ordered point triple in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn.
    CounterClockwise,
    /// Right turn.
    Clockwise,
    /// No turn within tolerance.
    Collinear,
}

/// Z-component of `(b - a) × (c - b)`.
///
/// Positive when `a → b → c` turns left.
#[inline]
#[must_use]
pub fn cross_z(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Classifies the turn `a → b → c` with a three-way epsilon sign.
#[must_use]
pub fn orientation(a: &Point, b: &Point, c: &Point, epsilon: f64) -> Orientation {
    let value = cross_z(a, b, c);
    if value > epsilon {
        Orientation::CounterClockwise
    } else if value < -epsilon {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `p` lies within the XY bounding box of segment `a`–`b`,
/// expanded by `epsilon`.
///
/// Only meaningful once `p` is known to be collinear with the segment.
#[must_use]
pub fn on_segment(p: &Point, a: &Point, b: &Point, epsilon: f64) -> bool {
    p.x <= a.x.max(b.x) + epsilon
        && p.x >= a.x.min(b.x) - epsilon
        && p.y <= a.y.max(b.y) + epsilon
        && p.y >= a.y.min(b.y) - epsilon
}

/// Convenience wrapper for [`orientation`] with the crate tolerance.
#[must_use]
pub fn orient(a: &Point, b: &Point, c: &Point) -> Orientation {
    orientation(a, b, c, EPSILON)
}
