pub mod linalg;
pub mod orient;
pub mod point;

pub use orient::{cross_z, on_segment, orient, orientation, Orientation};
pub use point::{cross_product, dot_product, Point, Vector};

/// Global geometric tolerance for floating-point comparisons.
///
/// Used for normalization, parallelism, orientation signs and degenerate
/// area checks alike.
pub const EPSILON: f64 = 1e-6;

/// Converts an angle from radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Converts an angle from degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn angle_conversions() {
        assert_relative_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(degrees_to_radians(90.0), PI / 2.0);
        assert_relative_eq!(radians_to_degrees(degrees_to_radians(37.5)), 37.5);
    }
}
