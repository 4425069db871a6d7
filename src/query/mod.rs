//! Stateless helpers that work across geometric types.
//!
//! Distance and intersection are dispatched through the [`Distance`] and
//! [`Intersect`] traits, so `distance(&a, &b)` and `intersection(&a, &b)`
//! accept any supported pair.

mod distance;
mod intersect;
mod measure;

pub use distance::{distance, Distance};
pub use intersect::{intersection, intersection_of_planes, Intersect};
pub use measure::{
    angle_between, are_collinear, are_coplanar, convex_hull_2d, is_point_on_line,
    is_point_on_plane, tetrahedron_volume, triangle_area,
};

pub use crate::math::{degrees_to_radians, radians_to_degrees};
