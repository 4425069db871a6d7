//! A small 2D/3D computational geometry kernel.
//!
//! [`math`] holds the [`Point`] value type and numeric helpers,
//! [`geometry`] the segment, plane and polygon primitives, and [`query`]
//! the cross-type distance and intersection functions.

pub mod error;
pub mod geometry;
pub mod math;
pub mod query;

pub use error::{GeoprimError, Result};
pub use geometry::{Aabb, Line, Plane, Polygon};
pub use math::{cross_product, dot_product, Point, Vector, EPSILON};
