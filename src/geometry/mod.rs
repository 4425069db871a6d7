mod bounding_box;
pub mod hull;
mod line;
mod plane;
mod polygon;

pub use bounding_box::Aabb;
pub use line::Line;
pub use plane::Plane;
pub use polygon::Polygon;
