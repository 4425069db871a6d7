use crate::math::Point;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing `points`.
    ///
    /// An empty slice yields the degenerate box at the origin.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Point::origin(), Point::origin());
        };
        points.iter().skip(1).fold(Self::new(*first, *first), |acc, p| {
            Self::new(
                Point::from(acc.min.inf(p.as_vector())),
                Point::from(acc.max.sup(p.as_vector())),
            )
        })
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.min.lerp(&self.max, 0.5)
    }

    /// Returns `true` if `point` is inside the box or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }
}
