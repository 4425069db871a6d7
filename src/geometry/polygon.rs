use std::fmt;

use crate::error::{OperationError, Result};
use crate::math::{orient, Orientation, Point, EPSILON};

use super::{hull, Aabb, Line};

/// A polygon given by its boundary vertices in order.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % n`; the closing vertex is
/// implicit. Area, containment and convexity use the XY coordinates only.
/// Self-intersecting vertex lists are accepted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from an ordered vertex list.
    #[must_use]
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Appends a vertex to the boundary.
    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Returns the vertices in boundary order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise, negative for clockwise, `0` below
    /// three vertices.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let cur = &self.vertices[i];
            let next = &self.vertices[(i + 1) % n];
            sum += cur.x * next.y - next.x * cur.y;
        }
        sum * 0.5
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Sum of all edge lengths, including the closing edge.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Line::length).sum()
    }

    /// Area-weighted centroid.
    ///
    /// One vertex yields itself and two yield their midpoint. When the
    /// accumulated signed area is below [`EPSILON`] the vertex average is
    /// returned instead. `z` is the mean of the vertex `z` values.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyInput`] for a polygon without vertices.
    pub fn centroid(&self) -> Result<Point> {
        let n = self.vertices.len();
        match n {
            0 => return Err(OperationError::EmptyInput("centroid of empty polygon").into()),
            1 => return Ok(self.vertices[0]),
            2 => return Ok(self.vertices[0].lerp(&self.vertices[1], 0.5)),
            _ => {}
        }

        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;
        let average = self
            .vertices
            .iter()
            .fold(Point::origin(), |acc, v| acc + *v)
            * (1.0 / count);

        let mut area_sum = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let cur = &self.vertices[i];
            let next = &self.vertices[(i + 1) % n];
            let a = (cur.x * next.y - next.x * cur.y) * 0.5;
            area_sum += a;
            cx += (cur.x + next.x) * a / 3.0;
            cy += (cur.y + next.y) * a / 3.0;
        }

        if area_sum.abs() < EPSILON {
            tracing::debug!(
                vertices = n,
                area_sum,
                "degenerate polygon, centroid falls back to vertex average"
            );
            return Ok(average);
        }
        Ok(Point::new(cx / area_sum, cy / area_sum, average.z))
    }

    /// Returns `true` if every turn along the boundary has the same sign.
    ///
    /// Collinear turns are skipped. Fewer than three vertices, or a boundary
    /// with no turn at all, is not convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut winding: Option<Orientation> = None;
        for i in 0..n {
            let turn = orient(
                &self.vertices[i],
                &self.vertices[(i + 1) % n],
                &self.vertices[(i + 2) % n],
            );
            match (turn, winding) {
                (Orientation::Collinear, _) => {}
                (_, None) => winding = Some(turn),
                (_, Some(w)) if w != turn => return false,
                _ => {}
            }
        }
        winding.is_some()
    }

    /// Convex hull of the vertices (Graham scan), counter-clockwise from the
    /// lowest vertex. Fewer than three vertices are returned unchanged.
    #[must_use]
    pub fn convex_hull(&self) -> Polygon {
        Polygon::from_vertices(hull::graham_scan(&self.vertices))
    }

    /// Point-in-polygon test by ray casting.
    ///
    /// With `include_boundary`, a point on any edge counts as inside. Fewer
    /// than three vertices contain nothing.
    #[must_use]
    pub fn contains_point(&self, point: &Point, include_boundary: bool) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        if include_boundary && self.edges().iter().any(|e| e.contains(point, EPSILON)) {
            return true;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = &self.vertices[i];
            let vj = &self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y)
                && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Distance from `point` to the polygon.
    ///
    /// `0` inside or on the boundary, otherwise the nearest edge distance.
    /// An empty polygon is infinitely far away.
    #[must_use]
    pub fn distance_to(&self, point: &Point) -> f64 {
        match self.vertices.as_slice() {
            [] => f64::INFINITY,
            [only] => only.distance_to(point),
            _ if self.contains_point(point, true) => 0.0,
            _ => self
                .edges()
                .iter()
                .map(|e| e.distance_to(point))
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// Returns `true` if any edges cross, or either polygon contains a
    /// vertex of the other.
    #[must_use]
    pub fn intersects(&self, other: &Polygon) -> bool {
        let ours = self.edges();
        let theirs = other.edges();
        if ours.iter().any(|a| theirs.iter().any(|b| a.intersects(b))) {
            return true;
        }
        self.vertices.iter().any(|v| other.contains_point(v, true))
            || other.vertices.iter().any(|v| self.contains_point(v, true))
    }

    /// Axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }

    /// Drops interior vertices collinear with their neighbours.
    ///
    /// The first and last vertices are always kept. Neighbours are taken
    /// from the original list, not the simplified one.
    #[must_use]
    pub fn simplify(&self, epsilon: f64) -> Polygon {
        let n = self.vertices.len();
        if n < 3 {
            return self.clone();
        }
        let mut kept = Vec::with_capacity(n);
        kept.push(self.vertices[0]);
        kept.extend(
            self.vertices
                .windows(3)
                .filter(|w| !Line::are_collinear(&w[0], &w[1], &w[2], epsilon))
                .map(|w| w[1]),
        );
        kept.push(self.vertices[n - 1]);
        Polygon::from_vertices(kept)
    }

    /// Boundary edges, including the closing edge. Empty below two vertices.
    #[must_use]
    pub fn edges(&self) -> Vec<Line> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::from_vertices(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoprimError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, y: f64) -> Point {
        Point::new_2d(x, y)
    }

    fn square() -> Polygon {
        [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
            .into_iter()
            .collect()
    }

    /// Concave "L" shape.
    fn ell() -> Polygon {
        Polygon::from_vertices(vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ])
    }

    #[test]
    fn square_measurements() {
        let sq = square();
        assert_relative_eq!(sq.area(), 4.0);
        assert_relative_eq!(sq.perimeter(), 8.0);
        assert_relative_eq!(sq.centroid().unwrap(), p(1.0, 1.0));
        assert!(sq.is_convex());
    }

    #[test]
    fn signed_area_follows_orientation() {
        let sq = square();
        assert_relative_eq!(sq.signed_area(), 4.0);
        let reversed: Polygon = sq.vertices().iter().rev().copied().collect();
        assert_relative_eq!(reversed.signed_area(), -4.0);
        assert_relative_eq!(reversed.area(), 4.0);
    }

    #[test]
    fn small_polygons_degrade_gracefully() {
        let mut poly = Polygon::new();
        assert_eq!(poly.area(), 0.0);
        assert_eq!(poly.perimeter(), 0.0);
        assert!(!poly.is_convex());
        poly.add_vertex(p(1.0, 1.0));
        assert_eq!(poly.perimeter(), 0.0);
        assert_eq!(poly.centroid().unwrap(), p(1.0, 1.0));
        poly.add_vertex(p(3.0, 1.0));
        assert_eq!(poly.area(), 0.0);
        assert_relative_eq!(poly.perimeter(), 4.0);
        assert_eq!(poly.centroid().unwrap(), p(2.0, 1.0));
        assert!(!poly.contains_point(&p(2.0, 1.0), true));
    }

    #[test]
    fn empty_centroid_fails() {
        assert!(matches!(
            Polygon::new().centroid(),
            Err(GeoprimError::Operation(OperationError::EmptyInput(_)))
        ));
    }

    #[test]
    fn degenerate_centroid_uses_average() {
        let flat = Polygon::from_vertices(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
        assert_relative_eq!(flat.centroid().unwrap(), p(1.0, 0.0));
    }

    #[test]
    fn centroid_of_triangle() {
        let tri = Polygon::from_vertices(vec![p(0.0, 0.0), p(3.0, 0.0), p(0.0, 3.0)]);
        assert_relative_eq!(tri.centroid().unwrap(), p(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn centroid_keeps_plane_height() {
        let raised: Polygon = square()
            .vertices()
            .iter()
            .map(|v| Point::new(v.x, v.y, 3.0))
            .collect();
        assert_relative_eq!(raised.centroid().unwrap(), Point::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn convexity() {
        assert!(!ell().is_convex());
        let cw: Polygon = square().vertices().iter().rev().copied().collect();
        assert!(cw.is_convex());
        // A collinear vertex on an edge does not break convexity.
        let with_mid = Polygon::from_vertices(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
        ]);
        assert!(with_mid.is_convex());
        let flat = Polygon::from_vertices(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
        assert!(!flat.is_convex());
    }

    #[test]
    fn contains_point_ray_casting() {
        let l = ell();
        assert!(l.contains_point(&p(0.5, 0.5), false));
        assert!(l.contains_point(&p(0.5, 1.5), false));
        assert!(!l.contains_point(&p(1.5, 1.5), false));
        assert!(!l.contains_point(&p(-1.0, 0.5), false));
    }

    #[test]
    fn boundary_inclusion() {
        let sq = square();
        let on_edge = p(2.0, 1.0);
        assert!(sq.contains_point(&on_edge, true));
        assert!(sq.contains_point(&p(0.0, 0.0), true));
        // Without the boundary flag the right edge is outside.
        assert!(!sq.contains_point(&on_edge, false));
    }

    #[test]
    fn distance_to_point() {
        let sq = square();
        assert_eq!(sq.distance_to(&p(1.0, 1.0)), 0.0);
        assert_eq!(sq.distance_to(&p(2.0, 1.0)), 0.0);
        assert_relative_eq!(sq.distance_to(&p(3.0, 1.0)), 1.0);
        assert_relative_eq!(sq.distance_to(&p(5.0, 6.0)), 5.0);
        assert!(Polygon::new().distance_to(&p(0.0, 0.0)).is_infinite());
    }

    #[test]
    fn polygon_intersections() {
        let sq = square();
        let shifted: Polygon = sq.vertices().iter().map(|v| *v + p(1.0, 1.0)).collect();
        let far: Polygon = sq.vertices().iter().map(|v| *v + p(5.0, 0.0)).collect();
        let inner = Polygon::from_vertices(vec![p(0.5, 0.5), p(1.5, 0.5), p(1.0, 1.5)]);
        assert!(sq.intersects(&shifted));
        assert!(!sq.intersects(&far));
        // Fully nested: no edges cross, containment catches it.
        assert!(sq.intersects(&inner));
        assert!(inner.intersects(&sq));
    }

    #[test]
    fn bounding_box_of_square() {
        let bb = square().bounding_box();
        assert_eq!(bb.min, p(0.0, 0.0));
        assert_eq!(bb.max, p(2.0, 2.0));
    }

    #[test]
    fn simplify_drops_collinear_vertices() {
        let poly = Polygon::from_vertices(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
        ]);
        let simple = poly.simplify(EPSILON);
        assert_eq!(
            simple.vertices(),
            &[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
        );
        assert_abs_diff_eq!(simple.area(), poly.area());
    }

    #[test]
    fn edges_wrap_around() {
        let edges = square().edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], Line::new(p(0.0, 2.0), p(0.0, 0.0)));
        assert!(Polygon::from_vertices(vec![p(0.0, 0.0)]).edges().is_empty());
    }

    #[test]
    fn hull_of_sample_points() {
        let pts: Polygon = [
            p(3.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 2.0),
            p(2.0, 3.0),
            p(3.0, 3.0),
            p(4.0, 2.0),
        ]
        .into_iter()
        .collect();
        let hull = pts.convex_hull();
        assert_eq!(hull.vertices()[0], p(1.0, 1.0));
        assert!(!hull.vertices().contains(&p(2.0, 2.0)));
        assert!(hull.is_convex());
        assert!(hull.signed_area() > 0.0);
    }

    #[test]
    fn display() {
        let tri = Polygon::from_vertices(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert_eq!(tri.to_string(), "Polygon[Point(0, 0, 0), Point(1, 0, 0)]");
    }
}
