use crate::math::{cross_z, Point, EPSILON};

/// Graham scan over the XY coordinates of `points`.
///
/// The pivot is the lowest-y point (lowest x on ties). The remaining points
/// are ordered by polar angle around it, nearest first when angles agree
/// within [`EPSILON`]. The output is counter-clockwise, starts at the pivot
/// and contains no non-left turns along the sweep. Fewer than three points
/// are returned unchanged.
#[must_use]
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        tracing::trace!(count = points.len(), "hull input too small, returned as-is");
        return points.to_vec();
    }

    let mut pivot_idx = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let best = &points[pivot_idx];
        if pt.y < best.y || (pt.y <= best.y && pt.x < best.x) {
            pivot_idx = i;
        }
    }
    let pivot = points[pivot_idx];

    let mut keyed: Vec<(f64, f64, Point)> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pivot_idx)
        .map(|(_, q)| {
            let angle = (q.y - pivot.y).atan2(q.x - pivot.x);
            let dist = (q.x - pivot.x).hypot(q.y - pivot.y);
            (angle, dist, *q)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    // Angles closer than EPSILON form one ray; order each ray by distance.
    let mut run_start = 0;
    for i in 1..=keyed.len() {
        if i == keyed.len() || keyed[i].0 - keyed[i - 1].0 >= EPSILON {
            keyed[run_start..i].sort_by(|a, b| a.1.total_cmp(&b.1));
            run_start = i;
        }
    }

    let mut hull: Vec<Point> = Vec::with_capacity(points.len());
    hull.push(pivot);
    for (_, _, candidate) in keyed {
        while hull.len() > 1 {
            let n = hull.len();
            if cross_z(&hull[n - 2], &hull[n - 1], &candidate) <= 0.0 {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(candidate);
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new_2d(x, y)
    }

    #[test]
    fn drops_interior_point() {
        let pts = [
            p(3.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 2.0),
            p(2.0, 3.0),
            p(3.0, 3.0),
            p(4.0, 2.0),
        ];
        let hull = graham_scan(&pts);
        assert_eq!(
            hull,
            vec![p(1.0, 1.0), p(3.0, 1.0), p(4.0, 2.0), p(3.0, 3.0), p(2.0, 3.0)]
        );
    }

    #[test]
    fn collinear_points_on_first_ray_are_dropped() {
        let pts = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        let hull = graham_scan(&pts);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.0)]);
    }

    #[test]
    fn equal_angles_sorted_nearest_first() {
        // (1,1) and (2,2) share an angle from the pivot; the far one must survive.
        let pts = [p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(1.0, 1.0)];
        let hull = graham_scan(&pts);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]);
    }

    #[test]
    fn pivot_tie_breaks_on_x() {
        let pts = [p(5.0, 0.0), p(1.0, 0.0), p(3.0, 4.0)];
        let hull = graham_scan(&pts);
        assert_eq!(hull[0], p(1.0, 0.0));
    }

    #[test]
    fn small_input_unchanged() {
        let pts = [p(1.0, 0.0), p(0.0, 0.0)];
        assert_eq!(graham_scan(&pts), pts.to_vec());
        assert!(graham_scan(&[]).is_empty());
    }
}
