use nalgebra::{Matrix3, Vector3};

use super::EPSILON;

/// Solves the 3×3 system `m · x = rhs` by Cramer's rule.
///
/// Returns `None` when `|det(m)| < EPSILON`.
#[must_use]
pub fn solve_3x3(m: &Matrix3<f64>, rhs: &Vector3<f64>) -> Option<Vector3<f64>> {
    let det = m.determinant();
    if det.abs() < EPSILON {
        tracing::trace!(det, "singular 3x3 system");
        return None;
    }
    let mut solution = Vector3::zeros();
    for i in 0..3 {
        let mut replaced = *m;
        replaced.set_column(i, rhs);
        solution[i] = replaced.determinant() / det;
    }
    Some(solution)
}
