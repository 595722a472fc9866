use crate::math::{CcdReal, Vector};

/// Computes the triple cross product `(a × b) × c`.
///
/// With `a = c`, this is the component of `b` orthogonal to `a`, scaled by
/// `|a|²`. GJK uses it to get a search direction perpendicular to a simplex
/// edge and pointing toward the origin.
#[inline]
pub fn triple_cross<N: CcdReal>(a: &Vector<N>, b: &Vector<N>, c: &Vector<N>) -> Vector<N> {
    a.cross(b).cross(c)
}
