use crate::math::{CcdReal, Point};
use crate::utils;

/// Computes the squared distance between `p` and the segment `[a, b]`.
///
/// Also returns the point of the segment closest to `p`. A zero-length
/// segment is treated as the single point `a`.
pub fn point_segment_distance_squared<N: CcdReal>(
    p: &Point<N>,
    a: &Point<N>,
    b: &Point<N>,
    eps: N,
) -> (N, Point<N>) {
    let ab = b - a;
    let ap = a - p;
    let sqnab = ab.norm_squared();

    if utils::is_zero(sqnab, eps) {
        return (ap.norm_squared(), *a);
    }

    // Parameter of the projection of `p` on the line (a, b).
    let t = -ap.dot(&ab) / sqnab;

    if t < N::zero() || utils::is_zero(t, eps) {
        (ap.norm_squared(), *a)
    } else if t > N::one() || utils::is_equal(t, N::one(), eps) {
        ((b - p).norm_squared(), *b)
    } else {
        let proj = a + ab * t;
        ((proj - p).norm_squared(), proj)
    }
}
