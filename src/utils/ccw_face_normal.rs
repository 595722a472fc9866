use crate::math::{CcdReal, Point, UnitVector};

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate, i.e., if its doubled area is
/// not larger than `eps`.
#[inline]
pub fn ccw_face_normal<N: CcdReal>(pts: [&Point<N>; 3], eps: N) -> Option<UnitVector<N>> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    let res = ab.cross(&ac);

    UnitVector::try_new(res, eps)
}
