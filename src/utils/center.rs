use crate::math::{CcdReal, Point};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use ccd3d::math::Point;
/// use ccd3d::utils::center;
///
/// let points: [Point<f64>; 3] = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// ```
#[inline]
pub fn center<N: CcdReal>(pts: &[Point<N>]) -> Point<N> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: N = na::convert::<f64, N>(1.0 / (pts.len() as f64));

    let mut res = Point::origin();

    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
