//! Support mapping based Cone shape.

use crate::math::{CcdReal, Point, Vector};
use crate::shape::{Center, SupportMap};

/// Cone shape with its principal axis aligned with the `y` axis.
///
/// The apex is at `(0, half_height, 0)` and the base disk is centered at
/// `(0, -half_height, 0)`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone<N: CcdReal> {
    /// The half-height of the cone.
    pub half_height: N,
    /// The base radius of the cone.
    pub radius: N,
}

impl<N: CcdReal> Cone<N> {
    /// Creates a new cone.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cone along the `y` axis.
    /// * `radius` - the length of the cone along all other axis.
    pub fn new(half_height: N, radius: N) -> Cone<N> {
        Cone {
            half_height,
            radius,
        }
    }
}

impl<N: CcdReal> SupportMap<N> for Cone<N> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        let mut vres = *dir;

        vres[1] = N::zero();

        if vres.normalize_mut().is_zero() {
            vres = Vector::zeros();
            vres[1] = self.half_height.copysign(dir[1]);
        } else {
            vres *= self.radius;
            vres[1] = -self.half_height;

            if dir.dot(&vres) < dir[1] * self.half_height {
                vres = Vector::zeros();
                vres[1] = self.half_height
            }
        }

        Point::from(vres)
    }
}

impl<N: CcdReal> Center<N> for Cone<N> {
    /// The centroid of the cone, a quarter of the height above its base.
    #[inline]
    fn local_center(&self) -> Point<N> {
        Point::new(
            N::zero(),
            -self.half_height * na::convert::<f64, N>(0.5),
            N::zero(),
        )
    }
}
