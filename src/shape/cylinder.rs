//! Support mapping based Cylinder shape.

use crate::math::{CcdReal, Point, Vector};
use crate::shape::{Center, SupportMap};

/// Cylinder shape with its principal axis aligned with the `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder<N: CcdReal> {
    /// The half-height of the cylinder.
    pub half_height: N,
    /// The radius fo the cylinder.
    pub radius: N,
}

impl<N: CcdReal> Cylinder<N> {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: N, radius: N) -> Cylinder<N> {
        assert!(half_height >= N::zero() && radius >= N::zero());

        Cylinder {
            half_height,
            radius,
        }
    }
}

impl<N: CcdReal> SupportMap<N> for Cylinder<N> {
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        let mut vres = *dir;

        vres[1] = N::zero();

        if vres.normalize_mut().is_zero() {
            vres = Vector::zeros()
        } else {
            vres *= self.radius;
        }

        vres[1] = self.half_height.copysign(dir[1]);

        Point::from(vres)
    }
}

impl<N: CcdReal> Center<N> for Cylinder<N> {
    #[inline]
    fn local_center(&self) -> Point<N> {
        Point::origin()
    }
}
