//! Support mapping based Cuboid shape.

use crate::math::{CcdReal, Point, Vector};
use crate::shape::{Center, SupportMap};
use crate::utils::WSign;

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid<N: CcdReal> {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<N>,
}

impl<N: CcdReal> Cuboid<N> {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<N>) -> Cuboid<N> {
        Cuboid { half_extents }
    }
}

impl<N: CcdReal> SupportMap<N> for Cuboid<N> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        dir.copy_sign_to(self.half_extents).into()
    }
}

impl<N: CcdReal> Center<N> for Cuboid<N> {
    #[inline]
    fn local_center(&self) -> Point<N> {
        Point::origin()
    }
}
