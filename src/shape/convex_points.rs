use crate::math::{CcdReal, Point, Vector};
use crate::shape::{Center, SupportMap};
use crate::utils;

/// A convex shape given as the convex hull of a borrowed set of points.
///
/// The hull itself is never computed: the support function is a linear
/// scan of the points.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ConvexPoints<'a, N: CcdReal> {
    /// The points the convex hull is made of. Must not be empty.
    pub points: &'a [Point<N>],
}

impl<'a, N: CcdReal> ConvexPoints<'a, N> {
    /// Creates the convex hull of `points`.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: &'a [Point<N>]) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }
}

impl<'a, N: CcdReal> SupportMap<N> for ConvexPoints<'a, N> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        utils::point_cloud_support_point(dir, self.points)
    }
}

impl<'a, N: CcdReal> Center<N> for ConvexPoints<'a, N> {
    /// The average of the points.
    ///
    /// This lies inside the hull but differs from the volumetric centroid in general.
    #[inline]
    fn local_center(&self) -> Point<N> {
        utils::center(self.points)
    }
}
