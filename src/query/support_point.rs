use crate::math::{CcdReal, Point, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of the Minkowski difference of two shapes.
///
/// Each point of the difference `A - B` is the difference of a point of `A`
/// and a point of `B`. Both of those witnesses are kept so that contact
/// points can be reconstructed on the original shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupportPoint<N: CcdReal> {
    /// The point on the Minkowski difference. This is equal to `self.orig1 - self.orig2`,
    /// unless this point has been translated with `self.translate_mut`.
    pub point: Point<N>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<N>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<N>,
}

impl<N: CcdReal> SupportPoint<N> {
    /// Initializes a support point with `orig1 - orig2`.
    pub fn new(orig1: Point<N>, orig2: Point<N>) -> Self {
        let point = Point::from(orig1 - orig2);
        Self::new_with_point(point, orig1, orig2)
    }

    /// Initializes a support point with all information provided.
    ///
    /// It is assumed, but not checked, that `point == orig1 - orig2`.
    pub fn new_with_point(point: Point<N>, orig1: Point<N>, orig2: Point<N>) -> Self {
        SupportPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// Translate in-place the Minkowski difference point, leaving the witnesses untouched.
    pub fn translate_mut(&mut self, dir: &Vector<N>) {
        self.point += dir;
    }

    /// The midpoint of the two witnesses.
    #[inline]
    pub fn witness_midpoint(&self) -> Point<N> {
        na::center(&self.orig1, &self.orig2)
    }
}

impl<N: CcdReal> Sub<SupportPoint<N>> for SupportPoint<N> {
    type Output = Vector<N>;

    #[inline]
    fn sub(self, rhs: SupportPoint<N>) -> Vector<N> {
        self.point - rhs.point
    }
}

/// Computes the support point of the Minkowski difference `g1 - g2` along `dir`.
///
/// This is the point of `g1` furthest along `dir` minus the point of `g2`
/// furthest along `-dir`. Both shapes must be expressed in the same frame
/// (see [`Positioned`](crate::shape::Positioned)).
#[inline]
pub fn compute_support<N, G1, G2>(g1: &G1, g2: &G2, dir: &Vector<N>) -> SupportPoint<N>
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    let sp1 = g1.local_support_point(dir);
    let sp2 = g2.local_support_point(&-*dir);

    SupportPoint::new(sp1, sp2)
}
