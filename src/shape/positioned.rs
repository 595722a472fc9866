use crate::math::{CcdReal, Isometry, Point, UnitVector, Vector};
use crate::shape::{Center, SupportMap};

/// A shape placed in the world by an isometry.
///
/// The collision queries of this crate work in a single frame: both shapes
/// must be expressed in the same coordinates. `Positioned` moves a shape
/// from its local frame into that common frame, so its "local" support
/// points are the world-space support points of the wrapped shape.
#[derive(Debug, Copy, Clone)]
pub struct Positioned<'a, N: CcdReal, S: ?Sized> {
    /// The wrapped shape.
    pub shape: &'a S,
    /// The position of `shape` in the world.
    pub pos: Isometry<N>,
}

impl<'a, N: CcdReal, S: ?Sized> Positioned<'a, N, S> {
    /// Places `shape` at `pos`.
    #[inline]
    pub fn new(shape: &'a S, pos: Isometry<N>) -> Self {
        Self { shape, pos }
    }
}

impl<'a, N: CcdReal, S: ?Sized + SupportMap<N>> SupportMap<N> for Positioned<'a, N, S> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        self.shape.support_point(&self.pos, dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        self.shape.support_point_toward(&self.pos, dir)
    }
}

impl<'a, N: CcdReal, S: ?Sized + Center<N>> Center<N> for Positioned<'a, N, S> {
    #[inline]
    fn local_center(&self) -> Point<N> {
        self.shape.center(&self.pos)
    }
}
