use crate::math::{CcdReal, Isometry, Point, UnitVector, Vector};
use crate::shape::{Center, SupportMap};

/// A support mapping that is a single point.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ConstantPoint<N: CcdReal>(pub Point<N>);

impl<N: CcdReal> SupportMap<N> for ConstantPoint<N> {
    #[inline]
    fn support_point(&self, m: &Isometry<N>, _: &Vector<N>) -> Point<N> {
        m * self.0
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<N>, _: &UnitVector<N>) -> Point<N> {
        m * self.0
    }

    #[inline]
    fn local_support_point(&self, _: &Vector<N>) -> Point<N> {
        self.0
    }

    #[inline]
    fn local_support_point_toward(&self, _: &UnitVector<N>) -> Point<N> {
        self.0
    }
}

impl<N: CcdReal> Center<N> for ConstantPoint<N> {
    #[inline]
    fn local_center(&self) -> Point<N> {
        self.0
    }
}

/// A support mapping that is the point at (0.0, 0.0, 0.0).
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ConstantOrigin;

impl<N: CcdReal> SupportMap<N> for ConstantOrigin {
    #[inline]
    fn support_point(&self, m: &Isometry<N>, _: &Vector<N>) -> Point<N> {
        m.translation.vector.into()
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<N>, _: &UnitVector<N>) -> Point<N> {
        m.translation.vector.into()
    }

    #[inline]
    fn local_support_point(&self, _: &Vector<N>) -> Point<N> {
        Point::origin()
    }

    #[inline]
    fn local_support_point_toward(&self, _: &UnitVector<N>) -> Point<N> {
        Point::origin()
    }
}

impl<N: CcdReal> Center<N> for ConstantOrigin {
    #[inline]
    fn local_center(&self) -> Point<N> {
        Point::origin()
    }
}

/// The Minkowski sum of a shape and a ball.
pub struct DilatedShape<'a, N: CcdReal, S: ?Sized + SupportMap<N>> {
    /// The shape involved in the Minkowski sum.
    pub shape: &'a S,
    /// The radius of the ball involved in the Minkoski sum.
    pub radius: N,
}

impl<'a, N: CcdReal, S: ?Sized + SupportMap<N>> DilatedShape<'a, N, S> {
    /// Dilates `shape` by a ball of the given `radius`.
    #[inline]
    pub fn new(shape: &'a S, radius: N) -> Self {
        Self { shape, radius }
    }
}

impl<'a, N: CcdReal, S: ?Sized + SupportMap<N>> SupportMap<N> for DilatedShape<'a, N, S> {
    #[inline]
    fn support_point(&self, m: &Isometry<N>, dir: &Vector<N>) -> Point<N> {
        match UnitVector::try_new(*dir, N::zero()) {
            Some(dir) => self.support_point_toward(m, &dir),
            None => self.shape.support_point(m, dir),
        }
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<N>, dir: &UnitVector<N>) -> Point<N> {
        self.shape.support_point_toward(m, dir) + **dir * self.radius
    }

    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        match UnitVector::try_new(*dir, N::zero()) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => self.shape.local_support_point(dir),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        self.shape.local_support_point_toward(dir) + **dir * self.radius
    }
}

impl<'a, N: CcdReal, S: ?Sized + SupportMap<N> + Center<N>> Center<N>
    for DilatedShape<'a, N, S>
{
    #[inline]
    fn local_center(&self) -> Point<N> {
        self.shape.local_center()
    }
}
