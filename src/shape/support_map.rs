//! Traits for support mapping based shapes.

use crate::math::{CcdReal, Isometry, Point, UnitVector, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// The GJK and MPR queries only ever see shapes through this trait: they
/// never need to know the actual geometry.
pub trait SupportMap<N: CcdReal> {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` does not need to be normalized and may be zero, in which case
    /// any point of the shape is a valid answer.
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<N>, dir: &Vector<N>) -> Point<N> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, transform: &Isometry<N>, dir: &UnitVector<N>) -> Point<N> {
        let local_dir = UnitVector::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}

/// Shapes with a known interior point, used to seed the MPR portal.
///
/// The returned point must lie strictly inside the shape (its centroid for
/// every shape of this crate).
pub trait Center<N: CcdReal> {
    /// The center of this shape, in its local coordinate frame.
    fn local_center(&self) -> Point<N>;

    /// The center of this shape transformed by `transform`.
    fn center(&self, transform: &Isometry<N>) -> Point<N> {
        transform * self.local_center()
    }
}

impl<'a, N: CcdReal, S: ?Sized + SupportMap<N>> SupportMap<N> for &'a S {
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        (**self).local_support_point(dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        (**self).local_support_point_toward(dir)
    }
}

impl<'a, N: CcdReal, S: ?Sized + Center<N>> Center<N> for &'a S {
    #[inline]
    fn local_center(&self) -> Point<N> {
        (**self).local_center()
    }
}
