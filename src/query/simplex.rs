//! Fixed-capacity point set shared by GJK (as a simplex) and MPR (as a portal).

use crate::math::CcdReal;
use crate::query::SupportPoint;
use arrayvec::ArrayVec;

/// An ordered set of at most four support points.
///
/// GJK uses it as the current simplex, with the most recently added point
/// last. MPR uses it as the portal `[v0, v1, v2, v3]`, where `v0` is the
/// interior point of the Minkowski difference.
#[derive(Clone, Debug, PartialEq)]
pub struct Simplex<N: CcdReal> {
    points: ArrayVec<SupportPoint<N>, 4>,
}

/// The MPR portal.
pub type Portal<N> = Simplex<N>;

static_assertions::assert_impl_all!(Simplex<f32>: Send, Sync);
static_assertions::assert_impl_all!(Simplex<f64>: Send, Sync);
static_assertions::assert_impl_all!(SupportPoint<f64>: Copy, Send, Sync);

impl<N: CcdReal> Default for Simplex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: CcdReal> Simplex<N> {
    /// The maximum number of points of a simplex.
    pub const CAPACITY: usize = 4;

    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self {
            points: ArrayVec::new(),
        }
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all the points of this simplex.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear()
    }

    /// Appends a point.
    ///
    /// Returns `false`, leaving the simplex unchanged, if it already has four points.
    #[inline]
    pub fn push(&mut self, pt: SupportPoint<N>) -> bool {
        self.points.try_push(pt).is_ok()
    }

    /// Keeps only the first `len` points.
    ///
    /// Has no effect if `len` is greater than the current number of points.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.points.truncate(len)
    }

    /// The `i`-th point of this simplex.
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &SupportPoint<N> {
        &self.points[i]
    }

    /// Replaces the `i`-th point of this simplex.
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn set(&mut self, i: usize, pt: SupportPoint<N>) {
        self.points[i] = pt;
    }

    /// Swaps the `i`-th and `j`-th points.
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.points.swap(i, j)
    }

    /// The most recently added point, if any.
    #[inline]
    pub fn last(&self) -> Option<&SupportPoint<N>> {
        self.points.last()
    }

    /// The points of this simplex.
    #[inline]
    pub fn points(&self) -> &[SupportPoint<N>] {
        &self.points[..]
    }
}
