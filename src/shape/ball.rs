use crate::math::{CcdReal, Point, UnitVector, Vector};
use crate::shape::{Center, SupportMap};

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball<N: CcdReal> {
    /// The radius of the ball.
    pub radius: N,
}

impl<N: CcdReal> Ball<N> {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: N) -> Ball<N> {
        Ball { radius }
    }
}

impl<N: CcdReal> SupportMap<N> for Ball<N> {
    /// The point of the sphere along `dir`, or `(radius, 0, 0)` if `dir` is zero.
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        let dir = UnitVector::try_new(*dir, N::zero()).unwrap_or(Vector::x_axis());
        self.local_support_point_toward(&dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        Point::from(**dir * self.radius)
    }
}

impl<N: CcdReal> Center<N> for Ball<N> {
    #[inline]
    fn local_center(&self) -> Point<N> {
        Point::origin()
    }
}
