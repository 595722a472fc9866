//! Miscellaneous component-wise operators.

use crate::math::{CcdReal, Vector};

/// Trait to copy the sign of each component of one scalar/vector to another.
pub trait WSign<Rhs>: Sized {
    /// Copy the sign of each component of `self` to the corresponding component of `to`.
    ///
    /// Zero components of `self` are treated as positive.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl<N: CcdReal> WSign<N> for N {
    #[inline]
    fn copy_sign_to(self, to: N) -> N {
        if self >= N::zero() {
            to.abs()
        } else {
            -to.abs()
        }
    }
}

impl<N: CcdReal> WSign<Vector<N>> for Vector<N> {
    #[inline]
    fn copy_sign_to(self, to: Vector<N>) -> Vector<N> {
        Vector::new(
            self.x.copy_sign_to(to.x),
            self.y.copy_sign_to(to.y),
            self.z.copy_sign_to(to.z),
        )
    }
}
