//! Linear algebra type aliases and the scalar bound used throughout this crate.

use simba::scalar::RealField;

pub use na::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, UnitVector3, Vector3};

/// The point type.
pub type Point<N> = Point3<N>;

/// The vector type.
pub type Vector<N> = Vector3<N>;

/// The unit vector type.
pub type UnitVector<N> = UnitVector3<N>;

/// The transformation matrix type.
pub type Isometry<N> = Isometry3<N>;

/// The rotation type.
pub type Rotation<N> = UnitQuaternion<N>;

/// The translation type.
pub type Translation<N> = Translation3<N>;

/// Scalar types the collision kernel can be instantiated with.
///
/// Single and double precision need different thresholds for the fuzzy
/// comparisons performed by the GJK and MPR algorithms, so each scalar type
/// carries its own default. The threshold actually used by a query is the one
/// stored in [`CcdConfig::eps`](crate::query::CcdConfig::eps).
pub trait CcdReal: RealField + Copy {
    /// The default absolute/relative epsilon of [`is_zero`](crate::utils::is_zero)
    /// and [`is_equal`](crate::utils::is_equal).
    fn fuzzy_epsilon() -> Self;

    /// Offset applied to the MPR portal center when it coincides with the origin.
    #[inline]
    fn center_perturbation() -> Self {
        na::convert::<f64, Self>(1.0e-8)
    }
}

impl CcdReal for f32 {
    #[inline]
    fn fuzzy_epsilon() -> f32 {
        1.0e-6
    }
}

impl CcdReal for f64 {
    #[inline]
    fn fuzzy_epsilon() -> f64 {
        1.0e-10
    }
}
