/// Error indicating that a geometric query is not supported by this crate.
///
/// The EPA-based entry points ([`gjk_penetration`](crate::query::gjk::gjk_penetration)
/// and [`gjk_separate`](crate::query::gjk::gjk_separate)) always return it: penetration
/// information is only available through MPR.
///
/// ```
/// use ccd3d::math::Isometry;
/// use ccd3d::query::{self, CcdConfig, Unsupported};
/// use ccd3d::shape::{Ball, Positioned};
///
/// let ball = Ball::new(1.0);
/// let b1 = Positioned::new(&ball, Isometry::identity());
/// let b2 = Positioned::new(&ball, Isometry::translation(0.5, 0.0, 0.0));
/// let config = CcdConfig::default();
///
/// match query::gjk::gjk_penetration(&b1, &b2, &config) {
///     Err(Unsupported) => {
///         // Fall back to MPR.
///         assert!(query::mpr_penetration(&b1, &b2, &config).is_some());
///     }
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("query not supported by this collision kernel")]
pub struct Unsupported;

/// Indicates an inconsistent [`CcdConfig`](crate::query::CcdConfig).
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvalidConfig {
    /// The iteration budget is zero, so no query could ever conclude.
    #[error("the maximum number of iterations must be at least 1")]
    ZeroIterations,
    /// A tolerance is NaN or infinite.
    #[error("the {0} tolerance is not finite")]
    NonFiniteTolerance(&'static str),
    /// A tolerance is negative.
    #[error("the {0} tolerance is negative")]
    NegativeTolerance(&'static str),
}
