//! Numerical parameters shared by the GJK and MPR queries.

use crate::math::CcdReal;
use crate::query::InvalidConfig;
use crate::utils;

/// Tolerances and iteration budget of the collision queries.
///
/// A configuration is only read by the queries, so a single instance can be
/// shared by any number of concurrent calls.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CcdConfig<N: CcdReal> {
    /// Maximal number of iterations of every iterative loop of a query.
    ///
    /// A query that runs out of iterations reports the shapes as separated.
    pub max_iterations: usize,
    /// Boundary tolerance of the EPA algorithm.
    ///
    /// Kept for completeness: EPA queries are not supported.
    pub epa_tolerance: N,
    /// Boundary tolerance of the MPR algorithm.
    ///
    /// Portal refinement stops once the support point found past the portal is
    /// closer than this to the portal plane.
    pub mpr_tolerance: N,
    /// Distance below which GJK considers the shapes touching, hence intersecting.
    pub dist_tolerance: N,
    /// Epsilon of every fuzzy comparison performed by the queries.
    pub eps: N,
}

impl<N: CcdReal> Default for CcdConfig<N> {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            epa_tolerance: na::convert::<f64, N>(1.0e-4),
            mpr_tolerance: na::convert::<f64, N>(1.0e-4),
            dist_tolerance: na::convert::<f64, N>(1.0e-6),
            eps: N::fuzzy_epsilon(),
        }
    }
}

impl<N: CcdReal> CcdConfig<N> {
    /// Sets the maximal number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the EPA tolerance.
    #[must_use]
    pub fn with_epa_tolerance(mut self, epa_tolerance: N) -> Self {
        self.epa_tolerance = epa_tolerance;
        self
    }

    /// Sets the MPR tolerance.
    #[must_use]
    pub fn with_mpr_tolerance(mut self, mpr_tolerance: N) -> Self {
        self.mpr_tolerance = mpr_tolerance;
        self
    }

    /// Sets the distance tolerance.
    #[must_use]
    pub fn with_dist_tolerance(mut self, dist_tolerance: N) -> Self {
        self.dist_tolerance = dist_tolerance;
        self
    }

    /// Sets the epsilon of fuzzy comparisons.
    #[must_use]
    pub fn with_eps(mut self, eps: N) -> Self {
        self.eps = eps;
        self
    }

    /// Checks that this configuration can be used by a query.
    ///
    /// Queries never call this themselves.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.max_iterations == 0 {
            return Err(InvalidConfig::ZeroIterations);
        }

        let tolerances = [
            ("EPA", self.epa_tolerance),
            ("MPR", self.mpr_tolerance),
            ("distance", self.dist_tolerance),
            ("fuzzy comparison", self.eps),
        ];

        for (name, tol) in tolerances {
            if !tol.is_finite() {
                return Err(InvalidConfig::NonFiniteTolerance(name));
            }

            if tol < N::zero() {
                return Err(InvalidConfig::NegativeTolerance(name));
            }
        }

        Ok(())
    }

    /// [`utils::is_zero`] with this configuration's epsilon.
    #[inline]
    pub fn is_zero(&self, val: N) -> bool {
        utils::is_zero(val, self.eps)
    }

    /// [`utils::is_equal`] with this configuration's epsilon.
    #[inline]
    pub fn is_equal(&self, a: N, b: N) -> bool {
        utils::is_equal(a, b, self.eps)
    }
}
