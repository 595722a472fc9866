//! Tolerance-based scalar and vector comparisons.
//!
//! Every predicate takes its epsilon explicitly. Queries pass
//! [`CcdConfig::eps`](crate::query::CcdConfig::eps), whose default depends on
//! the scalar type (see [`CcdReal::fuzzy_epsilon`]).

use crate::math::{CcdReal, Vector};
use core::cmp::Ordering;

/// Tests whether `val` is zero, i.e., whether `|val| < eps`.
#[inline]
pub fn is_zero<N: CcdReal>(val: N, eps: N) -> bool {
    val.abs() < eps
}

/// Tests whether `a` and `b` are approximately equal.
///
/// The comparison is absolute for values close to zero and relative to the
/// largest magnitude otherwise: it succeeds if `|a - b| < eps` or if
/// `|a - b| < eps * max(|a|, |b|)`.
#[inline]
pub fn is_equal<N: CcdReal>(a: N, b: N, eps: N) -> bool {
    let diff = (a - b).abs();

    if diff < eps {
        return true;
    }

    diff < eps * a.abs().max(b.abs())
}

/// Component-wise [`is_equal`] on two vectors.
#[inline]
pub fn is_equal_vec<N: CcdReal>(a: &Vector<N>, b: &Vector<N>, eps: N) -> bool {
    is_equal(a.x, b.x, eps) && is_equal(a.y, b.y, eps) && is_equal(a.z, b.z, eps)
}

/// The sign of `val`, where values satisfying [`is_zero`] are `Equal`.
#[inline]
pub fn sign<N: CcdReal>(val: N, eps: N) -> Ordering {
    if is_zero(val, eps) {
        Ordering::Equal
    } else if val < N::zero() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
