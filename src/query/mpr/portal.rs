//! Construction and refinement of the MPR portal.
//!
//! The portal is a triangle `(v1, v2, v3)` of support points of the Minkowski
//! difference, together with an interior point `v0`. The ray from `v0`
//! through the origin crosses the triangle. Refinement pushes the triangle
//! outward along its normal until either the origin is found on the inner side
//! of the triangle, or the triangle reaches the boundary of the Minkowski
//! difference with the origin still outside.

use crate::math::{CcdReal, Vector};
use crate::query::{compute_support, CcdConfig, Portal, SupportPoint};
use crate::shape::{Center, SupportMap};
use crate::utils;

/// The outcome of the portal discovery.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortalStatus {
    /// The shapes do not intersect.
    Separated,
    /// A complete portal `[v0, v1, v2, v3]` was found and must be refined.
    Portal,
    /// The origin coincides with `v1`: the shapes are exactly touching.
    Touching,
    /// The origin lies on the segment `(v0, v1)`.
    OnSegment,
}

/// The outward unit normal of the portal triangle `(v1, v2, v3)`.
///
/// Returns `None` if the triangle is degenerate.
#[inline]
pub fn portal_dir<N: CcdReal>(portal: &Portal<N>) -> Option<Vector<N>> {
    utils::ccw_face_normal(
        [
            &portal.point(1).point,
            &portal.point(2).point,
            &portal.point(3).point,
        ],
        N::zero(),
    )
    .map(|n| n.into_inner())
}

#[inline]
fn portal_encapsulates_origin<N: CcdReal>(
    portal: &Portal<N>,
    dir: &Vector<N>,
    config: &CcdConfig<N>,
) -> bool {
    let dot = dir.dot(&portal.point(1).point.coords);
    config.is_zero(dot) || dot > N::zero()
}

#[inline]
fn portal_can_encapsulate_origin<N: CcdReal>(
    v4: &SupportPoint<N>,
    dir: &Vector<N>,
    config: &CcdConfig<N>,
) -> bool {
    let dot = v4.point.coords.dot(dir);
    config.is_zero(dot) || dot > N::zero()
}

/// Tests whether the support point `v4` found along the portal normal `dir` is
/// within `config.mpr_tolerance` of the portal.
pub fn portal_reach_tolerance<N: CcdReal>(
    portal: &Portal<N>,
    v4: &SupportPoint<N>,
    dir: &Vector<N>,
    config: &CcdConfig<N>,
) -> bool {
    let dv4 = v4.point.coords.dot(dir);
    let mut dot = dv4 - portal.point(1).point.coords.dot(dir);

    for i in 2..4 {
        dot = dot.min(dv4 - portal.point(i).point.coords.dot(dir));
    }

    config.is_equal(dot, config.mpr_tolerance) || dot < config.mpr_tolerance
}

/// Replaces one vertex of the portal triangle by `v4`.
///
/// `v4` splits the portal pyramid into three new ones. The kept triangle is
/// the one crossed by the ray from `v0` through the origin.
pub fn expand_portal<N: CcdReal>(portal: &mut Portal<N>, v4: SupportPoint<N>) {
    let v4v0 = v4.point.coords.cross(&portal.point(0).point.coords);

    if portal.point(1).point.coords.dot(&v4v0) > N::zero() {
        if portal.point(2).point.coords.dot(&v4v0) > N::zero() {
            portal.set(1, v4);
        } else {
            portal.set(3, v4);
        }
    } else if portal.point(3).point.coords.dot(&v4v0) > N::zero() {
        portal.set(2, v4);
    } else {
        portal.set(1, v4);
    }
}

/// Finds a portal crossed by the ray from the interior point `v0` toward the origin.
///
/// On return, `portal` holds `[v0, v1, v2, v3]` if the status is
/// [`PortalStatus::Portal`], and at least `[v0, v1]` if it is
/// [`PortalStatus::Touching`] or [`PortalStatus::OnSegment`].
pub fn discover_portal<N, G1, G2>(
    g1: &G1,
    g2: &G2,
    config: &CcdConfig<N>,
    portal: &mut Portal<N>,
) -> PortalStatus
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N> + Center<N>,
    G2: ?Sized + SupportMap<N> + Center<N>,
{
    portal.clear();

    let mut v0 = SupportPoint::new(g1.local_center(), g2.local_center());

    // The origin must not be the portal origin.
    if utils::is_equal_vec(&v0.point.coords, &Vector::zeros(), config.eps) {
        v0.translate_mut(&Vector::new(N::center_perturbation(), N::zero(), N::zero()));
    }

    let pushed = portal.push(v0);
    debug_assert!(pushed, "The MPR portal cannot be full at this point.");

    // v1: support point toward the origin.
    let dir = -v0.point.coords.normalize();
    let v1 = compute_support(g1, g2, &dir);
    let pushed = portal.push(v1);
    debug_assert!(pushed, "The MPR portal cannot be full at this point.");

    let dot = v1.point.coords.dot(&dir);
    if config.is_zero(dot) || dot < N::zero() {
        if utils::is_equal_vec(&v1.point.coords, &Vector::zeros(), config.eps) {
            // The origin lies on the boundary, right on v1.
            return PortalStatus::Touching;
        }

        return PortalStatus::Separated;
    }

    // v2: support point orthogonal to the segment (v0, v1).
    let dir = v0.point.coords.cross(&v1.point.coords);
    if config.is_zero(dir.norm_squared()) {
        return if utils::is_equal_vec(&v1.point.coords, &Vector::zeros(), config.eps) {
            PortalStatus::Touching
        } else {
            PortalStatus::OnSegment
        };
    }

    let dir = dir.normalize();
    let v2 = compute_support(g1, g2, &dir);
    let dot = v2.point.coords.dot(&dir);
    if config.is_zero(dot) || dot < N::zero() {
        return PortalStatus::Separated;
    }

    let pushed = portal.push(v2);
    debug_assert!(pushed, "The MPR portal cannot be full at this point.");

    // v3: search along the normal of (v0, v1, v2), oriented away from v0.
    let mut dir = match utils::ccw_face_normal([&v0.point, &v1.point, &v2.point], N::zero()) {
        Some(n) => n.into_inner(),
        None => {
            log::debug!("Hit unexpected state in MPR: degenerate initial portal.");
            return PortalStatus::Separated;
        }
    };

    if dir.dot(&v0.point.coords) > N::zero() {
        portal.swap(1, 2);
        dir = -dir;
    }

    for _ in 0..config.max_iterations {
        let v3 = compute_support(g1, g2, &dir);
        let dot = v3.point.coords.dot(&dir);
        if config.is_zero(dot) || dot < N::zero() {
            return PortalStatus::Separated;
        }

        let v0 = portal.point(0).point.coords;
        let p1 = portal.point(1).point.coords;
        let p2 = portal.point(2).point.coords;

        // Is the origin outside of (v1, v0, v3)?
        let dot = p1.cross(&v3.point.coords).dot(&v0);
        if dot < N::zero() && !config.is_zero(dot) {
            portal.set(2, v3);
        } else {
            // Is the origin outside of (v3, v0, v2)?
            let dot = v3.point.coords.cross(&p2).dot(&v0);
            if dot < N::zero() && !config.is_zero(dot) {
                portal.set(1, v3);
            } else {
                let pushed = portal.push(v3);
                debug_assert!(pushed, "The MPR portal cannot be full at this point.");
                return PortalStatus::Portal;
            }
        }

        dir = match utils::ccw_face_normal(
            [
                &portal.point(0).point,
                &portal.point(1).point,
                &portal.point(2).point,
            ],
            N::zero(),
        ) {
            Some(n) => n.into_inner(),
            None => {
                log::debug!("Hit unexpected state in MPR: degenerate portal during discovery.");
                return PortalStatus::Separated;
            }
        };
    }

    log::debug!(
        "Hit unexpected state in MPR: max iteration count ({}) reached during portal discovery.",
        config.max_iterations
    );
    PortalStatus::Separated
}

/// Refines a discovered portal until it either has the origin on its inner side or reaches the
/// boundary of the Minkowski difference.
///
/// Returns `true` iff the origin lies inside the Minkowski difference.
pub fn refine_portal<N, G1, G2>(
    g1: &G1,
    g2: &G2,
    config: &CcdConfig<N>,
    portal: &mut Portal<N>,
) -> bool
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    for _ in 0..config.max_iterations {
        let dir = match portal_dir(portal) {
            Some(dir) => dir,
            None => {
                log::debug!("Hit unexpected state in MPR: degenerate portal during refinement.");
                return false;
            }
        };

        if portal_encapsulates_origin(portal, &dir, config) {
            return true;
        }

        let v4 = compute_support(g1, g2, &dir);

        if !portal_can_encapsulate_origin(&v4, &dir, config)
            || portal_reach_tolerance(portal, &v4, &dir, config)
        {
            return false;
        }

        expand_portal(portal, v4);
    }

    log::debug!(
        "Hit unexpected state in MPR: max iteration count ({}) reached during portal refinement.",
        config.max_iterations
    );
    false
}
