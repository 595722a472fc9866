//! The Gilbert-Johnson-Keerthi intersection algorithm.
//!
//! GJK works on the Minkowski difference of the two shapes: they intersect iff
//! this difference contains the origin. The algorithm grows a simplex of
//! support points toward the origin, and after each step keeps only the
//! sub-simplex whose Voronoi region contains the origin. It stops as soon as
//! the simplex encloses the origin, or when a support point fails to pass the
//! origin (which proves the shapes are separated).
//!
//! Shapes closer than [`CcdConfig::dist_tolerance`] are considered touching,
//! and touching shapes are reported as intersecting.
//!
//! Only the boolean test is implemented. Penetration depth is computed by MPR
//! (see [`mpr_penetration`](crate::query::mpr_penetration)).

use crate::math::{CcdReal, Point, Vector};
use crate::query::point::{point_segment_distance_squared, point_triangle_distance};
use crate::query::{compute_support, CcdConfig, Penetration, Simplex, Unsupported};
use crate::shape::SupportMap;
use crate::utils;

/// The result of one simplex reduction step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexStatus<N: CcdReal> {
    /// The simplex contains the origin.
    Intersecting,
    /// The simplex collapsed and cannot be expanded any further.
    Degenerate,
    /// The simplex was reduced and must be grown along the given direction.
    Continue(Vector<N>),
}

#[inline]
fn default_first_dir<N: CcdReal>() -> Vector<N> {
    Vector::x()
}

/// Tests whether two convex shapes intersect.
///
/// Both shapes must be expressed in the same frame (see
/// [`Positioned`](crate::shape::Positioned)). Shapes that are touching, i.e.,
/// closer than `config.dist_tolerance`, are reported as intersecting.
pub fn gjk_intersect<N, G1, G2>(g1: &G1, g2: &G2, config: &CcdConfig<N>) -> bool
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    gjk_intersect_with_params(g1, g2, config, None)
}

/// Tests whether two convex shapes intersect, starting the search along `init_dir`.
///
/// A good initial direction (e.g. the separating axis found by a previous
/// call) speeds up the search. If `init_dir` is `None` or zero, the `+x` axis
/// is used instead.
pub fn gjk_intersect_with_params<N, G1, G2>(
    g1: &G1,
    g2: &G2,
    config: &CcdConfig<N>,
    init_dir: Option<Vector<N>>,
) -> bool
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    let mut dir = match init_dir {
        Some(dir) if !config.is_zero(dir.norm_squared()) => dir,
        _ => default_first_dir(),
    };

    let mut simplex = Simplex::new();
    let last = compute_support(g1, g2, &dir);

    if last.point.coords.norm() <= config.dist_tolerance {
        return true;
    }

    let pushed = simplex.push(last);
    debug_assert!(pushed, "The GJK simplex cannot be full at this point.");

    dir = -last.point.coords;

    for _ in 0..config.max_iterations {
        let last = compute_support(g1, g2, &dir);

        // The origin lies on the boundary of the Minkowski difference.
        if last.point.coords.norm() <= config.dist_tolerance {
            return true;
        }

        if last.point.coords.dot(&dir) < N::zero() {
            return false;
        }

        let pushed = simplex.push(last);
        debug_assert!(pushed, "The GJK simplex cannot be full at this point.");

        match do_simplex(&mut simplex, config) {
            SimplexStatus::Intersecting => return true,
            SimplexStatus::Degenerate => return false,
            SimplexStatus::Continue(new_dir) => dir = new_dir,
        }

        if simplex_distance_to_origin(&simplex, config) <= config.dist_tolerance {
            return true;
        }

        // Only the direction matters. Normalizing keeps it meaningful when
        // the simplex shrinks around a touching point.
        match dir.try_normalize(N::zero()) {
            Some(unit_dir) => dir = unit_dir,
            None => return false,
        }
    }

    log::debug!(
        "Hit unexpected state in GJK: max iteration count ({}) reached.",
        config.max_iterations
    );
    false
}

/// Distance from the origin to a non-empty reduced simplex (at most three points).
fn simplex_distance_to_origin<N: CcdReal>(simplex: &Simplex<N>, config: &CcdConfig<N>) -> N {
    let origin = Point::origin();

    match simplex.len() {
        1 => simplex.point(0).point.coords.norm(),
        2 => point_segment_distance_squared(
            &origin,
            &simplex.point(0).point,
            &simplex.point(1).point,
            config.eps,
        )
        .0
        .sqrt(),
        _ => {
            point_triangle_distance(
                &origin,
                &simplex.point(0).point,
                &simplex.point(1).point,
                &simplex.point(2).point,
                config.eps,
            )
            .0
        }
    }
}

/// Reduces `simplex` to the feature closest to the origin and computes the next search direction.
///
/// The most recently added point must be the last one of `simplex`.
pub fn do_simplex<N: CcdReal>(simplex: &mut Simplex<N>, config: &CcdConfig<N>) -> SimplexStatus<N> {
    match simplex.len() {
        2 => do_simplex2(simplex, config),
        3 => do_simplex3(simplex, config),
        4 => do_simplex4(simplex, config),
        _ => SimplexStatus::Degenerate,
    }
}

/// Segment case: `A` is the last point, `B` the first one.
pub fn do_simplex2<N: CcdReal>(simplex: &mut Simplex<N>, config: &CcdConfig<N>) -> SimplexStatus<N> {
    let a = *simplex.point(1);
    let b = *simplex.point(0);

    let ao = -a.point.coords;
    let ab = b - a;
    let dot = ab.dot(&ao);
    let ab_ao = ab.cross(&ao);

    // The origin lies on the segment.
    if config.is_zero(ab_ao.norm_squared()) && dot > N::zero() {
        return SimplexStatus::Intersecting;
    }

    if config.is_zero(dot) || dot < N::zero() {
        simplex.set(0, a);
        simplex.truncate(1);
        SimplexStatus::Continue(ao)
    } else {
        SimplexStatus::Continue(utils::triple_cross(&ab, &ao, &ab))
    }
}

#[inline]
fn is_zero_or_positive<N: CcdReal>(val: N, config: &CcdConfig<N>) -> bool {
    config.is_zero(val) || val > N::zero()
}

/// Triangle case: `A` is the last point, then `B`, then `C` (the first one).
pub fn do_simplex3<N: CcdReal>(simplex: &mut Simplex<N>, config: &CcdConfig<N>) -> SimplexStatus<N> {
    let a = *simplex.point(2);
    let b = *simplex.point(1);
    let c = *simplex.point(0);

    if utils::is_equal_vec(&a.point.coords, &b.point.coords, config.eps)
        || utils::is_equal_vec(&a.point.coords, &c.point.coords, config.eps)
    {
        log::debug!("Hit unexpected state in GJK: degenerate triangle simplex.");
        return SimplexStatus::Degenerate;
    }

    let ao = -a.point.coords;
    let ab = b - a;
    let ac = c - a;
    let abc = ab.cross(&ac);

    if is_zero_or_positive(abc.cross(&ac).dot(&ao), config) {
        if is_zero_or_positive(ac.dot(&ao), config) {
            // Edge AC.
            simplex.set(1, a);
            simplex.truncate(2);
            SimplexStatus::Continue(utils::triple_cross(&ac, &ao, &ac))
        } else if is_zero_or_positive(ab.dot(&ao), config) {
            // Edge AB.
            simplex.set(0, b);
            simplex.set(1, a);
            simplex.truncate(2);
            SimplexStatus::Continue(utils::triple_cross(&ab, &ao, &ab))
        } else {
            simplex.set(0, a);
            simplex.truncate(1);
            SimplexStatus::Continue(ao)
        }
    } else if is_zero_or_positive(ab.cross(&abc).dot(&ao), config) {
        if is_zero_or_positive(ab.dot(&ao), config) {
            // Edge AB.
            simplex.set(0, b);
            simplex.set(1, a);
            simplex.truncate(2);
            SimplexStatus::Continue(utils::triple_cross(&ab, &ao, &ab))
        } else {
            simplex.set(0, a);
            simplex.truncate(1);
            SimplexStatus::Continue(ao)
        }
    } else if is_zero_or_positive(abc.dot(&ao), config) {
        // Above the triangle.
        SimplexStatus::Continue(abc)
    } else {
        // Below the triangle: flip the winding so the next tetrahedron is consistent.
        simplex.swap(0, 1);
        SimplexStatus::Continue(-abc)
    }
}

/// Tetrahedron case: `A` is the last point, then `B`, `C`, and `D` (the first one).
pub fn do_simplex4<N: CcdReal>(simplex: &mut Simplex<N>, config: &CcdConfig<N>) -> SimplexStatus<N> {
    let a = *simplex.point(3);
    let b = *simplex.point(2);
    let c = *simplex.point(1);
    let d = *simplex.point(0);

    let ao = -a.point.coords;
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;

    let abc = ab.cross(&ac);
    let acd = ac.cross(&ad);
    let adb = ad.cross(&ab);

    let eps = config.eps;
    let b_on_acd = utils::sign(acd.dot(&ab), eps);
    let c_on_adb = utils::sign(adb.dot(&ac), eps);
    let d_on_abc = utils::sign(abc.dot(&ad), eps);

    // Is the origin on the same side of each face as the opposite vertex?
    let ab_o = utils::sign(acd.dot(&ao), eps) == b_on_acd;
    let ac_o = utils::sign(adb.dot(&ao), eps) == c_on_adb;
    let ad_o = utils::sign(abc.dot(&ao), eps) == d_on_abc;

    if ab_o && ac_o && ad_o {
        return SimplexStatus::Intersecting;
    }

    if !ab_o {
        // Face ACD: [D, C, A].
        simplex.set(2, a);
    } else if !ac_o {
        // Face ADB: [B, D, A].
        simplex.set(0, b);
        simplex.set(1, d);
        simplex.set(2, a);
    } else {
        // Face ABC: [C, B, A].
        simplex.set(0, c);
        simplex.set(1, b);
        simplex.set(2, a);
    }

    simplex.truncate(3);
    do_simplex3(simplex, config)
}

/// Penetration depth computation with GJK and EPA.
///
/// EPA is not implemented: this always returns `Err(Unsupported)`. Use
/// [`mpr_penetration`](crate::query::mpr_penetration) instead.
pub fn gjk_penetration<N, G1, G2>(
    _g1: &G1,
    _g2: &G2,
    _config: &CcdConfig<N>,
) -> Result<Option<Penetration<N>>, Unsupported>
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    Err(Unsupported)
}

/// Computes the translation of the second shape that separates it from the first one.
///
/// This relies on EPA, which is not implemented: this always returns `Err(Unsupported)`.
pub fn gjk_separate<N, G1, G2>(
    _g1: &G1,
    _g2: &G2,
    _config: &CcdConfig<N>,
) -> Result<Option<Vector<N>>, Unsupported>
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    Err(Unsupported)
}
