//! Intersection and penetration queries based on MPR.

use crate::math::{CcdReal, Point, Vector};
use crate::query::point::point_triangle_distance;
use crate::query::{
    compute_support, discover_portal, expand_portal, portal_dir, portal_reach_tolerance,
    refine_portal, CcdConfig, Portal, PortalStatus,
};
use crate::shape::{Center, SupportMap};

/// The penetration of two intersecting shapes, as computed by MPR.
///
/// Translating the second shape by `depth * dir` brings the two shapes into
/// contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration<N: CcdReal> {
    /// The penetration depth.
    pub depth: N,
    /// The unit penetration direction, or zero if the shapes are only touching.
    pub dir: Vector<N>,
    /// A point between the two shapes, midway between the contact points on each shape.
    pub pos: Point<N>,
}

/// Tests whether two convex shapes intersect, using MPR.
///
/// Both shapes must be expressed in the same frame. Unlike
/// [`gjk_intersect`](crate::query::gjk_intersect), this requires the shapes
/// to provide an interior point through [`Center`].
pub fn mpr_intersect<N, G1, G2>(g1: &G1, g2: &G2, config: &CcdConfig<N>) -> bool
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N> + Center<N>,
    G2: ?Sized + SupportMap<N> + Center<N>,
{
    let mut portal = Portal::new();

    match discover_portal(g1, g2, config, &mut portal) {
        PortalStatus::Separated => false,
        PortalStatus::Touching | PortalStatus::OnSegment => true,
        PortalStatus::Portal => refine_portal(g1, g2, config, &mut portal),
    }
}

/// Computes the penetration depth, direction, and contact position of two convex shapes.
///
/// Returns `None` if the shapes do not intersect.
pub fn mpr_penetration<N, G1, G2>(
    g1: &G1,
    g2: &G2,
    config: &CcdConfig<N>,
) -> Option<Penetration<N>>
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N> + Center<N>,
    G2: ?Sized + SupportMap<N> + Center<N>,
{
    let mut portal = Portal::new();

    match discover_portal(g1, g2, config, &mut portal) {
        PortalStatus::Separated => None,
        PortalStatus::Touching => Some(Penetration {
            depth: N::zero(),
            dir: Vector::zeros(),
            pos: portal.point(1).witness_midpoint(),
        }),
        PortalStatus::OnSegment => {
            let v1 = portal.point(1);
            let mut dir = v1.point.coords;
            let depth = dir.norm();

            if depth > N::zero() {
                dir /= depth;
            }

            Some(Penetration {
                depth,
                dir,
                pos: v1.witness_midpoint(),
            })
        }
        PortalStatus::Portal => {
            if refine_portal(g1, g2, config, &mut portal) {
                Some(find_penetration(g1, g2, config, &mut portal))
            } else {
                None
            }
        }
    }
}

/// Pushes a refined portal to the boundary of the Minkowski difference and extracts the
/// penetration from it.
///
/// The portal must have been refined with [`refine_portal`] beforehand.
pub fn find_penetration<N, G1, G2>(
    g1: &G1,
    g2: &G2,
    config: &CcdConfig<N>,
    portal: &mut Portal<N>,
) -> Penetration<N>
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N>,
    G2: ?Sized + SupportMap<N>,
{
    let mut iterations = 0;

    loop {
        let dir = match portal_dir(portal) {
            Some(dir) => dir,
            None => {
                log::debug!("Hit unexpected state in MPR: degenerate portal during penetration.");
                break;
            }
        };

        let v4 = compute_support(g1, g2, &dir);

        if portal_reach_tolerance(portal, &v4, &dir, config) {
            break;
        }

        if iterations > config.max_iterations {
            log::debug!(
                "Hit unexpected state in MPR: max iteration count ({}) reached during penetration.",
                config.max_iterations
            );
            break;
        }

        expand_portal(portal, v4);
        iterations += 1;
    }

    let (depth, witness) = point_triangle_distance(
        &Point::origin(),
        &portal.point(1).point,
        &portal.point(2).point,
        &portal.point(3).point,
        config.eps,
    );

    let dir = if config.is_zero(depth) {
        Vector::zeros()
    } else {
        witness / depth
    };

    Penetration {
        depth,
        dir,
        pos: find_pos(portal, config),
    }
}

/// Estimates the contact position from the portal.
///
/// The origin is expressed in barycentric coordinates of the tetrahedron
/// `(v0, v1, v2, v3)`, or of the triangle `(v1, v2, v3)` if the tetrahedron
/// weights are not positive. The same weights applied to the witness points on
/// each shape give one contact point per shape, and the result is their
/// midpoint.
pub fn find_pos<N: CcdReal>(portal: &Portal<N>, config: &CcdConfig<N>) -> Point<N> {
    let p0 = portal.point(0).point.coords;
    let p1 = portal.point(1).point.coords;
    let p2 = portal.point(2).point.coords;
    let p3 = portal.point(3).point.coords;

    let mut b = [
        p1.cross(&p2).dot(&p3),
        p3.cross(&p2).dot(&p0),
        p0.cross(&p1).dot(&p3),
        p2.cross(&p1).dot(&p0),
    ];
    let mut sum = b[0] + b[1] + b[2] + b[3];

    if config.is_zero(sum) || sum < N::zero() {
        let dir = portal_dir(portal).unwrap_or_else(Vector::zeros);

        b[0] = N::zero();
        b[1] = p2.cross(&p3).dot(&dir);
        b[2] = p3.cross(&p1).dot(&dir);
        b[3] = p1.cross(&p2).dot(&dir);
        sum = b[1] + b[2] + b[3];
    }

    if config.is_zero(sum) {
        log::debug!("Hit unexpected state in MPR: degenerate portal when computing the contact position.");
        let mut res = Vector::zeros();
        for i in 1..4 {
            res += portal.point(i).witness_midpoint().coords;
        }
        return Point::from(res / na::convert::<f64, N>(3.0));
    }

    let mut pos1 = Vector::zeros();
    let mut pos2 = Vector::zeros();

    for (i, w) in b.iter().enumerate() {
        pos1 += portal.point(i).orig1.coords * *w;
        pos2 += portal.point(i).orig2.coords * *w;
    }

    Point::from((pos1 + pos2) / (sum * na::convert::<f64, N>(2.0)))
}
