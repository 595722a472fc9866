//! Non-persistent collision queries between convex shapes.
//!
//! All queries operate on two shapes implementing [`SupportMap`](crate::shape::SupportMap),
//! expressed in the same frame, and are parameterized by a [`CcdConfig`]:
//!
//! * [`gjk_intersect()`] tests whether two shapes intersect, with GJK.
//! * [`mpr_intersect()`] tests whether two shapes intersect, with MPR.
//! * [`mpr_penetration()`] computes the penetration depth, direction and position of two
//!   intersecting shapes, with MPR.
//! * [`contact_mpr()`] turns the MPR penetration into a contact with a unit normal.
//!
//! The MPR queries also need an interior point of each shape, given by
//! [`Center`](crate::shape::Center).

pub use self::ccd_config::CcdConfig;
pub use self::contact::{contact_mpr, Contact};
pub use self::error::{InvalidConfig, Unsupported};
pub use self::gjk::{gjk_intersect, gjk_intersect_with_params};
pub use self::mpr::{
    discover_portal, expand_portal, find_penetration, find_pos, mpr_intersect, mpr_penetration,
    portal_dir, portal_reach_tolerance, refine_portal, Penetration, PortalStatus,
};
pub use self::point::{point_segment_distance_squared, point_triangle_distance};
pub use self::simplex::{Portal, Simplex};
pub use self::support_point::{compute_support, SupportPoint};

mod ccd_config;
mod contact;
mod error;
pub mod gjk;
pub mod mpr;
pub mod point;
mod simplex;
mod support_point;
