//! The Minkowski Portal Refinement algorithm (also known as XenoCollide).

pub use self::mpr::{find_penetration, find_pos, mpr_intersect, mpr_penetration, Penetration};
pub use self::portal::{
    discover_portal, expand_portal, portal_dir, portal_reach_tolerance, refine_portal,
    PortalStatus,
};

mod mpr;
mod portal;
