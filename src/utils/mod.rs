//! Various unsorted geometrical and numerical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::fuzzy_eq::{is_equal, is_equal_vec, is_zero, sign};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::triple_cross::triple_cross;
pub use self::wops::WSign;

mod ccw_face_normal;
mod center;
mod fuzzy_eq;
mod point_cloud_support_point;
mod triple_cross;
mod wops;
