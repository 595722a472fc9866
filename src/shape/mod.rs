//! Shapes supported by ccd3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_points::ConvexPoints;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::positioned::Positioned;
pub use self::primitive::Primitive;
pub use self::special_support_maps::{ConstantOrigin, ConstantPoint, DilatedShape};
#[doc(inline)]
pub use self::support_map::{Center, SupportMap};

mod ball;
mod capsule;
mod cone;
mod convex_points;
mod cuboid;
mod cylinder;
mod positioned;
mod primitive;
mod special_support_maps;
mod support_map;
