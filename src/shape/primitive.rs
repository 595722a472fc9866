use crate::math::{CcdReal, Point, UnitVector, Vector};
use crate::shape::{Ball, Capsule, Center, Cone, Cuboid, Cylinder, SupportMap};

/// Enum of the primitive shapes, for when the shape kind is only known at runtime.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Primitive<N: CcdReal> {
    /// A ball.
    Ball(Ball<N>),
    /// A box.
    Cuboid(Cuboid<N>),
    /// A capsule.
    Capsule(Capsule<N>),
    /// A cylinder along the `y` axis.
    Cylinder(Cylinder<N>),
    /// A cone along the `y` axis.
    Cone(Cone<N>),
}

impl<N: CcdReal> Primitive<N> {
    /// Gets a reference to the underlying support map.
    pub fn as_support_map(&self) -> &dyn SupportMap<N> {
        match self {
            Primitive::Ball(s) => s,
            Primitive::Cuboid(s) => s,
            Primitive::Capsule(s) => s,
            Primitive::Cylinder(s) => s,
            Primitive::Cone(s) => s,
        }
    }
}

impl<N: CcdReal> SupportMap<N> for Primitive<N> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        self.as_support_map().local_support_point(dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        self.as_support_map().local_support_point_toward(dir)
    }
}

impl<N: CcdReal> Center<N> for Primitive<N> {
    fn local_center(&self) -> Point<N> {
        match self {
            Primitive::Ball(s) => s.local_center(),
            Primitive::Cuboid(s) => s.local_center(),
            Primitive::Capsule(s) => s.local_center(),
            Primitive::Cylinder(s) => s.local_center(),
            Primitive::Cone(s) => s.local_center(),
        }
    }
}

impl<N: CcdReal> From<Ball<N>> for Primitive<N> {
    fn from(s: Ball<N>) -> Self {
        Primitive::Ball(s)
    }
}

impl<N: CcdReal> From<Cuboid<N>> for Primitive<N> {
    fn from(s: Cuboid<N>) -> Self {
        Primitive::Cuboid(s)
    }
}

impl<N: CcdReal> From<Capsule<N>> for Primitive<N> {
    fn from(s: Capsule<N>) -> Self {
        Primitive::Capsule(s)
    }
}

impl<N: CcdReal> From<Cylinder<N>> for Primitive<N> {
    fn from(s: Cylinder<N>) -> Self {
        Primitive::Cylinder(s)
    }
}

impl<N: CcdReal> From<Cone<N>> for Primitive<N> {
    fn from(s: Cone<N>) -> Self {
        Primitive::Cone(s)
    }
}
