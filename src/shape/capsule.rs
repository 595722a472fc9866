use crate::math::{CcdReal, Point, UnitVector, Vector};
use crate::shape::{Center, SupportMap};

#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule shape defined as a round segment.
pub struct Capsule<N: CcdReal> {
    /// The first endpoint of the capsule axis.
    pub a: Point<N>,
    /// The second endpoint of the capsule axis.
    pub b: Point<N>,
    /// The radius of the capsule.
    pub radius: N,
}

impl<N: CcdReal> Capsule<N> {
    /// Creates a new capsule aligned with the `x` axis and with the given half-height an radius.
    pub fn new_x(half_height: N, radius: N) -> Self {
        let b = Point::from(Vector::x() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule aligned with the `y` axis and with the given half-height an radius.
    pub fn new_y(half_height: N, radius: N) -> Self {
        let b = Point::from(Vector::y() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule aligned with the `z` axis and with the given half-height an radius.
    pub fn new_z(half_height: N, radius: N) -> Self {
        let b = Point::from(Vector::z() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    pub fn new(a: Point<N>, b: Point<N>, radius: N) -> Self {
        Self { a, b, radius }
    }

    /// The height of this capsule.
    pub fn height(&self) -> N {
        (self.b - self.a).norm()
    }

    /// The half-height of this capsule.
    pub fn half_height(&self) -> N {
        self.height() * na::convert::<f64, N>(0.5)
    }
}

impl<N: CcdReal> SupportMap<N> for Capsule<N> {
    fn local_support_point(&self, dir: &Vector<N>) -> Point<N> {
        let dir = UnitVector::try_new(*dir, N::zero()).unwrap_or(Vector::x_axis());
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &UnitVector<N>) -> Point<N> {
        if dir.dot(&self.a.coords) > dir.dot(&self.b.coords) {
            self.a + **dir * self.radius
        } else {
            self.b + **dir * self.radius
        }
    }
}

impl<N: CcdReal> Center<N> for Capsule<N> {
    fn local_center(&self) -> Point<N> {
        na::center(&self.a, &self.b)
    }
}
