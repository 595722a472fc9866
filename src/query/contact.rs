//! Conversion of MPR penetrations into contacts.

use crate::math::{CcdReal, Point, UnitVector, Vector};
use crate::query::{mpr_penetration, CcdConfig};
use crate::shape::{Center, SupportMap};

/// Geometric description of a contact.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact<N: CcdReal> {
    /// Position of the contact, midway between the two shapes.
    pub point: Point<N>,

    /// Contact normal, pointing from the first shape toward the second one.
    pub normal: UnitVector<N>,

    /// Penetration depth. Zero if the shapes are only touching.
    pub depth: N,
}

impl<N: CcdReal> Contact<N> {
    /// Creates a new contact.
    #[inline]
    pub fn new(point: Point<N>, normal: UnitVector<N>, depth: N) -> Self {
        Contact {
            point,
            normal,
            depth,
        }
    }

    /// Reverses the normal of this contact, as if both shapes were swapped.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Returns a new contact with the normal of `self` reversed.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}

/// Computes the contact between two convex shapes with MPR.
///
/// Returns `None` if the shapes do not intersect. The normal is the MPR
/// penetration direction. If that direction is zero (touching shapes), the
/// direction between the shape centers is used, and `+x` if the centers
/// coincide as well.
pub fn contact_mpr<N, G1, G2>(g1: &G1, g2: &G2, config: &CcdConfig<N>) -> Option<Contact<N>>
where
    N: CcdReal,
    G1: ?Sized + SupportMap<N> + Center<N>,
    G2: ?Sized + SupportMap<N> + Center<N>,
{
    let penetration = mpr_penetration(g1, g2, config)?;

    let normal = UnitVector::try_new(penetration.dir, config.eps)
        .or_else(|| UnitVector::try_new(g2.local_center() - g1.local_center(), config.eps))
        .unwrap_or_else(Vector::x_axis);

    Some(Contact::new(penetration.pos, normal, penetration.depth))
}
