use approx::assert_relative_eq;
use ccd3d::math::{Isometry, Point, Vector};
use ccd3d::query::{self, CcdConfig};
use ccd3d::shape::{
    Ball, Capsule, Center, Cone, ConvexPoints, Cuboid, Cylinder, Positioned, Primitive, SupportMap,
};
use core::f64::consts::FRAC_PI_4;

fn translated(pos: &Isometry<f64>, shift: Vector<f64>) -> Isometry<f64> {
    Isometry::from_parts((pos.translation.vector + shift).into(), pos.rotation)
}

fn check_pair<S1, S2>(s1: &S1, pos1: Isometry<f64>, s2: &S2, pos2: Isometry<f64>, expected: bool)
where
    S1: ?Sized + SupportMap<f64> + Center<f64>,
    S2: ?Sized + SupportMap<f64> + Center<f64>,
{
    let config = CcdConfig::default();
    let g1 = Positioned::new(s1, pos1);
    let g2 = Positioned::new(s2, pos2);

    assert_eq!(query::gjk_intersect(&g1, &g2, &config), expected);
    assert_eq!(query::gjk_intersect(&g2, &g1, &config), expected);
    assert_eq!(query::mpr_intersect(&g1, &g2, &config), expected);
    assert_eq!(query::mpr_intersect(&g2, &g1, &config), expected);

    let penetration = query::mpr_penetration(&g1, &g2, &config);
    assert_eq!(penetration.is_some(), expected);

    if let Some(penetration) = penetration {
        assert!(penetration.depth >= 0.0);

        if penetration.depth > 0.1 {
            assert_relative_eq!(penetration.dir.norm(), 1.0, epsilon = 1.0e-6);

            // Moving the second shape a bit more than the penetration depth separates the shapes.
            let out = Positioned::new(
                s2,
                translated(&pos2, penetration.dir * (penetration.depth + 0.05)),
            );
            assert!(!query::gjk_intersect(&g1, &out, &config));
            assert!(!query::mpr_intersect(&g1, &out, &config));

            // Moving it a bit less does not.
            let inside = Positioned::new(
                s2,
                translated(&pos2, penetration.dir * (penetration.depth - 0.05)),
            );
            assert!(query::gjk_intersect(&g1, &inside, &config));
            assert!(query::mpr_intersect(&g1, &inside, &config));
        }
    }
}

#[test]
fn coincident_primitives_intersect() {
    let unit_cube = Primitive::from(Cuboid::new(Vector::new(1.0, 1.0, 1.0)));
    let ball = Primitive::from(Ball::new(1.0));
    let capsule = Primitive::from(Capsule::new_z(1.0, 0.5));
    let id = Isometry::identity();

    check_pair(&unit_cube, id, &unit_cube, id, true);
    check_pair(&ball, id, &unit_cube, id, true);
    check_pair(&capsule, id, &capsule, id, true);
}

#[test]
fn cuboid_cuboid() {
    let cuboid = Primitive::from(Cuboid::new(Vector::new(1.0, 1.0, 1.0)));
    let id = Isometry::identity();

    check_pair(&cuboid, id, &cuboid, Isometry::translation(1.5, 0.3, 0.2), true);
    check_pair(&cuboid, id, &cuboid, Isometry::translation(-0.4, 1.7, 0.1), true);
    check_pair(&cuboid, id, &cuboid, Isometry::translation(3.0, 0.5, 0.2), false);
    check_pair(&cuboid, id, &cuboid, Isometry::translation(2.1, 2.1, 0.0), false);

    // A corner of the rotated cuboid reaches 2.3 - sqrt(2) ≈ 0.886 along x.
    let rot = Vector::z() * FRAC_PI_4;
    check_pair(&cuboid, id, &cuboid, Isometry::new(Vector::new(2.3, 0.0, 0.0), rot), true);
    check_pair(&cuboid, id, &cuboid, Isometry::new(Vector::new(2.5, 0.0, 0.0), rot), false);
}

#[test]
fn ball_cuboid() {
    let ball = Primitive::from(Ball::new(0.5));
    let cuboid = Primitive::from(Cuboid::new(Vector::new(1.0, 2.0, 3.0)));
    let id = Isometry::identity();

    check_pair(&ball, Isometry::translation(1.3, 0.0, 0.0), &cuboid, id, true);
    check_pair(&ball, Isometry::translation(0.0, 0.0, 3.6), &cuboid, id, false);
    // Near a corner, but outside of the rounded region.
    check_pair(&ball, Isometry::translation(1.4, 2.4, 0.0), &cuboid, id, false);
    check_pair(&ball, Isometry::translation(1.3, 2.3, 0.0), &cuboid, id, true);
}

#[test]
fn capsule_pairs() {
    let capsule_z = Primitive::from(Capsule::new_z(1.0, 0.5));
    let capsule_x = Primitive::from(Capsule::new_x(1.0, 0.5));
    let ball = Primitive::from(Ball::new(0.5));
    let id = Isometry::identity();

    check_pair(&capsule_z, id, &capsule_x, Isometry::translation(0.0, 0.8, 0.0), true);
    check_pair(&capsule_z, id, &capsule_x, Isometry::translation(0.0, 1.2, 0.0), false);
    check_pair(&capsule_z, id, &ball, Isometry::translation(0.0, 0.0, 1.2), true);
    check_pair(&capsule_z, id, &ball, Isometry::translation(1.2, 0.0, 0.0), false);
}

#[test]
fn cylinder_cone() {
    let cylinder = Primitive::from(Cylinder::new(1.0, 1.0));
    let cone = Primitive::from(Cone::new(1.0, 1.0));
    let id = Isometry::identity();

    check_pair(&cylinder, id, &cone, Isometry::translation(0.0, 1.8, 0.0), true);
    check_pair(&cylinder, id, &cone, Isometry::translation(1.5, 1.8, 0.0), true);
    check_pair(&cylinder, id, &cone, Isometry::translation(0.0, 2.5, 0.0), false);
    check_pair(&cylinder, id, &cone, Isometry::translation(2.5, 1.8, 0.0), false);
}

#[test]
fn convex_points_cuboid() {
    let pts = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let tetrahedron = ConvexPoints::new(&pts).unwrap();
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let id = Isometry::identity();

    check_pair(&tetrahedron, Isometry::translation(0.8, 0.1, 0.1), &cuboid, id, true);
    check_pair(&tetrahedron, Isometry::translation(1.2, 0.0, 0.0), &cuboid, id, false);
}
