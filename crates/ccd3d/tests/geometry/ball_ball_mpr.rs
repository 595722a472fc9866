use approx::assert_relative_eq;
use ccd3d::math::{Isometry, Point, Vector};
use ccd3d::query::{self, CcdConfig};
use ccd3d::shape::{Ball, Positioned};

#[test]
fn penetration_depth_along_axes() {
    let radius = 1.0;
    let ball = Ball::new(radius);
    let config = CcdConfig::default().with_max_iterations(100);
    let b1 = Positioned::new(&ball, Isometry::identity());

    for axis in [Vector::x(), Vector::y(), Vector::z()] {
        for dist in [0.0, 0.5, radius, 1.5, 1.9 * radius] {
            let b2 = Positioned::new(&ball, Isometry::new(axis * dist, Vector::zeros()));

            assert!(query::mpr_intersect(&b1, &b2, &config));
            let penetration = query::mpr_penetration(&b1, &b2, &config).unwrap();
            assert_relative_eq!(penetration.depth, 2.0 * radius - dist, epsilon = 1.0e-3);

            if dist > 0.0 {
                assert!(penetration.dir.dot(&axis) > 0.999);
            }
        }
    }
}

#[test]
fn penetration_depth_along_diagonal() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default();
    let b1 = Positioned::new(&ball, Isometry::identity());
    let axis = Vector::new(1.0, -2.0, 0.5).normalize();
    let b2 = Positioned::new(&ball, Isometry::new(axis * 1.2, Vector::zeros()));

    let penetration = query::mpr_penetration(&b1, &b2, &config).unwrap();
    assert_relative_eq!(penetration.depth, 0.8, epsilon = 1.0e-3);
    assert!(penetration.dir.dot(&axis) > 0.999);
    assert_relative_eq!(penetration.pos, Point::from(axis * 0.6), epsilon = 1.0e-3);
}

#[test]
fn no_false_positive_when_far_apart() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default();
    let b1 = Positioned::new(&ball, Isometry::identity());

    for pos in [
        Isometry::translation(10.0, 0.0, 0.0),
        Isometry::translation(0.0, 0.0, -10.0),
        Isometry::translation(6.0, 8.0, 0.0),
    ] {
        let b2 = Positioned::new(&ball, pos);
        assert!(!query::mpr_intersect(&b1, &b2, &config));
        assert!(query::mpr_penetration(&b1, &b2, &config).is_none());
    }
}

#[test]
fn touching_balls_have_zero_depth() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default();
    let b1 = Positioned::new(&ball, Isometry::identity());
    let b2 = Positioned::new(&ball, Isometry::translation(0.0, 2.0, 0.0));

    assert!(query::mpr_intersect(&b1, &b2, &config));
    let penetration = query::mpr_penetration(&b1, &b2, &config).unwrap();
    assert_eq!(penetration.depth, 0.0);
    assert_eq!(penetration.dir, Vector::zeros());
}
