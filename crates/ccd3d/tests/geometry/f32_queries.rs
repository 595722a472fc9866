use approx::assert_relative_eq;
use ccd3d::math::{Isometry, Vector};
use ccd3d::query::{self, CcdConfig};
use ccd3d::shape::{Ball, Cuboid, Positioned};

#[test]
fn single_precision_ball_ball() {
    let ball = Ball::new(1.0f32);
    let config = CcdConfig::<f32>::default();
    let b1 = Positioned::new(&ball, Isometry::identity());

    let near = Positioned::new(&ball, Isometry::translation(1.5, 0.0, 0.0));
    assert!(query::gjk_intersect(&b1, &near, &config));
    let penetration = query::mpr_penetration(&b1, &near, &config).unwrap();
    assert_relative_eq!(penetration.depth, 0.5, epsilon = 1.0e-3);
    assert!(penetration.dir.dot(&Vector::x()) > 0.999);

    let far = Positioned::new(&ball, Isometry::translation(10.0, 0.0, 0.0));
    assert!(!query::gjk_intersect(&b1, &far, &config));
    assert!(!query::mpr_intersect(&b1, &far, &config));
}

#[test]
fn single_precision_cuboid_cuboid() {
    let cuboid = Cuboid::new(Vector::new(1.0f32, 1.0, 1.0));
    let config = CcdConfig::<f32>::default();
    let c1 = Positioned::new(&cuboid, Isometry::identity());

    let near = Positioned::new(&cuboid, Isometry::translation(1.5, 0.3, 0.2));
    assert!(query::gjk_intersect(&c1, &near, &config));
    assert!(query::mpr_intersect(&c1, &near, &config));

    let far = Positioned::new(&cuboid, Isometry::translation(3.0, 0.5, 0.2));
    assert!(!query::gjk_intersect(&c1, &far, &config));
    assert!(!query::mpr_intersect(&c1, &far, &config));
}
