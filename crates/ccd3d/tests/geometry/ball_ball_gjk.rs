use ccd3d::math::{Isometry, Vector};
use ccd3d::query::{self, CcdConfig};
use ccd3d::shape::{Ball, Cuboid, Positioned};

fn balls_at(ball: &Ball<f64>, pos2: Isometry<f64>) -> (Positioned<'_, f64, Ball<f64>>, Positioned<'_, f64, Ball<f64>>) {
    (
        Positioned::new(ball, Isometry::identity()),
        Positioned::new(ball, pos2),
    )
}

#[test]
fn separated_balls() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default().with_max_iterations(100);

    for pos in [
        Isometry::translation(10.0, 0.0, 0.0),
        Isometry::translation(0.0, -10.0, 0.0),
        Isometry::translation(3.0, 3.0, 3.0),
        Isometry::translation(2.1, 0.0, 0.0),
    ] {
        let (b1, b2) = balls_at(&ball, pos);
        assert!(!query::gjk_intersect(&b1, &b2, &config));
        assert!(!query::gjk_intersect(&b2, &b1, &config));
    }
}

#[test]
fn overlapping_balls() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default().with_max_iterations(100);

    for pos in [
        Isometry::identity(),
        Isometry::translation(1.0, 0.0, 0.0),
        Isometry::translation(0.0, 1.9, 0.0),
        Isometry::translation(0.7, -0.7, 0.7),
    ] {
        let (b1, b2) = balls_at(&ball, pos);
        assert!(query::gjk_intersect(&b1, &b2, &config));
        assert!(query::gjk_intersect(&b2, &b1, &config));
    }
}

#[test]
fn touching_balls_intersect() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default().with_max_iterations(100);

    for pos in [
        Isometry::translation(2.0, 0.0, 0.0),
        Isometry::translation(0.0, 2.0, 0.0),
        Isometry::translation(0.0, 0.0, -2.0),
        Isometry::translation(1.2, 1.6, 0.0),
    ] {
        let (b1, b2) = balls_at(&ball, pos);
        assert!(query::gjk_intersect(&b1, &b2, &config));
        assert!(query::gjk_intersect(&b2, &b1, &config));
        assert!(query::mpr_intersect(&b1, &b2, &config));
    }
}

#[test]
fn touching_cuboids_intersect() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let config = CcdConfig::default();
    let c1 = Positioned::new(&cuboid, Isometry::identity());

    for pos in [
        Isometry::translation(0.0, 2.0, 0.0),
        Isometry::translation(0.0, 0.0, -2.0),
        Isometry::translation(0.3, 2.0, 0.4),
    ] {
        let c2 = Positioned::new(&cuboid, pos);
        assert!(query::gjk_intersect(&c1, &c2, &config));
        assert!(query::gjk_intersect(&c2, &c1, &config));
    }

    let c2 = Positioned::new(&cuboid, Isometry::translation(0.0, 2.001, 0.0));
    assert!(!query::gjk_intersect(&c1, &c2, &config));
    assert!(!query::gjk_intersect(&c2, &c1, &config));
}

#[test]
fn initial_direction_does_not_change_result() {
    let ball = Ball::new(1.0);
    let config = CcdConfig::default();
    let (near1, near2) = balls_at(&ball, Isometry::translation(1.2, 0.5, 0.0));
    let (far1, far2) = balls_at(&ball, Isometry::translation(1.2, 2.5, 0.0));

    for dir in [
        None,
        Some(Vector::zeros()),
        Some(Vector::y()),
        Some(Vector::new(-1.0, 2.0, -3.0)),
    ] {
        assert!(query::gjk_intersect_with_params(&near1, &near2, &config, dir));
        assert!(!query::gjk_intersect_with_params(&far1, &far2, &config, dir));
    }
}
