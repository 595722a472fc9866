use ccd3d::math::{Isometry, Vector};
use ccd3d::query::{self, CcdConfig};
use ccd3d::shape::{Ball, Cuboid, Positioned};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn gjk_and_mpr_agree_with_ball_distance() {
    let mut rng = oorandom::Rand64::new(42);
    let config = CcdConfig::default();
    let mut tested = 0;

    while tested < 500 {
        let r1 = 0.2 + rng.rand_float() * 1.3;
        let r2 = 0.2 + rng.rand_float() * 1.3;
        let c1 = Vector::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0);
        let c2 = Vector::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0);

        let dist = (c2 - c1).norm();

        // Skip nearly touching pairs.
        if (dist - (r1 + r2)).abs() < 0.05 {
            continue;
        }

        let expected = dist < r1 + r2;
        let b1 = Ball::new(r1);
        let b2 = Ball::new(r2);
        let g1 = Positioned::new(&b1, Isometry::new(c1, Vector::zeros()));
        let g2 = Positioned::new(&b2, Isometry::new(c2, Vector::zeros()));

        assert_eq!(query::gjk_intersect(&g1, &g2, &config), expected);
        assert_eq!(query::gjk_intersect(&g2, &g1, &config), expected);
        assert_eq!(query::mpr_intersect(&g1, &g2, &config), expected);
        assert_eq!(query::mpr_intersect(&g2, &g1, &config), expected);

        if let Some(penetration) = query::mpr_penetration(&g1, &g2, &config) {
            assert!(expected);
            assert!((penetration.depth - (r1 + r2 - dist)).abs() < 1.0e-3);
        } else {
            assert!(!expected);
        }

        tested += 1;
    }
}

#[test]
fn gjk_is_symmetric_for_rotated_cuboids() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = CcdConfig::default();

    for _ in 0..300 {
        let he1 = Vector::new(
            rng.gen_range(0.2..1.5),
            rng.gen_range(0.2..1.5),
            rng.gen_range(0.2..1.5),
        );
        let he2 = Vector::new(
            rng.gen_range(0.2..1.5),
            rng.gen_range(0.2..1.5),
            rng.gen_range(0.2..1.5),
        );
        let c1 = Cuboid::new(he1);
        let c2 = Cuboid::new(he2);

        let pos1 = Isometry::new(
            Vector::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            ),
            Vector::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            ),
        );
        let pos2 = Isometry::new(
            Vector::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            ),
            Vector::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            ),
        );

        let g1 = Positioned::new(&c1, pos1);
        let g2 = Positioned::new(&c2, pos2);

        // Cuboids whose bounding spheres are disjoint never intersect.
        let bounding_dist = he1.norm() + he2.norm();
        let centers_dist = (pos2.translation.vector - pos1.translation.vector).norm();

        let res12 = query::gjk_intersect(&g1, &g2, &config);
        let res21 = query::gjk_intersect(&g2, &g1, &config);

        if centers_dist > bounding_dist {
            assert!(!res12 && !res21);
        }

        // Cuboids containing each other's center always intersect.
        if centers_dist < he1.min() || centers_dist < he2.min() {
            assert!(res12 && res21);
        }

        assert_eq!(res12, res21);
    }
}
