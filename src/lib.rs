/*!
ccd3d
========

**ccd3d** is a narrow-phase collision detection kernel for convex shapes
written with the rust programming language.

It implements the Gilbert-Johnson-Keerthi (GJK) intersection test and the
Minkowski Portal Refinement (MPR, also known as XenoCollide) algorithm. Both
operate on any shape that exposes a support mapping through the
[`shape::SupportMap`] trait, and are generic over the scalar type (`f32` or
`f64`).

```
use ccd3d::math::{Isometry, Vector};
use ccd3d::query::{self, CcdConfig};
use ccd3d::shape::{Ball, Positioned};

let ball = Ball::new(1.0);
let b1 = Positioned::new(&ball, Isometry::identity());
let b2 = Positioned::new(&ball, Isometry::translation(1.5, 0.0, 0.0));
let config = CcdConfig::<f64>::default();

assert!(query::gjk_intersect(&b1, &b2, &config));

let penetration = query::mpr_penetration(&b1, &b2, &config).unwrap();
assert!((penetration.depth - 0.5).abs() < 1.0e-3);
assert!(penetration.dir.dot(&Vector::x()) > 0.99);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
