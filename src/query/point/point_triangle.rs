use crate::math::{CcdReal, Point, Vector};
use crate::query::point::point_segment_distance_squared;

/// Computes the distance between `p` and the triangle `(v1, v2, v3)`.
///
/// Returns the distance and the vector from `p` to the closest point of the
/// triangle. The closest point is `v1 + s * (v2 - v1) + t * (v3 - v1)`, where
/// `(s, t)` minimizes the squared distance under `s >= 0`, `t >= 0` and
/// `s + t <= 1`. The `(s, t)` plane is split into seven regions around the
/// triangle, each clamping the unconstrained minimum differently.
///
/// If the triangle is degenerate, i.e., if the squared sine of the angle at
/// `v1` is not larger than `eps`, the closest point is searched on its three
/// edges instead. This test does not depend on the size of the triangle.
pub fn point_triangle_distance<N: CcdReal>(
    p: &Point<N>,
    v1: &Point<N>,
    v2: &Point<N>,
    v3: &Point<N>,
    eps: N,
) -> (N, Vector<N>) {
    let _0: N = N::zero();
    let _1: N = N::one();
    let _2: N = na::convert::<f64, N>(2.0);

    let diff = v1 - p;
    let e0 = v2 - v1;
    let e1 = v3 - v1;

    let a = e0.dot(&e0);
    let b = e0.dot(&e1);
    let c = e1.dot(&e1);
    let d = e0.dot(&diff);
    let e = e1.dot(&diff);

    let det = a * c - b * b;

    // det = a * c * sin²(angle at v1)
    if a <= _0 || c <= _0 || det <= eps * a * c {
        return degenerate_triangle_distance(p, v1, v2, v3, eps);
    }

    let mut s = b * e - c * d;
    let mut t = b * d - a * e;

    if s + t <= det {
        if s < _0 {
            if t < _0 {
                // Region 4.
                if d < _0 {
                    t = _0;
                    s = if -d >= a { _1 } else { -d / a };
                } else {
                    s = _0;
                    t = if e >= _0 {
                        _0
                    } else if -e >= c {
                        _1
                    } else {
                        -e / c
                    };
                }
            } else {
                // Region 3.
                s = _0;
                t = if e >= _0 {
                    _0
                } else if -e >= c {
                    _1
                } else {
                    -e / c
                };
            }
        } else if t < _0 {
            // Region 5.
            t = _0;
            s = if d >= _0 {
                _0
            } else if -d >= a {
                _1
            } else {
                -d / a
            };
        } else {
            // Region 0: the projection lies inside the triangle.
            let inv_det = _1 / det;
            s *= inv_det;
            t *= inv_det;
        }
    } else if s < _0 {
        // Region 2.
        let tmp0 = b + d;
        let tmp1 = c + e;

        if tmp1 > tmp0 {
            let numer = tmp1 - tmp0;
            let denom = a - b * _2 + c;
            s = if numer >= denom { _1 } else { numer / denom };
            t = _1 - s;
        } else {
            s = _0;
            t = if tmp1 <= _0 {
                _1
            } else if e >= _0 {
                _0
            } else {
                -e / c
            };
        }
    } else if t < _0 {
        // Region 6.
        let tmp0 = b + e;
        let tmp1 = a + d;

        if tmp1 > tmp0 {
            let numer = tmp1 - tmp0;
            let denom = a - b * _2 + c;
            t = if numer >= denom { _1 } else { numer / denom };
            s = _1 - t;
        } else {
            t = _0;
            s = if tmp1 <= _0 {
                _1
            } else if d >= _0 {
                _0
            } else {
                -d / a
            };
        }
    } else {
        // Region 1.
        let numer = c + e - b - d;

        if numer <= _0 {
            s = _0;
        } else {
            let denom = a - b * _2 + c;
            s = if numer >= denom { _1 } else { numer / denom };
        }

        t = _1 - s;
    }

    let witness = diff + e0 * s + e1 * t;
    (witness.norm(), witness)
}

fn degenerate_triangle_distance<N: CcdReal>(
    p: &Point<N>,
    v1: &Point<N>,
    v2: &Point<N>,
    v3: &Point<N>,
    eps: N,
) -> (N, Vector<N>) {
    let mut best = point_segment_distance_squared(p, v1, v2, eps);

    for (a, b) in [(v2, v3), (v3, v1)] {
        let candidate = point_segment_distance_squared(p, a, b, eps);

        if candidate.0 < best.0 {
            best = candidate;
        }
    }

    (best.0.sqrt(), best.1 - p)
}
