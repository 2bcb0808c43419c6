//! Geometric primitives shared by the solvers.
use crate::Error;
#[doc(no_inline)]
pub use nalgebra as na;

/// Euclidean distance between two points.
pub fn distance(p: &na::Point2<f64>, q: &na::Point2<f64>) -> f64 {
    (p - q).norm()
}

/// Unit vector pointing from `from` to `to`.
///
/// Returns [`Error::DegenerateSegment`] if the two points coincide.
///
/// ```
/// use five_bar::geo::{na, uvec};
///
/// let v = uvec(&na::Point2::new(1., 1.), &na::Point2::new(1., 3.)).unwrap();
/// assert_eq!(v, na::Vector2::new(0., 1.));
/// assert!(uvec(&na::Point2::origin(), &na::Point2::origin()).is_err());
/// ```
pub fn uvec(from: &na::Point2<f64>, to: &na::Point2<f64>) -> Result<na::Vector2<f64>, Error> {
    let d = distance(from, to);
    if d == 0. {
        return Err(Error::DegenerateSegment);
    }
    Ok((to - from) / d)
}

/// Rotate a vector by 90° counter-clockwise.
pub fn perpendicular(v: &na::Vector2<f64>) -> na::Vector2<f64> {
    na::Vector2::new(-v.y, v.x)
}

/// The point at distance `d` and angle `a` from `p`.
pub fn polar(p: &na::Point2<f64>, d: f64, a: f64) -> na::Point2<f64> {
    p + d * na::Vector2::new(a.cos(), a.sin())
}

/// Triangle inequality of two links spanning distance `d`.
pub fn reachable(l_a: f64, l_b: f64, d: f64) -> bool {
    (l_a - l_b).abs() <= d && d <= l_a + l_b
}

/// The angle between the adjacent side `adj` and the base `d` of a triangle,
/// opposite to the side `opp`. (law of cosines)
///
/// The cosine is clamped into `[-1, 1]`, so the result is always in `[0, π]`
/// for a [`reachable`] triangle.
pub fn included_angle(adj: f64, opp: f64, d: f64) -> f64 {
    let c = (adj * adj + d * d - opp * opp) / (2. * adj * d);
    c.clamp(-1., 1.).acos()
}

pub(crate) fn to_point(p: [f64; 2]) -> na::Point2<f64> {
    na::Point2::new(p[0], p[1])
}

pub(crate) fn to_coord(p: na::Point2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn distance_is_symmetric() {
        let p = na::Point2::new(1., 2.);
        let q = na::Point2::new(4., 6.);
        assert_eq!(distance(&p, &q), 5.);
        assert_eq!(distance(&q, &p), 5.);
        assert_eq!(distance(&p, &p), 0.);
    }

    #[test]
    fn uvec_normalized() {
        let v = uvec(&na::Point2::new(-1., -1.), &na::Point2::new(2., 3.)).unwrap();
        assert_abs_diff_eq!(v.norm(), 1., epsilon = 1e-12);
        assert_abs_diff_eq!(v, na::Vector2::new(0.6, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn uvec_degenerate() {
        let p = na::Point2::new(3., -7.);
        assert_eq!(uvec(&p, &p), Err(Error::DegenerateSegment));
    }

    #[test]
    fn perpendicular_ccw() {
        let v = na::Vector2::new(1., 0.);
        assert_eq!(perpendicular(&v), na::Vector2::new(0., 1.));
        let v = na::Vector2::new(0.6, -0.8);
        assert_eq!(v.dot(&perpendicular(&v)), 0.);
        // Four quarter turns go back to the start
        let w = perpendicular(&perpendicular(&perpendicular(&perpendicular(&v))));
        assert_eq!(w, v);
    }

    #[test]
    fn polar_point() {
        let p = polar(&na::Point2::new(1., 1.), 2., FRAC_PI_2);
        assert_abs_diff_eq!(p, na::Point2::new(1., 3.), epsilon = 1e-12);
    }

    #[test]
    fn triangle_inequality() {
        assert!(reachable(2., 2., 0.));
        assert!(reachable(2., 2., 4.));
        assert!(reachable(3., 1., 2.));
        assert!(!reachable(3., 1., 1.9));
        assert!(!reachable(2., 2., 4.1));
    }

    #[test]
    fn included_angle_bounds() {
        assert_eq!(included_angle(2., 2., 4.), 0.);
        assert_eq!(included_angle(3., 1., 2.), 0.);
        assert_eq!(included_angle(1., 3., 2.), PI);
        // Right triangle 3-4-5
        assert_abs_diff_eq!(included_angle(3., 4., 5.), 0.6f64.acos(), epsilon = 1e-12);
        // Out of the bounds is clamped
        assert_eq!(included_angle(1., 1., 3.), 0.);
        assert_eq!(included_angle(1., 5., 3.), PI);
    }
}
