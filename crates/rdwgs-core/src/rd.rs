//! RD to WGS84 conversion.
//!
//! Evaluates the fixed polynomial approximation in normalized offsets
//! `dx = (x - X0) * 1e-5`, `dy = (y - Y0) * 1e-5` from the reference point.
//! The series produce arc-seconds relative to `(PHI_0, LABDA_0)`.
//! Accuracy is only certified inside the RD validity box; outside it the
//! result is still computed and the error code is set.

use crate::code;
use crate::constants::{
    ARCSEC_PER_DEGREE, LABDA_0, PHI_0, RD_SCALE, X0, X_MAX, X_MIN, Y0, Y_MAX, Y_MIN,
};
use crate::point::{Geographic, RdPoint};
use crate::traits::CoordinateTransform;

/// Powers of the normalized offsets consumed by the two series.
#[derive(Debug, Clone, Copy)]
struct Offsets {
    dx1: f64,
    dx2: f64,
    dx3: f64,
    dx4: f64,
    dx5: f64,
    dy1: f64,
    dy2: f64,
    dy3: f64,
    dy4: f64,
}

impl Offsets {
    fn new(dx: f64, dy: f64) -> Self {
        let dx2 = dx * dx;
        let dx3 = dx2 * dx;
        let dx4 = dx3 * dx;
        let dy2 = dy * dy;
        let dy3 = dy2 * dy;
        Self {
            dx1: dx,
            dx2,
            dx3,
            dx4,
            dx5: dx4 * dx,
            dy1: dy,
            dy2,
            dy3,
            dy4: dy3 * dy,
        }
    }
}

/// Range check on its own: `-1` for x, `-2` for y, summed.
pub fn range_code(x: f64, y: f64) -> i32 {
    code::compose(
        code::outside(x, X_MIN, X_MAX),
        code::outside(y, Y_MIN, Y_MAX),
    )
}

/// Normalized offsets `(dx, dy)` of an RD coordinate from the reference point.
#[inline]
pub fn normalize(x: f64, y: f64) -> (f64, f64) {
    ((x - X0) * RD_SCALE, (y - Y0) * RD_SCALE)
}

/// Latitude series in arc-seconds relative to `PHI_0`.
pub fn latitude_series(dx: f64, dy: f64) -> f64 {
    latitude_arcsec(&Offsets::new(dx, dy))
}

/// Longitude series in arc-seconds relative to `LABDA_0`.
pub fn longitude_series(dx: f64, dy: f64) -> f64 {
    longitude_arcsec(&Offsets::new(dx, dy))
}

#[inline]
fn latitude_arcsec(o: &Offsets) -> f64 {
    3235.65389 * o.dy1 - 0.24750 * o.dy2 - 0.06550 * o.dy3
        + o.dx1 * (-0.00738 - 0.00012 * o.dy1)
        + o.dx2 * (-32.58297 - 0.84978 * o.dy1 - 0.01709 * o.dy2 - 0.00039 * o.dy3)
        + o.dx4 * (0.00530 + 0.00033 * o.dy1)
}

#[inline]
fn longitude_arcsec(o: &Offsets) -> f64 {
    0.01199 * o.dy1
        + 0.00022 * o.dy2
        + o.dx1
            * (5260.52916 + 105.94684 * o.dy1 + 2.45656 * o.dy2 + 0.05594 * o.dy3
                + 0.00128 * o.dy4)
        + o.dx2 * (-0.00022)
        + o.dx3 * (-0.81885 - 0.05607 * o.dy1 - 0.00256 * o.dy2)
        + o.dx5 * (0.00026)
}

/// Convert an RD coordinate `(x, y)` [m] to WGS84 `(phi, labda)` [deg].
///
/// Never fails. `error_code` is `0` inside the validity box, `-1` when x is
/// out of range, `-2` when y is out of range and `-3` when both are.
pub fn convert(x: f64, y: f64) -> Geographic {
    let error_code = range_code(x, y);

    let (dx, dy) = normalize(x, y);
    let o = Offsets::new(dx, dy);

    let phi = PHI_0 + latitude_arcsec(&o) / ARCSEC_PER_DEGREE;
    let labda = LABDA_0 + longitude_arcsec(&o) / ARCSEC_PER_DEGREE;

    Geographic {
        phi,
        labda,
        error_code,
    }
}

/// Zero-sized marker for the RD to WGS84 direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdToWgs84;

impl CoordinateTransform for RdToWgs84 {
    type Input = RdPoint;
    type Output = Geographic;

    #[inline]
    fn apply(input: &RdPoint) -> Geographic {
        convert(input.x, input.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert two f64 values are close.
    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    // -- Reference point --

    #[test]
    fn reference_point_maps_to_anchor_exactly() {
        let g = convert(155000.00, 463000.00);
        assert_eq!(g.phi, PHI_0);
        assert_eq!(g.labda, LABDA_0);
        assert_eq!(g.phi, 52.15517440);
        assert_eq!(g.labda, 5.38720621);
        assert_eq!(g.error_code, 0);
    }

    #[test]
    fn series_vanish_at_origin() {
        assert_eq!(latitude_series(0.0, 0.0), 0.0);
        assert_eq!(longitude_series(0.0, 0.0), 0.0);
    }

    // -- Known points --

    #[test]
    fn sample_point_inside_box() {
        let g = convert(195994.0, 447683.0);
        assert_eq!(g.error_code, 0);
        assert_approx(g.phi, 52.015989, 1e-5);
        assert_approx(g.labda, 5.984377, 1e-5);
    }

    #[test]
    fn amsterdam_dam_square() {
        let g = convert(121000.0, 487000.0);
        assert_eq!(g.error_code, 0);
        assert_approx(g.phi, 52.372, 1e-2);
        assert_approx(g.labda, 4.888, 1e-2);
    }

    #[test]
    fn box_corners_match_wgs_bounds() {
        // The WGS84 bounds are the images of the RD box corners.
        let sw = convert(-7000.0, 289000.0);
        assert_approx(sw.phi, 50.56846, 1e-4);
        let ne = convert(300000.0, 629000.0);
        assert_approx(ne.phi, 53.62702, 1e-4);
        assert_approx(ne.labda, 7.57893, 1e-4);
        let nw = convert(-7000.0, 629000.0);
        assert_approx(nw.labda, 2.93875, 1e-4);
    }

    // -- Range check --

    #[test]
    fn x_min_is_inclusive() {
        assert_eq!(convert(-7000.0, 463000.0).error_code, 0);
        assert_eq!(convert(-7001.0, 463000.0).error_code, -1);
    }

    #[test]
    fn bounds_are_inclusive_on_every_side() {
        assert_eq!(range_code(300000.0, 289000.0), 0);
        assert_eq!(range_code(300000.0, 629000.0), 0);
        assert_eq!(range_code(300000.1, 463000.0), -1);
        assert_eq!(range_code(155000.0, 288999.9), -2);
        assert_eq!(range_code(155000.0, 629000.1), -2);
    }

    #[test]
    fn y_out_of_range_still_computes() {
        let g = convert(195994.0, 1000000.0);
        assert_eq!(g.error_code, -2);
        assert!(!g.x_out_of_range());
        assert!(g.y_out_of_range());

        let (dx, dy) = normalize(195994.0, 1000000.0);
        assert_eq!(g.phi, PHI_0 + latitude_series(dx, dy) / 3600.0);
        assert_eq!(g.labda, LABDA_0 + longitude_series(dx, dy) / 3600.0);
        assert!(g.phi > 56.0, "unclamped latitude, got {}", g.phi);
    }

    #[test]
    fn both_out_of_range() {
        let g = convert(-1.0e6, -1.0e6);
        assert_eq!(g.error_code, -3);
        assert!(g.phi.is_finite());
        assert!(g.labda.is_finite());
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = convert(195994.0, 447683.0);
        let b = convert(195994.0, 447683.0);
        assert_eq!(a.phi.to_bits(), b.phi.to_bits());
        assert_eq!(a.labda.to_bits(), b.labda.to_bits());
        assert_eq!(a.error_code, b.error_code);
    }

    #[test]
    fn transform_trait_matches_convert() {
        let points = [RdPoint::new(195994.0, 447683.0), RdPoint::REFERENCE];
        let out = RdToWgs84::apply_all(&points);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], convert(195994.0, 447683.0));
        assert_eq!(out[1].point(), crate::point::GeographicPoint::REFERENCE);
    }
}
