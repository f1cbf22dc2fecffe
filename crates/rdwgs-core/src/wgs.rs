//! WGS84 to RD conversion.
//!
//! Inverse companion of [`crate::rd`], using its own fitted series in
//! `dp = 0.36 * (phi - PHI_0)` and `dl = 0.36 * (labda - LABDA_0)`.
//! Round-tripping through both series is good to well under a metre inside
//! the validity box.

use crate::code;
use crate::constants::{
    LABDA_0, LABDA_MAX, LABDA_MIN, PHI_0, PHI_MAX, PHI_MIN, WGS_SCALE, X0, Y0,
};
use crate::point::{GeographicPoint, Rd};
use crate::traits::CoordinateTransform;

/// Range check on its own: `-1` for longitude, `-2` for latitude, summed.
pub fn range_code(phi: f64, labda: f64) -> i32 {
    code::compose(
        code::outside(labda, LABDA_MIN, LABDA_MAX),
        code::outside(phi, PHI_MIN, PHI_MAX),
    )
}

/// Convert a WGS84 coordinate `(phi, labda)` [deg] to RD `(x, y)` [m].
///
/// Never fails; the RD coordinate is computed even when `error_code` is
/// nonzero.
pub fn convert(phi: f64, labda: f64) -> Rd {
    let error_code = range_code(phi, labda);

    let dp1 = WGS_SCALE * (phi - PHI_0);
    let dp2 = dp1 * dp1;
    let dp3 = dp2 * dp1;
    let dl1 = WGS_SCALE * (labda - LABDA_0);
    let dl2 = dl1 * dl1;
    let dl3 = dl2 * dl1;
    let dl4 = dl3 * dl1;

    let x = X0
        + (190094.945 * dl1 - 0.008 * dl2 - 32.391 * dl3)
        + dp1 * (-0.705 - 11832.228 * dl1 - 0.608 * dl3)
        + dp2 * (-114.221 * dl1 + 0.148 * dl3)
        + dp3 * (-2.340 * dl1);
    let y = Y0
        + (0.433 * dl1 + 3638.893 * dl2 + 0.092 * dl4)
        + dp1 * (309056.544 - 0.032 * dl1 - 157.984 * dl2 - 0.054 * dl4)
        + dp2 * (73.077 - 6.439 * dl2)
        + dp3 * (59.788);

    Rd { x, y, error_code }
}

/// Zero-sized marker for the WGS84 to RD direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wgs84ToRd;

impl CoordinateTransform for Wgs84ToRd {
    type Input = GeographicPoint;
    type Output = Rd;

    #[inline]
    fn apply(input: &GeographicPoint) -> Rd {
        convert(input.phi, input.labda)
    }
}
