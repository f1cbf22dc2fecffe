//! RD/WGS84 approximation constants.
//!
//! Centralises every fixed value of the polynomial approximation: the
//! reference point in both systems, the validity box and the error codes.
//! Coefficients of the series themselves live next to the series in
//! `rd` and `wgs`.

// -- Reference point --

/// RD easting of the reference point (Amersfoort) [m].
pub const X0: f64 = 155000.00;

/// RD northing of the reference point [m].
pub const Y0: f64 = 463000.00;

/// WGS84 latitude of the reference point [deg].
pub const PHI_0: f64 = 52.15517440;

/// WGS84 longitude of the reference point [deg].
pub const LABDA_0: f64 = 5.38720621;

// -- Validity box, RD side --

pub const X_MIN: f64 = -7000.00;
pub const X_MAX: f64 = 300000.00;
pub const Y_MIN: f64 = 289000.00;
pub const Y_MAX: f64 = 629000.00;

// -- Validity box, WGS84 side --
//
// Only the inverse conversion checks its input against these. The forward
// conversion never clamps or validates its output.

pub const PHI_MIN: f64 = 50.56846;
pub const PHI_MAX: f64 = 53.62702;
pub const LABDA_MIN: f64 = 2.93875;
pub const LABDA_MAX: f64 = 7.57893;

// -- Scaling --

/// Metres to normalized RD offset (units of 100 km).
pub const RD_SCALE: f64 = 1e-5;

/// Degrees to normalized WGS84 offset (units of 10^4 arc-seconds).
pub const WGS_SCALE: f64 = 0.3600;

/// The forward series yields arc-seconds.
pub const ARCSEC_PER_DEGREE: f64 = 3600.00;

// -- Error codes --

/// Both axes inside the validity box.
pub const CODE_VALID: i32 = 0;

/// First axis (RD x / WGS84 longitude) out of range.
pub const CODE_X_OUT: i32 = -1;

/// Second axis (RD y / WGS84 latitude) out of range.
pub const CODE_Y_OUT: i32 = -2;

/// Both axes out of range.
pub const CODE_BOTH_OUT: i32 = CODE_X_OUT + CODE_Y_OUT;
