//! Coordinate pairs and conversion results.
//!
//! Plain points carry only the two components. The result types pair a
//! point with the composite range error code of the conversion that produced
//! it, and derive [`ConversionBatch`] for column-wise storage of many results.

use rdwgs_macros::ConversionBatch;

use crate::code;
use crate::constants::{CODE_VALID, LABDA_0, PHI_0, X0, Y0};
use crate::error::{RdwgsError, Result};

/// A planar RD coordinate [m].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RdPoint {
    pub x: f64,
    pub y: f64,
}

/// A WGS84 geographic coordinate [deg].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPoint {
    pub phi: f64,
    pub labda: f64,
}

impl RdPoint {
    /// The reference point of the approximation.
    pub const REFERENCE: RdPoint = RdPoint { x: X0, y: Y0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from a `[x, y]` slice.
    pub fn from_slice(arr: &[f64]) -> Result<Self> {
        match arr {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(RdwgsError::WrongLength {
                what: "RD coordinate",
                expected: 2,
                got: arr.len(),
            }),
        }
    }
}

impl GeographicPoint {
    /// The reference point of the approximation.
    pub const REFERENCE: GeographicPoint = GeographicPoint {
        phi: PHI_0,
        labda: LABDA_0,
    };

    pub fn new(phi: f64, labda: f64) -> Self {
        Self { phi, labda }
    }

    /// Build from a `[phi, labda]` slice.
    pub fn from_slice(arr: &[f64]) -> Result<Self> {
        match arr {
            [phi, labda] => Ok(Self::new(*phi, *labda)),
            _ => Err(RdwgsError::WrongLength {
                what: "geographic coordinate",
                expected: 2,
                got: arr.len(),
            }),
        }
    }
}

/// Result of an RD to WGS84 conversion.
///
/// The coordinate is always computed, even when `error_code` is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, ConversionBatch)]
pub struct Geographic {
    pub phi: f64,
    pub labda: f64,
    pub error_code: i32,
}

impl Geographic {
    pub fn point(&self) -> GeographicPoint {
        GeographicPoint::new(self.phi, self.labda)
    }

    /// Input x was outside `[X_MIN, X_MAX]`.
    pub fn x_out_of_range(&self) -> bool {
        code::x_out(self.error_code)
    }

    /// Input y was outside `[Y_MIN, Y_MAX]`.
    pub fn y_out_of_range(&self) -> bool {
        code::y_out(self.error_code)
    }

    pub fn is_valid(&self) -> bool {
        self.error_code == CODE_VALID
    }
}

/// Result of a WGS84 to RD conversion.
///
/// `-1` flags the longitude, `-2` the latitude, mirroring the x/y axes.
#[derive(Debug, Clone, Copy, PartialEq, ConversionBatch)]
pub struct Rd {
    pub x: f64,
    pub y: f64,
    pub error_code: i32,
}

impl Rd {
    pub fn point(&self) -> RdPoint {
        RdPoint::new(self.x, self.y)
    }

    /// Input longitude was outside `[LABDA_MIN, LABDA_MAX]`.
    pub fn labda_out_of_range(&self) -> bool {
        code::x_out(self.error_code)
    }

    /// Input latitude was outside `[PHI_MIN, PHI_MAX]`.
    pub fn phi_out_of_range(&self) -> bool {
        code::y_out(self.error_code)
    }

    pub fn is_valid(&self) -> bool {
        self.error_code == CODE_VALID
    }
}
