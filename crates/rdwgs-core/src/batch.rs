//! Column-oriented batch conversion.
//!
//! Each element of a batch is exactly the scalar conversion of the
//! corresponding input element. Results are stored column-wise so they can be
//! handed to numpy without reshaping.

use tracing::debug;

use crate::error::{RdwgsError, Result};
use crate::{rd, wgs};

pub use crate::point::{GeographicBatch, RdBatch};

fn check_lengths(
    left_name: &'static str,
    left: &[f64],
    right_name: &'static str,
    right: &[f64],
) -> Result<()> {
    if left.len() != right.len() {
        return Err(RdwgsError::LengthMismatch {
            left_name,
            left: left.len(),
            right_name,
            right: right.len(),
        });
    }
    Ok(())
}

/// Convert parallel `x` and `y` slices from RD to WGS84.
pub fn rd_to_wgs84(x: &[f64], y: &[f64]) -> Result<GeographicBatch> {
    check_lengths("x", x, "y", y)?;

    let batch: GeographicBatch = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| rd::convert(xi, yi))
        .collect();

    debug!(
        points = batch.len(),
        out_of_range = batch.out_of_range_count(),
        "converted RD batch to WGS84"
    );
    Ok(batch)
}

/// Convert parallel `phi` and `labda` slices from WGS84 to RD.
pub fn wgs84_to_rd(phi: &[f64], labda: &[f64]) -> Result<RdBatch> {
    check_lengths("phi", phi, "labda", labda)?;

    let batch: RdBatch = phi
        .iter()
        .zip(labda)
        .map(|(&p, &l)| wgs::convert(p, l))
        .collect();

    debug!(
        points = batch.len(),
        out_of_range = batch.out_of_range_count(),
        "converted WGS84 batch to RD"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_scalar_conversion() {
        let x = [195994.0, 155000.0, -7001.0, 195994.0];
        let y = [447683.0, 463000.0, 463000.0, 1000000.0];
        let batch = rd_to_wgs84(&x, &y).unwrap();
        assert_eq!(batch.len(), 4);
        for i in 0..x.len() {
            let g = rd::convert(x[i], y[i]);
            assert_eq!(batch.phi()[i].to_bits(), g.phi.to_bits());
            assert_eq!(batch.labda()[i].to_bits(), g.labda.to_bits());
            assert_eq!(batch.error_codes()[i], g.error_code);
        }
        assert_eq!(batch.error_codes(), &[0, 0, -1, -2]);
        assert_eq!(batch.out_of_range_count(), 2);
    }

    #[test]
    fn empty_input_is_empty_batch() {
        let batch = rd_to_wgs84(&[], &[]).unwrap();
        assert!(batch.is_empty());
        assert!(batch.phi().is_empty());
        assert!(wgs84_to_rd(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = rd_to_wgs84(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            RdwgsError::LengthMismatch {
                left_name: "x",
                left: 2,
                right_name: "y",
                right: 1
            }
        );
        assert_eq!(err.to_string(), "x length 2 does not match y length 1");
        assert!(wgs84_to_rd(&[52.0], &[]).is_err());
    }

    #[test]
    fn inverse_batch_matches_scalar() {
        let phi = [52.15517440, 50.0];
        let labda = [5.38720621, 5.0];
        let batch = wgs84_to_rd(&phi, &labda).unwrap();
        assert_eq!(batch.get(0), Some(wgs::convert(phi[0], labda[0])));
        assert_eq!(batch.error_codes(), &[0, -2]);
        assert_eq!(batch.out_of_range_count(), 1);
    }
}
