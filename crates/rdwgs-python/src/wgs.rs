use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, value_error};
use rdwgs_core::{batch, wgs};

define_batch_result! {
    /// WGS84 to RD batch results with typed numpy array attributes.
    pub struct RdBatchResult from rdwgs_core::batch::RdBatch {
        x, y,
    }
}

/// Convert one WGS84 coordinate. Returns `(x, y, error_code)`.
#[pyfunction]
fn wgs84_to_rd(phi: f64, labda: f64) -> (f64, f64, i32) {
    let r = wgs::convert(phi, labda);
    (r.x, r.y, r.error_code)
}

#[pyfunction]
fn wgs84_to_rd_batch<'py>(
    py: Python<'py>,
    phi: PyReadonlyArray1<'py, f64>,
    labda: PyReadonlyArray1<'py, f64>,
) -> PyResult<RdBatchResult> {
    let phi_slice = contiguous_slice(&phi)?;
    let labda_slice = contiguous_slice(&labda)?;

    let result = batch::wgs84_to_rd(phi_slice, labda_slice).map_err(value_error)?;
    Ok(RdBatchResult::from_batch(py, &result))
}

pub fn populate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wgs84_to_rd, m)?)?;
    m.add_function(wrap_pyfunction!(wgs84_to_rd_batch, m)?)?;
    m.add_class::<RdBatchResult>()?;
    Ok(())
}
