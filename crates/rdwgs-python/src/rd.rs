use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, value_error};
use rdwgs_core::{batch, rd};

define_batch_result! {
    /// RD to WGS84 batch results with typed numpy array attributes.
    pub struct GeographicBatchResult from rdwgs_core::batch::GeographicBatch {
        phi, labda,
    }
}

/// Convert one RD coordinate. Returns `(phi, labda, error_code)`.
#[pyfunction]
fn rd_to_wgs84(x: f64, y: f64) -> (f64, f64, i32) {
    let g = rd::convert(x, y);
    (g.phi, g.labda, g.error_code)
}

/// Range check only: `0`, `-1`, `-2` or `-3`.
#[pyfunction]
fn rd_range_code(x: f64, y: f64) -> i32 {
    rd::range_code(x, y)
}

#[pyfunction]
fn rd_to_wgs84_batch<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
) -> PyResult<GeographicBatchResult> {
    let x_slice = contiguous_slice(&x)?;
    let y_slice = contiguous_slice(&y)?;

    let result = batch::rd_to_wgs84(x_slice, y_slice).map_err(value_error)?;
    Ok(GeographicBatchResult::from_batch(py, &result))
}

pub fn populate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rd_to_wgs84, m)?)?;
    m.add_function(wrap_pyfunction!(rd_range_code, m)?)?;
    m.add_function(wrap_pyfunction!(rd_to_wgs84_batch, m)?)?;
    m.add_class::<GeographicBatchResult>()?;
    Ok(())
}
