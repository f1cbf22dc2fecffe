use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use rdwgs_core::RdwgsError;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err("array must be C-contiguous")
    })
}

/// Map a core error onto `ValueError`.
pub fn value_error(err: RdwgsError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}
