use pyo3::prelude::*;

use rdwgs_core::format;

#[pyfunction]
fn ddd(phi: f64, labda: f64) -> String {
    format::ddd(phi, labda)
}

#[pyfunction]
fn dmm(phi: f64, labda: f64) -> String {
    format::dmm(phi, labda)
}

#[pyfunction]
fn dms(phi: f64, labda: f64) -> String {
    format::dms(phi, labda)
}

#[pyfunction]
fn xy(x: f64, y: f64) -> String {
    format::xy(x, y)
}

pub fn populate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ddd, m)?)?;
    m.add_function(wrap_pyfunction!(dmm, m)?)?;
    m.add_function(wrap_pyfunction!(dms, m)?)?;
    m.add_function(wrap_pyfunction!(xy, m)?)?;
    Ok(())
}
