//! `rdwgs._core`: Python bindings for the RD/WGS84 conversions.
//!
//! Layout: `_core.rd` (RD to WGS84), `_core.wgs` (WGS84 to RD) and
//! `_core.format` (coordinate strings). Scalar functions return tuples ending
//! in the composite error code; batch functions take numpy arrays.

#[macro_use]
mod macros;
mod convert;

mod format;
mod rd;
mod wgs;

use pyo3::prelude::*;

type Populate = fn(&Bound<'_, PyModule>) -> PyResult<()>;

/// Submodules of `_core`, in registration order.
const SUBMODULES: &[(&str, Populate)] = &[
    ("rd", rd::populate),
    ("wgs", wgs::populate),
    ("format", format::populate),
];

/// Create `parent.<name>`, fill it, and make it importable by dotted path.
fn attach(parent: &Bound<'_, PyModule>, name: &str, populate: Populate) -> PyResult<()> {
    let py = parent.py();
    let child = PyModule::new(py, name)?;
    populate(&child)?;
    parent.add_submodule(&child)?;

    let dotted = format!("{}.{}", parent.name()?, name);
    py.import("sys")?.getattr("modules")?.set_item(dotted, &child)?;
    Ok(())
}

#[pyfunction]
fn rust_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rust_version, m)?)?;
    for &(name, populate) in SUBMODULES {
        attach(m, name, populate)?;
    }
    Ok(())
}
