//! Python bindings for bratsmeta
//!
//! Exposes the notebook helpers under their original names.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod functions;

pub use errors::*;
pub use functions::*;

/// Python module definition
#[pymodule]
fn _bratsmeta(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add("BratsError", py.get_type_bound::<errors::PyBratsError>())?;
    m.add("DicomError", py.get_type_bound::<errors::PyDicomError>())?;
    m.add(
        "TagNotFoundError",
        py.get_type_bound::<errors::PyTagNotFoundError>(),
    )?;
    m.add(
        "InvalidValueError",
        py.get_type_bound::<errors::PyInvalidValueError>(),
    )?;
    m.add("TrackingError", py.get_type_bound::<errors::PyTrackingError>())?;

    // Register functions
    m.add_function(wrap_pyfunction!(get_patient_id, m)?)?;
    m.add_function(wrap_pyfunction!(get_dicom_metadata, m)?)?;
    m.add_function(wrap_pyfunction!(get_all_dicom_metadata, m)?)?;
    m.add_function(wrap_pyfunction!(get_image_plane, m)?)?;
    m.add_function(wrap_pyfunction!(log_datadir_as_artifact, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
