//! Python exception types for bratsmeta
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use crate::error::BratsError;
use pyo3::{create_exception, exceptions::PyException, prelude::*};

// Base exception
create_exception!(
    bratsmeta,
    PyBratsError,
    PyException,
    "Base exception for all bratsmeta errors"
);

create_exception!(
    bratsmeta,
    PyDicomError,
    PyBratsError,
    "DICOM reading or parsing error"
);

create_exception!(
    bratsmeta,
    PyTagNotFoundError,
    PyBratsError,
    "Required DICOM attribute not present"
);

create_exception!(
    bratsmeta,
    PyInvalidValueError,
    PyBratsError,
    "Invalid attribute or argument value"
);

create_exception!(
    bratsmeta,
    PyTrackingError,
    PyBratsError,
    "Artifact tracking backend error"
);

/// Convert Rust BratsError to appropriate Python exception
pub fn convert_error(err: BratsError) -> PyErr {
    match err {
        BratsError::Dicom(msg) => PyDicomError::new_err(msg),
        BratsError::TagNotFound(msg) => PyTagNotFoundError::new_err(msg),
        BratsError::InvalidValue(msg) => PyInvalidValueError::new_err(msg),
        BratsError::Tracking(msg) => PyTrackingError::new_err(msg),
        BratsError::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
        other @ (BratsError::MissingScan { .. } | BratsError::Walk(_)) => {
            pyo3::exceptions::PyFileNotFoundError::new_err(other.to_string())
        }
        other => PyBratsError::new_err(other.to_string()),
    }
}
