//! Python wrappers for the notebook helpers

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;
use std::path::PathBuf;

use super::errors::convert_error;
use crate::aggregate::{aggregate_metadata, PatientRecord};
use crate::artifact::{self, LocalRun, DEFAULT_ARTIFACT_TYPE};
use crate::extraction::{classify_plane, extract_metadata};
use crate::types::{format_patient_id, format_patient_id_padded, MetadataRecord};

fn record_to_dict<'py>(py: Python<'py>, record: &MetadataRecord) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for (name, value) in record.iter() {
        dict.set_item(name, value)?;
    }
    Ok(dict)
}

/// Zero-padded patient id
///
/// Args:
///     patient_id: BraTS21ID
///     padded: pad to a minimum width of 5 instead, so ids >= 10000
///         carry no leading zero
#[pyfunction]
#[pyo3(signature = (patient_id, padded=false))]
pub fn get_patient_id(patient_id: u32, padded: bool) -> String {
    if padded {
        format_patient_id_padded(patient_id)
    } else {
        format_patient_id(patient_id)
    }
}

/// Metadata of a single DICOM file as a dict
///
/// Raises:
///     DicomError: If the file cannot be read or parsed
#[pyfunction]
#[pyo3(signature = (path_to_dicom_file, meta_cols))]
pub fn get_dicom_metadata<'py>(
    py: Python<'py>,
    path_to_dicom_file: PathBuf,
    meta_cols: Vec<String>,
) -> PyResult<Bound<'py, PyDict>> {
    let record =
        extract_metadata(&path_to_dicom_file, meta_cols.as_slice()).map_err(convert_error)?;
    record_to_dict(py, &record)
}

/// Metadata of one slice per scan type for each `(BraTS21ID, path)` pair
///
/// Returns a list of dicts with `scan_type` and `id` keys added.
#[pyfunction]
#[pyo3(signature = (records, meta_cols))]
pub fn get_all_dicom_metadata<'py>(
    py: Python<'py>,
    records: Vec<(u32, PathBuf)>,
    meta_cols: Vec<String>,
) -> PyResult<Vec<Bound<'py, PyDict>>> {
    let records: Vec<PatientRecord> = records
        .into_iter()
        .map(|(id, path)| PatientRecord::new(id, path))
        .collect();
    let table = aggregate_metadata(&records, meta_cols.as_slice()).map_err(convert_error)?;

    table
        .rows()
        .iter()
        .map(|row| {
            let dict = record_to_dict(py, &row.metadata)?;
            dict.set_item("scan_type", row.scan_type.dir_name())?;
            dict.set_item("id", row.id)?;
            Ok(dict)
        })
        .collect()
}

/// Plane of a slice from a metadata dict, or None if unrecognized
#[pyfunction]
#[pyo3(signature = (data))]
pub fn get_image_plane(data: HashMap<String, String>) -> PyResult<Option<&'static str>> {
    let plane = classify_plane(&data).map_err(convert_error)?;
    Ok(plane.map(|p| p.simple_name()))
}

/// Logs a directory as an artifact in a local tracking directory
///
/// Returns the stored version as `name:vN`.
#[pyfunction]
#[pyo3(signature = (path_to_dir, artifact_name, artifact_type=DEFAULT_ARTIFACT_TYPE, tracking_dir=PathBuf::from("tracking"), run="local"))]
pub fn log_datadir_as_artifact(
    path_to_dir: PathBuf,
    artifact_name: &str,
    artifact_type: &str,
    tracking_dir: PathBuf,
    run: &str,
) -> PyResult<String> {
    let mut tracking_run = LocalRun::new(tracking_dir, run).map_err(convert_error)?;
    let version = artifact::log_datadir_as_artifact(
        &mut tracking_run,
        &path_to_dir,
        artifact_name,
        Some(artifact_type),
    )
    .map_err(convert_error)?;
    Ok(version.to_string())
}
