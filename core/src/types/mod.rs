//! Core type definitions for BraTS21 metadata
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`ScanType`]: MRI sequence protocols (FLAIR, T1w, T1wCE, T2w)
//! - [`ImagePlane`]: Anatomical plane of a slice
//! - [`OrientationVector`]: Parsed ImageOrientationPatient direction cosines
//! - [`MetadataRecord`], [`ScanRow`], [`MetadataTable`]: extracted metadata
//! - [`format_patient_id`]: zero-padded patient identifiers

mod enums;
mod orientation;
mod patient_id;
mod record;

pub use enums::{ImagePlane, ScanType, SCAN_TYPES};
pub use orientation::OrientationVector;
pub use patient_id::{format_patient_id, format_patient_id_padded, PATIENT_ID_WIDTH};
pub use record::{
    MetadataRecord, MetadataTable, ScanRow, ID_COLUMN, MISSING_VALUE, SCAN_TYPE_COLUMN,
};
