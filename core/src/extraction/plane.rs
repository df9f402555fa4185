use crate::error::{BratsError, Result};
use crate::types::{ImagePlane, OrientationVector};
use dicom_object::open_file;
use log::debug;
use std::path::Path;

use super::tags::{AttributeSource, IMAGE_ORIENTATION_PATIENT};

/// Classifies the anatomical plane from ImageOrientationPatient
///
/// # Algorithm
///
/// 1. Parse the six direction cosines
/// 2. Round each, keep x/y of the row and column directions
/// 3. `[1,0,0,0]`→Coronal, `[1,0,0,1]`→Axial, `[0,1,0,0]`→Sagittal
///
/// Any other signature yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the attribute is absent or does not hold six numbers.
pub fn classify_plane<A: AttributeSource + ?Sized>(source: &A) -> Result<Option<ImagePlane>> {
    let raw = source
        .attribute(IMAGE_ORIENTATION_PATIENT)
        .ok_or_else(|| BratsError::TagNotFound(IMAGE_ORIENTATION_PATIENT.to_string()))?;
    let orientation = OrientationVector::parse(&raw).map_err(BratsError::InvalidValue)?;

    let plane = ImagePlane::from_orientation(&orientation);
    if plane.is_none() {
        debug!("No plane for orientation {}", orientation);
    }
    Ok(plane)
}

/// Opens a DICOM file and classifies its plane
pub fn classify_file<P: AsRef<Path>>(path: P) -> Result<Option<ImagePlane>> {
    let dcm = open_file(path.as_ref())?;
    classify_plane(&dcm)
}
