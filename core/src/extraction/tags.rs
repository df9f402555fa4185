//! Attribute access by DICOM keyword
//!
//! Requested fields are DICOM keywords (`"SeriesDescription"`,
//! `"ImageOrientationPatient"`, ...) resolved through the standard data
//! dictionary.

use crate::types::MetadataRecord;
use dicom_core::dictionary::DataDictionary;
use dicom_dictionary_std::StandardDataDictionary;
use dicom_object::mem::InMemElement;
use dicom_object::{FileDicomObject, InMemDicomObject};
use log::debug;
use std::collections::HashMap;

// Geometry
pub const IMAGE_ORIENTATION_PATIENT: &str = "ImageOrientationPatient";
pub const IMAGE_POSITION_PATIENT: &str = "ImagePositionPatient";
pub const SLICE_THICKNESS: &str = "SliceThickness";
pub const SPACING_BETWEEN_SLICES: &str = "SpacingBetweenSlices";
pub const PIXEL_SPACING: &str = "PixelSpacing";
pub const ROWS: &str = "Rows";
pub const COLUMNS: &str = "Columns";

// Series identification
pub const SERIES_INSTANCE_UID: &str = "SeriesInstanceUID";
pub const SERIES_DESCRIPTION: &str = "SeriesDescription";

// Acquisition
pub const MAGNETIC_FIELD_STRENGTH: &str = "MagneticFieldStrength";
pub const ECHO_TIME: &str = "EchoTime";
pub const REPETITION_TIME: &str = "RepetitionTime";

/// Fields extracted when the caller names none
pub const DEFAULT_META_FIELDS: [&str; 12] = [
    SERIES_INSTANCE_UID,
    SERIES_DESCRIPTION,
    IMAGE_ORIENTATION_PATIENT,
    IMAGE_POSITION_PATIENT,
    SLICE_THICKNESS,
    SPACING_BETWEEN_SLICES,
    PIXEL_SPACING,
    ROWS,
    COLUMNS,
    MAGNETIC_FIELD_STRENGTH,
    ECHO_TIME,
    REPETITION_TIME,
];

/// Checks if `name` is a keyword of the standard data dictionary
pub fn is_known_keyword(name: &str) -> bool {
    StandardDataDictionary.by_name(name).is_some()
}

/// Anything that can answer "what is the value of attribute `name`?"
///
/// Returns `None` when the attribute is absent, unknown, or has no text
/// rendering.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for InMemDicomObject {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element_by_name(name)
            .ok()
            .and_then(|elem| render_element(name, elem))
    }
}

impl AttributeSource for FileDicomObject<InMemDicomObject> {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

impl AttributeSource for MetadataRecord {
    fn attribute(&self, name: &str) -> Option<String> {
        self.present(name).map(str::to_string)
    }
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Renders an element as text
///
/// Multi-valued elements become `[a, b, c]`; sequences are summarized by
/// item count.
fn render_element(name: &str, elem: &InMemElement) -> Option<String> {
    if let Some(items) = elem.items() {
        return Some(format!("<Sequence of {} item(s)>", items.len()));
    }

    match elem.to_multi_str() {
        Ok(values) => Some(match values.len() {
            0 => String::new(),
            1 => values[0].trim().to_string(),
            _ => {
                let parts: Vec<&str> = values.iter().map(|v| v.trim()).collect();
                format!("[{}]", parts.join(", "))
            }
        }),
        Err(e) => {
            debug!("No text rendering for {}: {}", name, e);
            None
        }
    }
}
