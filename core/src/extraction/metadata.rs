use crate::error::Result;
use crate::types::MetadataRecord;
use dicom_object::open_file;
use log::debug;
use std::path::Path;

use super::tags::AttributeSource;

/// Extracts the requested attributes of a single DICOM file
///
/// Attributes the file does not carry are recorded as `"NaN"`; the returned
/// record always has one entry per distinct requested name.
///
/// # Errors
///
/// Returns an error if the file is missing or is not a DICOM file.
pub fn extract_metadata<P, S>(path: P, field_names: &[S]) -> Result<MetadataRecord>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let dcm = open_file(path)?;
    debug!("Opened {}", path.display());
    Ok(extract_metadata_from(&dcm, field_names))
}

/// Projects the requested attributes of an already-opened source
pub fn extract_metadata_from<A, S>(source: &A, field_names: &[S]) -> MetadataRecord
where
    A: AttributeSource + ?Sized,
    S: AsRef<str>,
{
    let mut record = MetadataRecord::new();
    for name in field_names.iter().map(AsRef::as_ref) {
        match source.attribute(name) {
            Some(value) => record.insert(name, value),
            None => record.insert_missing(name),
        }
    }
    record
}
