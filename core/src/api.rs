use crate::aggregate::{aggregate_metadata, PatientRecord};
use crate::error::Result;
use crate::extraction::{
    extract_metadata, extract_metadata_from, is_known_keyword, AttributeSource,
    DEFAULT_META_FIELDS,
};
use crate::types::{MetadataRecord, MetadataTable};
use std::path::Path;

/// Metadata extractor bound to a list of DICOM keywords
///
/// # Example
///
/// ```
/// use bratsmeta_core::MetadataExtractor;
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let mut dcm = InMemDicomObject::new_empty();
/// dcm.put(DataElement::new(
///     Tag(0x0008, 0x103E), // SeriesDescription
///     VR::LO,
///     PrimitiveValue::from("T2w"),
/// ));
///
/// let extractor = MetadataExtractor::new(&["SeriesDescription", "SliceThickness"]);
/// let record = extractor.extract(&dcm);
///
/// assert_eq!(record.get("SeriesDescription"), Some("T2w"));
/// assert_eq!(record.get("SliceThickness"), Some("NaN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataExtractor {
    fields: Vec<String>,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(&DEFAULT_META_FIELDS)
    }
}

impl MetadataExtractor {
    /// Creates an extractor for the given keywords
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
        }
    }

    /// Creates an extractor, falling back to the default fields when none are given
    pub fn or_default<S: AsRef<str>>(fields: &[S]) -> Self {
        if fields.is_empty() {
            Self::default()
        } else {
            Self::new(fields)
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Requested names that are not standard DICOM keywords
    ///
    /// These always extract as `"NaN"` from DICOM files.
    pub fn unknown_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(String::as_str)
            .filter(|f| !is_known_keyword(f))
            .collect()
    }

    /// Extracts the fields from an opened object or record
    pub fn extract<A: AttributeSource + ?Sized>(&self, source: &A) -> MetadataRecord {
        extract_metadata_from(source, &self.fields)
    }

    /// Opens a DICOM file and extracts the fields
    pub fn extract_file(&self, path: &Path) -> Result<MetadataRecord> {
        extract_metadata(path, &self.fields)
    }

    /// Aggregates the fields across patient records
    pub fn aggregate(&self, records: &[PatientRecord]) -> Result<MetadataTable> {
        aggregate_metadata(records, &self.fields)
    }
}
