use crate::types::ScanType;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for bratsmeta operations
pub type Result<T> = std::result::Result<T, BratsError>;

/// Error types for bratsmeta operations
#[derive(Error, Debug)]
pub enum BratsError {
    /// DICOM reading or parsing error
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// Required attribute not present
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Invalid attribute or argument value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Scan directory exists but holds no file
    #[error("No {scan_type} scan for patient {patient} in {}", .dir.display())]
    MissingScan {
        patient: u32,
        scan_type: ScanType,
        dir: PathBuf,
    },

    /// Tracking backend failure
    #[error("Tracking error: {0}")]
    Tracking(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dicom_object::ReadError> for BratsError {
    fn from(e: dicom_object::ReadError) -> Self {
        BratsError::Dicom(format!("{}", e))
    }
}
