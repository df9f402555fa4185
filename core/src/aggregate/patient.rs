use crate::error::Result;
use crate::types::format_patient_id_padded;
use csv::ReaderBuilder;
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One patient study: its BraTS21 id and the directory holding its scans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: u32,
    pub path: PathBuf,
}

/// Row of `train_labels.csv`; other columns (`MGMT_value`) are ignored
#[derive(Debug, Deserialize)]
struct LabelRow {
    #[serde(rename = "BraTS21ID")]
    id: u32,
    #[serde(default)]
    path: Option<PathBuf>,
}

impl PatientRecord {
    /// Creates a new PatientRecord
    pub fn new(id: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    /// Creates a record whose directory is `data_root/<zero-padded id>`
    pub fn from_data_root(id: u32, data_root: &Path) -> Self {
        Self::new(id, data_root.join(format_patient_id_padded(id)))
    }

    /// Loads patient records from a labels CSV
    ///
    /// Requires a `BraTS21ID` column. Rows with a non-empty `path` use it
    /// verbatim; others resolve under `data_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a row fails to parse.
    pub fn load_labels(csv_path: &Path, data_root: &Path) -> Result<Vec<Self>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(csv_path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let row: LabelRow = row?;
            let record = match row.path {
                Some(path) if !path.as_os_str().is_empty() => Self::new(row.id, path),
                _ => Self::from_data_root(row.id, data_root),
            };
            debug!("Patient {} at {}", record.id, record.path.display());
            records.push(record);
        }

        info!(
            "Loaded {} patient records from {}",
            records.len(),
            csv_path.display()
        );
        Ok(records)
    }
}
