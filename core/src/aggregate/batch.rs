use crate::error::{BratsError, Result};
use crate::extraction::extract_metadata;
use crate::types::{MetadataTable, ScanRow, SCAN_TYPES};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::PatientRecord;

/// Extracts metadata of one representative file per scan type per patient
///
/// Rows are ordered patient-major, then FLAIR, T1w, T1wCE, T2w. The
/// representative file of a scan directory is the one with the
/// lexicographically smallest name.
///
/// # Errors
///
/// Aborts on the first patient with a missing or empty scan directory, or
/// on an unreadable DICOM file. No partial table is returned.
pub fn aggregate_metadata<S: AsRef<str>>(
    records: &[PatientRecord],
    field_names: &[S],
) -> Result<MetadataTable> {
    info!(
        "Aggregating {} fields over {} patients",
        field_names.len(),
        records.len()
    );

    let mut table = MetadataTable::new(field_names);
    for record in records {
        for scan_type in SCAN_TYPES {
            let scan_dir = record.path.join(scan_type.dir_name());
            let file = representative_file(&scan_dir)?.ok_or_else(|| BratsError::MissingScan {
                patient: record.id,
                scan_type,
                dir: scan_dir.clone(),
            })?;

            debug!("Patient {} {}: {}", record.id, scan_type, file.display());
            let metadata = extract_metadata(&file, field_names)?;
            table.push(ScanRow::new(metadata, scan_type, record.id));
        }
    }

    info!("Aggregated {} rows", table.len());
    Ok(table)
}

/// Returns the regular file with the smallest name in `dir`
///
/// Symlinks count when they resolve to a regular file. `Ok(None)` if the
/// directory holds no such file.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn representative_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut best: Option<PathBuf> = None;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if best.as_ref().map_or(true, |b| path.file_name() < b.file_name()) {
            best = Some(path);
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_representative_file_is_smallest_name() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["Image-10.dcm", "Image-2.dcm", "Image-1.dcm"] {
            File::create(temp_dir.path().join(name)).unwrap();
        }
        fs::create_dir(temp_dir.path().join("A-subdir")).unwrap();

        let file = representative_file(temp_dir.path()).unwrap().unwrap();
        assert_eq!(file.file_name().unwrap(), "Image-1.dcm");
    }

    #[cfg(unix)]
    #[test]
    fn test_representative_file_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().join("store");
        let scan_dir = temp_dir.path().join("FLAIR");
        fs::create_dir_all(&store).unwrap();
        fs::create_dir_all(&scan_dir).unwrap();
        File::create(store.join("slice.dcm")).unwrap();
        std::os::unix::fs::symlink(store.join("slice.dcm"), scan_dir.join("Image-2.dcm"))
            .unwrap();
        std::os::unix::fs::symlink(store.join("gone.dcm"), scan_dir.join("Image-1.dcm"))
            .unwrap();

        let file = representative_file(&scan_dir).unwrap().unwrap();
        assert_eq!(file.file_name().unwrap(), "Image-2.dcm");
    }

    #[test]
    fn test_representative_file_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        assert_eq!(representative_file(temp_dir.path()).unwrap(), None);
    }

    #[test]
    fn test_representative_file_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let result = representative_file(&temp_dir.path().join("FLAIR"));
        assert!(matches!(result, Err(BratsError::Io(_))));
    }

    #[test]
    fn test_empty_scan_dir_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let patient = temp_dir.path().join("00000");
        for scan in SCAN_TYPES {
            fs::create_dir_all(patient.join(scan.dir_name())).unwrap();
        }

        let result = aggregate_metadata(&[PatientRecord::new(0, patient)], &["Rows"]);
        match result {
            Err(BratsError::MissingScan {
                patient, scan_type, ..
            }) => {
                assert_eq!(patient, 0);
                assert_eq!(scan_type, SCAN_TYPES[0]);
            }
            other => panic!("expected MissingScan, got {:?}", other),
        }
    }

    #[test]
    fn test_no_records_gives_empty_table() {
        let table = aggregate_metadata(&[], &["Rows"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["Rows", "scan_type", "id"]);
    }
}
