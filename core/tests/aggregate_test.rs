mod common;

use bratsmeta_core::aggregate::{write_csv, PatientRecord};
use bratsmeta_core::{aggregate_metadata, BratsError, ScanType, SCAN_TYPES};
use common::write_patient;
use std::fs;
use tempfile::TempDir;

const FIELDS: [&str; 3] = ["SeriesDescription", "Modality", "SliceThickness"];

#[test]
fn test_four_rows_per_patient_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let records: Vec<_> = [7, 0, 581]
        .into_iter()
        .map(|id| PatientRecord::new(id, write_patient(temp_dir.path(), id)))
        .collect();

    let table = aggregate_metadata(&records, &FIELDS).unwrap();

    assert_eq!(table.len(), 4 * records.len());
    assert_eq!(
        table.columns(),
        &["SeriesDescription", "Modality", "SliceThickness", "scan_type", "id"]
    );

    let order: Vec<(u32, ScanType)> =
        table.rows().iter().map(|r| (r.id, r.scan_type)).collect();
    let expected: Vec<(u32, ScanType)> = [7, 0, 581]
        .into_iter()
        .flat_map(|id| SCAN_TYPES.into_iter().map(move |scan| (id, scan)))
        .collect();
    assert_eq!(order, expected);
}

#[test]
fn test_representative_slice_and_tags() {
    let temp_dir = TempDir::new().unwrap();
    let record = PatientRecord::new(12, write_patient(temp_dir.path(), 12));

    let table = aggregate_metadata(&[record], &FIELDS).unwrap();

    let first = &table.rows()[0];
    assert_eq!(first.scan_type, ScanType::Flair);
    assert_eq!(first.id, 12);
    assert_eq!(first.metadata.get("SeriesDescription"), Some("FLAIR p12 slice 1"));
    assert_eq!(first.metadata.get("Modality"), Some("MR"));
    assert_eq!(first.metadata.get("SliceThickness"), Some("NaN"));

    let last = &table.rows()[3];
    assert_eq!(last.value("scan_type"), Some("T2w".to_string()));
    assert_eq!(last.metadata.get("SeriesDescription"), Some("T2w p12 slice 1"));
}

#[test]
fn test_missing_scan_dir_aborts_batch() {
    let temp_dir = TempDir::new().unwrap();
    let complete = PatientRecord::new(0, write_patient(temp_dir.path(), 0));
    let broken_dir = write_patient(temp_dir.path(), 2);
    fs::remove_dir_all(broken_dir.join("T1wCE")).unwrap();
    let broken = PatientRecord::new(2, broken_dir);

    let result = aggregate_metadata(&[complete, broken], &FIELDS);

    assert!(matches!(result, Err(BratsError::Io(_))));
}

#[test]
fn test_empty_scan_dir_aborts_batch() {
    let temp_dir = TempDir::new().unwrap();
    let patient_dir = write_patient(temp_dir.path(), 3);
    let t2w = patient_dir.join("T2w");
    fs::remove_dir_all(&t2w).unwrap();
    fs::create_dir(&t2w).unwrap();

    let result = aggregate_metadata(&[PatientRecord::new(3, patient_dir)], &FIELDS);

    match result {
        Err(BratsError::MissingScan {
            patient, scan_type, ..
        }) => {
            assert_eq!(patient, 3);
            assert_eq!(scan_type, ScanType::T2w);
        }
        other => panic!("expected MissingScan, got {:?}", other),
    }
}

#[test]
fn test_labels_to_csv() {
    let temp_dir = TempDir::new().unwrap();
    let data_root = temp_dir.path().join("train");
    write_patient(&data_root, 0);
    write_patient(&data_root, 5);
    let labels = temp_dir.path().join("train_labels.csv");
    fs::write(&labels, "BraTS21ID,MGMT_value\n0,1\n5,0\n").unwrap();

    let records = PatientRecord::load_labels(&labels, &data_root).unwrap();
    let table = aggregate_metadata(&records, &["SeriesDescription"]).unwrap();

    let mut out = Vec::new();
    write_csv(&table, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines.len(), 1 + 8);
    assert_eq!(lines[0], "SeriesDescription,scan_type,id");
    assert_eq!(lines[1], "FLAIR p0 slice 1,FLAIR,0");
    assert_eq!(lines[8], "T2w p5 slice 1,T2w,5");
}
