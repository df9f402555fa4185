//! Batch metadata aggregation across patient studies
//!
//! Each patient directory holds `FLAIR/`, `T1w/`, `T1wCE/` and `T2w/`
//! subdirectories of DICOM slices; one slice per scan type is summarized.

mod batch;
mod output;
mod patient;

pub use batch::{aggregate_metadata, representative_file};
pub use output::{write_csv, write_json};
pub use patient::PatientRecord;
