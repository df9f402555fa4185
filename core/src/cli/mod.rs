pub mod report;

use crate::artifact::DEFAULT_ARTIFACT_TYPE;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for bratsmeta
#[derive(Parser, Debug)]
#[command(name = "bratsmeta")]
#[command(about = "BraTS21 DICOM metadata and dataset tracking helpers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract metadata fields from a single DICOM file
    Metadata {
        /// Path to DICOM file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// DICOM keyword to extract (repeatable; defaults to a standard set)
        #[arg(short = 'f', long = "field", value_name = "FIELD")]
        fields: Vec<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: RecordFormat,
    },

    /// Extract metadata of one slice per scan type for every patient
    Aggregate {
        /// Labels CSV with a BraTS21ID column (and optional path column)
        #[arg(long, value_name = "CSV")]
        labels: PathBuf,

        /// Directory holding one subdirectory per zero-padded patient id
        #[arg(long, value_name = "DIR")]
        data_root: PathBuf,

        /// DICOM keyword to extract (repeatable; defaults to a standard set)
        #[arg(short = 'f', long = "field", value_name = "FIELD")]
        fields: Vec<String>,

        /// Only process the first N patients
        #[arg(long)]
        limit: Option<usize>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "csv")]
        format: TableFormat,
    },

    /// Classify the anatomical plane of a DICOM slice
    Plane {
        /// Path to DICOM file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format a BraTS21ID as a zero-padded patient id
    PatientId {
        /// Numeric patient id
        id: u32,

        /// Pad to a minimum width of 5 instead of prepending zeros by magnitude
        #[arg(long)]
        padded: bool,
    },

    /// Log a data directory as a versioned artifact
    LogArtifact {
        /// Directory to log
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Artifact name
        #[arg(long)]
        name: String,

        /// Artifact type tag
        #[arg(long, default_value = DEFAULT_ARTIFACT_TYPE)]
        artifact_type: String,

        /// Local tracking directory
        #[arg(long, default_value = "tracking")]
        tracking_dir: PathBuf,

        /// Run name
        #[arg(long, default_value = "local")]
        run: String,
    },
}

/// Output format for a single record
#[derive(Debug, Clone, ValueEnum)]
pub enum RecordFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Output format for an aggregated table
#[derive(Debug, Clone, ValueEnum)]
pub enum TableFormat {
    /// Human-readable text format
    Text,
    /// JSON array of rows
    Json,
    /// CSV with header
    Csv,
}
