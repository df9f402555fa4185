pub mod aggregate;
pub mod api;
pub mod artifact;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use aggregate::{aggregate_metadata, PatientRecord};
pub use api::MetadataExtractor;
pub use artifact::{log_datadir_as_artifact, Artifact, ArtifactVersion, LocalRun, TrackingRun};
pub use cli::report::{TableReport, TextReport};
pub use error::{BratsError, Result};
pub use extraction::{classify_plane, extract_metadata, AttributeSource, DEFAULT_META_FIELDS};
pub use types::*;
