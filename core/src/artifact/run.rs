use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::{Artifact, DEFAULT_ARTIFACT_TYPE};

/// A stored artifact version, as reported by the tracking backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactVersion {
    pub name: String,
    pub artifact_type: String,
    pub version: u32,
    pub digest: String,
    pub file_count: usize,
}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:v{}", self.name, self.version)
    }
}

/// An active experiment-tracking run that accepts artifacts
pub trait TrackingRun {
    /// Submits an artifact for storage and versioning
    fn log_artifact(&mut self, artifact: Artifact) -> Result<ArtifactVersion>;
}

/// Logs every file under `dir` as one artifact on `run`
///
/// `artifact_type` defaults to `"dataset"`. Each call submits a new
/// artifact; whether identical content yields a new version is up to the
/// backend.
///
/// # Errors
///
/// Returns an error for an invalid name, an unreadable directory, or a
/// backend failure. Nothing is submitted unless every file registered.
pub fn log_datadir_as_artifact<R: TrackingRun + ?Sized>(
    run: &mut R,
    dir: &Path,
    artifact_name: &str,
    artifact_type: Option<&str>,
) -> Result<ArtifactVersion> {
    let artifact_type = artifact_type.unwrap_or(DEFAULT_ARTIFACT_TYPE);
    let mut artifact = Artifact::new(artifact_name, artifact_type)?;
    artifact.add_dir(dir)?;

    info!(
        "Logging {} files ({} bytes) from {} as {}",
        artifact.file_count(),
        artifact.total_size(),
        dir.display(),
        artifact.name()
    );
    let version = run.log_artifact(artifact)?;
    info!("Logged {}", version);
    Ok(version)
}
