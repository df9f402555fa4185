//! Logging data directories as versioned experiment artifacts
//!
//! An [`Artifact`] collects files; a [`TrackingRun`] stores it and reports
//! the resulting [`ArtifactVersion`]. [`LocalRun`] keeps versions in a
//! directory tree.

mod bundle;
mod local;
mod run;

pub use bundle::{Artifact, ArtifactEntry, DEFAULT_ARTIFACT_TYPE};
pub use local::{ArtifactManifest, LocalRun};
pub use run::{log_datadir_as_artifact, ArtifactVersion, TrackingRun};
