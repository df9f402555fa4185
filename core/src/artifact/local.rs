use crate::error::{BratsError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::bundle::validate_name;
use super::{Artifact, ArtifactEntry, ArtifactVersion, TrackingRun};

const MANIFEST_FILE: &str = "manifest.json";
const FILES_DIR: &str = "files";

/// Stored description of one artifact version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    pub name: String,
    pub artifact_type: String,
    pub version: u32,
    pub digest: String,
    /// Run that created this version
    pub run: String,
    pub entries: Vec<ArtifactEntry>,
}

/// Tracking run backed by a local directory
///
/// Layout:
///
/// ```text
/// <root>/artifacts/<name>/v<N>/manifest.json
/// <root>/artifacts/<name>/v<N>/files/...
/// <root>/runs/<run>.jsonl
/// ```
///
/// Submitting content identical to the latest version of the same name
/// returns that version instead of storing a new one.
#[derive(Debug, Clone)]
pub struct LocalRun {
    root: PathBuf,
    run_name: String,
}

impl LocalRun {
    /// Opens (creating if needed) a run under `root`
    pub fn new(root: impl Into<PathBuf>, run_name: &str) -> Result<Self> {
        validate_name("run name", run_name)?;
        let root = root.into();
        fs::create_dir_all(root.join("artifacts"))?;
        fs::create_dir_all(root.join("runs"))?;
        debug!("Tracking run {} at {}", run_name, root.display());

        Ok(Self {
            root,
            run_name: run_name.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// Directory holding all versions of an artifact
    pub fn artifact_dir(&self, name: &str) -> PathBuf {
        self.root.join("artifacts").join(name)
    }

    /// Directory of one stored version
    pub fn version_dir(&self, name: &str, version: u32) -> PathBuf {
        self.artifact_dir(name).join(format!("v{}", version))
    }

    /// Stored version numbers of an artifact, ascending
    pub fn versions(&self, name: &str) -> Result<Vec<u32>> {
        let dir = self.artifact_dir(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let parsed = file_name
                .to_str()
                .and_then(|s| s.strip_prefix('v'))
                .and_then(|s| s.parse::<u32>().ok());
            if let Some(version) = parsed {
                if entry.path().join(MANIFEST_FILE).is_file() {
                    versions.push(version);
                }
            }
        }
        versions.sort_unstable();
        Ok(versions)
    }

    /// Reads the manifest of a stored version
    pub fn load_manifest(&self, name: &str, version: u32) -> Result<ArtifactManifest> {
        let file = File::open(self.version_dir(name, version).join(MANIFEST_FILE))?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Versions logged by this run, in order
    pub fn logged(&self) -> Result<Vec<ArtifactVersion>> {
        let path = self.run_log_path();
        if !path.is_file() {
            return Ok(Vec::new());
        }
        fs::read_to_string(&path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(BratsError::from))
            .collect()
    }

    fn run_log_path(&self) -> PathBuf {
        self.root
            .join("runs")
            .join(format!("{}.jsonl", self.run_name))
    }

    fn record_logged(&self, version: &ArtifactVersion) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.run_log_path())?;
        writeln!(file, "{}", serde_json::to_string(version)?)?;
        Ok(())
    }

    fn store(&self, artifact: &Artifact, version: u32, digest: &str) -> Result<()> {
        let final_dir = self.version_dir(artifact.name(), version);
        let staging = self
            .artifact_dir(artifact.name())
            .join(format!(".v{}.staging", version));
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }

        let files_dir = staging.join(FILES_DIR);
        fs::create_dir_all(&files_dir)?;
        for entry in artifact.entries() {
            let target = files_dir.join(&entry.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&entry.source, &target)?;
        }

        let manifest = ArtifactManifest {
            name: artifact.name().to_string(),
            artifact_type: artifact.artifact_type().to_string(),
            version,
            digest: digest.to_string(),
            run: self.run_name.clone(),
            entries: artifact.entries().to_vec(),
        };
        let mut writer = BufWriter::new(File::create(staging.join(MANIFEST_FILE))?);
        serde_json::to_writer_pretty(&mut writer, &manifest)?;
        writer.flush()?;

        fs::rename(&staging, &final_dir)?;
        Ok(())
    }
}

impl TrackingRun for LocalRun {
    fn log_artifact(&mut self, artifact: Artifact) -> Result<ArtifactVersion> {
        let digest = artifact.digest();
        let latest = self.versions(artifact.name())?.last().copied();

        if let Some(latest) = latest {
            let manifest = self.load_manifest(artifact.name(), latest)?;
            if manifest.artifact_type != artifact.artifact_type() {
                return Err(BratsError::Tracking(format!(
                    "artifact {} already exists with type '{}', not '{}'",
                    artifact.name(),
                    manifest.artifact_type,
                    artifact.artifact_type()
                )));
            }
            if manifest.digest == digest {
                info!("{}:v{} unchanged, reusing it", artifact.name(), latest);
                let version = ArtifactVersion {
                    name: manifest.name,
                    artifact_type: manifest.artifact_type,
                    version: latest,
                    digest,
                    file_count: manifest.entries.len(),
                };
                self.record_logged(&version)?;
                return Ok(version);
            }
        }

        let next = latest.map_or(0, |v| v + 1);
        self.store(&artifact, next, &digest)?;
        info!(
            "Stored {}:v{} ({} files)",
            artifact.name(),
            next,
            artifact.file_count()
        );

        let version = ArtifactVersion {
            name: artifact.name().to_string(),
            artifact_type: artifact.artifact_type().to_string(),
            version: next,
            digest,
            file_count: artifact.file_count(),
        };
        self.record_logged(&version)?;
        Ok(version)
    }
}
