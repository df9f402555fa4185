use crate::error::{BratsError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;
use xxhash_rust::xxh3::Xxh3;

/// Artifact type used when the caller gives none
pub const DEFAULT_ARTIFACT_TYPE: &str = "dataset";

/// One file registered in an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    /// Path inside the artifact, `/`-separated
    pub path: String,

    /// Size in bytes
    pub size: u64,

    /// xxh3 content digest, hex
    pub digest: String,

    /// Where the file was read from
    #[serde(skip)]
    pub source: PathBuf,
}

/// A named, typed bundle of files to be logged to a tracking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    artifact_type: String,
    entries: Vec<ArtifactEntry>,
}

impl Artifact {
    /// Creates an empty artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the name or type is empty, or the name holds
    /// characters other than ASCII alphanumerics, `-`, `_` and `.`.
    pub fn new(name: &str, artifact_type: &str) -> Result<Self> {
        validate_name("artifact name", name)?;
        if artifact_type.trim().is_empty() {
            return Err(BratsError::InvalidValue(
                "artifact type must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            artifact_type: artifact_type.trim().to_string(),
            entries: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Registered files, sorted by path
    pub fn entries(&self) -> &[ArtifactEntry] {
        &self.entries
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Registers a single file under `name`
    ///
    /// A file already registered under the same name is replaced.
    pub fn add_file(&mut self, source: &Path, name: &str) -> Result<&ArtifactEntry> {
        validate_entry_path(name)?;
        let (size, digest) = hash_file(source)?;
        let entry = ArtifactEntry {
            path: name.to_string(),
            size,
            digest,
            source: source.to_path_buf(),
        };
        debug!("Registered {} ({} bytes)", entry.path, entry.size);

        let index = match self.entries.binary_search_by(|e| e.path.as_str().cmp(name)) {
            Ok(index) => {
                self.entries[index] = entry;
                index
            }
            Err(index) => {
                self.entries.insert(index, entry);
                index
            }
        };
        Ok(&self.entries[index])
    }

    /// Recursively registers every regular file under `dir`
    ///
    /// Symlinks are followed and registered under their link path. Entry
    /// paths are relative to `dir`. Returns the number of files added.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not a readable directory.
    pub fn add_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(BratsError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", dir.display()),
            )));
        }

        let mut added = 0;
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = relative_name(dir, entry.path())?;
            self.add_file(entry.path(), &name)?;
            added += 1;
        }

        debug!("Added {} files from {}", added, dir.display());
        Ok(added)
    }

    /// Content digest over all entry paths and file digests
    pub fn digest(&self) -> String {
        let mut hasher = Xxh3::new();
        for entry in &self.entries {
            hasher.update(entry.path.as_bytes());
            hasher.update(&[0]);
            hasher.update(entry.digest.as_bytes());
            hasher.update(&[b'\n']);
        }
        format!("{:016x}", hasher.digest())
    }
}

/// Validates a name used as a single path component
pub(crate) fn validate_name(what: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BratsError::InvalidValue(format!("{} must not be empty", what)));
    }
    if name == "." || name == ".." {
        return Err(BratsError::InvalidValue(format!("{} '{}' is reserved", what, name)));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(BratsError::InvalidValue(format!(
            "{} '{}' contains invalid character '{}'",
            what, name, c
        )));
    }
    Ok(())
}

fn validate_entry_path(name: &str) -> Result<()> {
    let path = Path::new(name);
    let valid = !name.is_empty()
        && !name.contains('\\')
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if valid {
        Ok(())
    } else {
        Err(BratsError::InvalidValue(format!(
            "invalid artifact entry path '{}'",
            name
        )))
    }
}

fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        BratsError::InvalidValue(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

fn hash_file(path: &Path) -> Result<(u64, String)> {
    let mut file = File::open(path)?;
    let mut hasher = Xxh3::new();
    let mut buffer = [0u8; 64 * 1024];
    let mut size = 0u64;
    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        size += n as u64;
    }
    Ok((size, format!("{:016x}", hasher.digest())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("train_labels.csv"), "BraTS21ID\n0\n").unwrap();
        fs::create_dir_all(temp_dir.path().join("00000/FLAIR")).unwrap();
        fs::write(temp_dir.path().join("00000/FLAIR/Image-1.dcm"), b"slice").unwrap();
        fs::create_dir_all(temp_dir.path().join("empty")).unwrap();
        temp_dir
    }

    #[test]
    fn test_new_validates_name() {
        assert!(Artifact::new("brats21-train_v1.0", "dataset").is_ok());
        assert!(matches!(
            Artifact::new("", "dataset"),
            Err(BratsError::InvalidValue(_))
        ));
        assert!(Artifact::new("a/b", "dataset").is_err());
        assert!(Artifact::new("..", "dataset").is_err());
        assert!(Artifact::new("ok", "  ").is_err());
    }

    #[test]
    fn test_add_dir_registers_all_files() {
        let dir = sample_dir();
        let mut artifact = Artifact::new("brats", DEFAULT_ARTIFACT_TYPE).unwrap();

        let added = artifact.add_dir(dir.path()).unwrap();

        assert_eq!(added, 2);
        let paths: Vec<_> = artifact.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["00000/FLAIR/Image-1.dcm", "train_labels.csv"]);
        assert_eq!(artifact.total_size(), 5 + 12);
    }

    #[cfg(unix)]
    #[test]
    fn test_add_dir_follows_symlinks() {
        let dir = sample_dir();
        let outside = TempDir::new().unwrap();
        fs::create_dir_all(outside.path().join("T1w")).unwrap();
        fs::write(outside.path().join("T1w/Image-1.dcm"), b"linked").unwrap();
        std::os::unix::fs::symlink(outside.path().join("T1w"), dir.path().join("00000/T1w"))
            .unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("train_labels.csv"),
            dir.path().join("labels-link.csv"),
        )
        .unwrap();
        let mut artifact = Artifact::new("brats", DEFAULT_ARTIFACT_TYPE).unwrap();

        let added = artifact.add_dir(dir.path()).unwrap();

        assert_eq!(added, 4);
        let paths: Vec<_> = artifact.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "00000/FLAIR/Image-1.dcm",
                "00000/T1w/Image-1.dcm",
                "labels-link.csv",
                "train_labels.csv",
            ]
        );
        assert_eq!(artifact.total_size(), 5 + 6 + 12 + 12);
    }

    #[test]
    fn test_add_dir_missing() {
        let dir = sample_dir();
        let mut artifact = Artifact::new("brats", "dataset").unwrap();
        let result = artifact.add_dir(&dir.path().join("nope"));
        assert!(matches!(result, Err(BratsError::Io(_))));
        assert_eq!(artifact.file_count(), 0);
    }

    #[test]
    fn test_add_dir_rejects_file() {
        let dir = sample_dir();
        let mut artifact = Artifact::new("brats", "dataset").unwrap();
        assert!(artifact.add_dir(&dir.path().join("train_labels.csv")).is_err());
    }

    #[test]
    fn test_add_file_replaces_same_name() {
        let dir = sample_dir();
        let mut artifact = Artifact::new("brats", "dataset").unwrap();
        artifact
            .add_file(&dir.path().join("train_labels.csv"), "labels.csv")
            .unwrap();
        artifact
            .add_file(&dir.path().join("00000/FLAIR/Image-1.dcm"), "labels.csv")
            .unwrap();
        assert_eq!(artifact.file_count(), 1);
        assert_eq!(artifact.entries()[0].size, 5);
    }

    #[test]
    fn test_add_file_rejects_escaping_paths() {
        let dir = sample_dir();
        let source = dir.path().join("train_labels.csv");
        let mut artifact = Artifact::new("brats", "dataset").unwrap();
        assert!(artifact.add_file(&source, "../x").is_err());
        assert!(artifact.add_file(&source, "/abs").is_err());
        assert!(artifact.add_file(&source, "").is_err());
    }

    #[test]
    fn test_digest_tracks_content() {
        let dir = sample_dir();
        let mut first = Artifact::new("brats", "dataset").unwrap();
        first.add_dir(dir.path()).unwrap();
        let mut second = Artifact::new("brats", "dataset").unwrap();
        second.add_dir(dir.path()).unwrap();
        assert_eq!(first.digest(), second.digest());

        fs::write(dir.path().join("train_labels.csv"), "BraTS21ID\n2\n").unwrap();
        let mut third = Artifact::new("brats", "dataset").unwrap();
        third.add_dir(dir.path()).unwrap();
        assert_ne!(first.digest(), third.digest());
    }
}
