//! Manifest persistence
//!
//! One manifest document per store handle, at an explicit path. Every save
//! rewrites the full document through a temp file and a rename, so a reader
//! observes either the old content or the new content, never a torn write.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::DitError;
use crate::models::Project;

pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the manifest into the entity hierarchy. A missing document is
    /// reported separately from a malformed one. Unknown fields in the
    /// document are tolerated.
    pub fn load(&self) -> Result<Project, DitError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(DitError::ManifestNotFound {
                    path: self.path.clone(),
                });
            }
            Err(err) => {
                return Err(DitError::io(
                    format!("failed to read {}", self.path.display()),
                    err,
                ));
            }
        };
        let project = serde_json::from_str(&raw).map_err(|err| DitError::Parse {
            path: self.path.clone(),
            source: err,
        })?;
        debug!(path = %self.path.display(), "loaded manifest");
        Ok(project)
    }

    /// Serialize the whole project (indented, stable key order) and replace
    /// the manifest atomically.
    pub fn save(&self, project: &Project) -> Result<(), DitError> {
        let mut json = serde_json::to_string_pretty(project).map_err(|err| {
            DitError::io(
                "failed to encode manifest",
                io::Error::new(io::ErrorKind::InvalidData, err),
            )
        })?;
        json.push('\n');

        let tmp = self.tmp_path();
        fs::write(&tmp, json)
            .map_err(|err| DitError::io(format!("failed to write {}", tmp.display()), err))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            DitError::io(
                format!("failed to replace {}", self.path.display()),
                err,
            )
        })?;
        debug!(path = %self.path.display(), "saved manifest");
        Ok(())
    }

    /// Advisory lock covering a load-mutate-save sequence, held until the
    /// returned guard drops. Guards against concurrent invocations racing
    /// on the same manifest path.
    pub fn lock(&self) -> Result<StoreLock, DitError> {
        let lock_path = self.sibling_path("lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .map_err(|err| {
                DitError::io(format!("failed to open {}", lock_path.display()), err)
            })?;
        file.lock_exclusive().map_err(|err| {
            DitError::io(format!("failed to lock {}", lock_path.display()), err)
        })?;
        Ok(StoreLock { file })
    }

    fn tmp_path(&self) -> PathBuf {
        self.sibling_path("tmp")
    }

    // Project.dit -> Project.dit.<suffix>, kept next to the manifest so the
    // rename never crosses a filesystem boundary.
    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "manifest".into());
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

pub struct StoreLock {
    file: fs::File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Package;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ManifestStore {
        ManifestStore::new(dir.path().join("Project.dit"))
    }

    #[test]
    fn save_then_load_round_trips_exactly() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut project = Project::new("demo".into(), "A demo".into(), "0.3".into());
        project
            .add_package(Package::new("core".into(), "Core".into(), "1.0".into()))
            .unwrap();
        store.save(&project).unwrap();

        assert_eq!(store.load().unwrap(), project);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&Project::new("demo".into(), "d".into(), "1.0".into()))
            .unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["Project.dit"]);
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, DitError::ManifestNotFound { .. }));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ \"name\": ").unwrap();
        assert!(matches!(store.load().unwrap_err(), DitError::Parse { .. }));
    }

    #[test]
    fn save_overwrites_prior_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&Project::new("first".into(), "d".into(), "1.0".into()))
            .unwrap();
        store
            .save(&Project::new("second".into(), "d".into(), "1.0".into()))
            .unwrap();
        assert_eq!(store.load().unwrap().name, "second");
    }
}
