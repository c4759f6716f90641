//! YAML Fingerprint Repository
//!
//! Implements the FingerprintStore port as a flat YAML mapping
//! `path: digest`, stored by default at `tmp/fixture_builder.yml`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::entities::FingerprintMap;
use crate::domain::ports::{FileSystem, FingerprintStore, StoreLock};
use crate::error::{FixtureError, FixtureResult};
use crate::infrastructure::fs::LocalFs;

/// YAML-backed fingerprint store
pub struct YamlFingerprintRepository<F: FileSystem = LocalFs> {
    path: PathBuf,
    fs: F,
}

impl YamlFingerprintRepository<LocalFs> {
    /// Create a repository on local disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, LocalFs::new())
    }
}

impl<F: FileSystem> YamlFingerprintRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(path: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling `<state file>.lock`
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }
}

impl<F: FileSystem> FingerprintStore for YamlFingerprintRepository<F> {
    fn load(&self) -> FixtureResult<Option<FingerprintMap>> {
        if !self.fs.exists(&self.path) {
            return Ok(None);
        }

        let content = self
            .fs
            .read(&self.path)
            .map_err(|e| FixtureError::from_fs(&self.path, e))?;
        let fingerprints: FingerprintMap =
            serde_yaml_ng::from_str(&content).map_err(|e| FixtureError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(Some(fingerprints))
    }

    fn save(&self, fingerprints: &FingerprintMap) -> FixtureResult<()> {
        let content = serde_yaml_ng::to_string(fingerprints).map_err(|e| FixtureError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        self.fs
            .write(&self.path, &content)
            .map_err(|e| FixtureError::from_fs(&self.path, e))
    }

    fn clear(&self) -> FixtureResult<()> {
        if self.fs.exists(&self.path) {
            self.fs
                .remove(&self.path)
                .map_err(|e| FixtureError::from_fs(&self.path, e))?;
        }
        Ok(())
    }

    fn lock(&self) -> FixtureResult<StoreLock> {
        let lock_path = self.lock_path();
        let lock_error = |e: std::io::Error| FixtureError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(lock_error)?;
        }
        let lock_file = File::create(&lock_path).map_err(lock_error)?;
        lock_file.lock_exclusive().map_err(lock_error)?;

        Ok(StoreLock::held(FileLockGuard(lock_file)))
    }
}

struct FileLockGuard(File);

impl Drop for FileLockGuard {
    fn drop(&mut self) {
        let _ = self.0.unlock();
    }
}
