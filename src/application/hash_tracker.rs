//! Hash Tracker
//!
//! Computes content fingerprints for the tracked file set and moves them
//! in and out of a `FingerprintStore`. Fingerprints are computed eagerly:
//! on construction and whenever the tracked set is replaced.

use std::path::{Path, PathBuf};

use crate::domain::entities::{normalize_tracked_path, FingerprintMap};
use crate::domain::ports::{FileSystem, FingerprintStore};
use crate::domain::services::{Staleness, StalenessGate};
use crate::domain::value_objects::ContentHash;
use crate::error::{FixtureError, FixtureResult};

pub struct HashTracker<F: FileSystem> {
    fs: F,
    root: PathBuf,
    files: Vec<PathBuf>,
    current: FingerprintMap,
}

impl<F: FileSystem> HashTracker<F> {
    /// Track `files`, resolving relative paths against `root`.
    ///
    /// Fails if any tracked file cannot be read.
    pub fn new(fs: F, root: impl Into<PathBuf>, files: Vec<PathBuf>) -> FixtureResult<Self> {
        let root = root.into();
        let current = compute(&fs, &root, &files)?;
        Ok(Self {
            fs,
            root,
            files,
            current,
        })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Fingerprints as of the last (re)computation.
    pub fn current(&self) -> &FingerprintMap {
        &self.current
    }

    /// Replace the tracked set and recompute. On error nothing changes.
    pub fn set_files(&mut self, files: Vec<PathBuf>) -> FixtureResult<()> {
        self.current = compute(&self.fs, &self.root, &files)?;
        self.files = files;
        Ok(())
    }

    /// Fresh fingerprints for an arbitrary file set.
    pub fn compute_current(&self, files: &[PathBuf]) -> FixtureResult<FingerprintMap> {
        compute(&self.fs, &self.root, files)
    }

    pub fn load_persisted(
        &self,
        store: &(impl FingerprintStore + ?Sized),
    ) -> FixtureResult<Option<FingerprintMap>> {
        store.load()
    }

    /// Record the current fingerprints as the new baseline.
    pub fn persist(&self, store: &(impl FingerprintStore + ?Sized)) -> FixtureResult<()> {
        store.save(&self.current)?;
        tracing::info!(files = self.current.len(), "persisted fixture fingerprints");
        Ok(())
    }

    pub fn staleness(&self, store: &(impl FingerprintStore + ?Sized)) -> FixtureResult<Staleness> {
        let persisted = self.load_persisted(store)?;
        Ok(StalenessGate::evaluate(&self.current, persisted.as_ref()))
    }
}

fn compute<F: FileSystem>(fs: &F, root: &Path, files: &[PathBuf]) -> FixtureResult<FingerprintMap> {
    let mut fingerprints = FingerprintMap::new();
    for file in files {
        let full = root.join(file);
        let bytes = fs
            .read_bytes(&full)
            .map_err(|e| FixtureError::from_fs(&full, e))?;
        fingerprints.insert(normalize_tracked_path(file), ContentHash::from_bytes(&bytes));
    }
    tracing::debug!(files = fingerprints.len(), "computed fixture fingerprints");
    Ok(fingerprints)
}
