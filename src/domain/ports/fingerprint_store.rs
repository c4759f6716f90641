//! FingerprintStore port - persistence of the fingerprint baseline
//!
//! The baseline is the fingerprint map recorded after the last successful
//! build. Implementations must write atomically: an interrupted save leaves
//! the previous baseline intact.

use std::any::Any;

use crate::domain::entities::FingerprintMap;
use crate::error::FixtureResult;

/// Held for the duration of a build pass; released on drop.
pub struct StoreLock {
    guard: Option<Box<dyn Any>>,
}

impl StoreLock {
    /// A lock backed by `guard`; dropping the `StoreLock` drops the guard.
    pub fn held(guard: impl Any) -> Self {
        Self {
            guard: Some(Box::new(guard)),
        }
    }

    /// No cross-process coordination.
    pub fn unguarded() -> Self {
        Self { guard: None }
    }

    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }
}

impl std::fmt::Debug for StoreLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreLock")
            .field("held", &self.is_held())
            .finish()
    }
}

pub trait FingerprintStore {
    /// Load the baseline; `Ok(None)` when none has been recorded.
    fn load(&self) -> FixtureResult<Option<FingerprintMap>>;

    /// Replace the baseline.
    fn save(&self, fingerprints: &FingerprintMap) -> FixtureResult<()>;

    /// Forget the baseline so the next run rebuilds.
    fn clear(&self) -> FixtureResult<()>;

    /// Take an exclusive lock against concurrent build passes.
    fn lock(&self) -> FixtureResult<StoreLock> {
        Ok(StoreLock::unguarded())
    }
}

impl<T: FingerprintStore + ?Sized> FingerprintStore for &T {
    fn load(&self) -> FixtureResult<Option<FingerprintMap>> {
        (**self).load()
    }

    fn save(&self, fingerprints: &FingerprintMap) -> FixtureResult<()> {
        (**self).save(fingerprints)
    }

    fn clear(&self) -> FixtureResult<()> {
        (**self).clear()
    }

    fn lock(&self) -> FixtureResult<StoreLock> {
        (**self).lock()
    }
}

/// In-memory store for unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryFingerprintStore {
    pub baseline: std::cell::RefCell<Option<FingerprintMap>>,
    pub saves: std::cell::Cell<usize>,
}

#[cfg(test)]
impl FingerprintStore for MemoryFingerprintStore {
    fn load(&self) -> FixtureResult<Option<FingerprintMap>> {
        Ok(self.baseline.borrow().clone())
    }

    fn save(&self, fingerprints: &FingerprintMap) -> FixtureResult<()> {
        *self.baseline.borrow_mut() = Some(fingerprints.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn clear(&self) -> FixtureResult<()> {
        *self.baseline.borrow_mut() = None;
        Ok(())
    }
}
