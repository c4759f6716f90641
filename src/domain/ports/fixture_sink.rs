//! FixtureSink port - where named collections are exported after a build

use crate::domain::services::NamedCollection;
use crate::error::FixtureResult;

pub trait FixtureSink {
    /// Write every collection, including empty ones.
    fn write(&mut self, collections: &[NamedCollection]) -> FixtureResult<()>;
}

impl<T: FixtureSink + ?Sized> FixtureSink for &mut T {
    fn write(&mut self, collections: &[NamedCollection]) -> FixtureResult<()> {
        (**self).write(collections)
    }
}

/// Keeps every export in memory; for unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub exports: Vec<Vec<NamedCollection>>,
}

#[cfg(test)]
impl FixtureSink for MemorySink {
    fn write(&mut self, collections: &[NamedCollection]) -> FixtureResult<()> {
        self.exports.push(collections.to_vec());
        Ok(())
    }
}
