//! YAML fixture writer
//!
//! Writes one `<collection>.yml` per exported collection, mapping each
//! fixture name to the record's columns.

use std::path::{Path, PathBuf};

use serde_yaml_ng::{Mapping, Value as YamlValue};

use crate::domain::ports::{FileSystem, FixtureSink};
use crate::domain::services::NamedCollection;
use crate::error::{FixtureError, FixtureResult};
use crate::infrastructure::fs::LocalFs;

pub struct YamlFixtureSink<F: FileSystem = LocalFs> {
    dir: PathBuf,
    fs: F,
}

impl YamlFixtureSink<LocalFs> {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(dir, LocalFs::new())
    }
}

impl<F: FileSystem> YamlFixtureSink<F> {
    pub fn with_fs(dir: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            dir: dir.into(),
            fs,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn fixture_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.yml"))
    }
}

/// Render one collection as a YAML document, entries in export order.
pub fn render_collection(collection: &NamedCollection) -> Result<String, serde_yaml_ng::Error> {
    let mut document = Mapping::new();
    for named in &collection.records {
        let fields = serde_yaml_ng::to_value(named.record.fields())?;
        document.insert(YamlValue::String(named.name.clone()), fields);
    }
    serde_yaml_ng::to_string(&document)
}

impl<F: FileSystem> FixtureSink for YamlFixtureSink<F> {
    fn write(&mut self, collections: &[NamedCollection]) -> FixtureResult<()> {
        for collection in collections {
            let path = self.fixture_path(&collection.collection);
            let content = render_collection(collection).map_err(|e| FixtureError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
            self.fs
                .write(&path, &content)
                .map_err(|e| FixtureError::from_fs(&path, e))?;
            tracing::debug!(
                collection = %collection.collection,
                records = collection.len(),
                path = %path.display(),
                "wrote fixture file"
            );
        }
        Ok(())
    }
}
