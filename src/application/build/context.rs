//! What a generation procedure sees during the Building state

use crate::config::BuildConfiguration;
use crate::domain::entities::{EntityRef, NameRegistry};
use crate::domain::ports::{DataStore, Statement, StatementKind};
use crate::domain::services::{NamedCollection, RecordNamer};
use crate::error::FixtureResult;

/// Handed to the generation procedure for one build pass.
///
/// Owns the pass's [`NameRegistry`]; it is dropped with the context.
pub struct BuildContext<'a, S: DataStore + ?Sized> {
    config: &'a BuildConfiguration,
    store: &'a mut S,
    registry: NameRegistry,
}

impl<'a, S: DataStore + ?Sized> BuildContext<'a, S> {
    pub fn new(config: &'a BuildConfiguration, store: &'a mut S) -> Self {
        Self {
            config,
            store,
            registry: NameRegistry::new(),
        }
    }

    pub fn config(&self) -> &BuildConfiguration {
        self.config
    }

    pub fn store(&self) -> &S {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut *self.store
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// Give `records` a stable fixture name; see [`NameRegistry::assign_name`].
    pub fn name<'r, I, R>(&mut self, name: &str, records: I) -> FixtureResult<Vec<&'r EntityRef>>
    where
        I: IntoIterator<Item = R>,
        R: Into<Option<&'r EntityRef>>,
    {
        self.registry.assign_name(name, records)
    }

    /// Every table minus the skip list, sorted.
    pub fn tables(&self) -> FixtureResult<Vec<String>> {
        let mut tables: Vec<String> = self
            .store
            .tables()?
            .into_iter()
            .filter(|t| !self.config.is_skipped(t))
            .collect();
        tables.sort();
        Ok(tables)
    }

    pub fn select_statement(&self, collection: &str) -> Statement {
        Statement {
            kind: StatementKind::Select,
            collection: collection.to_string(),
            sql: self.config.select_sql().render(collection),
        }
    }

    pub fn delete_statement(&self, collection: &str) -> Statement {
        Statement {
            kind: StatementKind::Delete,
            collection: collection.to_string(),
            sql: self.config.delete_sql().render(collection),
        }
    }

    pub fn select_all(&mut self, collection: &str) -> FixtureResult<Vec<EntityRef>> {
        let statement = self.select_statement(collection);
        let rows = self.store.select(&statement)?;
        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| EntityRef::from_row(collection, row, index as i64 + 1))
            .collect())
    }

    pub fn delete_all(&mut self, collection: &str) -> FixtureResult<u64> {
        let statement = self.delete_statement(collection);
        Ok(self.store.execute(&statement)?)
    }

    /// Empty every non-skipped table before generation starts.
    pub fn delete_tables(&mut self) -> FixtureResult<()> {
        for table in self.tables()? {
            let deleted = self.delete_all(&table)?;
            tracing::debug!(table = %table, deleted, "cleared table");
        }
        Ok(())
    }

    /// Dump and name every non-skipped table.
    pub(crate) fn export(&mut self) -> FixtureResult<Vec<NamedCollection>> {
        let mut dumped = Vec::new();
        for table in self.tables()? {
            let records = self.select_all(&table)?;
            dumped.push((table, records));
        }

        let namer = RecordNamer::new(
            &self.registry,
            self.config.record_name_fields(),
            self.config.naming_callbacks(),
        );
        Ok(dumped
            .into_iter()
            .map(|(table, records)| namer.name_collection(&table, records))
            .collect())
    }
}
