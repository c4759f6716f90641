//! In-memory data store
//!
//! A `DataStore` adapter without a SQL engine: tables are vectors of rows
//! and statements are served from their structured target. Useful for
//! embedding the builder in tests, or for generating fixtures from plain
//! Rust data.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::entities::Row;
use crate::domain::ports::{DataStore, DataStoreError, Statement, StatementKind};

#[derive(Debug, Clone, Default)]
struct Table {
    rows: Vec<Row>,
    next_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDataStore {
    tables: BTreeMap<String, Table>,
    log: Vec<Statement>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a table; existing tables keep their rows.
    pub fn create_table(&mut self, name: &str) -> &mut Self {
        self.tables.entry(name.to_string()).or_insert_with(|| Table {
            rows: Vec::new(),
            next_id: 1,
        });
        self
    }

    /// Insert a row, assigning an auto-increment `id` when the row has none.
    ///
    /// Returns the row's id.
    pub fn insert(&mut self, table: &str, mut row: Row) -> Result<i64, DataStoreError> {
        let table = self
            .tables
            .get_mut(table)
            .ok_or_else(|| DataStoreError::new(format!("no such table: {table}")))?;

        let id = match row.get("id").and_then(Value::as_i64) {
            Some(id) => id,
            None => {
                let id = table.next_id;
                row.insert("id".to_string(), Value::from(id));
                id
            }
        };
        table.next_id = table.next_id.max(id + 1);
        table.rows.push(row);
        Ok(id)
    }

    pub fn rows(&self, table: &str) -> &[Row] {
        self.tables
            .get(table)
            .map(|t| t.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Every statement served so far, in order.
    pub fn statements(&self) -> &[Statement] {
        &self.log
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut Table, DataStoreError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DataStoreError::new(format!("no such table: {name}")))
    }
}

impl DataStore for MemoryDataStore {
    fn tables(&self) -> Result<Vec<String>, DataStoreError> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn select(&mut self, statement: &Statement) -> Result<Vec<Row>, DataStoreError> {
        if statement.kind != StatementKind::Select {
            return Err(DataStoreError::new(format!(
                "not a select statement: {statement}"
            )));
        }
        self.log.push(statement.clone());
        Ok(self.table_mut(&statement.collection)?.rows.clone())
    }

    fn execute(&mut self, statement: &Statement) -> Result<u64, DataStoreError> {
        self.log.push(statement.clone());
        match statement.kind {
            StatementKind::Delete => {
                let table = self.table_mut(&statement.collection)?;
                let deleted = table.rows.len() as u64;
                table.rows.clear();
                Ok(deleted)
            }
            StatementKind::Select => Ok(0),
        }
    }
}
