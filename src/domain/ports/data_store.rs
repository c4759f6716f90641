//! DataStore port - the query layer fixtures are generated against
//!
//! The engine only ever selects or deletes whole collections. Statements
//! carry both the rendered SQL (for real databases) and the structured
//! target, so adapters without a SQL engine can still serve them.

use std::fmt;

use crate::domain::entities::Row;

/// What a statement does to its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Delete,
}

/// A rendered select/delete statement for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub collection: String,
    pub sql: String,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Failure reported by a data store adapter.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DataStoreError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DataStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

pub trait DataStore {
    /// Every collection (table) currently defined.
    fn tables(&self) -> Result<Vec<String>, DataStoreError>;

    /// Run a select statement and return its rows.
    fn select(&mut self, statement: &Statement) -> Result<Vec<Row>, DataStoreError>;

    /// Run a statement that returns no rows; yields the affected row count.
    fn execute(&mut self, statement: &Statement) -> Result<u64, DataStoreError>;
}
