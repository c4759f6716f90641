//! Generated records and their naming identity.

use serde_json::{Map, Value};

/// One row as returned by a data store: column name to value, in column order.
pub type Row = Map<String, Value>;

/// Identity of a generated record for naming purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey {
    pub collection: String,
    pub identifier: i64,
}

impl NameKey {
    pub fn new(collection: impl Into<String>, identifier: i64) -> Self {
        Self {
            collection: collection.into(),
            identifier,
        }
    }
}

/// A record produced during generation, decoupled from any storage binding.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRef {
    collection_id: String,
    identifier: i64,
    fields: Row,
}

impl EntityRef {
    pub fn new(collection_id: impl Into<String>, identifier: i64) -> Self {
        Self {
            collection_id: collection_id.into(),
            identifier,
            fields: Row::new(),
        }
    }

    /// Build from a data-store row, reading the `id` column.
    ///
    /// Rows without a numeric `id` (join tables) use `ordinal` instead.
    pub fn from_row(collection_id: impl Into<String>, row: Row, ordinal: i64) -> Self {
        let identifier = row.get("id").and_then(numeric_id).unwrap_or(ordinal);
        Self {
            collection_id: collection_id.into(),
            identifier,
            fields: row,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn identifier(&self) -> i64 {
        self.identifier
    }

    pub fn fields(&self) -> &Row {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(self.collection_id.clone(), self.identifier)
    }
}

fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
