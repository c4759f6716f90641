//! SQL statement templates with a single `%s` table placeholder.

use std::fmt;

use crate::error::{FixtureError, FixtureResult};

const PLACEHOLDER: &str = "%s";

/// A select or delete template such as `SELECT * FROM %s`.
///
/// Holds exactly one placeholder; rendering substitutes the collection name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlTemplate(String);

impl SqlTemplate {
    pub const DEFAULT_SELECT: &'static str = "SELECT * FROM %s";
    pub const DEFAULT_DELETE: &'static str = "DELETE FROM %s";

    pub fn parse(template: &str) -> FixtureResult<Self> {
        match template.matches(PLACEHOLDER).count() {
            1 => Ok(Self(template.to_string())),
            n => Err(FixtureError::InvalidArgument(format!(
                "SQL template '{template}' must contain exactly one '{PLACEHOLDER}', found {n}"
            ))),
        }
    }

    pub fn default_select() -> Self {
        Self(Self::DEFAULT_SELECT.to_string())
    }

    pub fn default_delete() -> Self {
        Self(Self::DEFAULT_DELETE.to_string())
    }

    pub fn render(&self, collection: &str) -> String {
        self.0.replacen(PLACEHOLDER, collection, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
