//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod sql_template;

pub use hash::ContentHash;
pub use sql_template::SqlTemplate;
