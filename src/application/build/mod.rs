//! Build Module
//!
//! Gated regeneration of fixtures.
//!
//! ## Structure
//!
//! - `context` - What generation code can touch (`BuildContext`)
//! - `result` - State machine and report types (`BuildState`, `BuildReport`)
//! - `use_case` - The pass itself (`FixtureBuilder`)
//!
//! ## Usage
//!
//! ```ignore
//! use fixture_builder::application::build::FixtureBuilder;
//!
//! let mut builder = FixtureBuilder::new(&config, LocalFs::new(), store, sink);
//! let report = builder.run(&mut db, |ctx| {
//!     let admin = insert_user(ctx.store_mut())?;
//!     ctx.name("admin", [&admin])?;
//!     Ok(())
//! })?;
//! ```

mod context;
mod result;
mod use_case;

pub use context::BuildContext;
pub use result::{BuildOutcome, BuildReport, BuildState};
pub use use_case::FixtureBuilder;
