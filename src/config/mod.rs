//! Configuration for one fixture-builder invocation
//!
//! Resolution order:
//! 1. Builder calls (highest priority)
//! 2. Environment variables (FIXTURE_BUILDER_*)
//! 3. Project settings (`fixture_builder.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! Defaults are resolved once, in `BuildConfigurationBuilder::build`.

mod loader;
mod types;

pub use loader::{
    load_project_settings, load_with_warnings, with_env_overrides, ConfigWarning,
    ENV_FIXTURES_DIR, ENV_FIXTURE_BUILDER_FILE, ENV_SKIP_TABLES, SETTINGS_FILE,
};
pub use types::{
    AfterBuildHook, BuildConfiguration, BuildConfigurationBuilder, FixtureSettings,
    DEFAULT_FIXTURE_BUILDER_FILE, DEFAULT_RECORD_NAME_FIELDS, DEFAULT_SKIP_TABLES,
};
