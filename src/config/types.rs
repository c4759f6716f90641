//! Configuration type definitions

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::EntityRef;
use crate::domain::services::{NamedCollection, NamingCallback};
use crate::domain::value_objects::SqlTemplate;
use crate::error::FixtureResult;
use crate::infrastructure::discovery;

/// Hook run after fixtures are exported, before fingerprints are persisted.
pub type AfterBuildHook = Box<dyn Fn(&[NamedCollection]) -> FixtureResult<()> + Send + Sync>;

/// Default location of the fingerprint store, relative to the project root
pub const DEFAULT_FIXTURE_BUILDER_FILE: &str = "tmp/fixture_builder.yml";

pub const DEFAULT_SKIP_TABLES: &[&str] = &["schema_migrations"];

pub const DEFAULT_RECORD_NAME_FIELDS: &[&str] = &[
    "unique_name",
    "display_name",
    "name",
    "title",
    "username",
    "login",
];

/// Serializable subset of the configuration, as read from
/// `fixture_builder.toml`. Unset fields fall back to defaults at build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureSettings {
    #[serde(default)]
    pub select_sql: Option<String>,

    #[serde(default)]
    pub delete_sql: Option<String>,

    #[serde(default)]
    pub skip_tables: Option<Vec<String>>,

    #[serde(default)]
    pub files_to_check: Option<Vec<PathBuf>>,

    #[serde(default)]
    pub record_name_fields: Option<Vec<String>>,

    #[serde(default)]
    pub fixture_builder_file: Option<PathBuf>,

    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,

    #[serde(default)]
    pub legacy_fixtures: Vec<String>,

    #[serde(default)]
    pub lock_state: Option<bool>,
}

/// Everything one invocation needs, resolved up front and immutable after.
pub struct BuildConfiguration {
    root: PathBuf,
    files_to_check: Vec<PathBuf>,
    legacy_fixtures: Vec<PathBuf>,
    select_sql: SqlTemplate,
    delete_sql: SqlTemplate,
    skip_tables: Vec<String>,
    record_name_fields: Vec<String>,
    fixture_builder_file: PathBuf,
    fixtures_dir: PathBuf,
    lock_state: bool,
    naming_callbacks: HashMap<String, NamingCallback>,
    after_build: Option<AfterBuildHook>,
}

impl BuildConfiguration {
    pub fn builder(root: impl Into<PathBuf>) -> BuildConfigurationBuilder {
        BuildConfigurationBuilder::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Tracked files, legacy fixtures included.
    pub fn files_to_check(&self) -> &[PathBuf] {
        &self.files_to_check
    }

    pub fn legacy_fixtures(&self) -> &[PathBuf] {
        &self.legacy_fixtures
    }

    pub fn select_sql(&self) -> &SqlTemplate {
        &self.select_sql
    }

    pub fn delete_sql(&self) -> &SqlTemplate {
        &self.delete_sql
    }

    pub fn skip_tables(&self) -> &[String] {
        &self.skip_tables
    }

    pub fn is_skipped(&self, table: &str) -> bool {
        self.skip_tables.iter().any(|t| t == table)
    }

    pub fn record_name_fields(&self) -> &[String] {
        &self.record_name_fields
    }

    pub fn fixture_builder_file(&self) -> &Path {
        &self.fixture_builder_file
    }

    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }

    pub fn lock_state(&self) -> bool {
        self.lock_state
    }

    pub fn naming_callbacks(&self) -> &HashMap<String, NamingCallback> {
        &self.naming_callbacks
    }

    pub fn after_build(&self) -> Option<&AfterBuildHook> {
        self.after_build.as_ref()
    }
}

impl fmt::Debug for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut named: Vec<&str> = self.naming_callbacks.keys().map(String::as_str).collect();
        named.sort_unstable();
        f.debug_struct("BuildConfiguration")
            .field("root", &self.root)
            .field("files_to_check", &self.files_to_check)
            .field("select_sql", &self.select_sql)
            .field("delete_sql", &self.delete_sql)
            .field("skip_tables", &self.skip_tables)
            .field("record_name_fields", &self.record_name_fields)
            .field("fixture_builder_file", &self.fixture_builder_file)
            .field("fixtures_dir", &self.fixtures_dir)
            .field("lock_state", &self.lock_state)
            .field("naming_callbacks", &named)
            .field("after_build", &self.after_build.is_some())
            .finish()
    }
}

/// Collects options; `build()` fills in defaults and validates.
pub struct BuildConfigurationBuilder {
    root: PathBuf,
    settings: FixtureSettings,
    naming_callbacks: HashMap<String, NamingCallback>,
    after_build: Option<AfterBuildHook>,
}

impl BuildConfigurationBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            settings: FixtureSettings::default(),
            naming_callbacks: HashMap::new(),
            after_build: None,
        }
    }

    /// Start from values loaded from a settings file.
    pub fn settings(mut self, settings: FixtureSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn select_sql(mut self, template: impl Into<String>) -> Self {
        self.settings.select_sql = Some(template.into());
        self
    }

    pub fn delete_sql(mut self, template: impl Into<String>) -> Self {
        self.settings.delete_sql = Some(template.into());
        self
    }

    pub fn skip_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.skip_tables = Some(tables.into_iter().map(Into::into).collect());
        self
    }

    pub fn files_to_check<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.settings.files_to_check = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn record_name_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.record_name_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn fixture_builder_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.fixture_builder_file = Some(path.into());
        self
    }

    pub fn fixtures_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.fixtures_dir = Some(path.into());
        self
    }

    /// Glob patterns whose matches join the tracked file set.
    pub fn legacy_fixtures<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.legacy_fixtures = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn lock_state(mut self, enabled: bool) -> Self {
        self.settings.lock_state = Some(enabled);
        self
    }

    /// Name every exported record of `collection` with `callback(record, row_index)`.
    pub fn name_collection_with<F>(mut self, collection: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&EntityRef, usize) -> String + Send + Sync + 'static,
    {
        self.naming_callbacks
            .insert(collection.into(), Box::new(callback));
        self
    }

    pub fn after_build<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[NamedCollection]) -> FixtureResult<()> + Send + Sync + 'static,
    {
        self.after_build = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> FixtureResult<BuildConfiguration> {
        let Self {
            root,
            settings,
            naming_callbacks,
            after_build,
        } = self;

        let select_sql = match settings.select_sql.as_deref() {
            Some(template) => SqlTemplate::parse(template)?,
            None => SqlTemplate::default_select(),
        };
        let delete_sql = match settings.delete_sql.as_deref() {
            Some(template) => SqlTemplate::parse(template)?,
            None => SqlTemplate::default_delete(),
        };

        let legacy_fixtures = discovery::expand_globs(&root, &settings.legacy_fixtures)?;
        let mut files_to_check = settings
            .files_to_check
            .unwrap_or_else(|| discovery::schema_definition_files(&root));
        for legacy in &legacy_fixtures {
            if !files_to_check.contains(legacy) {
                files_to_check.push(legacy.clone());
            }
        }

        let fixture_builder_file = root.join(
            settings
                .fixture_builder_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_BUILDER_FILE)),
        );
        let fixtures_dir = root.join(
            settings
                .fixtures_dir
                .unwrap_or_else(|| default_fixtures_dir(&root)),
        );

        Ok(BuildConfiguration {
            files_to_check,
            legacy_fixtures,
            select_sql,
            delete_sql,
            skip_tables: settings
                .skip_tables
                .unwrap_or_else(|| to_strings(DEFAULT_SKIP_TABLES)),
            record_name_fields: settings
                .record_name_fields
                .unwrap_or_else(|| to_strings(DEFAULT_RECORD_NAME_FIELDS)),
            fixture_builder_file,
            fixtures_dir,
            lock_state: settings.lock_state.unwrap_or(true),
            naming_callbacks,
            after_build,
            root,
        })
    }
}

/// `spec/fixtures` for projects with a `spec/` directory, else `test/fixtures`.
fn default_fixtures_dir(root: &Path) -> PathBuf {
    if root.join("spec").is_dir() {
        PathBuf::from("spec/fixtures")
    } else {
        PathBuf::from("test/fixtures")
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
