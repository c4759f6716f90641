//! Scenario: Schema-driven rebuild cycle
//!
//! Journey: A developer runs the test suite repeatedly while migrating.
//!
//! Steps:
//! 1. First run generates fixtures and records fingerprints
//! 2. Re-running without changes skips generation
//! 3. A migration edits `db/schema.rb`; the next run rebuilds
//! 4. A new structure file appears; the next run rebuilds again

use std::cell::Cell;

use fixture_builder::{factory, BuildOutcome, BuildState, FixtureError, Staleness};

use crate::common::*;
use crate::{assert_file_exists, assert_output_contains};

#[test]
fn scenario_first_run_then_skip_then_rebuild_on_migration() {
    let env = TestEnv::new();
    let mut db = blog_store();

    // Step 1: nothing recorded yet
    let report = factory(&env.config(), &mut db, seed_blog).unwrap();
    assert_eq!(report.outcome, BuildOutcome::Rebuilt);
    assert_eq!(report.staleness, Staleness::FirstRun);
    assert_file_exists!(env, "tmp/fixture_builder.yml");
    assert_file_exists!(env, "spec/fixtures/users.yml");
    assert_file_exists!(env, "spec/fixtures/posts.yml");
    assert!(!env.project_path("spec/fixtures/schema_migrations.yml").exists());

    // Step 2: unchanged schema
    let calls = Cell::new(0);
    let report = factory(&env.config(), &mut db, |ctx| {
        calls.set(calls.get() + 1);
        seed_blog(ctx)
    })
    .unwrap();
    assert_eq!(report.outcome, BuildOutcome::Skipped);
    assert_eq!(calls.get(), 0);
    assert_eq!(
        report.transitions,
        vec![BuildState::Idle, BuildState::Checking, BuildState::Skipped]
    );

    // Step 3: migration
    env.write_project_file("db/schema.rb", SCHEMA_RB_MIGRATED);
    let report = factory(&env.config(), &mut db, seed_blog).unwrap();
    assert!(report.rebuilt());
    match &report.staleness {
        Staleness::Changed(diff) => assert_eq!(diff.changed, vec!["db/schema.rb"]),
        other => panic!("expected changed schema, got {other:?}"),
    }

    // Step 4: structure dump added
    env.write_project_file("db/test_structure.sql", TEST_STRUCTURE_SQL);
    let report = factory(&env.config(), &mut db, seed_blog).unwrap();
    match &report.staleness {
        Staleness::Changed(diff) => assert_eq!(diff.added, vec!["db/test_structure.sql"]),
        other => panic!("expected added structure file, got {other:?}"),
    }
    assert_eq!(report.fingerprints.len(), 2);
}

#[test]
fn scenario_exported_fixtures_use_stable_names() {
    let env = TestEnv::new();
    let mut db = blog_store();

    factory(&env.config(), &mut db, seed_blog).unwrap();

    let users = env.read_project_file("spec/fixtures/users.yml");
    assert!(users.contains("alice_admin:"), "users.yml:\n{users}");
    assert!(users.contains("bobby:"), "users.yml:\n{users}");
    assert!(users.contains("login: bob"), "users.yml:\n{users}");

    let posts = env.read_project_file("spec/fixtures/posts.yml");
    assert!(posts.contains("hello_world:"), "posts.yml:\n{posts}");
}

#[test]
fn scenario_rebuild_replaces_previous_rows() {
    let env = TestEnv::new();
    let mut db = blog_store();

    factory(&env.config(), &mut db, seed_blog).unwrap();
    env.write_project_file("db/schema.rb", SCHEMA_RB_MIGRATED);
    let report = factory(&env.config(), &mut db, seed_blog).unwrap();

    assert_eq!(report.exported.get("users"), Some(&2));
    assert_eq!(db.rows("users").len(), 2);
    assert_eq!(db.rows("schema_migrations").len(), 1);
}

#[test]
fn scenario_failed_generation_is_retried_next_run() {
    let env = TestEnv::new();
    let mut db = blog_store();

    let err = factory(&env.config(), &mut db, |ctx| {
        seed_blog(ctx)?;
        Err(FixtureError::generation("validation failed: title can't be blank"))
    })
    .unwrap_err();
    assert!(err.to_string().contains("title can't be blank"));
    assert!(!env.project_path("tmp/fixture_builder.yml").exists());

    let report = factory(&env.config(), &mut db, seed_blog).unwrap();
    assert_eq!(report.staleness, Staleness::FirstRun);
    assert_file_exists!(env, "tmp/fixture_builder.yml");
}

#[test]
fn scenario_corrupt_state_fails_until_reset() {
    let env = TestEnv::new();
    let mut db = blog_store();
    env.write_project_file("tmp/fixture_builder.yml", "db/schema.rb: [not, a, digest");

    let err = factory(&env.config(), &mut db, seed_blog).unwrap_err();
    assert!(matches!(err, FixtureError::Parse { .. }));

    let result = env.run(&["reset"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_output_contains!(result, "removed");

    let report = factory(&env.config(), &mut db, seed_blog).unwrap();
    assert!(report.rebuilt());
}

#[test]
fn scenario_project_without_schema_files_builds_once() {
    let env = TestEnv::empty();
    let mut db = blog_store();

    let first = factory(&env.config(), &mut db, seed_blog).unwrap();
    let second = factory(&env.config(), &mut db, seed_blog).unwrap();

    assert!(first.rebuilt());
    assert!(first.fingerprints.is_empty());
    assert_eq!(second.outcome, BuildOutcome::Skipped);
    assert_file_exists!(env, "test/fixtures/users.yml");
}

#[test]
fn scenario_state_lock_file_sits_beside_state() {
    let env = TestEnv::new();
    let mut db = blog_store();

    factory(&env.config(), &mut db, seed_blog).unwrap();

    assert_file_exists!(env, "tmp/fixture_builder.yml.lock");
}

#[test]
fn scenario_custom_state_and_fixture_locations() {
    let env = TestEnv::new();
    let mut db = blog_store();
    let config = env
        .config_builder()
        .fixture_builder_file("var/state/fingerprints.yml")
        .fixtures_dir("fixtures/generated")
        .lock_state(false)
        .build()
        .unwrap();

    factory(&config, &mut db, seed_blog).unwrap();

    assert_file_exists!(env, "var/state/fingerprints.yml");
    assert_file_exists!(env, "fixtures/generated/users.yml");
    assert!(!env.project_path("var/state/fingerprints.yml.lock").exists());
}
