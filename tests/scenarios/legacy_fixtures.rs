//! Scenario: Hand-written fixtures alongside generated ones
//!
//! Journey: A project keeps a few legacy YAML fixtures. Editing them must
//! invalidate generated fixtures just like a schema change does.

use fixture_builder::{factory, BuildOutcome, Staleness};

use crate::common::*;

fn legacy_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_project_file("spec/legacy/accounts.yml", "acme:\n  name: Acme\n");
    env.write_project_file("spec/legacy/notes.txt", "not a fixture");
    env
}

#[test]
fn scenario_legacy_fixtures_are_tracked() {
    let env = legacy_env();
    let config = env
        .config_builder()
        .legacy_fixtures(["spec/legacy/*.yml"])
        .build()
        .unwrap();

    let report = factory(&config, &mut blog_store(), seed_blog).unwrap();

    let tracked: Vec<&str> = report.fingerprints.paths().collect();
    assert_eq!(tracked, vec!["db/schema.rb", "spec/legacy/accounts.yml"]);
}

#[test]
fn scenario_editing_legacy_fixture_forces_rebuild() {
    let env = legacy_env();
    let config = || {
        env.config_builder()
            .legacy_fixtures(["spec/legacy/*.yml"])
            .build()
            .unwrap()
    };
    let mut db = blog_store();

    factory(&config(), &mut db, seed_blog).unwrap();
    assert_eq!(
        factory(&config(), &mut db, seed_blog).unwrap().outcome,
        BuildOutcome::Skipped
    );

    env.write_project_file("spec/legacy/accounts.yml", "acme:\n  name: Acme Corp\n");
    let report = factory(&config(), &mut db, seed_blog).unwrap();

    match report.staleness {
        Staleness::Changed(diff) => assert_eq!(diff.changed, vec!["spec/legacy/accounts.yml"]),
        other => panic!("expected legacy change, got {other:?}"),
    }
}

#[test]
fn scenario_explicit_files_to_check_replace_discovery() {
    let env = TestEnv::new();
    env.write_project_file("db/structure.sql", TEST_STRUCTURE_SQL);
    let config = env
        .config_builder()
        .files_to_check(["db/structure.sql"])
        .build()
        .unwrap();

    let report = factory(&config, &mut blog_store(), seed_blog).unwrap();

    let tracked: Vec<&str> = report.fingerprints.paths().collect();
    assert_eq!(tracked, vec!["db/structure.sql"]);
}
