//! Scenario: Naming generated records
//!
//! Journey: A developer wants fixture entries with readable names so
//! tests can say `users(:admin)` instead of relying on ids.

use std::sync::{Arc, Mutex};

use serde_json::json;

use fixture_builder::{factory, EntityRef, FixtureError};

use crate::common::*;

#[test]
fn scenario_custom_names_override_inferred_ones() {
    let env = TestEnv::new();
    let mut db = blog_store();

    let report = factory(&env.config(), &mut db, |ctx| {
        let admin = create(ctx, "users", json!({"display_name": "Alice Admin"}))?;
        ctx.name("admin", [&admin])?;
        Ok(())
    })
    .unwrap();

    assert_eq!(report.custom_names, 1);
    let users = env.read_project_file("spec/fixtures/users.yml");
    assert!(users.contains("admin:"), "users.yml:\n{users}");
    assert!(!users.contains("alice_admin:"), "users.yml:\n{users}");
}

#[test]
fn scenario_custom_name_beats_an_earlier_record_inferring_it() {
    let env = TestEnv::new();
    let mut db = blog_store();

    factory(&env.config(), &mut db, |ctx| {
        create(ctx, "users", json!({"display_name": "Admin", "login": "first"}))?;
        let admin = create(ctx, "users", json!({"login": "second"}))?;
        ctx.name("admin", [&admin])?;
        Ok(())
    })
    .unwrap();

    let users: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(&env.read_project_file("spec/fixtures/users.yml")).unwrap();
    assert_eq!(users["admin"]["id"], serde_yaml_ng::Value::from(2));
    assert_eq!(users["admin"]["login"], serde_yaml_ng::Value::from("second"));
    assert_eq!(users["admin_1"]["id"], serde_yaml_ng::Value::from(1));
}

#[test]
fn scenario_one_name_for_many_records_is_deduplicated() {
    let env = TestEnv::new();
    let mut db = blog_store();

    factory(&env.config(), &mut db, |ctx| {
        let a = create(ctx, "users", json!({}))?;
        let b = create(ctx, "users", json!({}))?;
        ctx.name("guest", [&a, &b])?;
        Ok(())
    })
    .unwrap();

    let users = env.read_project_file("spec/fixtures/users.yml");
    assert!(users.contains("guest:"), "users.yml:\n{users}");
    assert!(users.contains("guest_1:"), "users.yml:\n{users}");
}

#[test]
fn scenario_naming_a_record_twice_aborts() {
    let env = TestEnv::new();
    let mut db = blog_store();

    let err = factory(&env.config(), &mut db, |ctx| {
        let admin = create(ctx, "users", json!({}))?;
        ctx.name("admin", [&admin])?;
        ctx.name("root", [&admin])?;
        Ok(())
    })
    .unwrap_err();

    match err {
        FixtureError::DuplicateName {
            collection,
            identifier,
            existing,
        } => {
            assert_eq!(collection, "users");
            assert_eq!(identifier, 1);
            assert_eq!(existing, "admin");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!env.project_path("tmp/fixture_builder.yml").exists());
}

#[test]
fn scenario_naming_nothing_is_rejected() {
    let env = TestEnv::new();
    let mut db = blog_store();

    let err = factory(&env.config(), &mut db, |ctx| {
        ctx.name("ghost", [None::<&EntityRef>])?;
        Ok(())
    })
    .unwrap_err();

    assert!(matches!(err, FixtureError::InvalidArgument(_)));
}

#[test]
fn scenario_collection_callback_names_every_row() {
    let env = TestEnv::new();
    let mut db = blog_store();
    let config = env
        .config_builder()
        .name_collection_with("posts", |record, index| {
            let title = record
                .field("title")
                .and_then(|v| v.as_str())
                .unwrap_or("untitled");
            format!("{}_{index}", title.to_lowercase().replace(' ', "_"))
        })
        .build()
        .unwrap();

    factory(&config, &mut db, seed_blog).unwrap();

    let posts = env.read_project_file("spec/fixtures/posts.yml");
    assert!(posts.contains("hello_world_1:"), "posts.yml:\n{posts}");
}

#[test]
fn scenario_custom_record_name_fields() {
    let env = TestEnv::new();
    let mut db = blog_store();
    let config = env.config_builder().record_name_fields(["login"]).build().unwrap();

    factory(&config, &mut db, |ctx| {
        create(ctx, "users", json!({"display_name": "Alice Admin", "login": "alice"}))?;
        Ok(())
    })
    .unwrap();

    let users = env.read_project_file("spec/fixtures/users.yml");
    assert!(users.contains("alice:"), "users.yml:\n{users}");
    assert!(!users.contains("alice_admin:"), "users.yml:\n{users}");
}

#[test]
fn scenario_after_build_receives_exported_collections() {
    let env = TestEnv::new();
    let mut db = blog_store();
    let seen: Arc<Mutex<Vec<(String, usize)>>> = Arc::default();
    let hook_seen = Arc::clone(&seen);
    let config = env
        .config_builder()
        .after_build(move |collections| {
            let mut seen = hook_seen.lock().unwrap();
            for collection in collections {
                seen.push((collection.collection.clone(), collection.len()));
            }
            Ok(())
        })
        .build()
        .unwrap();

    factory(&config, &mut db, seed_blog).unwrap();
    factory(&config, &mut db, seed_blog).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![("posts".to_string(), 1), ("users".to_string(), 2)]
    );
}
