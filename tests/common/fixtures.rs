//! Test fixtures - schema content and a sample generation procedure.

use serde_json::{json, Value};

use fixture_builder::{BuildContext, EntityRef, FixtureResult, MemoryDataStore, Row};

pub const SCHEMA_RB: &str = r#"ActiveRecord::Schema.define(version: 2024_01_01) do
  create_table "users" do |t|
    t.string "display_name"
    t.string "login"
  end

  create_table "posts" do |t|
    t.integer "user_id"
    t.string "title"
  end
end
"#;

/// `SCHEMA_RB` after a migration adding `comments`
pub const SCHEMA_RB_MIGRATED: &str = r#"ActiveRecord::Schema.define(version: 2024_02_01) do
  create_table "users" do |t|
    t.string "display_name"
    t.string "login"
  end

  create_table "posts" do |t|
    t.integer "user_id"
    t.string "title"
  end

  create_table "comments" do |t|
    t.integer "post_id"
    t.text "body"
  end
end
"#;

pub const TEST_STRUCTURE_SQL: &str = "CREATE TABLE users (id integer PRIMARY KEY);\n";

pub fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Data store with the blog tables and a populated migrations table.
pub fn blog_store() -> MemoryDataStore {
    let mut db = MemoryDataStore::new();
    db.create_table("users")
        .create_table("posts")
        .create_table("schema_migrations");
    db.insert("schema_migrations", row(json!({"version": "20240101000000"})))
        .expect("schema_migrations exists");
    db
}

/// Insert into `table` and return the record for naming.
pub fn create(
    ctx: &mut BuildContext<'_, MemoryDataStore>,
    table: &str,
    value: Value,
) -> FixtureResult<EntityRef> {
    let id = ctx.store_mut().insert(table, row(value))?;
    Ok(EntityRef::new(table, id))
}

/// Two users (one custom-named) and a post.
pub fn seed_blog(ctx: &mut BuildContext<'_, MemoryDataStore>) -> FixtureResult<()> {
    let alice = create(
        ctx,
        "users",
        json!({"display_name": "Alice Admin", "login": "alice"}),
    )?;
    let bob = create(ctx, "users", json!({"login": "bob"}))?;
    create(
        ctx,
        "posts",
        json!({"user_id": alice.identifier(), "title": "Hello World"}),
    )?;
    ctx.name("bobby", [&bob])?;
    Ok(())
}
