//! Seed loader integration tests.

use std::path::PathBuf;

use user_directory::config::Config;
use user_directory::errors::AppError;
use user_directory::infra::{seed_users, Database, UserRepository, UserStore};

async fn database() -> Database {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    Database::connect(&config).await.unwrap()
}

/// Write `contents` to a per-test file under the system temp dir.
fn seed_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "user-directory-{}-{}.json",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

const SEED: &str = r#"[
    {"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
     "department": "Research", "userStatus": "A", "username": "ada"},
    {"firstName": "Alan", "lastName": "Turing", "email": "alan@example.com",
     "userStatus": "I", "username": "alan"}
]"#;

#[tokio::test]
async fn test_seed_loads_records() {
    let db = database().await;
    let path = seed_file("loads", SEED);

    let inserted = seed_users(db.connection(), &path).await.unwrap();

    assert_eq!(inserted, 2);
    let store = UserStore::new(db.get_connection());
    let users = store.list_all().await.unwrap();
    let alan = users.iter().find(|u| u.user_name == "alan").unwrap();
    assert_eq!(alan.first_name, "Alan");
    assert_eq!(alan.user_status, "I");
    assert!(alan.department.is_none());
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = database().await;
    let path = seed_file("idempotent", SEED);

    seed_users(db.connection(), &path).await.unwrap();
    let second = seed_users(db.connection(), &path).await.unwrap();

    assert_eq!(second, 0);
    let store = UserStore::new(db.get_connection());
    assert_eq!(store.list_all().await.unwrap().len(), 2);
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_seed_rejects_invalid_json() {
    let db = database().await;
    let path = seed_file("invalid", "{ not an array");

    let result = seed_users(db.connection(), &path).await;

    assert!(matches!(result, Err(AppError::Internal(msg)) if msg.contains("could not parse seed JSON")));
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_seed_missing_file() {
    let db = database().await;
    let path = std::env::temp_dir().join("user-directory-does-not-exist.json");

    let result = seed_users(db.connection(), &path).await;

    assert!(matches!(result, Err(AppError::Internal(_))));
}
