//! Repository tests against an in-memory SQLite database.
//!
//! Migrations run for real, so these tests also cover the schema:
//! unique constraints, autoincrement ids, and history ordering.

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use namaste_bridge::domain::{AbhaUser, NewTranslationRecord};
use namaste_bridge::infra::{
    HistoryRepository, HistoryStore, Migrator, UserRepository, UserStore,
};

/// One shared in-memory connection; a pool of several would each get its
/// own empty database.
async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let conn = SeaDatabase::connect(options)
        .await
        .expect("in-memory sqlite");
    Migrator::up(&conn, None).await.expect("migrations apply");
    conn
}

fn user(abha_id: &str, email: &str, phone: &str) -> AbhaUser {
    AbhaUser {
        abha_id: abha_id.to_string(),
        name: "Test User".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        dob: "1990-01-01".to_string(),
        gender: "F".to_string(),
        address: "Somewhere".to_string(),
        created_at: "2024-01-01".to_string(),
    }
}

fn record(abha_id: &str, source_code: &str) -> NewTranslationRecord {
    NewTranslationRecord {
        abha_id: abha_id.to_string(),
        source_system: "NAMASTE".to_string(),
        source_code: source_code.to_string(),
        target_system: "ICD11_TM2".to_string(),
        target_code: "SM25".to_string(),
        snomed_ct_code: "49727002".to_string(),
        loinc_code: "64145-6".to_string(),
    }
}

#[tokio::test]
async fn users_are_seeded_and_found_by_credentials() {
    let db = test_db().await;
    let store = UserStore::new(db);

    assert_eq!(store.count().await.unwrap(), 0);

    store
        .insert(user("ABHA123", "a@example.com", "9999999999"))
        .await
        .unwrap();
    store
        .insert(user("ABHA456", "b@example.com", "8888888888"))
        .await
        .unwrap();

    assert_eq!(store.count().await.unwrap(), 2);

    // Both fields must match
    let found = store
        .find_by_credentials("ABHA123", "9999999999")
        .await
        .unwrap();
    assert_eq!(found.unwrap().email, "a@example.com");

    assert!(store
        .find_by_credentials("ABHA123", "8888888888")
        .await
        .unwrap()
        .is_none());
    assert!(store
        .find_by_credentials("ABHA999", "9999999999")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn find_by_abha_id_returns_profile() {
    let db = test_db().await;
    let store = UserStore::new(db);

    store
        .insert(user("ABHA123", "a@example.com", "9999999999"))
        .await
        .unwrap();

    let found = store.find_by_abha_id("ABHA123").await.unwrap().unwrap();
    assert_eq!(found.name, "Test User");

    assert!(store.find_by_abha_id("GHOST").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_abha_id_is_rejected_by_schema() {
    let db = test_db().await;
    let store = UserStore::new(db);

    store
        .insert(user("ABHA123", "a@example.com", "9999999999"))
        .await
        .unwrap();

    let duplicate_id = store
        .insert(user("ABHA123", "other@example.com", "1111111111"))
        .await;
    assert!(duplicate_id.is_err());

    let duplicate_email = store
        .insert(user("ABHA777", "a@example.com", "2222222222"))
        .await;
    assert!(duplicate_email.is_err());
}

#[tokio::test]
async fn history_ids_autoincrement_and_list_is_newest_first() {
    let db = test_db().await;
    let store = Arc::new(HistoryStore::new(db));

    let first = store.insert(record("ABHA123", "NAM001")).await.unwrap();
    let second = store.insert(record("ABHA123", "NAM002")).await.unwrap();
    let third = store.insert(record("ABHA123", "NAM003")).await.unwrap();
    // Another user's entry must not leak into the listing
    store.insert(record("ABHA456", "NAM009")).await.unwrap();

    assert!(second.id > first.id);
    assert!(third.id > second.id);

    let history = store.list_for_user("ABHA123").await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].source_code, "NAM003");
    assert_eq!(history[1].source_code, "NAM002");
    assert_eq!(history[2].source_code, "NAM001");
}

#[tokio::test]
async fn history_for_unknown_user_is_empty() {
    let db = test_db().await;
    let store = HistoryStore::new(db);

    assert!(store.list_for_user("GHOST").await.unwrap().is_empty());
}

#[tokio::test]
async fn orphaned_history_entries_are_tolerated() {
    // abha_id is deliberately not a foreign key
    let db = test_db().await;
    let store = HistoryStore::new(db);

    let saved = store.insert(record("NO_SUCH_USER", "NAM001")).await.unwrap();
    assert_eq!(saved.abha_id, "NO_SUCH_USER");
}
