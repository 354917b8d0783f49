// ABOUTME: Integration tests for the user store
// ABOUTME: Covers find-or-create idempotency, concurrent first sightings, and lookups by id

use std::collections::HashSet;

use linkedpush_users::{ContactHandle, StorageError, UserStorage};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

/// In-memory database; a single connection so every query sees the same schema
async fn setup_storage() -> UserStorage {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let storage = UserStorage::new(pool);
    storage.migrate().await.unwrap();
    storage
}

#[tokio::test]
async fn test_find_or_create_creates_user_with_email() {
    let storage = setup_storage().await;
    let contact = ContactHandle::Email("octo@example.com".to_string());

    let user = storage.find_or_create(&contact, "token-1").await.unwrap();

    assert_eq!(user.email.as_deref(), Some("octo@example.com"));
    assert_eq!(user.phone_number, None);
    assert_eq!(user.linkedin_token, "token-1");
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn test_find_or_create_creates_user_with_phone() {
    let storage = setup_storage().await;
    let contact = ContactHandle::Phone("+15551234567".to_string());

    let user = storage.find_or_create(&contact, "token-1").await.unwrap();

    assert_eq!(user.email, None);
    assert_eq!(user.phone_number.as_deref(), Some("+15551234567"));
}

#[tokio::test]
async fn test_find_or_create_is_idempotent() {
    let storage = setup_storage().await;
    let contact = ContactHandle::Email("octo@example.com".to_string());

    let first = storage.find_or_create(&contact, "token-1").await.unwrap();
    let second = storage.find_or_create(&contact, "token-2").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(storage.count_users().await.unwrap(), 1);
    // Token is captured at creation only
    assert_eq!(second.linkedin_token, "token-1");
}

#[tokio::test]
async fn test_email_and_phone_with_same_value_are_distinct_users() {
    let storage = setup_storage().await;

    let by_email = storage
        .find_or_create(&ContactHandle::Email("12345".to_string()), "t")
        .await
        .unwrap();
    let by_phone = storage
        .find_or_create(&ContactHandle::Phone("12345".to_string()), "t")
        .await
        .unwrap();

    assert_ne!(by_email.id, by_phone.id);
    assert_eq!(storage.count_users().await.unwrap(), 2);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let storage = setup_storage().await;
    let created = storage
        .find_or_create(&ContactHandle::Email("octo@example.com".to_string()), "t")
        .await
        .unwrap();

    let loaded = storage.get_user(&created.id).await.unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.email, created.email);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let storage = setup_storage().await;

    match storage.get_user("missing").await {
        Err(StorageError::NotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("Expected NotFound, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_migrate_is_repeatable_on_file_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("users.db");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .unwrap();
    let storage = UserStorage::new(pool);

    storage.migrate().await.unwrap();
    storage.migrate().await.unwrap();

    let user = storage
        .find_or_create(&ContactHandle::Email("octo@example.com".to_string()), "t")
        .await
        .unwrap();
    assert_eq!(storage.get_user(&user.id).await.unwrap().id, user.id);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_sightings_share_one_user() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("users.db");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect(&database_url)
        .await
        .unwrap();
    let storage = UserStorage::new(pool);
    storage.migrate().await.unwrap();

    let contact = ContactHandle::Email("octo@example.com".to_string());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let storage = storage.clone();
            let contact = contact.clone();
            tokio::spawn(async move {
                storage
                    .find_or_create(&contact, &format!("token-{}", i))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 1);
    assert_eq!(storage.count_users().await.unwrap(), 1);
}
