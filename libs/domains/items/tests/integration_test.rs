//! Integration tests for the MongoDB item repository
//!
//! These run against a live MongoDB instance (MONGODB_URL, default
//! mongodb://localhost:27017) and are ignored by default.
//!
//! Run with: cargo test -p domain_items -- --ignored

use domain_items::{ItemRepository, MongoItemRepository};
use mongodb::bson::doc;
use mongodb::Client;

async fn test_repository(suffix: &str) -> MongoItemRepository {
    let url =
        std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&url).await.unwrap();
    let db = client.database("second_chance_test");

    let collection_name = format!("secondChanceItems_{}_{}", suffix, std::process::id());
    let repo = MongoItemRepository::with_collection(db, &collection_name);
    repo.collection().drop().await.ok();
    repo
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_insert_then_find_by_item_id() {
    let repo = test_repository("insert_find").await;

    let inserted = repo
        .insert(doc! { "id": "42", "description": "lamp", "condition": "good" })
        .await
        .unwrap();
    assert!(inserted.contains_key("_id"));

    let found = repo.find_by_item_id("42").await.unwrap().unwrap();
    assert_eq!(found.get_str("description").unwrap(), "lamp");
    assert_eq!(found.get_str("condition").unwrap(), "good");

    repo.collection().drop().await.ok();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_find_missing_item_returns_none() {
    let repo = test_repository("find_missing").await;

    let found = repo.find_by_item_id("never-inserted").await.unwrap();
    assert!(found.is_none());

    repo.collection().drop().await.ok();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_update_merges_only_supplied_fields() {
    let repo = test_repository("update_merge").await;

    repo.insert(doc! { "id": "42", "description": "old", "condition": "good" })
        .await
        .unwrap();

    let updated = repo
        .update_by_item_id("42", doc! { "description": "new" })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.get_str("description").unwrap(), "new");
    // Untouched fields keep their prior values
    assert_eq!(updated.get_str("condition").unwrap(), "good");

    repo.collection().drop().await.ok();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_update_missing_item_returns_none_and_mutates_nothing() {
    let repo = test_repository("update_missing").await;

    let updated = repo
        .update_by_item_id("missing", doc! { "description": "new" })
        .await
        .unwrap();
    assert!(updated.is_none());

    let all = repo.list().await.unwrap();
    assert!(all.is_empty());

    repo.collection().drop().await.ok();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_delete_removes_exactly_one_and_second_delete_misses() {
    let repo = test_repository("delete_twice").await;

    repo.insert(doc! { "id": "42", "description": "lamp" })
        .await
        .unwrap();

    assert!(repo.delete_by_item_id("42").await.unwrap());
    assert!(!repo.delete_by_item_id("42").await.unwrap());

    repo.collection().drop().await.ok();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_list_returns_all_inserted_items() {
    let repo = test_repository("list_all").await;

    repo.insert(doc! { "id": "1", "description": "chair" })
        .await
        .unwrap();
    repo.insert(doc! { "id": "2", "description": "table" })
        .await
        .unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 2);

    repo.collection().drop().await.ok();
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_duplicate_ids_are_not_rejected_by_the_store() {
    let repo = test_repository("dup_ids").await;

    repo.insert(doc! { "id": "42", "description": "first" })
        .await
        .unwrap();
    repo.insert(doc! { "id": "42", "description": "second" })
        .await
        .unwrap();

    assert!(repo.exists_by_item_id("42").await.unwrap());
    // Lookups return the store's first match
    let found = repo.find_by_item_id("42").await.unwrap().unwrap();
    assert_eq!(found.get_str("description").unwrap(), "first");

    repo.collection().drop().await.ok();
}
