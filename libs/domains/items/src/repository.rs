use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::ItemResult;

/// Repository trait for item persistence
///
/// All by-id operations match on the caller-supplied `id` field, never on
/// the store's internal `_id`. If several documents share an `id`, the
/// store's first match wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every item in the collection, in the store's natural order
    async fn list(&self) -> ItemResult<Vec<Document>>;

    /// Insert a new item and return it including the store-assigned `_id`
    async fn insert(&self, item: Document) -> ItemResult<Document>;

    /// Find the first item whose `id` field matches
    async fn find_by_item_id(&self, id: &str) -> ItemResult<Option<Document>>;

    /// Merge `fields` into the first item whose `id` field matches,
    /// returning the updated document or None if nothing matched
    async fn update_by_item_id(&self, id: &str, fields: Document) -> ItemResult<Option<Document>>;

    /// Delete the first item whose `id` field matches; true if one was removed
    async fn delete_by_item_id(&self, id: &str) -> ItemResult<bool>;

    /// Whether any item already carries this `id`
    async fn exists_by_item_id(&self, id: &str) -> ItemResult<bool>;
}
