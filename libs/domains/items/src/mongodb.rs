//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::ReturnDocument,
    Collection, Database,
};
use tracing::instrument;

use crate::error::ItemResult;
use crate::repository::ItemRepository;

/// Default collection backing the item resource
pub const COLLECTION: &str = "secondChanceItems";

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<Document>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository over the default collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("secondChance");
    /// let repo = MongoItemRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a MongoItemRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// Filter on the caller-supplied `id` field, not `_id`
    fn id_filter(id: &str) -> Document {
        doc! { "id": id }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Document>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Document> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self, item))]
    async fn insert(&self, mut item: Document) -> ItemResult<Document> {
        let result = self.collection.insert_one(&item).await?;

        // Fold the store-assigned identity back into the response document
        item.insert("_id", result.inserted_id);

        tracing::info!("Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn find_by_item_id(&self, id: &str) -> ItemResult<Option<Document>> {
        let item = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self, fields))]
    async fn update_by_item_id(&self, id: &str, fields: Document) -> ItemResult<Option<Document>> {
        // Atomic update-and-return; a separate update_one + find_one pair
        // could observe a concurrent delete between the two calls
        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id), doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(item_id = %id, "Item updated successfully");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_by_item_id(&self, id: &str) -> ItemResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(item_id = %id, "Item deleted successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn exists_by_item_id(&self, id: &str) -> ItemResult<bool> {
        let count = self
            .collection
            .count_documents(Self::id_filter(id))
            .await?;
        Ok(count > 0)
    }
}
