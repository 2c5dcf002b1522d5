//! Item service - orchestrates uploads and repository operations

use mongodb::bson::Document;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::ItemPayload;
use crate::repository::ItemRepository;
use crate::uploads::ImageStore;

/// Service for the item resource.
///
/// Handlers stay transport-only; this layer persists uploads, applies the
/// optional id-uniqueness check, and drives the repository.
///
/// The image write and the document write are not coordinated: a file can
/// persist while the document operation fails, with no rollback.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    images: ImageStore,
    enforce_unique_ids: bool,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository and image store
    pub fn new(repository: R, images: ImageStore) -> Self {
        Self {
            repository: Arc::new(repository),
            images,
            enforce_unique_ids: false,
        }
    }

    /// Reject creates whose `id` already exists.
    ///
    /// The data model never enforced uniqueness, so duplicates may already
    /// exist; off by default to preserve that behavior.
    pub fn with_unique_ids(mut self, enforce: bool) -> Self {
        self.enforce_unique_ids = enforce;
        self
    }

    /// List all items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Document>> {
        self.repository.list().await
    }

    /// Create a new item from the request payload
    #[instrument(skip(self, payload))]
    pub async fn create_item(&self, payload: ItemPayload) -> ItemResult<Document> {
        if self.enforce_unique_ids
            && let Ok(id) = payload.fields.get_str("id")
            && self.repository.exists_by_item_id(id).await?
        {
            return Err(ItemError::DuplicateId(id.to_string()));
        }

        let item = self.decorate_image(payload).await?;
        self.repository.insert(item).await
    }

    /// Get an item by its caller-supplied id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<Document> {
        self.repository
            .find_by_item_id(id)
            .await?
            .ok_or(ItemError::NotFound)
    }

    /// Merge the payload fields into an existing item
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, id: &str, payload: ItemPayload) -> ItemResult<Document> {
        let fields = self.decorate_image(payload).await?;

        self.repository
            .update_by_item_id(id, fields)
            .await?
            .ok_or(ItemError::NotFound)
    }

    /// Delete an item by its caller-supplied id
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<()> {
        if self.repository.delete_by_item_id(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound)
        }
    }

    /// Persist an uploaded file and set the `image` field to its stored path
    async fn decorate_image(&self, payload: ItemPayload) -> ItemResult<Document> {
        let ItemPayload { mut fields, image } = payload;

        if let Some(upload) = image {
            let path = self.images.save(&upload.file_name, &upload.data).await?;
            fields.insert("image", path);
        }

        Ok(fields)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            images: self.images.clone(),
            enforce_unique_ids: self.enforce_unique_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageUpload;
    use crate::repository::MockItemRepository;
    use mongodb::bson::doc;

    fn temp_images(tag: &str) -> ImageStore {
        let dir = std::env::temp_dir().join(format!("item-service-{}-{}", tag, std::process::id()));
        ImageStore::new(dir)
    }

    fn payload(fields: Document) -> ItemPayload {
        ItemPayload {
            fields,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_passes_fields_through_untouched() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert()
            .withf(|item| {
                item.get_str("id") == Ok("42")
                    && item.get_str("description") == Ok("lamp")
                    && !item.contains_key("image")
            })
            .returning(|mut item| {
                item.insert("_id", "generated");
                Ok(item)
            });

        let service = ItemService::new(repo, temp_images("create"));
        let item = service
            .create_item(payload(doc! { "id": "42", "description": "lamp" }))
            .await
            .unwrap();

        assert_eq!(item.get_str("id").unwrap(), "42");
        assert!(item.contains_key("_id"));
    }

    #[tokio::test]
    async fn test_create_with_upload_sets_image_path() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert()
            .withf(|item| {
                item.get_str("image")
                    .map(|path| path.ends_with("lamp.png"))
                    .unwrap_or(false)
            })
            .returning(Ok);

        let service = ItemService::new(repo, temp_images("upload"));
        let item = service
            .create_item(ItemPayload {
                fields: doc! { "id": "42" },
                image: Some(ImageUpload {
                    file_name: "lamp.png".to_string(),
                    data: axum::body::Bytes::from_static(b"png bytes"),
                }),
            })
            .await
            .unwrap();

        assert!(item.get_str("image").unwrap().ends_with("lamp.png"));
    }

    #[tokio::test]
    async fn test_create_does_not_check_uniqueness_by_default() {
        let mut repo = MockItemRepository::new();
        repo.expect_exists_by_item_id().never();
        repo.expect_insert().returning(Ok);

        let service = ItemService::new(repo, temp_images("no-unique"));
        let result = service.create_item(payload(doc! { "id": "42" })).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id_when_enforced() {
        let mut repo = MockItemRepository::new();
        repo.expect_exists_by_item_id()
            .withf(|id| id == "42")
            .returning(|_| Ok(true));
        repo.expect_insert().never();

        let service = ItemService::new(repo, temp_images("dup")).with_unique_ids(true);
        let err = service
            .create_item(payload(doc! { "id": "42" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::DuplicateId(ref id) if id == "42"));
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_item_id().returning(|_| Ok(None));

        let service = ItemService::new(repo, temp_images("get"));
        let err = service.get_item("missing").await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound));
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_update_by_item_id().returning(|_, _| Ok(None));

        let service = ItemService::new(repo, temp_images("update"));
        let err = service
            .update_item("missing", payload(doc! { "description": "new" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete_by_item_id().returning(|_| Ok(false));

        let service = ItemService::new(repo, temp_images("delete"));
        let err = service.delete_item("missing").await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound));
    }
}
