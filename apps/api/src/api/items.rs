//! Items API routes
//!
//! Wires the items domain to HTTP routes.

use axum::Router;
use domain_items::{handlers, ImageStore, ItemService, MongoItemRepository};

use crate::state::AppState;

/// Create the secondChanceItems router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoItemRepository::new(state.db.clone());

    // Uploaded images land in the configured directory
    let images = ImageStore::new(state.config.items.upload_dir.clone());

    // Create the service
    let service = ItemService::new(repository, images)
        .with_unique_ids(state.config.items.enforce_unique_ids);

    // Return the domain's router
    handlers::router(service)
}
