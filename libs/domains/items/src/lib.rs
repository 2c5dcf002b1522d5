//! Second-chance items domain
//!
//! Domain implementation for the `secondChanceItems` resource: a schema-less
//! MongoDB collection with an optional uploaded image per item.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Upload persistence, uniqueness check
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Schema-less payloads, uploads
//! └─────────────┘
//! ```
//!
//! Items are intentionally untyped: the request body is carried as an
//! ordered `bson::Document` end to end, and lookups match on the
//! caller-supplied `id` field rather than the store's `_id`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, mongodb::MongoItemRepository, service::ItemService, uploads::ImageStore};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("secondChance");
//!
//! let repository = MongoItemRepository::new(db);
//! let service = ItemService::new(repository, ImageStore::new("public/images"));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod uploads;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{ImageUpload, ItemPayload};
pub use self::mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
pub use uploads::ImageStore;
