use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};
use mongodb::bson::Document;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ItemResult;
use crate::models::ItemPayload;
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Confirmation body returned by delete
#[derive(Serialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Always "Item deleted successfully"
    pub message: String,
}

/// OpenAPI documentation for the secondChanceItems API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(DeleteConfirmation),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "secondChanceItems", description = "Second-chance item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "secondChanceItems",
    responses(
        (status = 200, description = "All items in the collection", body = Vec<Object>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Document>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
///
/// Accepts a JSON object or multipart form data with an optional `image`
/// file. The caller-supplied `id` is stored verbatim.
#[utoipa::path(
    post,
    path = "",
    tag = "secondChanceItems",
    responses(
        (status = 201, description = "Item created successfully", body = Object),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    payload: ItemPayload,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "secondChanceItems",
    params(
        ("id" = String, Path, description = "Caller-supplied item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Object),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Document>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}

/// Update an item
///
/// Merges the supplied fields into the matched document; fields not present
/// in the payload keep their prior values.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "secondChanceItems",
    params(
        ("id" = String, Path, description = "Caller-supplied item id")
    ),
    responses(
        (status = 200, description = "Item updated successfully", body = Object),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
    payload: ItemPayload,
) -> ItemResult<Json<Document>> {
    let item = service.update_item(&id, payload).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "secondChanceItems",
    params(
        ("id" = String, Path, description = "Caller-supplied item id")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = DeleteConfirmation),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<DeleteConfirmation>> {
    service.delete_item(&id).await?;
    Ok(Json(DeleteConfirmation {
        message: "Item deleted successfully".to_string(),
    }))
}
