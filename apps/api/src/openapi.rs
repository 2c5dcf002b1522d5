//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Second Chance API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for second-chance items with image upload",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/secondChanceItems", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "secondChanceItems", description = "Second-chance item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
