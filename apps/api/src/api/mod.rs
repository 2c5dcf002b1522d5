//! API routes module
//!
//! Defines all HTTP API routes for the Second Chance API.

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/secondChanceItems", items::router(state))
        .merge(health::router(state.clone()))
}
