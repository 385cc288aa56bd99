use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/check/{name}", get(handlers::check_name))
        .route("/check/{name}/{qtype}", get(handlers::check_name_with_type))
        .route("/upload", post(handlers::upload_domain_list))
        .with_state(state)
}
