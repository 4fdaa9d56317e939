use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::walks::handlers;
use crate::features::walks::services::WalkService;

/// Create routes for the walks feature
pub fn routes(service: Arc<WalkService>) -> Router {
    Router::new()
        .route("/walks", get(handlers::list_walks).post(handlers::create_walk))
        .route(
            "/walks/{id}",
            get(handlers::get_walk)
                .put(handlers::update_walk)
                .delete(handlers::delete_walk),
        )
        .with_state(service)
}
