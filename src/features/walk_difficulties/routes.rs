use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::walk_difficulties::handlers;
use crate::features::walk_difficulties::services::WalkDifficultyService;

/// Create routes for the walk difficulties feature
pub fn routes(service: Arc<WalkDifficultyService>) -> Router {
    Router::new()
        .route(
            "/walkdifficulties",
            get(handlers::list_walk_difficulties).post(handlers::create_walk_difficulty),
        )
        .route(
            "/walkdifficulties/{id}",
            get(handlers::get_walk_difficulty)
                .put(handlers::update_walk_difficulty)
                .delete(handlers::delete_walk_difficulty),
        )
        .with_state(service)
}
