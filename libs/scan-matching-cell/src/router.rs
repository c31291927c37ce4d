use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn scan_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/match", post(handlers::match_scan))
        .route("/rank", post(handlers::rank_candidates))
        .with_state(state)
}
