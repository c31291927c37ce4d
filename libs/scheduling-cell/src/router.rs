use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn scheduling_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/slots", post(handlers::get_available_slots))
        .route("/overlap", post(handlers::check_overlap))
        .with_state(state)
}
