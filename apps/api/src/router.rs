use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use scan_matching_cell::router::scan_routes;
use scheduling_cell::router::scheduling_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .nest("/scheduling", scheduling_routes(state.clone()))
        .nest("/scans", scan_routes(state))
}
