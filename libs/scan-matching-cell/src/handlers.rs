use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::ScanMatchRequest;
use crate::services::ClientMatcher;

#[axum::debug_handler]
pub async fn match_scan(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ScanMatchRequest>,
) -> Result<Json<Value>, AppError> {
    let matcher = ClientMatcher::new(state.match_policy)?;

    let found = matcher.match_client(&request.identifier, &request.candidates)?;

    // No match is a normal outcome, not an error
    let response = match found {
        Some(found) => {
            info!("Scan matched client {} via {:?}", found.client.id, found.method);
            json!({
                "match": found.client,
                "displayName": found.client.display_name(),
                "method": found.method,
                "score": found.score,
                "candidatesConsidered": request.candidates.len()
            })
        }
        None => {
            info!("Scan identifier matched none of {} candidates", request.candidates.len());
            json!({
                "match": null,
                "displayName": null,
                "method": null,
                "score": null,
                "candidatesConsidered": request.candidates.len()
            })
        }
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn rank_candidates(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ScanMatchRequest>,
) -> Result<Json<Value>, AppError> {
    let matcher = ClientMatcher::new(state.match_policy)?;

    let scores = matcher.rank_candidates(&request.identifier, &request.candidates)?;

    Ok(Json(json!({
        "scores": scores,
        "total": scores.len()
    })))
}
