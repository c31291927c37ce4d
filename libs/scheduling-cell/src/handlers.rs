use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use chrono::Datelike;
use serde_json::{json, Value};
use tracing::info;

use shared_config::{AppConfig, SlotPolicy};
use shared_models::error::AppError;

use crate::models::{CandidateSlot, OverlapQueryRequest, SlotQueryRequest, weekday_name};
use crate::services::{clock_ranges_overlap, parse_date, SlotGenerator};

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<SlotQueryRequest>,
) -> Result<Json<Value>, AppError> {
    // A per-request step overrides the configured granularity
    let policy = request
        .step_minutes
        .map(|step_minutes| SlotPolicy { step_minutes })
        .unwrap_or(state.slot_policy);

    let generator = SlotGenerator::new(policy);
    let date = parse_date(&request.date)?;

    let candidates = generator.generate_candidate_slots(
        &request.availability,
        &request.bookings,
        request.service_duration_minutes,
        date,
    )?;

    let slots = candidates
        .iter()
        .map(CandidateSlot::label)
        .collect::<Result<Vec<_>, _>>()?;

    info!("Computed {} available slots for {}", slots.len(), date);

    Ok(Json(json!({
        "date": date,
        "weekday": weekday_name(date.weekday()),
        "serviceDurationMinutes": request.service_duration_minutes,
        "stepMinutes": policy.step_minutes,
        "slots": slots,
        "total": slots.len()
    })))
}

#[axum::debug_handler]
pub async fn check_overlap(
    Json(request): Json<OverlapQueryRequest>,
) -> Result<Json<Value>, AppError> {
    let overlaps = clock_ranges_overlap(
        &request.a_start,
        &request.a_end,
        &request.b_start,
        &request.b_end,
    )?;

    Ok(Json(json!({
        "overlaps": overlaps
    })))
}
