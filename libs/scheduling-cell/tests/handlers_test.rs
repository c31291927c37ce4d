// libs/scheduling-cell/tests/handlers_test.rs

use assert_matches::assert_matches;
use axum::{extract::State, Json};
use serde_json::json;

use scheduling_cell::handlers::{check_overlap, get_available_slots};
use scheduling_cell::models::{OverlapQueryRequest, SlotQueryRequest};
use shared_models::error::AppError;
use shared_utils::test_utils::{MockDocuments, TestConfig};

fn slot_request(body: serde_json::Value) -> Json<SlotQueryRequest> {
    Json(serde_json::from_value(body).expect("valid slot request"))
}

fn overlap_request(a_start: &str, a_end: &str, b_start: &str, b_end: &str) -> Json<OverlapQueryRequest> {
    Json(
        serde_json::from_value(json!({
            "aStart": a_start,
            "aEnd": a_end,
            "bStart": b_start,
            "bEnd": b_end
        }))
        .expect("valid overlap request"),
    )
}

#[tokio::test]
async fn test_get_available_slots_success() {
    let state = TestConfig::default().to_arc();
    let request = slot_request(json!({
        "date": "2025-06-16",
        "serviceDurationMinutes": 30,
        "availability": {
            "monday": [MockDocuments::window("09:00", "10:00")]
        },
        "bookings": [MockDocuments::booking("staff-1", "2025-06-16", 555, 15)]
    }));

    let result = get_available_slots(State(state), request).await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response["date"], "2025-06-16");
    assert_eq!(response["weekday"], "monday");
    assert_eq!(response["stepMinutes"], 15);
    assert_eq!(response["slots"], json!(["09:30"]));
    assert_eq!(response["total"], 1);
}

#[tokio::test]
async fn test_get_available_slots_uses_configured_step() {
    let state = TestConfig::with_step(20).to_arc();
    let request = slot_request(json!({
        "date": "2025-06-17",
        "serviceDurationMinutes": 20,
        "availability": {
            "tuesday": [MockDocuments::window("08:00", "09:00")]
        }
    }));

    let response = get_available_slots(State(state), request).await.unwrap().0;

    assert_eq!(response["weekday"], "tuesday");
    assert_eq!(response["slots"], json!(["08:00", "08:20", "08:40"]));
}

#[tokio::test]
async fn test_get_available_slots_request_step_overrides_config() {
    let state = TestConfig::default().to_arc();
    let request = slot_request(json!({
        "date": "2025-06-17",
        "serviceDurationMinutes": 30,
        "stepMinutes": 60,
        "availability": {
            "tuesday": [MockDocuments::window("08:00", "11:00")]
        }
    }));

    let response = get_available_slots(State(state), request).await.unwrap().0;

    assert_eq!(response["stepMinutes"], 60);
    assert_eq!(response["slots"], json!(["08:00", "09:00", "10:00"]));
}

#[tokio::test]
async fn test_get_available_slots_empty_day_is_not_an_error() {
    let state = TestConfig::default().to_arc();
    let request = slot_request(json!({
        "date": "2025-06-22",
        "serviceDurationMinutes": 30,
        "availability": MockDocuments::weekday_availability()
    }));

    let response = get_available_slots(State(state), request).await.unwrap().0;

    assert_eq!(response["weekday"], "sunday");
    assert_eq!(response["slots"], json!([]));
    assert_eq!(response["total"], 0);
}

#[tokio::test]
async fn test_get_available_slots_rejects_malformed_window() {
    let state = TestConfig::default().to_arc();
    let request = slot_request(json!({
        "date": "2025-06-16",
        "serviceDurationMinutes": 30,
        "availability": {
            "monday": [MockDocuments::window("09:00", "late")]
        }
    }));

    let result = get_available_slots(State(state), request).await;

    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("late"));
}

#[tokio::test]
async fn test_get_available_slots_rejects_bad_date_and_duration() {
    let state = TestConfig::default().to_arc();

    let bad_date = slot_request(json!({
        "date": "16-06-2025",
        "serviceDurationMinutes": 30
    }));
    let result = get_available_slots(State(state.clone()), bad_date).await;
    assert_matches!(result, Err(AppError::ValidationError(_)));

    let negative = slot_request(json!({
        "date": "2025-06-16",
        "serviceDurationMinutes": -15
    }));
    let result = get_available_slots(State(state), negative).await;
    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("-15"));
}

#[tokio::test]
async fn test_get_available_slots_handles_extreme_numbers() {
    let state = TestConfig::default().to_arc();
    let request = slot_request(json!({
        "date": "2025-06-16",
        "serviceDurationMinutes": i32::MAX,
        "stepMinutes": i32::MAX,
        "availability": {
            "monday": [MockDocuments::window("09:00", "10:00")]
        }
    }));

    let response = get_available_slots(State(state.clone()), request).await.unwrap().0;
    assert_eq!(response["slots"], json!([]));
    assert_eq!(response["total"], 0);

    let request = slot_request(json!({
        "date": "2025-06-16",
        "serviceDurationMinutes": 30,
        "availability": {
            "monday": [MockDocuments::window("09:00", "10:00")]
        },
        "bookings": [MockDocuments::booking("staff-1", "2025-06-16", i32::MAX, 30)]
    }));

    let result = get_available_slots(State(state), request).await;
    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("outside"));
}

#[tokio::test]
async fn test_check_overlap() {
    let touching = check_overlap(overlap_request("09:00", "10:00", "10:00", "11:00")).await.unwrap().0;
    assert_eq!(touching["overlaps"], false);

    let partial = check_overlap(overlap_request("09:00", "10:00", "09:30", "10:30")).await.unwrap().0;
    assert_eq!(partial["overlaps"], true);
}

#[tokio::test]
async fn test_check_overlap_rejects_inverted_range() {
    let result = check_overlap(overlap_request("11:00", "10:00", "09:30", "10:30")).await;
    assert_matches!(result, Err(AppError::ValidationError(_)));
}
