//! Integration tests for the HTTP API.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

mod common;

use common::{create, delete, failing_app, get, json_request, list, send, test_app, test_app_in};

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_empty_table_returns_empty_array() {
    let app = test_app().await;

    for table in [1, 5, 10] {
        let (status, body) = list(&app, table, "2024-06-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn test_list_missing_parameter_is_bad_request() {
    let app = test_app().await;

    for uri in [
        "/api/reservations",
        "/api/reservations?table_id=3",
        "/api/reservations?reservation_date=2024-06-01",
        "/api/reservations?table_id=&reservation_date=2024-06-01",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Missing required query parameters.");
    }
}

#[tokio::test]
async fn test_list_malformed_parameter_is_bad_request() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        get("/api/reservations?table_id=abc&reservation_date=2024-06-01"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        get("/api/reservations?table_id=3&reservation_date=tomorrow"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_then_list_returns_the_reservation() {
    let app = test_app().await;

    let (status, body) = create(&app, 3, "2024-06-01", 2).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Reservation created successfully.");
    let id = body["reservationId"].as_i64().unwrap();

    let (status, body) = list(&app, 3, "2024-06-01").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["reservation_id"], id);
    assert_eq!(rows[0]["slot_id"], 2);
    assert_eq!(rows[0]["slot_time"], "12:00");
    assert_eq!(rows[0]["table_id"], 3);
    assert_eq!(rows[0]["reservation_date"], "2024-06-01");
    assert_eq!(rows[0]["status"], "confirmed");

    // Other tables and days are untouched
    let (_, body) = list(&app, 4, "2024-06-01").await;
    assert_eq!(body, json!([]));
    let (_, body) = list(&app, 3, "2024-06-02").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_duplicate_create_is_conflict() {
    let app = test_app().await;

    let (status, body) = create(&app, 3, "2024-06-01", 2).await;
    assert_eq!(status, StatusCode::CREATED);
    let first_id = body["reservationId"].as_i64().unwrap();

    let (status, body) = create(&app, 3, "2024-06-01", 2).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "This reservation already exists.");

    let (_, body) = list(&app, 3, "2024-06-01").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["reservation_id"], first_id);
}

#[tokio::test]
async fn test_create_missing_field_is_bad_request_and_writes_nothing() {
    let app = test_app().await;

    for body in [
        json!({ "reservation_date": "2024-06-01", "slot_id": 2 }),
        json!({ "table_id": 3, "slot_id": 2 }),
        json!({ "reservation_date": "2024-06-01", "table_id": 3 }),
        json!({ "reservation_date": "2024-06-01", "table_id": 3, "slot_id": null }),
    ] {
        let (status, resp) = send(&app, json_request("POST", "/api/reservations", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["message"], "Missing required fields.");
    }

    let (_, body) = list(&app, 3, "2024-06-01").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_with_empty_string_field_reports_missing() {
    let app = test_app().await;

    for body in [
        json!({ "reservation_date": "", "table_id": 3, "slot_id": 2 }),
        json!({ "reservation_date": "2024-06-01", "table_id": "", "slot_id": 2 }),
        json!({ "reservation_date": "2024-06-01", "table_id": 3, "slot_id": "" }),
    ] {
        let (status, resp) = send(&app, json_request("POST", "/api/reservations", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["message"], "Missing required fields.");
    }

    let (_, body) = list(&app, 3, "2024-06-01").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_accepts_numeric_strings() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/reservations",
            json!({ "reservation_date": "2024-06-01", "table_id": "3", "slot_id": "2" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = list(&app, 3, "2024-06-01").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_with_malformed_body_is_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/reservations")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_unknown_slot_is_internal_error() {
    let app = test_app_in(false).await;

    let (status, body) = create(&app, 1, "2024-06-01", 99).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error.");
    assert!(body.get("details").is_none());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_then_list_and_delete_again() {
    let app = test_app().await;

    let (_, body) = create(&app, 3, "2024-06-01", 2).await;
    let id = body["reservationId"].as_i64().unwrap();

    let (status, body) = delete(&app, id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Reservation deleted successfully.");

    let (_, body) = list(&app, 3, "2024-06-01").await;
    assert_eq!(body, json!([]));

    let (status, body) = delete(&app, id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Reservation not found.");
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let app = test_app().await;

    let (status, _) = delete(&app, 9_007_199_254_740_991).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_id_is_bad_request() {
    let app = test_app().await;

    let (status, body) = send(&app, json_request("DELETE", "/api/reservations", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing reservation_id in the request body.");
}

#[tokio::test]
async fn test_delete_with_empty_string_id_reports_missing() {
    let app = test_app().await;

    for body in [json!({ "reservation_id": "" }), json!({ "reservation_id": null })] {
        let (status, resp) = send(&app, json_request("DELETE", "/api/reservations", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["message"], "Missing reservation_id in the request body.");
    }
}

#[tokio::test]
async fn test_deleted_slot_can_be_booked_again() {
    let app = test_app().await;

    let (_, body) = create(&app, 8, "2024-07-14", 9).await;
    let id = body["reservationId"].as_i64().unwrap();
    delete(&app, id).await;

    let (status, body) = create(&app, 8, "2024-07-14", 9).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["reservationId"].as_i64().unwrap(), id);
}

// ============================================================================
// Store failures
// ============================================================================

#[tokio::test]
async fn test_store_failure_hides_detail_outside_development() {
    let app = failing_app(false);

    let (status, body) = list(&app, 1, "2024-06-01").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error.");
    assert!(body.get("details").is_none());

    let (status, body) = create(&app, 1, "2024-06-01", 1).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("details").is_none());

    let (status, _) = delete(&app, 1).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_failure_shows_detail_in_development() {
    let app = failing_app(true);

    let (status, body) = list(&app, 1, "2024-06-01").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error.");
    assert!(body["details"]["error"].is_string());
}

#[tokio::test]
async fn test_validation_runs_before_the_store() {
    let app = failing_app(false);

    let (status, _) = send(&app, get("/api/reservations?table_id=1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, json_request("DELETE", "/api/reservations", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Slots, health, fallback
// ============================================================================

#[tokio::test]
async fn test_list_slots() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/slots")).await;
    assert_eq!(status, StatusCode::OK);
    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 12);
    assert_eq!(slots[0], json!({ "id": 1, "time": "11:00" }));
    assert_eq!(slots[11], json!({ "id": 12, "time": "22:00" }));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&test_app().await, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&failing_app(false), get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = send(&test_app_in(false).await, get("/api/tables")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert!(body.get("details").is_none());

    let (status, body) = send(&test_app_in(true).await, get("/api/tables")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"]["path"], "/api/tables");
    assert_eq!(body["details"]["method"], "GET");
}

#[tokio::test]
async fn test_unsupported_method_is_not_found() {
    let app = test_app_in(false).await;

    let (status, body) = send(
        &app,
        json_request("PUT", "/api/reservations", json!({ "reservation_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 9);
    assert_eq!(body["message"], "Not Found");

    let (status, body) = send(
        &test_app_in(true).await,
        Request::builder()
            .method("PATCH")
            .uri("/api/slots")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"]["method"], "PATCH");
    assert_eq!(body["details"]["path"], "/api/slots");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = test_app().await;
    let response = tower::ServiceExt::oneshot(app, get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
