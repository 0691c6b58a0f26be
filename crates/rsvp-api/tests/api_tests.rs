//! Integration tests for the RSVP API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use rsvp_api::router::build_router;
use rsvp_api::state::AppState;
use rsvp_core::UnrankedPolicy;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(UnrankedPolicy::Trailing))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(state: &Arc<AppState>, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(Arc::clone(state))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn rsvp(state: &Arc<AppState>, name: &str, preference: &str, role: &str) -> StatusCode {
    let body = json!({ "name": name, "preference": preference, "role": role });
    send(state, json_request("POST", "/rsvp", &body)).await.0
}

fn field(listing: &Value, key: &str) -> Vec<String> {
    listing
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a[key].as_str().unwrap().to_owned())
        .collect()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let state = make_test_state();
    let response = build_router(state).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Welcome to the Event Management System"));
}

#[tokio::test]
async fn test_rsvp_appears_in_listing_and_queue_as_pending() {
    let state = make_test_state();

    let body = json!({ "name": "Ada", "preference": "Vegan", "role": "Speaker" });
    let (status, json) = send(&state, json_request("POST", "/rsvp", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "RSVP successfully added!");

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(field(&attendees, "name"), vec!["Ada"]);
    assert_eq!(field(&attendees, "status"), vec!["Pending"]);

    let (_, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(field(&queue, "name"), vec!["Ada"]);
    assert_eq!(field(&queue, "status"), vec!["Pending"]);
}

#[tokio::test]
async fn test_rsvp_missing_field_is_rejected() {
    let state = make_test_state();

    let body = json!({ "name": "Ada", "preference": "Vegan" });
    let (status, json) = send(&state, json_request("POST", "/rsvp", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide all required details.");
    assert_eq!(json["status"], 400);

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(attendees, json!([]));
    let (_, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(queue, json!([]));
}

#[tokio::test]
async fn test_rsvp_empty_field_is_rejected() {
    let state = make_test_state();
    assert_eq!(rsvp(&state, "Ada", "", "Speaker").await, StatusCode::BAD_REQUEST);

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(attendees, json!([]));
}

#[tokio::test]
async fn test_rsvp_unreadable_body_is_rejected() {
    let state = make_test_state();

    let request = Request::post("/rsvp")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(&state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide all required details.");

    let request = Request::post("/rsvp").body(Body::empty()).unwrap();
    let (status, _) = send(&state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rsvp_non_string_field_is_rejected() {
    let state = make_test_state();

    let body = json!({ "name": 42, "preference": "Vegan", "role": "Speaker" });
    let (status, json) = send(&state, json_request("POST", "/rsvp", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide all required details.");

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(attendees, json!([]));
    let (_, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(queue, json!([]));
}

#[tokio::test]
async fn test_rsvp_accepts_form_encoding() {
    let state = make_test_state();

    let request = Request::post("/rsvp")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Grace+Hopper&preference=Omnivore&role=Listener"))
        .unwrap();
    let (status, _) = send(&state, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(field(&attendees, "name"), vec!["Grace Hopper"]);
    assert_eq!(field(&attendees, "role"), vec!["Listener"]);
}

#[tokio::test]
async fn test_queue_preserves_submission_order() {
    let state = make_test_state();
    for (name, preference, role) in [
        ("c", "Vegetarian", "Dancer"),
        ("a", "Omnivore", "Speaker"),
        ("b", "Vegan", "Listener"),
    ] {
        assert_eq!(rsvp(&state, name, preference, role).await, StatusCode::OK);
    }

    // Sorted listings must not disturb arrival order.
    let _ = send(&state, get("/attendees")).await;
    let _ = send(&state, get("/attendees-priority")).await;

    let (status, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&queue, "name"), vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_attendees_sorted_by_preference() {
    let state = make_test_state();
    rsvp(&state, "v1", "Vegan", "Guest").await;
    rsvp(&state, "o1", "Omnivore", "Guest").await;
    rsvp(&state, "v2", "Vegetarian", "Guest").await;

    let (status, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&attendees, "preference"),
        vec!["Omnivore", "Vegan", "Vegetarian"]
    );
}

#[tokio::test]
async fn test_attendees_sorted_by_priority() {
    let state = make_test_state();
    rsvp(&state, "gus", "x", "Guest").await;
    rsvp(&state, "dee", "x", "Dancer").await;
    rsvp(&state, "lou", "x", "Listener").await;
    rsvp(&state, "sam", "x", "Speaker").await;

    let (status, ranked) = send(&state, get("/attendees-priority")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&ranked, "name"), vec!["sam", "lou", "dee", "gus"]);
}

#[tokio::test]
async fn test_random_policy_keeps_known_roles_ordered() {
    let state = Arc::new(AppState::new(UnrankedPolicy::Random));
    rsvp(&state, "gus", "x", "Guest").await;
    rsvp(&state, "dee", "x", "Dancer").await;
    rsvp(&state, "lou", "x", "Listener").await;
    rsvp(&state, "sam", "x", "Speaker").await;

    let (_, ranked) = send(&state, get("/attendees-priority")).await;
    let names = field(&ranked, "name");
    let pos = |n: &str| names.iter().position(|x| x == n).unwrap();
    assert!(pos("sam") < pos("lou"));
    assert!(pos("lou") < pos("dee"));
}

#[tokio::test]
async fn test_status_update_is_reflected_in_listings() {
    let state = make_test_state();
    rsvp(&state, "Ada", "Vegan", "Speaker").await;

    let body = json!({ "status": "Confirmed" });
    let (status, json) = send(
        &state,
        json_request("PUT", "/admin/attendees/Ada/status", &body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendee Ada marked as Confirmed");

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(field(&attendees, "status"), vec!["Confirmed"]);
    let (_, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(field(&queue, "status"), vec!["Confirmed"]);
}

#[tokio::test]
async fn test_status_update_rejects_unknown_status() {
    let state = make_test_state();
    rsvp(&state, "Ada", "Vegan", "Speaker").await;

    let body = json!({ "status": "Banana" });
    let (status, json) = send(
        &state,
        json_request("PUT", "/admin/attendees/Ada/status", &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Invalid status. Choose either \"Confirmed\" or \"Waitlisted\"."
    );

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(field(&attendees, "status"), vec!["Pending"]);
}

#[tokio::test]
async fn test_status_update_requires_status() {
    let state = make_test_state();
    rsvp(&state, "Ada", "Vegan", "Speaker").await;

    let (status, _) = send(
        &state,
        json_request("PUT", "/admin/attendees/Ada/status", &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = json!({ "status": "Pending" });
    let (status, _) = send(
        &state,
        json_request("PUT", "/admin/attendees/Ada/status", &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_unknown_name_is_404() {
    let state = make_test_state();

    let body = json!({ "status": "Waitlisted" });
    let (status, json) = send(
        &state,
        json_request("PUT", "/admin/attendees/Nobody/status", &body),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Attendee not found.");
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_delete_removes_from_listing_and_queue() {
    let state = make_test_state();
    rsvp(&state, "Ada", "Vegan", "Speaker").await;
    rsvp(&state, "Bob", "Omnivore", "Dancer").await;

    let request = Request::delete("/admin/attendees/Ada")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendee Ada has been removed.");

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(field(&attendees, "name"), vec!["Bob"]);
    let (_, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(field(&queue, "name"), vec!["Bob"]);
}

#[tokio::test]
async fn test_delete_unknown_name_is_404_and_changes_nothing() {
    let state = make_test_state();
    rsvp(&state, "Ada", "Vegan", "Speaker").await;

    let request = Request::delete("/admin/attendees/Nobody")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&state, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Attendee not found.");

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(field(&attendees, "name"), vec!["Ada"]);
    let (_, queue) = send(&state, get("/rsvp-queue")).await;
    assert_eq!(field(&queue, "name"), vec!["Ada"]);
}

#[tokio::test]
async fn test_admin_paths_decode_names() {
    let state = make_test_state();
    rsvp(&state, "Ada Lovelace", "Vegan", "Speaker").await;

    let body = json!({ "status": "Waitlisted" });
    let (status, json) = send(
        &state,
        json_request("PUT", "/admin/attendees/Ada%20Lovelace/status", &body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendee Ada Lovelace marked as Waitlisted");

    let request = Request::delete("/admin/attendees/Ada%20Lovelace")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&state, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, attendees) = send(&state, get("/attendees")).await;
    assert_eq!(attendees, json!([]));
}
