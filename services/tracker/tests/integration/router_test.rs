use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use shelf_auth_types::identity::JwtSecret;
use shelf_auth_types::token::issue_access_token;
use shelf_tracker::router::build_router;
use shelf_tracker::state::AppState;

use crate::helpers::TEST_JWT_SECRET;

// Requests here are rejected before any query runs, so no database is attached.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
    };
    TestServer::new(build_router(state, 10)).unwrap()
}

fn bearer(user_id: i32) -> String {
    issue_access_token(user_id, TEST_JWT_SECRET).unwrap().0
}

fn assert_error_kind(body: &Value, kind: &str) {
    assert_eq!(body["kind"], kind, "unexpected error body: {body}");
    assert!(body["message"].is_string());
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_live_but_not_ready_without_database() {
    let server = server();

    server.get("/healthz").await.assert_status(StatusCode::OK);
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_attach_request_id_to_responses() {
    let server = server();

    let response = server.get("/healthz").await;

    let id = response.header("x-request-id");
    assert!(!id.is_empty());
}

// ── Media ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_unknown_media_type_on_add() {
    let server = server();

    let response = server
        .post("/media/addmedia")
        .json(&json!({
            "type": "Podcast",
            "userId": 1,
            "name": "Foo",
            "dateStarted": "2025-03-01",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_MEDIA_TYPE");
}

#[tokio::test]
async fn should_reject_add_without_name() {
    let server = server();

    let response = server
        .post("/media/addmedia")
        .json(&json!({ "type": "Show", "userId": 1, "dateStarted": "2025-03-01" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn should_reject_non_string_type_on_add() {
    let server = server();

    let response = server
        .post("/media/addmedia")
        .json(&json!({
            "type": 7,
            "userId": 1,
            "name": "Foo",
            "dateStarted": "2025-03-01",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_MEDIA_TYPE");
}

#[tokio::test]
async fn should_parse_string_counts_and_ids_on_add() {
    let server = server();

    // Parsed fields reach validation, which then stops on the missing name.
    let response = server
        .post("/media/addmedia")
        .json(&json!({
            "type": "Show",
            "userId": "1",
            "dateStarted": "2025-03-01",
            "totalEpisodes": "12",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "MISSING_REQUIRED_FIELD");

    let response = server
        .post("/media/addmedia")
        .json(&json!({
            "type": "Show",
            "userId": 1,
            "name": "Foo",
            "dateStarted": "2025-03-01",
            "totalEpisodes": "twelve",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_FIELD");
}

#[tokio::test]
async fn should_reject_unknown_media_type_on_lookup() {
    let server = server();

    let response = server.get("/media/Podcast/Foo").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_MEDIA_TYPE");
}

#[tokio::test]
async fn should_reject_non_string_type_on_edit() {
    let server = server();

    let response = server
        .put("/media/editmedia")
        .json(&json!({ "type": 5, "name": "Foo", "synopsis": "x" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_MEDIA_TYPE");
}

#[tokio::test]
async fn should_reject_favourite_toggle_without_type() {
    let server = server();

    let response = server
        .put("/media/favourite")
        .json(&json!({ "userId": 1, "name": "Foo" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn should_reject_non_string_type_on_favourite() {
    let server = server();

    let response = server
        .put("/media/favourite")
        .json(&json!({ "type": 7, "userId": 1, "name": "Foo" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_MEDIA_TYPE");
}

#[tokio::test]
async fn should_parse_string_user_id_on_favourite() {
    let server = server();

    // A parsed userId lets validation continue to the missing name.
    let response = server
        .put("/media/favourite")
        .json(&json!({ "type": "Movie", "userId": "1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "MISSING_REQUIRED_FIELD");

    let response = server
        .put("/media/favourite")
        .json(&json!({ "type": "Movie", "userId": "one", "name": "Heat" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_FIELD");
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_require_bearer_for_profile_update() {
    let server = server();

    server
        .patch("/users/@me")
        .json(&json!({ "name": "Grace" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .patch("/users/@me")
        .authorization_bearer("not-a-jwt")
        .json(&json!({ "name": "Grace" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_empty_profile_update() {
    let server = server();

    let response = server
        .patch("/users/@me")
        .authorization_bearer(bearer(1))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_sign_up_without_password() {
    let server = server();

    let response = server
        .post("/users/signup")
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "MISSING_DATA");
}

// ── Notes ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_blank_note_body() {
    let server = server();

    let response = server
        .post("/notes")
        .authorization_bearer(bearer(1))
        .json(&json!({ "body": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&response.json::<Value>(), "INVALID_FIELD");
}

#[tokio::test]
async fn should_require_user_id_when_listing_notes() {
    let server = server();

    let missing = server.get("/notes").await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&missing.json::<Value>(), "MISSING_REQUIRED_FIELD");

    let malformed = server.get("/notes?user-id=abc").await;
    malformed.assert_status(StatusCode::BAD_REQUEST);
    assert_error_kind(&malformed.json::<Value>(), "INVALID_FIELD");
}

#[tokio::test]
async fn should_require_bearer_to_delete_note() {
    let server = server();

    server
        .delete("/notes/1")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
