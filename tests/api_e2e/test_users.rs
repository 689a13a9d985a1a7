//! User endpoint tests.

use super::test_helpers::*;
use serde_json::json;

/// A new user gets id 1, the default role and a 20-character API key.
#[actix_rt::test]
async fn test_create_user_issues_api_key() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "alice", "email": "alice@example.com" }),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "user");
    assert_eq!(body["api_key"].as_str().map(str::len), Some(20));
    assert!(body["registration_date"].is_string());
}

/// Reusing a username or an email is rejected with DUPLICATE_KEY.
#[actix_rt::test]
async fn test_duplicate_username_and_email_rejected() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    create_user(&app, "alice").await;

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "alice", "email": "other@example.com" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DUPLICATE_KEY");

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "bob", "email": "alice@example.com" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DUPLICATE_KEY");

    let (_, users) = get_json(&app, "/api/v1/users").await;
    assert_eq!(users.as_array().map(Vec::len), Some(1));
}

/// A malformed email never reaches the registry.
#[actix_rt::test]
async fn test_invalid_email_rejected() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "carol", "email": "not-an-email" }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

/// Renaming a user onto another user's username collides.
#[actix_rt::test]
async fn test_update_user_rechecks_uniqueness() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;

    let uri = format!("/api/v1/users/{}", id_of(&bob));
    let (status, body) = put_json(&app, &uri, json!({ "username": "alice" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DUPLICATE_KEY");

    // Keeping its own email is not a collision
    let (status, body) = put_json(
        &app,
        &uri,
        json!({ "email": "bob@example.com", "role": "admin" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["username"], "bob");
}

/// Unknown ids report NOT_FOUND for every verb.
#[actix_rt::test]
async fn test_unknown_user_not_found() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let (status, body) = get_json(&app, "/api/v1/users/42").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "User 42 not found");

    let (status, _) = put_json(&app, "/api/v1/users/42", json!({ "role": "admin" })).await;
    assert_eq!(status, 404);

    let (status, _) = delete_json(&app, "/api/v1/users/42").await;
    assert_eq!(status, 404);
}

/// Deleting a user frees its username and never reuses its id.
#[actix_rt::test]
async fn test_deleted_user_id_not_reused() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let alice = create_user(&app, "alice").await;

    let (status, body) = delete_json(&app, &format!("/api/v1/users/{}", id_of(&alice))).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "User 'alice' deleted successfully");

    let again = create_user(&app, "alice").await;
    assert_eq!(id_of(&again), 2);
}

/// A body that is not valid JSON is reported as INVALID_INPUT.
#[actix_rt::test]
async fn test_malformed_json_rejected() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let req = actix_web::test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_INPUT");
}

/// Emails differing only in domain case belong to the same user.
#[actix_rt::test]
async fn test_email_domain_case_is_duplicate() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    create_user(&app, "ann").await;

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "bob", "email": "ann@EXAMPLE.com" }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "DUPLICATE_KEY");
}

/// Usernames are stored trimmed, so padding does not make a new name.
#[actix_rt::test]
async fn test_padded_username_is_duplicate() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "  ann ", "email": "ann@Example.org" }),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["username"], "ann");
    assert_eq!(body["email"], "ann@example.org");

    let (status, body) = post_json(
        &app,
        "/api/v1/users",
        json!({ "username": "ann", "email": "other@example.org" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DUPLICATE_KEY");
}

/// A path id that is not an unsigned integer gets a JSON error body.
#[actix_rt::test]
async fn test_non_numeric_id_rejected_as_json() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    for uri in ["/api/v1/users/abc", "/api/v1/users/-1", "/api/v1/assessments/x/quality-metrics"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, 400, "{}", uri);
        assert_eq!(body["error"], "INVALID_INPUT", "{}", uri);
    }

    let (status, body) = delete_json(&app, "/api/v1/images/1.5").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}
