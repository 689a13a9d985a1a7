//! Root info and health endpoint tests.

use super::test_helpers::*;

/// The root endpoint describes the API.
#[actix_rt::test]
async fn test_root_info() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "GSD Assessment API");
    assert_eq!(body["documentation"], "/docs/");
    assert!(body["total_endpoints"].as_u64().unwrap_or(0) > 0);
    assert!(body["endpoints_by_category"]["users"].is_array());
}

/// Health reports the record count of each store.
#[actix_rt::test]
async fn test_health_counts() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    create_user(&app, "alice").await;

    let (status, body) = get_json(&app, "/api/v1/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"]["users"], 1);
    assert_eq!(body["records"]["images"], 0);
}
