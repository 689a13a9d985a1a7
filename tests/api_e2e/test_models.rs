//! Scoring model endpoint tests.

use super::test_helpers::*;
use serde_json::json;

/// A model registered with only name and version is active ResNet50.
#[actix_rt::test]
async fn test_create_model_defaults() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let model = create_model(&app, "gsd-net").await;

    assert_eq!(model["architecture"], "ResNet50");
    assert_eq!(model["accuracy"], 0.95);
    assert_eq!(model["is_active"], true);
    assert_eq!(model["version"], "1.0.0");
}

/// Deactivating a model keeps its other fields.
#[actix_rt::test]
async fn test_update_model_active_flag() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let model = create_model(&app, "gsd-net").await;

    let uri = format!("/api/v1/models/{}", id_of(&model));
    let (status, body) = put_json(&app, &uri, json!({ "is_active": false })).await;

    assert_eq!(status, 200);
    assert_eq!(body["is_active"], false);
    assert_eq!(body["model_name"], "gsd-net");
}

/// Assessments outlive the model that produced them.
#[actix_rt::test]
async fn test_delete_model_keeps_assessments() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;
    let assessment = create_assessment(&app, id_of(&image), id_of(&model)).await;

    let (status, body) = delete_json(&app, &format!("/api/v1/models/{}", id_of(&model))).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Model 'gsd-net' deleted successfully");

    let uri = format!("/api/v1/assessments/{}", id_of(&assessment));
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(body["model_id"], id_of(&model));

    let (status, body) = get_json(&app, &format!("/api/v1/models/{}", id_of(&model))).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
}
