//! Image endpoint tests.

use super::test_helpers::*;
use serde_json::json;

/// Omitted dimensions and format take their defaults.
#[actix_rt::test]
async fn test_create_image_defaults() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;

    let image = create_image(&app, id_of(&user), "scene.jpg").await;

    assert_eq!(image["width"], 1920);
    assert_eq!(image["height"], 1080);
    assert_eq!(image["format"], "jpg");
    assert_eq!(image["status"], "uploaded");
    assert_eq!(image["user_id"], id_of(&user));
}

/// An image must reference an existing user.
#[actix_rt::test]
async fn test_create_image_unknown_user_rejected() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/images",
        json!({ "filename": "orphan.jpg", "file_size": 10, "user_id": 7 }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "DANGLING_REFERENCE");

    let (_, images) = get_json(&app, "/api/v1/images").await;
    assert_eq!(images.as_array().map(Vec::len), Some(0));
}

/// A negative size does not deserialize into an image.
#[actix_rt::test]
async fn test_negative_file_size_rejected() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;

    let (status, body) = post_json(
        &app,
        "/api/v1/images",
        json!({ "filename": "bad.jpg", "file_size": -1, "user_id": id_of(&user) }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

/// Status and filename are the only updatable fields.
#[actix_rt::test]
async fn test_update_image_status() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;

    let uri = format!("/api/v1/images/{}", id_of(&image));
    let (status, body) = put_json(&app, &uri, json!({ "status": "completed" })).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["filename"], "scene.jpg");
}

/// Deleting an image takes its assessments and their metrics with it.
#[actix_rt::test]
async fn test_delete_image_cascades() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let model = create_model(&app, "resnet").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let keep = create_image(&app, id_of(&user), "keep.jpg").await;
    let gone = create_assessment(&app, id_of(&image), id_of(&model)).await;
    let kept = create_assessment(&app, id_of(&keep), id_of(&model)).await;

    let (status, body) = delete_json(&app, &format!("/api/v1/images/{}", id_of(&image))).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Image 'scene.jpg' deleted successfully");

    let (status, _) = get_json(&app, &format!("/api/v1/assessments/{}", id_of(&gone))).await;
    assert_eq!(status, 404);
    let (status, _) = get_json(&app, &format!("/api/v1/assessments/{}", id_of(&kept))).await;
    assert_eq!(status, 200);

    let (_, metrics) = get_json(&app, "/api/v1/quality-metrics").await;
    let metrics = metrics.as_array().cloned().unwrap_or_default();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0]["assessment_id"], id_of(&kept));
}

/// The per-image assessment list only contains that image's assessments.
#[actix_rt::test]
async fn test_list_image_assessments() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let model = create_model(&app, "resnet").await;
    let first = create_image(&app, id_of(&user), "a.jpg").await;
    let second = create_image(&app, id_of(&user), "b.jpg").await;
    create_assessment(&app, id_of(&first), id_of(&model)).await;
    create_assessment(&app, id_of(&second), id_of(&model)).await;
    create_assessment(&app, id_of(&first), id_of(&model)).await;

    let uri = format!("/api/v1/images/{}/assessments", id_of(&first));
    let (status, body) = get_json(&app, &uri).await;

    assert_eq!(status, 200);
    let ids: Vec<u64> = body
        .as_array()
        .map(|list| list.iter().map(id_of).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![1, 3]);

    let (status, _) = get_json(&app, "/api/v1/images/99/assessments").await;
    assert_eq!(status, 404);
}
