//! Assessment and quality metrics endpoint tests.

use super::test_helpers::*;
use serde_json::json;

/// Scores come from the registry's score source, not from the request.
#[actix_rt::test]
async fn test_create_assessment_uses_generated_scores() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;

    let (status, body) = post_json(
        &app,
        "/api/v1/assessments",
        json!({
            "image_id": id_of(&image),
            "model_id": id_of(&model),
            "gsd_value": 123.0,
            "confidence_score": 0.01
        }),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["gsd_value"], 4.5);
    assert_eq!(body["confidence_score"], 0.75);
    assert_eq!(body["processing_time"], 1.05);
}

/// Random scores stay within their documented ranges.
#[actix_rt::test]
async fn test_random_scores_within_ranges() {
    let registry = random_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;

    for _ in 0..20 {
        let body = create_assessment(&app, id_of(&image), id_of(&model)).await;
        let gsd = body["gsd_value"].as_f64().unwrap_or(-1.0);
        let confidence = body["confidence_score"].as_f64().unwrap_or(-1.0);
        let processing = body["processing_time"].as_f64().unwrap_or(-1.0);

        assert!((0.0..=9.0).contains(&gsd), "gsd {}", gsd);
        assert!((0.5..=1.0).contains(&confidence), "confidence {}", confidence);
        assert!((0.1..=2.0).contains(&processing), "processing {}", processing);
    }
}

/// Every assessment gets exactly one quality metrics record.
#[actix_rt::test]
async fn test_assessment_quality_metrics_attached() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;
    let assessment = create_assessment(&app, id_of(&image), id_of(&model)).await;

    let uri = format!("/api/v1/assessments/{}/quality-metrics", id_of(&assessment));
    let (status, metrics) = get_json(&app, &uri).await;

    assert_eq!(status, 200);
    assert_eq!(metrics["assessment_id"], id_of(&assessment));
    assert_eq!(metrics["sharpness_score"], 0.8);
    assert_eq!(metrics["noise_level"], 0.1);
    assert_eq!(metrics["contrast_ratio"], 2.5);
    assert_eq!(metrics["blur_detected"], false);
    assert_eq!(metrics["quality_grade"], "good");

    let (status, by_id) =
        get_json(&app, &format!("/api/v1/quality-metrics/{}", id_of(&metrics))).await;
    assert_eq!(status, 200);
    assert_eq!(by_id, metrics);
}

/// A dangling image or model leaves every store untouched.
#[actix_rt::test]
async fn test_create_assessment_dangling_reference() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;

    let (status, body) = post_json(
        &app,
        "/api/v1/assessments",
        json!({ "image_id": 999, "model_id": id_of(&model) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DANGLING_REFERENCE");
    assert_eq!(body["message"], "Dangling reference: Image 999 does not exist");

    let (status, _) = post_json(
        &app,
        "/api/v1/assessments",
        json!({ "image_id": id_of(&image), "model_id": 999 }),
    )
    .await;
    assert_eq!(status, 400);

    let (_, health) = get_json(&app, "/api/v1/health").await;
    assert_eq!(health["records"]["assessments"], 0);
    assert_eq!(health["records"]["quality_metrics"], 0);
}

/// Updating scores replaces only the supplied values.
#[actix_rt::test]
async fn test_update_assessment_scores() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;
    let assessment = create_assessment(&app, id_of(&image), id_of(&model)).await;

    let uri = format!("/api/v1/assessments/{}", id_of(&assessment));
    let (status, body) = put_json(&app, &uri, json!({ "gsd_value": 2.25 })).await;

    assert_eq!(status, 200);
    assert_eq!(body["gsd_value"], 2.25);
    assert_eq!(body["confidence_score"], 0.75);
}

/// Deleting an assessment deletes its quality metrics.
#[actix_rt::test]
async fn test_delete_assessment_removes_metrics() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let user = create_user(&app, "alice").await;
    let image = create_image(&app, id_of(&user), "scene.jpg").await;
    let model = create_model(&app, "gsd-net").await;
    let assessment = create_assessment(&app, id_of(&image), id_of(&model)).await;

    let uri = format!("/api/v1/assessments/{}", id_of(&assessment));
    let (status, body) = delete_json(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(
        body["message"],
        format!("Assessment for image {} deleted successfully", id_of(&image))
    );

    let (status, _) = get_json(&app, &format!("{}/quality-metrics", uri)).await;
    assert_eq!(status, 404);
    let (_, metrics) = get_json(&app, "/api/v1/quality-metrics").await;
    assert_eq!(metrics.as_array().map(Vec::len), Some(0));
}
