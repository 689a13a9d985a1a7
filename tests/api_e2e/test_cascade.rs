//! Cross-resource cascade tests.

use super::test_helpers::*;

/// Deleting a user removes its images, their assessments and metrics,
/// and leaves models alone.
#[actix_rt::test]
async fn test_delete_user_cascades_through_images() {
    let registry = midpoint_registry();
    let app = create_test_app(&registry).await;
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;
    let model = create_model(&app, "gsd-net").await;
    let image = create_image(&app, id_of(&alice), "alice.jpg").await;
    let other = create_image(&app, id_of(&bob), "bob.jpg").await;
    let assessment = create_assessment(&app, id_of(&image), id_of(&model)).await;
    create_assessment(&app, id_of(&other), id_of(&model)).await;

    let (status, _) = delete_json(&app, &format!("/api/v1/users/{}", id_of(&alice))).await;
    assert_eq!(status, 200);

    let (status, _) = get_json(&app, &format!("/api/v1/images/{}", id_of(&image))).await;
    assert_eq!(status, 404);
    let (status, _) =
        get_json(&app, &format!("/api/v1/assessments/{}", id_of(&assessment))).await;
    assert_eq!(status, 404);
    let (status, _) = get_json(&app, "/api/v1/quality-metrics/1").await;
    assert_eq!(status, 404);
    let (status, _) = get_json(&app, &format!("/api/v1/models/{}", id_of(&model))).await;
    assert_eq!(status, 200);

    let (_, health) = get_json(&app, "/api/v1/health").await;
    assert_eq!(health["records"]["users"], 1);
    assert_eq!(health["records"]["images"], 1);
    assert_eq!(health["records"]["models"], 1);
    assert_eq!(health["records"]["assessments"], 1);
    assert_eq!(health["records"]["quality_metrics"], 1);
}
