mod common;

use axum::http::{Method, StatusCode};
use common::TestHarness;
use serde_json::json;

#[tokio::test]
async fn test_profile_is_null_before_first_save() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(Method::GET, "/api/profile", Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestHarness::json(response).await;
    assert!(body["profile"].is_null());
    assert!(body["daily_goals"].is_null());
}

#[tokio::test]
async fn test_save_profile_computes_goals() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(
            Method::PUT,
            "/api/profile",
            Some(&token),
            Some(json!({
                "age": 30,
                "gender": "male",
                "height_cm": 180.0,
                "weight_kg": 80.0,
                "activity_level": "moderate",
                "goal": "maintain",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestHarness::json(response).await;
    assert_eq!(body["profile"]["age"], 30);
    assert_eq!(body["profile"]["unit_system"], "metric");
    // Mifflin-St Jeor at moderate activity: BMR 1780, TDEE 2759
    assert_eq!(body["daily_goals"]["calories"], 2759);
    assert_eq!(body["daily_goals"]["protein"], 207);
    assert_eq!(body["daily_goals"]["carbs"], 276);
    assert_eq!(body["daily_goals"]["fat"], 92);
}

#[tokio::test]
async fn test_goal_adjusts_calorie_target() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(
            Method::PUT,
            "/api/profile",
            Some(&token),
            Some(json!({
                "age": 30,
                "gender": "male",
                "height_cm": 180.0,
                "weight_kg": 80.0,
                "activity_level": "moderate",
                "goal": "lose",
                "target_weight": 75.0,
            })),
        )
        .await;
    let body = TestHarness::json(response).await;
    assert_eq!(body["daily_goals"]["calories"], 2259);
}

#[tokio::test]
async fn test_custom_macros_override_computed_goals() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(
            Method::PUT,
            "/api/profile",
            Some(&token),
            Some(json!({
                "age": 30,
                "gender": "male",
                "height_cm": 180.0,
                "weight_kg": 80.0,
                "activity_level": "moderate",
                "goal": "maintain",
                "use_custom_macros": true,
                "custom_calories": 2000,
                "custom_protein": 150,
                "custom_carbs": 200,
                "custom_fat": 70,
            })),
        )
        .await;
    let body = TestHarness::json(response).await;
    assert_eq!(body["daily_goals"]["calories"], 2000);
    assert_eq!(body["daily_goals"]["protein"], 150);
    assert_eq!(body["daily_goals"]["carbs"], 200);
    assert_eq!(body["daily_goals"]["fat"], 70);
}

#[tokio::test]
async fn test_profile_upsert_overwrites() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let save = |age: i32| {
        json!({
            "age": age,
            "gender": "other",
            "height_cm": 170.0,
            "weight_kg": 70.0,
            "activity_level": "sedentary",
            "goal": "maintain",
        })
    };

    harness
        .request(Method::PUT, "/api/profile", Some(&token), Some(save(30)))
        .await;
    harness
        .request(Method::PUT, "/api/profile", Some(&token), Some(save(31)))
        .await;

    let response = harness
        .request(Method::GET, "/api/profile", Some(&token), None)
        .await;
    let body = TestHarness::json(response).await;
    assert_eq!(body["profile"]["age"], 31);
}

#[tokio::test]
async fn test_profile_validation() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let bad_requests = [
        json!({
            "age": 0,
            "gender": "male",
            "height_cm": 180.0,
            "weight_kg": 80.0,
            "activity_level": "moderate",
            "goal": "maintain",
        }),
        json!({
            "age": 30,
            "gender": "male",
            "height_cm": -1.0,
            "weight_kg": 80.0,
            "activity_level": "moderate",
            "goal": "maintain",
        }),
        json!({
            "age": 30,
            "gender": "male",
            "height_cm": 180.0,
            "weight_kg": 80.0,
            "activity_level": "moderate",
            "goal": "maintain",
            "target_weight": 0.0,
        }),
    ];
    for body in bad_requests {
        let response = harness
            .request(Method::PUT, "/api/profile", Some(&token), Some(body))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
