mod common;

use axum::http::{Method, StatusCode};
use common::TestHarness;
use serde_json::json;

async fn add_custom_entry(
    harness: &TestHarness,
    token: &str,
    date: &str,
    servings: f64,
) -> serde_json::Value {
    let response = harness
        .request(
            Method::POST,
            "/api/food/entries",
            Some(token),
            Some(json!({
                "custom_food": {
                    "name": "Oatmeal",
                    "calories": 150.0,
                    "protein": 5.0,
                    "carbs": 27.0,
                    "fat": 3.0,
                    "serving_size": "40g",
                },
                "servings": servings,
                "meal_type": "breakfast",
                "date": date,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    TestHarness::json(response).await
}

#[tokio::test]
async fn test_add_entry_with_custom_food() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let body = add_custom_entry(&harness, &token, "2025-10-20", 1.5).await;
    let entry = &body["entry"];
    assert_eq!(entry["servings"].as_f64().unwrap(), 1.5);
    assert_eq!(entry["meal_type"], "breakfast");
    assert_eq!(entry["date"], "2025-10-20");
    assert_eq!(entry["food_item"]["name"], "Oatmeal");
    assert_eq!(entry["food_item"]["is_custom"], true);
}

#[tokio::test]
async fn test_add_entry_referencing_existing_item() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let first = add_custom_entry(&harness, &token, "2025-10-20", 1.0).await;
    let item_id = first["entry"]["food_item"]["id"].as_i64().unwrap();

    let response = harness
        .request(
            Method::POST,
            "/api/food/entries",
            Some(&token),
            Some(json!({
                "food_item_id": item_id,
                "servings": 2.0,
                "meal_type": "lunch",
                "date": "2025-10-20",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestHarness::json(response).await;
    assert_eq!(body["entry"]["food_item"]["id"].as_i64().unwrap(), item_id);
}

#[tokio::test]
async fn test_add_entry_requires_item_or_custom_food() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(
            Method::POST,
            "/api/food/entries",
            Some(&token),
            Some(json!({
                "servings": 1.0,
                "meal_type": "lunch",
                "date": "2025-10-20",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_entry_rejects_non_positive_servings() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(
            Method::POST,
            "/api/food/entries",
            Some(&token),
            Some(json!({
                "custom_food": {
                    "name": "Oatmeal",
                    "calories": 150.0,
                    "protein": 5.0,
                    "carbs": 27.0,
                    "fat": 3.0,
                    "serving_size": "40g",
                },
                "servings": 0.0,
                "meal_type": "breakfast",
                "date": "2025-10-20",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_entries_filtered_by_date() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    add_custom_entry(&harness, &token, "2025-10-20", 1.0).await;
    add_custom_entry(&harness, &token, "2025-10-21", 1.0).await;

    let response = harness
        .request(
            Method::GET,
            "/api/food/entries?date=2025-10-20",
            Some(&token),
            None,
        )
        .await;
    let body = TestHarness::json(response).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    assert_eq!(body["entries"][0]["date"], "2025-10-20");
}

#[tokio::test]
async fn test_entries_range_query() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    add_custom_entry(&harness, &token, "2025-10-19", 1.0).await;
    add_custom_entry(&harness, &token, "2025-10-21", 1.0).await;
    add_custom_entry(&harness, &token, "2025-11-01", 1.0).await;

    let response = harness
        .request(
            Method::GET,
            "/api/food/entries?start_date=2025-10-19&end_date=2025-10-25",
            Some(&token),
            None,
        )
        .await;
    let body = TestHarness::json(response).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_entry() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let created = add_custom_entry(&harness, &token, "2025-10-20", 1.0).await;
    let entry_id = created["entry"]["id"].as_i64().unwrap();

    let response = harness
        .request(
            Method::PUT,
            "/api/food/entries",
            Some(&token),
            Some(json!({
                "id": entry_id,
                "servings": 2.5,
                "meal_type": "dinner",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestHarness::json(response).await;
    assert_eq!(body["entry"]["servings"].as_f64().unwrap(), 2.5);
    assert_eq!(body["entry"]["meal_type"], "dinner");
}

#[tokio::test]
async fn test_update_unknown_entry_not_found() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let response = harness
        .request(
            Method::PUT,
            "/api/food/entries",
            Some(&token),
            Some(json!({"id": 9999, "servings": 2.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_entry() {
    let harness = TestHarness::new().await;
    let (token, _) = harness.signup("alice@example.com", "Alice").await;

    let created = add_custom_entry(&harness, &token, "2025-10-20", 1.0).await;
    let entry_id = created["entry"]["id"].as_i64().unwrap();

    let response = harness
        .request(
            Method::DELETE,
            &format!("/api/food/entries?id={}", entry_id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = TestHarness::json(response).await;
    assert_eq!(body["success"], true);

    let response = harness
        .request(
            Method::GET,
            "/api/food/entries?date=2025-10-20",
            Some(&token),
            None,
        )
        .await;
    let body = TestHarness::json(response).await;
    assert!(body["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_entries_are_scoped_per_user() {
    let harness = TestHarness::new().await;
    let (alice, _) = harness.signup("alice@example.com", "Alice").await;
    let (bob, _) = harness.signup("bob@example.com", "Bob").await;

    let created = add_custom_entry(&harness, &alice, "2025-10-20", 1.0).await;
    let entry_id = created["entry"]["id"].as_i64().unwrap();

    // Bob sees nothing of Alice's journal
    let response = harness
        .request(
            Method::GET,
            "/api/food/entries?date=2025-10-20",
            Some(&bob),
            None,
        )
        .await;
    let body = TestHarness::json(response).await;
    assert!(body["entries"].as_array().unwrap().is_empty());

    // Bob cannot edit Alice's entry
    let response = harness
        .request(
            Method::PUT,
            "/api/food/entries",
            Some(&bob),
            Some(json!({"id": entry_id, "servings": 5.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A cross-user delete removes nothing
    harness
        .request(
            Method::DELETE,
            &format!("/api/food/entries?id={}", entry_id),
            Some(&bob),
            None,
        )
        .await;
    let response = harness
        .request(
            Method::GET,
            "/api/food/entries?date=2025-10-20",
            Some(&alice),
            None,
        )
        .await;
    let body = TestHarness::json(response).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
}
