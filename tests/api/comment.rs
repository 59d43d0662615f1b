use crate::helpers;
use crate::helpers::comment::random_comment_payload;
use serde_json::Value;

// ============================================================================
// Create Comment
// ============================================================================

#[tokio::test]
async fn create_comment_returns_200_and_echoes_the_record() {
    let app = helpers::spawn_app().await;

    let payload = serde_json::json!({
        "groomerId": 7,
        "userId": 3,
        "title": "Great",
        "message": "Very thorough",
        "rating": 5
    });

    let response = app.create_comment(&payload).await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Expected 200 OK for valid comment creation"
    );

    let body: Value = response.json().await.unwrap();
    assert!(body["id"].is_i64(), "Expected an assigned integer id");
    assert_eq!(body["groomerId"], 7);
    assert_eq!(body["userId"], 3);
    assert_eq!(body["title"], "Great");
    assert_eq!(body["message"], "Very thorough");
    assert_eq!(body["rating"], 5);
}

#[tokio::test]
async fn create_comment_accepts_every_rating_from_1_to_5() {
    let app = helpers::spawn_app().await;

    for rating in 1..=5 {
        let response = app
            .create_comment(&random_comment_payload(rating, rating))
            .await;
        assert_eq!(response.status().as_u16(), 200, "rating {rating}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["rating"], rating);
    }

    assert_eq!(app.count_stored_comments().await, 5);
}

#[tokio::test]
async fn create_comment_returns_400_and_persists_nothing_for_invalid_rating() {
    let app = helpers::spawn_app().await;

    for rating in [0, -1, 6, 42] {
        let response = app.create_comment(&random_comment_payload(7, rating)).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "Expected 400 for rating {rating}"
        );
        assert_eq!(
            response.text().await.unwrap(),
            format!("Invalid rating {rating}: must be between 1 and 5.")
        );
    }

    assert_eq!(app.count_stored_comments().await, 0);
}

#[tokio::test]
async fn create_comment_returns_400_when_fields_are_missing() {
    let app = helpers::spawn_app().await;

    let test_cases = [
        (
            serde_json::json!({ "userId": 3, "title": "t", "message": "m", "rating": 4 }),
            "missing groomerId",
        ),
        (
            serde_json::json!({ "groomerId": 7, "title": "t", "message": "m", "rating": 4 }),
            "missing userId",
        ),
        (
            serde_json::json!({ "groomerId": 7, "userId": 3, "message": "m", "rating": 4 }),
            "missing title",
        ),
        (
            serde_json::json!({ "groomerId": 7, "userId": 3, "title": "t", "rating": 4 }),
            "missing message",
        ),
        (
            serde_json::json!({ "groomerId": 7, "userId": 3, "title": "t", "message": "m" }),
            "missing rating",
        ),
    ];

    for (payload, description) in test_cases {
        let response = app.create_comment(&payload).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 when the payload was {description}"
        );
    }

    assert_eq!(app.count_stored_comments().await, 0);
}

#[tokio::test]
async fn sequential_creates_receive_distinct_ids() {
    let app = helpers::spawn_app().await;

    let first: Value = app
        .create_comment(&random_comment_payload(1, 4))
        .await
        .json()
        .await
        .unwrap();
    let second: Value = app
        .create_comment(&random_comment_payload(2, 2))
        .await
        .json()
        .await
        .unwrap();

    assert_ne!(first["id"], second["id"]);
}

// ============================================================================
// Get Comment For Groomer
// ============================================================================

#[tokio::test]
async fn get_comment_returns_the_record_created_for_a_groomer() {
    let app = helpers::spawn_app().await;

    let payload = random_comment_payload(7, 3);
    let created: Value = app.create_comment(&payload).await.json().await.unwrap();

    let response = app.get_comment_for_groomer(7).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, created);
    assert_eq!(body["groomerId"], payload["groomerId"]);
    assert_eq!(body["userId"], payload["userId"]);
    assert_eq!(body["title"], payload["title"]);
    assert_eq!(body["message"], payload["message"]);
    assert_eq!(body["rating"], payload["rating"]);
}

#[tokio::test]
async fn get_comment_returns_404_for_unknown_groomer() {
    let app = helpers::spawn_app().await;

    let response = app.get_comment_for_groomer(999).await;

    assert_eq!(response.status().as_u16(), 404);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("Could not find comment 999")
    );
}

#[tokio::test]
async fn get_comment_returns_404_for_non_numeric_id() {
    let app = helpers::spawn_app().await;

    let response = app.send_get("not-a-number").await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn get_comment_returns_one_of_several_comments_for_the_same_groomer() {
    let app = helpers::spawn_app().await;

    let mut ids = Vec::new();
    for rating in [2, 5] {
        let body: Value = app
            .create_comment(&random_comment_payload(11, rating))
            .await
            .json()
            .await
            .unwrap();
        ids.push(body["id"].clone());
    }

    let response = app.get_comment_for_groomer(11).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["groomerId"], 11);
    assert!(ids.contains(&body["id"]));
}

#[tokio::test]
async fn full_create_then_read_scenario() {
    let app = helpers::spawn_app().await;

    let created = app
        .create_comment(&serde_json::json!({
            "groomerId": 7,
            "userId": 3,
            "title": "Great",
            "message": "Very thorough",
            "rating": 5
        }))
        .await;
    assert_eq!(created.status().as_u16(), 200);
    let created: Value = created.json().await.unwrap();

    let fetched: Value = app.get_comment_for_groomer(7).await.json().await.unwrap();
    assert_eq!(fetched, created);

    let missing = app.get_comment_for_groomer(999).await;
    assert_eq!(missing.text().await.unwrap(), "Could not find comment 999");

    let rejected = app
        .create_comment(&serde_json::json!({
            "groomerId": 8,
            "userId": 3,
            "title": "Bad",
            "message": "Zero stars",
            "rating": 0
        }))
        .await;
    assert_eq!(rejected.status().as_u16(), 400);
    assert_eq!(app.count_stored_comments().await, 1);
}
