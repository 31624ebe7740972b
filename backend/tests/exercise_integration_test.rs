//! Integration tests for exercise logging and log retrieval

mod common;

use axum::http::StatusCode;
use exercise_log_shared::calendar;
use serde_json::{json, Value};

#[tokio::test]
async fn test_log_exercise_for_unknown_user() {
    let app = common::TestApp::new();

    let response = app
        .post_value(
            "/api/users/7/exercises",
            &json!({ "description": "run", "duration": "30" }),
        )
        .await;

    assert_eq!(response, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_log_exercise_defaults_date_to_today() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;

    let (status, body) = app
        .post_form(
            &format!("/api/users/{id}/exercises"),
            "description=run&duration=30",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let exercise: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        exercise,
        json!({
            "username": "alice",
            "description": "run",
            "duration": 30,
            "date": calendar::today(),
            "_id": id,
        })
    );
}

#[tokio::test]
async fn test_log_exercise_requires_description_and_duration() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    let path = format!("/api/users/{id}/exercises");

    for body in [
        json!({ "duration": "30" }),
        json!({ "description": "run" }),
        json!({ "description": "", "duration": "30" }),
        json!({ "description": "run", "duration": 0 }),
    ] {
        let response = app.post_value(&path, &body).await;
        assert_eq!(response["error"], "Description and duration required");
    }

    let log = app.get_value(&format!("/api/users/{id}/logs")).await;
    assert_eq!(log["count"], 0);
}

#[tokio::test]
async fn test_log_exercise_coerces_loose_values() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    let path = format!("/api/users/{id}/exercises");

    let partial = app
        .post_value(&path, &json!({ "description": "walk", "duration": "45min" }))
        .await;
    assert_eq!(partial["duration"], 45);

    let nan = app
        .post_value(
            &path,
            &json!({ "description": "nap", "duration": "later", "date": "not a date" }),
        )
        .await;
    assert!(nan["duration"].is_null());
    assert_eq!(nan["date"], "Invalid Date");
}

#[tokio::test]
async fn test_exercises_round_trip_into_log() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    let other = app.create_user("bob").await;

    let created = vec![
        app.log_exercise(&id, "run", 30, "2024-01-01").await,
        app.log_exercise(&other, "swim", 20, "2024-01-02").await,
        app.log_exercise(&id, "bike", 60, "2024-03-15").await,
    ];

    let log = app.get_value(&format!("/api/users/{id}/logs")).await;

    assert_eq!(log["username"], "alice");
    assert_eq!(log["_id"], id.as_str());
    assert_eq!(log["count"], 2);
    assert_eq!(
        log["log"],
        json!([
            { "description": "run", "duration": 30, "date": "Mon Jan 01 2024" },
            { "description": "bike", "duration": 60, "date": "Fri Mar 15 2024" },
        ])
    );

    for exercise in [&created[0], &created[2]] {
        assert_eq!(exercise["_id"], id.as_str());
    }
    assert_eq!(created[1]["_id"], other.as_str());
}

#[tokio::test]
async fn test_logs_filter_then_limit() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;

    app.log_exercise(&id, "before", 10, "2023-12-31").await;
    app.log_exercise(&id, "first", 20, "2024-01-10").await;
    app.log_exercise(&id, "second", 30, "2024-01-20").await;
    app.log_exercise(&id, "third", 40, "2024-01-30").await;
    app.log_exercise(&id, "after", 50, "2024-02-01").await;

    let log = app
        .get_value(&format!(
            "/api/users/{id}/logs?from=2024-01-01&to=2024-01-31&limit=2"
        ))
        .await;

    assert_eq!(log["count"], 2);
    let descriptions: Vec<&str> = log["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, vec!["first", "second"]);
}

#[tokio::test]
async fn test_logs_count_reflects_returned_entries() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    for day in 1..=5 {
        app.log_exercise(&id, "run", 30, &format!("2024-01-0{day}")).await;
    }

    let log = app.get_value(&format!("/api/users/{id}/logs?limit=3")).await;
    assert_eq!(log["count"], 3);
    assert_eq!(log["log"].as_array().unwrap().len(), 3);
    assert_eq!(log["log"][0]["date"], "Mon Jan 01 2024");

    let from_only = app
        .get_value(&format!("/api/users/{id}/logs?from=2024-01-04"))
        .await;
    assert_eq!(from_only["count"], 2);

    let to_only = app.get_value(&format!("/api/users/{id}/logs?to=2024-01-02")).await;
    assert_eq!(to_only["count"], 2);
}

#[tokio::test]
async fn test_logs_ignore_empty_and_zero_params() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    app.log_exercise(&id, "run", 30, "2024-01-01").await;
    app.log_exercise(&id, "row", 15, "2024-06-01").await;

    let log = app
        .get_value(&format!("/api/users/{id}/logs?from=&to=&limit=0"))
        .await;
    assert_eq!(log["count"], 2);

    let invalid_bound = app
        .get_value(&format!("/api/users/{id}/logs?from=someday"))
        .await;
    assert_eq!(invalid_bound["count"], 0);
    assert_eq!(invalid_bound["log"], json!([]));
}

#[tokio::test]
async fn test_logs_for_unknown_user() {
    let app = common::TestApp::new();

    let response = app.get_value("/api/users/1/logs").await;

    assert_eq!(response, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_logs_repeated_limit_uses_leading_value() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    for day in 1..=3 {
        app.log_exercise(&id, "run", 30, &format!("2024-01-0{day}")).await;
    }

    let (status, body) = app
        .get(&format!("/api/users/{id}/logs?limit=1&limit=2"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let log: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(log["count"], 1);
    assert_eq!(log["log"][0]["date"], "Mon Jan 01 2024");
}

#[tokio::test]
async fn test_logs_repeated_date_bound_is_unparseable() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;
    app.log_exercise(&id, "run", 30, "2024-01-01").await;

    let log = app
        .get_value(&format!("/api/users/{id}/logs?from=2023-01-01&from=2023-06-01"))
        .await;
    assert_eq!(log["count"], 0);
}

#[tokio::test]
async fn test_logs_roll_over_day_past_month_end() {
    let app = common::TestApp::new();
    let id = app.create_user("alice").await;

    let body = app.log_exercise(&id, "run", 30, "2023-02-30").await;
    assert_eq!(body["date"], "Thu Mar 02 2023");

    let log = app
        .get_value(&format!("/api/users/{id}/logs?from=2023-03-01&to=2023-03-02"))
        .await;
    assert_eq!(log["count"], 1);
}
