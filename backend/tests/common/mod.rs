//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a fresh in-memory store and drives the full router
//! in-process.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use exercise_log_backend::{config::AppConfig, routes, state::AppState};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let state = AppState::new(test_config());
        let app = routes::create_router(state.clone());

        Self { app, state }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with a URL-encoded form body
    pub async fn post_form(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// GET and parse the body as JSON
    pub async fn get_value(&self, path: &str) -> Value {
        let (status, body) = self.get(path).await;
        assert_eq!(status, StatusCode::OK, "unexpected status for {path}: {body}");
        serde_json::from_str(&body).unwrap()
    }

    /// POST JSON and parse the body as JSON
    pub async fn post_value(&self, path: &str, body: &Value) -> Value {
        let (status, response) = self.post_json(path, body).await;
        assert_eq!(status, StatusCode::OK, "unexpected status for {path}: {response}");
        serde_json::from_str(&response).unwrap()
    }

    /// Create a user and return its id
    pub async fn create_user(&self, username: &str) -> String {
        let user = self
            .post_value("/api/users", &serde_json::json!({ "username": username }))
            .await;
        user["_id"].as_str().unwrap().to_string()
    }

    /// Log an exercise with an explicit date
    pub async fn log_exercise(&self, user_id: &str, description: &str, duration: i64, date: &str) -> Value {
        self.post_value(
            &format!("/api/users/{user_id}/exercises"),
            &serde_json::json!({
                "description": description,
                "duration": duration,
                "date": date,
            }),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.static_files.dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public");
    config
}
