#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use diet_consultant_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("db").join("test.db").to_string_lossy().to_string(),
        export_dir: dir.path().join("exports"),
        export_append: true,
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        secret_key: vec![9u8; 32],
        token_ttl: Duration::from_secs(3600),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let state = build_state(&config).await.unwrap();
        TestApp {
            router: app_router(state, &config),
            dir,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    /// Signs up and logs in, returning the session token.
    pub async fn register(&self, name: &str, email: &str) -> String {
        let (status, _) = self
            .post(
                "/api/auth/signup",
                None,
                serde_json::json!({ "name": name, "email": email, "password": "password123" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                serde_json::json!({ "email": email, "password": "password123" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["accessToken"].as_str().unwrap().to_string()
    }
}
