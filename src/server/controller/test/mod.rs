//! HTTP-level tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::{
    model::api::ApiResponse,
    server::{
        router,
        service::{
            auth::{password::PasswordHasher, token::TokenKeys},
            session::ActivationLock,
        },
        state::AppState,
    },
};


/// Router plus the test database it runs against.
struct TestApp {
    router: Router,
    _test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();

        let state = AppState {
            db: test.db.clone().unwrap(),
            tokens: TokenKeys::new(b"test-secret"),
            passwords: PasswordHasher::new(4),
            activation: ActivationLock::default(),
            expose_secrets: true,
        };

        Self {
            router: router::router().with_state(state),
            _test: test,
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> (StatusCode, ApiResponse) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, ApiResponse) {
        self.request(Method::GET, uri, None, None).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, ApiResponse) {
        self.request(Method::DELETE, uri, None, None).await
    }

    async fn send(&self, method: Method, uri: &str, body: Value) -> (StatusCode, ApiResponse) {
        self.request(method, uri, Some(body.to_string()), None).await
    }
}
