#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use brevity::router::init_router;
use brevity::state::AppState;
use brevity::store::InMemoryUserStore;
use brevity_auth::{ManualClock, TokenAuthenticator};
use brevity_config::{CorsConfig, JwtConfig, PasswordConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";
pub const TEST_PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is not JSON
    pub body: Value,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET, "HS256", 30)
}

/// A fresh app with an empty store, a frozen clock and cheap bcrypt.
pub fn setup_test_app() -> TestApp {
    let clock = Arc::new(ManualClock::starting_now());
    let authenticator = TokenAuthenticator::with_clock(&jwt_config(), clock.clone()).unwrap();

    let state = AppState::new(
        authenticator,
        Arc::new(InMemoryUserStore::new()),
        PasswordConfig { bcrypt_cost: 4 },
        CorsConfig::parse("*"),
    );

    TestApp {
        router: init_router(state.clone()),
        state,
        clock,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request("DELETE", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("PUT", uri, token, Some(body))).await
    }

    /// Registers `username` with [`TEST_PASSWORD`] and returns the access token.
    pub async fn register(&self, username: &str, email: &str) -> String {
        let response = self
            .post(
                "/api/auth/register",
                None,
                json!({
                    "username": username,
                    "email": email,
                    "password": TEST_PASSWORD,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        access_token(&response)
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/api/auth/login",
            None,
            json!({
                "username": username,
                "password": password,
            }),
        )
        .await
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn access_token(response: &TestResponse) -> String {
    response.body["access_token"]
        .as_str()
        .expect("response carries an access_token")
        .to_string()
}

/// Asserts the uniform credential rejection: 401, bearer challenge, fixed body.
pub fn assert_unauthorized(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    assert_eq!(
        response.body,
        json!({ "error": "Could not validate credentials" })
    );
}
