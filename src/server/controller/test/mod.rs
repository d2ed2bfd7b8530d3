use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::Duration as TokenDuration;
use serde_json::Value;
use std::time::Duration;
use test_utils::{builder::TestBuilder, context::TestContext, factory::user::UserFactory};
use tower::ServiceExt;

use crate::server::{
    error::AppError,
    event::bus::EventBus,
    service::{
        auth::{password::hash_password, token::TokenSigner},
        cache::EntityCache,
    },
    startup::build_app,
    state::AppState,
};

mod listing;

const PASSWORD: &str = "correct horse";

struct TestApp {
    // Keeps the in-memory database alive for the app's pool.
    test: TestContext,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let state = AppState::new(
            test.db.clone().unwrap(),
            TokenSigner::new("controller-secret", TokenDuration::hours(1)),
            EntityCache::new(Duration::from_secs(600)),
            EventBus::new(),
        );

        Self {
            test,
            app: build_app(state),
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Creates a user with a known password and logs them in over HTTP.
    async fn login_as(&self, role: &str, station_id: Option<&str>) -> Result<String, AppError> {
        let mut factory = UserFactory::new(self.db())
            .role(role)
            .password(hash_password(PASSWORD)?);
        if let Some(station_id) = station_id {
            factory = factory.station_id(station_id);
        }
        let user = factory.build().await?;

        let body = serde_json::json!({ "email": user.email, "password": PASSWORD });
        let response = self.send(Method::POST, "/api/v1/auth/login", None, Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        Ok(json["data"]["token"].as_str().unwrap().to_string())
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, token: &str) -> Response {
        self.send(Method::GET, uri, Some(token), None).await
    }
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn error_code(response: Response) -> String {
    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    json["code"].as_str().unwrap().to_string()
}
