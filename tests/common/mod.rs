//! Router harness: in-memory store, mock token verifier, mock gateway.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use clubhub::adapters::auth::MockTokenVerifier;
use clubhub::adapters::http::{app_router, AppState};
use clubhub::adapters::memory::InMemoryStore;
use clubhub::adapters::stripe::MockPaymentGateway;
use clubhub::application::handlers::CheckoutUrls;
use clubhub::config::ServerConfig;
use clubhub::domain::foundation::Email;
use clubhub::domain::user::{Role, User};
use clubhub::ports::UserRepository;

pub const ADMIN: &str = "admin-token";
pub const MANAGER: &str = "manager-token";
pub const OTHER_MANAGER: &str = "other-manager-token";
pub const MEMBER: &str = "member-token";
pub const OTHER_MEMBER: &str = "other-member-token";

pub const ADMIN_EMAIL: &str = "admin@clubhub.test";
pub const MANAGER_EMAIL: &str = "manager@clubhub.test";
pub const OTHER_MANAGER_EMAIL: &str = "other-manager@clubhub.test";
pub const MEMBER_EMAIL: &str = "member@clubhub.test";
pub const OTHER_MEMBER_EMAIL: &str = "other-member@clubhub.test";

/// Users seeded by [`TestApp::new`].
pub const SEEDED_USERS: u64 = 5;

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub gateway: MockPaymentGateway,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

fn email(raw: &str) -> Email {
    Email::new(raw).unwrap()
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let gateway = MockPaymentGateway::new();

        let seeded = [
            (ADMIN, ADMIN_EMAIL, Role::Admin),
            (MANAGER, MANAGER_EMAIL, Role::Manager),
            (OTHER_MANAGER, OTHER_MANAGER_EMAIL, Role::Manager),
            (MEMBER, MEMBER_EMAIL, Role::Member),
            (OTHER_MEMBER, OTHER_MEMBER_EMAIL, Role::Member),
        ];
        let mut verifier = MockTokenVerifier::new();
        for (token, address, role) in seeded {
            verifier = verifier.with_email(token, email(address));
            let mut user = User::register(email(address), None, None);
            user.role = role;
            store.create_if_absent(&user).await.unwrap();
        }

        let state = AppState::from_store(
            store.clone(),
            Arc::new(verifier),
            Arc::new(gateway.clone()),
            CheckoutUrls {
                success_url: "http://localhost:5173/payment-success?session_id={CHECKOUT_SESSION_ID}"
                    .to_string(),
                cancel_url: "http://localhost:5173/payment-cancelled".to_string(),
            },
        );
        let router = app_router(state, &ServerConfig::default());

        Self {
            store,
            gateway,
            router,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
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
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// Creates a club as `token`'s manager and returns its id.
    pub async fn create_club(&self, token: &str, name: &str, fee: f64) -> String {
        let response = self
            .post(
                "/clubs",
                Some(token),
                serde_json::json!({ "clubName": name, "membershipFee": fee, "category": "Games" }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["insertedId"].as_str().unwrap().to_string()
    }

    pub async fn approve_club(&self, club_id: &str) {
        let response = self
            .patch(
                &format!("/admin/clubs/{}", club_id),
                Some(ADMIN),
                serde_json::json!({ "status": "approved" }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    /// Schedules an event `days` from now and returns its id.
    pub async fn create_event(&self, token: &str, club_id: &str, title: &str, days: i64, fee: f64) -> String {
        let date = chrono::Utc::now() + chrono::Duration::days(days);
        let response = self
            .post(
                "/manager/my-events",
                Some(token),
                serde_json::json!({
                    "clubId": club_id,
                    "title": title,
                    "eventDate": date.to_rfc3339(),
                    "eventFee": fee,
                    "location": "Main hall",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["insertedId"].as_str().unwrap().to_string()
    }
}
