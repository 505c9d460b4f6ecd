//! Authentication and role middleware.
//!
//! ```text
//! Request → require_auth → Principal in extensions
//!                 ↓
//!           require_admin / require_manager (role lookup)
//!                 ↓
//!           Handler → CurrentPrincipal extractor
//! ```
//!
//! Layers are applied with `route_layer`, role layer first, so that
//! `require_auth` is outermost and always runs before the role check. A
//! rejection answers with a single `{message}` body and the handler never
//! runs.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::application::handlers::{authenticate, require_role, UNAUTHORIZED_MESSAGE};
use crate::domain::foundation::{GuardOutcome, Principal};
use crate::domain::user::Role;

use super::super::error::ApiError;
use super::super::state::AppState;

/// Verifies the bearer token and stores the [`Principal`] for later layers
/// and handlers.
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match authenticate(state.token_verifier.as_ref(), authorization).await {
        GuardOutcome::Continue(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        GuardOutcome::Reject(denied) => ApiError::from(denied).into_response(),
    }
}

pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    enforce_role(&state, Role::Admin, request, next).await
}

pub async fn require_manager(State(state): State<AppState>, request: Request, next: Next) -> Response {
    enforce_role(&state, Role::Manager, request, next).await
}

async fn enforce_role(state: &AppState, role: Role, request: Request, next: Next) -> Response {
    let principal = request.extensions().get::<Principal>().cloned();
    let outcome = require_role(&state.resolve_role_handler(), principal, role).await;

    match outcome.into_result() {
        Ok(_) => next.run(request).await,
        Err(denied) => ApiError::from(denied).into_response(),
    }
}

/// The verified caller, as stored by [`require_auth`].
///
/// Rejects with 401 when used on a route that has no auth layer.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl<S> axum::extract::FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .map(CurrentPrincipal)
                .ok_or_else(|| ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    use crate::adapters::auth::MockTokenVerifier;
    use crate::adapters::memory::InMemoryStore;
    use crate::adapters::stripe::MockPaymentGateway;
    use crate::application::handlers::CheckoutUrls;
    use crate::domain::foundation::Email;
    use crate::domain::user::User;
    use crate::ports::UserRepository;

    fn email(raw: &str) -> Email {
        Email::new(raw).unwrap()
    }

    async fn state_with(store: Arc<InMemoryStore>) -> AppState {
        let verifier = MockTokenVerifier::new()
            .with_email("member-token", email("member@example.com"))
            .with_email("admin-token", email("admin@example.com"));
        let mut admin = User::register(email("admin@example.com"), None, None);
        admin.role = Role::Admin;
        store.create_if_absent(&admin).await.unwrap();
        store
            .create_if_absent(&User::register(email("member@example.com"), None, None))
            .await
            .unwrap();

        AppState::from_store(
            store,
            Arc::new(verifier),
            Arc::new(MockPaymentGateway::new()),
            CheckoutUrls {
                success_url: "http://localhost/success".to_string(),
                cancel_url: "http://localhost/cancel".to_string(),
            },
        )
    }

    async fn whoami(CurrentPrincipal(principal): CurrentPrincipal) -> String {
        principal.email.to_string()
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/me", get(whoami))
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .merge(
                Router::new()
                    .route("/admin", get(whoami))
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
            )
            .route("/open", get(whoami))
            .with_state(state)
    }

    fn get_with(uri: &str, token: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let app = app(state_with(Arc::new(InMemoryStore::new())).await);
        let response = app.oneshot(get_with("/me", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_reaches_handler() {
        let app = app(state_with(Arc::new(InMemoryStore::new())).await);
        let response = app.oneshot(get_with("/me", Some("member-token"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn member_on_admin_route_is_forbidden() {
        let app = app(state_with(Arc::new(InMemoryStore::new())).await);
        let response = app.oneshot(get_with("/admin", Some("member-token"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_route_checks_authentication_first() {
        let app = app(state_with(Arc::new(InMemoryStore::new())).await);
        let response = app.oneshot(get_with("/admin", Some("garbage"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn role_lookup_failure_is_internal_error() {
        let store = Arc::new(InMemoryStore::new());
        let app = app(state_with(store.clone()).await);
        store.set_unavailable(true);
        let response = app.oneshot(get_with("/admin", Some("admin-token"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn extractor_without_auth_layer_is_unauthorized() {
        let app = app(state_with(Arc::new(InMemoryStore::new())).await);
        let response = app.oneshot(get_with("/open", Some("member-token"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
