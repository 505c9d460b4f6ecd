use axum::{middleware, routing::post, Router};

use super::super::middleware::require_auth;
use super::super::state::AppState;
use super::handlers::{confirm_payment, create_checkout_session};

/// - `POST /create-checkout-session`
/// - `POST /payments/success`
pub fn checkout_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create-checkout-session", post(create_checkout_session))
        .route("/payments/success", post(confirm_payment))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
