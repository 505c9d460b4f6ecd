use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::require_auth;
use super::super::state::AppState;
use super::handlers::{get_role, register_user};

/// - `POST /users` - register the caller
/// - `GET /users/role` - the caller's role
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", post(register_user))
        .route("/users/role", get(get_role))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
