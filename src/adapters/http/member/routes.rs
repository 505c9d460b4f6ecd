use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::require_auth;
use super::super::state::AppState;
use super::handlers::{
    cancel_registration, join_club, my_clubs, my_events, overview, payments, register_for_event,
};

/// - `POST /event-registrations`
/// - `POST /event-registrations/:id/cancel`
/// - `POST /memberships`
/// - `GET /member/my-events`, `GET /member/my-clubs`
/// - `GET /member/overview/:email`
/// - `GET /member/payments`
pub fn member_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/event-registrations", post(register_for_event))
        .route("/event-registrations/:id/cancel", post(cancel_registration))
        .route("/memberships", post(join_club))
        .route("/member/my-events", get(my_events))
        .route("/member/my-clubs", get(my_clubs))
        .route("/member/overview/:email", get(overview))
        .route("/member/payments", get(payments))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
