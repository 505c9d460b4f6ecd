use axum::{
    middleware,
    routing::{get, patch, put},
    Router,
};

use super::super::middleware::{require_auth, require_manager};
use super::super::state::AppState;
use super::handlers::{
    club_members, create_event, delete_event, event_registrations, expire_membership, my_clubs,
    my_events, overview, payments, update_event,
};

/// - `GET /manager/my-clubs`
/// - `GET|POST /manager/my-events`
/// - `PUT|DELETE /manager/my-events/:id`
/// - `GET /manager/events/:id/registrations`
/// - `GET /manager/overview`
/// - `GET /manager/club-members`
/// - `PATCH /manager/memberships/:id/expire`
/// - `GET /manager/payments`
pub fn manager_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/manager/my-clubs", get(my_clubs))
        .route("/manager/my-events", get(my_events).post(create_event))
        .route("/manager/my-events/:id", put(update_event).delete(delete_event))
        .route("/manager/events/:id/registrations", get(event_registrations))
        .route("/manager/overview", get(overview))
        .route("/manager/club-members", get(club_members))
        .route("/manager/memberships/:id/expire", patch(expire_membership))
        .route("/manager/payments", get(payments))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_manager))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
