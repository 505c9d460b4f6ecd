use axum::{
    middleware,
    routing::{get, patch},
    Router,
};

use super::super::middleware::{require_admin, require_auth};
use super::super::state::AppState;
use super::handlers::{
    list_clubs, list_payments, list_users, memberships_per_club, overview, set_club_status,
    set_user_role,
};

/// - `GET /admin/overview`
/// - `GET /admin/users`, `PATCH /admin/users/:email/role`
/// - `GET /admin/clubs`, `PATCH /admin/clubs/:id`
/// - `GET /admin/payments`
/// - `GET /admin/memberships-per-club`
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/overview", get(overview))
        .route("/admin/users", get(list_users))
        .route("/admin/users/:email/role", patch(set_user_role))
        .route("/admin/clubs", get(list_clubs))
        .route("/admin/clubs/:id", patch(set_club_status))
        .route("/admin/payments", get(list_payments))
        .route("/admin/memberships-per-club", get(memberships_per_club))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
