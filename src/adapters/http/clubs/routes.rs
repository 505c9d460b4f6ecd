use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use super::super::middleware::{require_auth, require_manager};
use super::super::state::AppState;
use super::handlers::{create_club, featured_clubs, get_club, list_clubs, update_club};

/// Public:
/// - `GET /clubs`, `GET /featured-clubs`, `GET /clubs/:id`
///
/// Manager:
/// - `POST /clubs`, `PUT /clubs/:id`
pub fn club_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/clubs", get(list_clubs))
        .route("/featured-clubs", get(featured_clubs))
        .route("/clubs/:id", get(get_club));

    let managed = Router::new()
        .route("/clubs", post(create_club))
        .route("/clubs/:id", put(update_club))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_manager))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(managed)
}
