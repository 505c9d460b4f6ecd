use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{get_event, list_events};

/// - `GET /events`
/// - `GET /events/:id`
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
}
