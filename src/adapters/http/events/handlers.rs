use axum::extract::{Path, Query, State};
use axum::Json;

use crate::domain::event::Event;
use crate::domain::foundation::EventId;

use super::super::error::ApiError;
use super::super::extract::parse_id;
use super::super::state::AppState;
use super::dto::EventListQuery;

/// GET /events - soonest first.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.list_events_handler().handle(query.into_query()?).await?;
    Ok(Json(events))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let id: EventId = parse_id(&id)?;
    Ok(Json(state.get_event_handler().handle(&id).await?))
}
