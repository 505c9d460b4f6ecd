use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{
    CreateEventCommand, DeleteEventCommand, ExpireMembershipCommand, ListEventRegistrationsQuery,
    UpdateEventCommand,
};
use crate::domain::club::Club;
use crate::domain::event::Event;
use crate::domain::foundation::{EventId, MembershipId};
use crate::domain::overview::{ManagerOverview, MembershipView};
use crate::domain::payment::Payment;
use crate::domain::registration::Registration;

use super::super::error::ApiError;
use super::super::events::EventRequest;
use super::super::extract::{parse_id, ValidatedJson};
use super::super::middleware::CurrentPrincipal;
use super::super::state::AppState;
use super::super::summary::{DeleteSummary, InsertSummary, UpdateSummary};

/// GET /manager/my-clubs
pub async fn my_clubs(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<Club>>, ApiError> {
    Ok(Json(state.managed_clubs_handler().handle(&principal.email).await?))
}

/// GET /manager/my-events - empty when the caller owns no clubs.
pub async fn my_events(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.manager_events_handler().handle(&principal.email).await?))
}

/// POST /manager/my-events
pub async fn create_event(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<EventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = body.club_id()?;
    let event = state
        .create_event_handler()
        .handle(CreateEventCommand {
            manager_email: principal.email,
            club_id,
            details: body.into_details()?,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(InsertSummary::new(event.id))))
}

/// PUT /manager/my-events/:id
pub async fn update_event(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<EventRequest>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let event_id: EventId = parse_id(&id)?;
    let result = state
        .update_event_handler()
        .handle(UpdateEventCommand {
            event_id,
            manager_email: principal.email,
            patch: body.into_patch(),
        })
        .await?;
    Ok(Json(result.into()))
}

/// DELETE /manager/my-events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<Json<DeleteSummary>, ApiError> {
    let event_id: EventId = parse_id(&id)?;
    let result = state
        .delete_event_handler()
        .handle(DeleteEventCommand {
            event_id,
            manager_email: principal.email,
        })
        .await?;
    Ok(Json(result.into()))
}

/// GET /manager/events/:id/registrations
pub async fn event_registrations(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let event_id: EventId = parse_id(&id)?;
    let registrations = state
        .list_event_registrations_handler()
        .handle(ListEventRegistrationsQuery {
            event_id,
            manager_email: principal.email,
        })
        .await?;
    Ok(Json(registrations))
}

/// GET /manager/overview
pub async fn overview(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<ManagerOverview>, ApiError> {
    Ok(Json(state.manager_overview_handler().handle(&principal.email).await?))
}

/// GET /manager/club-members
pub async fn club_members(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<MembershipView>>, ApiError> {
    Ok(Json(state.club_members_handler().handle(&principal.email).await?))
}

/// PATCH /manager/memberships/:id/expire
pub async fn expire_membership(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let membership_id: MembershipId = parse_id(&id)?;
    let result = state
        .expire_membership_handler()
        .handle(ExpireMembershipCommand {
            membership_id,
            manager_email: principal.email,
        })
        .await?;
    Ok(Json(result.into()))
}

/// GET /manager/payments
pub async fn payments(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<Payment>>, ApiError> {
    Ok(Json(state.manager_payments_handler().handle(&principal.email).await?))
}
