use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{
    CancelRegistrationCommand, GetMemberOverviewQuery, JoinFreeClubCommand,
    RegisterForEventCommand,
};
use crate::domain::foundation::{ClubId, Email, EventId, RegistrationId};
use crate::domain::overview::{MemberOverview, MembershipView, RegistrationView};
use crate::domain::payment::Payment;
use crate::ports::PaymentFilter;

use super::super::error::ApiError;
use super::super::extract::{parse_id, parse_value, required, ValidatedJson};
use super::super::middleware::CurrentPrincipal;
use super::super::state::AppState;
use super::super::summary::{InsertSummary, UpdateSummary};
use super::dto::{JoinClubRequest, RegisterRequest};

/// POST /event-registrations - free events only; paid ones go through
/// checkout.
pub async fn register_for_event(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id: EventId = parse_id(required(&body.event_id, "eventId")?)?;
    let registration = state
        .register_for_event_handler()
        .handle(RegisterForEventCommand {
            event_id,
            user_email: principal.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(InsertSummary::new(registration.id))))
}

/// POST /event-registrations/:id/cancel
pub async fn cancel_registration(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let registration_id: RegistrationId = parse_id(&id)?;
    let result = state
        .cancel_registration_handler()
        .handle(CancelRegistrationCommand {
            registration_id,
            user_email: principal.email,
        })
        .await?;
    Ok(Json(result.into()))
}

/// POST /memberships - joins a free, approved club.
pub async fn join_club(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<JoinClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id: ClubId = parse_id(required(&body.club_id, "clubId")?)?;
    let membership = state
        .join_free_club_handler()
        .handle(JoinFreeClubCommand {
            club_id,
            user_email: principal.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(InsertSummary::new(membership.id))))
}

/// GET /member/my-events
pub async fn my_events(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<RegistrationView>>, ApiError> {
    Ok(Json(state.my_events_handler().handle(&principal.email).await?))
}

/// GET /member/my-clubs
pub async fn my_clubs(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<MembershipView>>, ApiError> {
    Ok(Json(state.my_clubs_handler().handle(&principal.email).await?))
}

/// GET /member/overview/:email - only for the caller's own email.
pub async fn overview(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(email): Path<String>,
) -> Result<Json<MemberOverview>, ApiError> {
    let email: Email = parse_value(&email)?;
    let overview = state
        .member_overview_handler()
        .handle(GetMemberOverviewQuery {
            email,
            caller: principal.email,
        })
        .await?;
    Ok(Json(overview))
}

/// GET /member/payments
pub async fn payments(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let payments = state
        .list_payments_handler()
        .handle(PaymentFilter::for_user(&principal.email))
        .await?;
    Ok(Json(payments))
}
