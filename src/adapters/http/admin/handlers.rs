use axum::extract::{Path, Query, State};
use axum::Json;

use crate::application::handlers::{SetClubStatusCommand, SetUserRoleCommand};
use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, Email};
use crate::domain::overview::{AdminOverview, ClubMemberCount};
use crate::domain::payment::Payment;
use crate::domain::user::{Role, User};
use crate::ports::PaymentFilter;

use super::super::clubs::ClubListQuery;
use super::super::error::ApiError;
use super::super::extract::{parse_id, parse_value, required, ValidatedJson};
use super::super::state::AppState;
use super::super::summary::UpdateSummary;
use super::dto::{SetClubStatusRequest, SetRoleRequest};

/// GET /admin/overview
pub async fn overview(State(state): State<AppState>) -> Result<Json<AdminOverview>, ApiError> {
    Ok(Json(state.admin_overview_handler().handle().await?))
}

/// GET /admin/users - newest first.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.list_users_handler().handle().await?))
}

/// PATCH /admin/users/:email/role
pub async fn set_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidatedJson(body): ValidatedJson<SetRoleRequest>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let email: Email = parse_value(&email)?;
    let role: Role = parse_value(required(&body.role, "role")?)?;
    let result = state
        .set_user_role_handler()
        .handle(SetUserRoleCommand { email, role })
        .await?;
    Ok(Json(result.into()))
}

/// GET /admin/clubs - every status unless `?status=` narrows it.
pub async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubListQuery>,
) -> Result<Json<Vec<Club>>, ApiError> {
    let clubs = state.list_clubs_handler().handle(query.into_filter()?).await?;
    Ok(Json(clubs))
}

/// PATCH /admin/clubs/:id
pub async fn set_club_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<SetClubStatusRequest>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let club_id: ClubId = parse_id(&id)?;
    let status: ClubStatus = parse_value(required(&body.status, "status")?)?;
    let result = state
        .set_club_status_handler()
        .handle(SetClubStatusCommand { club_id, status })
        .await?;
    Ok(Json(result.into()))
}

/// GET /admin/payments - newest first.
pub async fn list_payments(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, ApiError> {
    Ok(Json(state.list_payments_handler().handle(PaymentFilter::all()).await?))
}

/// GET /admin/memberships-per-club
pub async fn memberships_per_club(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClubMemberCount>>, ApiError> {
    Ok(Json(state.memberships_per_club_handler().handle().await?))
}
