use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{CreateClubCommand, UpdateClubCommand};
use crate::domain::club::Club;
use crate::domain::foundation::ClubId;

use super::super::error::ApiError;
use super::super::extract::{parse_id, ValidatedJson};
use super::super::middleware::CurrentPrincipal;
use super::super::state::AppState;
use super::super::summary::{InsertSummary, UpdateSummary};
use super::dto::{ClubListQuery, ClubRequest};

/// GET /clubs
pub async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubListQuery>,
) -> Result<Json<Vec<Club>>, ApiError> {
    let filter = query.into_filter()?;
    let clubs = state.list_clubs_handler().handle(filter).await?;
    Ok(Json(clubs))
}

/// GET /featured-clubs
pub async fn featured_clubs(State(state): State<AppState>) -> Result<Json<Vec<Club>>, ApiError> {
    Ok(Json(state.featured_clubs_handler().handle().await?))
}

/// GET /clubs/:id
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Club>, ApiError> {
    let id: ClubId = parse_id(&id)?;
    Ok(Json(state.get_club_handler().handle(&id).await?))
}

/// POST /clubs - the caller becomes the manager; the club starts pending.
pub async fn create_club(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<ClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let club = state
        .create_club_handler()
        .handle(CreateClubCommand {
            manager_email: principal.email,
            club: body.into_new_club()?,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(InsertSummary::new(club.id))))
}

/// PUT /clubs/:id - only the owning manager.
pub async fn update_club(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<ClubRequest>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let club_id: ClubId = parse_id(&id)?;
    let result = state
        .update_club_handler()
        .handle(UpdateClubCommand {
            club_id,
            manager_email: principal.email,
            patch: body.into_patch(),
        })
        .await?;
    Ok(Json(result.into()))
}
