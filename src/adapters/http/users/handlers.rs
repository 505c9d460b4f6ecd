use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::RegisterUserCommand;
use crate::domain::user::Role;

use super::super::error::ApiError;
use super::super::extract::ValidatedJson;
use super::super::middleware::CurrentPrincipal;
use super::super::state::AppState;
use super::dto::{RegisterUserRequest, RegisterUserResponse, RoleResponse};

/// POST /users - registers the caller as a member. Repeating it changes
/// nothing.
pub async fn register_user(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .register_user_handler()
        .handle(RegisterUserCommand {
            principal,
            name: body.name,
            photo_url: body.photo_url,
        })
        .await?;

    let status = if result.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let inserted_id = result.inserted.then(|| result.user.email.to_string());
    Ok((
        status,
        Json(RegisterUserResponse {
            inserted_id,
            user: result.user,
        }),
    ))
}

/// GET /users/role - unknown callers are members.
pub async fn get_role(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<RoleResponse>, ApiError> {
    let user = state.resolve_role_handler().handle(&principal.email).await?;
    let role = user.map_or(Role::Member, |u| u.role);
    Ok(Json(RoleResponse { role }))
}
