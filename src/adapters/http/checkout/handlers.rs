use axum::extract::State;
use axum::Json;

use crate::application::handlers::ConfirmPaymentCommand;

use super::super::error::ApiError;
use super::super::extract::{required, ValidatedJson};
use super::super::middleware::CurrentPrincipal;
use super::super::state::AppState;
use super::dto::{CheckoutRequest, CheckoutResponse, ConfirmPaymentRequest, ConfirmPaymentResponse};

/// POST /create-checkout-session
pub async fn create_checkout_session(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let cmd = body.into_command(&principal)?;
    let session = state.create_checkout_handler().handle(cmd).await?;
    Ok(Json(CheckoutResponse {
        url: session.url,
        session_id: session.id,
    }))
}

/// POST /payments/success - safe to repeat for the same session.
pub async fn confirm_payment(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ValidatedJson(body): ValidatedJson<ConfirmPaymentRequest>,
) -> Result<Json<ConfirmPaymentResponse>, ApiError> {
    let session_id = required(&body.session_id, "sessionId")?.to_string();
    let result = state
        .confirm_payment_handler()
        .handle(ConfirmPaymentCommand {
            session_id,
            caller: principal.email,
        })
        .await?;
    Ok(Json(result.into()))
}
