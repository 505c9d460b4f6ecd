use serde::{Deserialize, Serialize};

use crate::application::handlers::{ConfirmPaymentResult, CreateCheckoutCommand};
use crate::domain::foundation::{Email, EventId, Principal};
use crate::domain::membership::Membership;
use crate::domain::payment::{Payment, PaymentType};
use crate::domain::registration::Registration;

use super::super::error::ApiError;
use super::super::extract::{parse_id, parse_value, required};

/// Body of `POST /create-checkout-session`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default, rename = "type")]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub club_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CheckoutRequest {
    pub fn into_command(self, principal: &Principal) -> Result<CreateCheckoutCommand, ApiError> {
        let club_name = required(&self.club_name, "clubName")?.to_string();
        let email: Email = parse_value(required(&self.email, "email")?)?;
        let club_id = parse_id(required(&self.club_id, "clubId")?)?;
        let amount = self
            .amount
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| ApiError::invalid_argument("amount must be positive"))?;
        let payment_type: PaymentType = match self.payment_type.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_value(raw)?,
            _ => PaymentType::Membership,
        };
        let event_id: Option<EventId> = match payment_type {
            PaymentType::Event => Some(parse_id(required(&self.event_id, "eventId")?)?),
            PaymentType::Membership => None,
        };

        Ok(CreateCheckoutCommand {
            caller: principal.email.clone(),
            email,
            payment_type,
            club_id,
            event_id,
            club_name,
            amount,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub url: String,
    pub session_id: String,
}

/// Body of `POST /payments/success`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// `insertedId` is null when the session had already been recorded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentResponse {
    pub inserted_id: Option<String>,
    pub payment: Payment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<Membership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<Registration>,
}

impl From<ConfirmPaymentResult> for ConfirmPaymentResponse {
    fn from(result: ConfirmPaymentResult) -> Self {
        Self {
            inserted_id: (!result.already_recorded).then(|| result.payment.id.to_string()),
            payment: result.payment,
            membership: result.membership,
            registration: result.registration,
        }
    }
}
