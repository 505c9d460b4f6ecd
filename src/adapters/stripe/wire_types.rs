//! Stripe API response shapes.
//!
//! Only the fields ClubHub reads are modelled; serde ignores the rest.

use std::collections::HashMap;

use serde::Deserialize;

use crate::ports::{CheckoutSessionDetails, SessionPaymentStatus};

/// A `checkout.session` object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeCheckoutSession {
    /// Session identifier (cs_...).
    pub id: String,

    /// Hosted payment page. Absent once the session completes.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub customer_email: Option<String>,

    #[serde(default)]
    pub customer_details: Option<StripeCustomerDetails>,

    /// `paid`, `unpaid` or `no_payment_required`.
    pub payment_status: String,

    #[serde(default)]
    pub amount_total: Option<i64>,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeCustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

impl From<StripeCheckoutSession> for CheckoutSessionDetails {
    fn from(session: StripeCheckoutSession) -> Self {
        let payment_status = match session.payment_status.as_str() {
            "paid" => SessionPaymentStatus::Paid,
            "no_payment_required" => SessionPaymentStatus::NoPaymentRequired,
            _ => SessionPaymentStatus::Unpaid,
        };
        let customer_email = session
            .customer_email
            .or_else(|| session.customer_details.and_then(|d| d.email));

        CheckoutSessionDetails {
            id: session.id,
            payment_status,
            customer_email,
            amount_total: session.amount_total,
            metadata: session.metadata,
        }
    }
}

/// Body of a non-2xx Stripe response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_session_maps_to_details() {
        let json = r#"{
            "id": "cs_test_123",
            "object": "checkout.session",
            "url": null,
            "customer_email": null,
            "customer_details": {"email": "ada@example.com"},
            "payment_status": "paid",
            "amount_total": 2500,
            "metadata": {"clubId": "abc", "type": "membership"}
        }"#;
        let session: StripeCheckoutSession = serde_json::from_str(json).unwrap();
        let details = CheckoutSessionDetails::from(session);

        assert!(details.is_paid());
        assert_eq!(details.customer_email.as_deref(), Some("ada@example.com"));
        assert_eq!(details.amount_total, Some(2500));
        assert_eq!(details.metadata.get("type").map(String::as_str), Some("membership"));
    }

    #[test]
    fn unknown_payment_status_is_unpaid() {
        let json = r#"{"id": "cs_1", "payment_status": "processing"}"#;
        let session: StripeCheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(
            CheckoutSessionDetails::from(session).payment_status,
            SessionPaymentStatus::Unpaid
        );
    }

    #[test]
    fn error_body_parses() {
        let json = r#"{"error": {"type": "invalid_request_error", "code": "resource_missing", "message": "No such checkout.session"}}"#;
        let parsed: StripeErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.code.as_deref(), Some("resource_missing"));
    }
}
