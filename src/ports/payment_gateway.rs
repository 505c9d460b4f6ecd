//! Payment gateway port for hosted checkout.
//!
//! ClubHub never handles card data: it opens a hosted checkout session,
//! redirects the member there, and later asks the gateway whether the
//! session was paid.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{ClubId, DomainError, Email, ErrorCode, EventId};
use crate::domain::payment::PaymentType;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Opens a one-off payment session and returns where to send the buyer.
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;

    /// Looks up a session. `Ok(None)` when the gateway does not know it.
    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutSessionDetails>, PaymentError>;
}

/// A single-line-item checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub customer_email: Email,
    pub product_name: String,
    /// Integer minor units (cents).
    pub unit_amount: i64,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: CheckoutMetadata,
}

/// What the session is for. Stored on the gateway and read back when the
/// payment is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutMetadata {
    pub club_id: ClubId,
    pub club_name: String,
    pub user_email: Email,
    pub amount: f64,
    pub payment_type: PaymentType,
    pub event_id: Option<EventId>,
}

impl CheckoutMetadata {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("clubId", self.club_id.to_string()),
            ("clubName", self.club_name.clone()),
            ("userEmail", self.user_email.to_string()),
            ("amount", self.amount.to_string()),
            ("type", self.payment_type.to_string()),
        ];
        if let Some(event_id) = self.event_id {
            pairs.push(("eventId", event_id.to_string()));
        }
        pairs
    }

    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, PaymentError> {
        let field = |key: &str| {
            map.get(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| PaymentError::invalid_metadata(format!("missing '{}'", key)))
        };
        let invalid = |key: &str| {
            let key = key.to_string();
            move |e: crate::domain::foundation::ValidationError| {
                PaymentError::invalid_metadata(format!("bad '{}': {}", key, e))
            }
        };

        let event_id = match map.get("eventId").filter(|v| !v.is_empty()) {
            Some(raw) => Some(raw.parse().map_err(invalid("eventId"))?),
            None => None,
        };

        Ok(Self {
            club_id: field("clubId")?.parse().map_err(invalid("clubId"))?,
            club_name: field("clubName")?.clone(),
            user_email: field("userEmail")?.parse().map_err(invalid("userEmail"))?,
            amount: field("amount")?
                .parse()
                .map_err(|_| PaymentError::invalid_metadata("bad 'amount'"))?,
            payment_type: field("type")?.parse().map_err(invalid("type"))?,
            event_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPaymentStatus {
    Paid,
    Unpaid,
    NoPaymentRequired,
}

/// State of a session as reported by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSessionDetails {
    pub id: String,
    pub payment_status: SessionPaymentStatus,
    pub customer_email: Option<String>,
    /// Minor units actually charged.
    pub amount_total: Option<i64>,
    pub metadata: HashMap<String, String>,
}

impl CheckoutSessionDetails {
    pub fn is_paid(&self) -> bool {
        self.payment_status == SessionPaymentStatus::Paid
    }
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentError {
    pub code: PaymentErrorCode,
    pub message: String,
    /// Gateway-side error code, when one was returned.
    pub provider_code: Option<String>,
}

impl PaymentError {
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidRequest, message)
    }

    pub fn invalid_metadata(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidMetadata, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        let code = match err.code {
            PaymentErrorCode::InvalidMetadata => ErrorCode::ValidationFailed,
            _ => ErrorCode::PaymentGatewayError,
        };
        let mut domain = DomainError::new(code, err.message);
        if let Some(provider_code) = err.provider_code {
            domain = domain.with_detail("provider_code", provider_code);
        }
        domain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentErrorCode {
    NetworkError,
    AuthenticationError,
    InvalidRequest,
    /// Session metadata missing or unparseable.
    InvalidMetadata,
    ProviderError,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::InvalidMetadata => "invalid_metadata",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(event_id: Option<EventId>) -> CheckoutMetadata {
        CheckoutMetadata {
            club_id: ClubId::new(),
            club_name: "Film Society".to_string(),
            user_email: Email::new("f@example.com").unwrap(),
            amount: 12.5,
            payment_type: if event_id.is_some() {
                PaymentType::Event
            } else {
                PaymentType::Membership
            },
            event_id,
        }
    }

    fn to_map(pairs: Vec<(&'static str, String)>) -> HashMap<String, String> {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn metadata_survives_gateway_storage() {
        let original = metadata(Some(EventId::new()));
        let parsed = CheckoutMetadata::from_map(&to_map(original.to_pairs())).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn membership_metadata_omits_event_id() {
        let pairs = metadata(None).to_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "eventId"));
        assert!(pairs.contains(&("type", "membership".to_string())));
    }

    #[test]
    fn missing_or_bad_metadata_is_rejected() {
        let mut map = to_map(metadata(None).to_pairs());
        map.remove("userEmail");
        let err = CheckoutMetadata::from_map(&map).unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::InvalidMetadata);

        let mut map = to_map(metadata(None).to_pairs());
        map.insert("clubId".to_string(), "nope".to_string());
        assert!(CheckoutMetadata::from_map(&map).is_err());
    }

    #[test]
    fn errors_map_to_domain_codes() {
        let domain: DomainError = PaymentError::network("timeout").into();
        assert_eq!(domain.code, ErrorCode::PaymentGatewayError);

        let domain: DomainError = PaymentError::invalid_metadata("missing")
            .with_provider_code("x")
            .into();
        assert_eq!(domain.code, ErrorCode::ValidationFailed);
        assert_eq!(domain.details.get("provider_code"), Some(&"x".to_string()));
    }
}
