//! Payment record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    ClubId, Email, EventId, OwnedByUser, PaymentId, Timestamp, ValidationError,
};

/// What a payment bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Membership,
    Event,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Membership => "membership",
            PaymentType::Event => "event",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "membership" => Ok(PaymentType::Membership),
            "event" => Ok(PaymentType::Event),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown payment type '{}'", other),
            )),
        }
    }
}

/// Only confirmed payments are ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        "paid"
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown payment status '{}'", other),
            )),
        }
    }
}

/// Immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub user_email: Email,
    pub club_id: ClubId,
    /// Name at the time of payment; survives club renames and deletion.
    pub club_name: String,
    pub event_id: Option<EventId>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    /// Checkout session that produced this payment. Unique.
    pub gateway_session_id: String,
    pub created_at: Timestamp,
}

impl Payment {
    pub fn record(
        user_email: Email,
        club_id: ClubId,
        club_name: impl Into<String>,
        event_id: Option<EventId>,
        amount: f64,
        payment_type: PaymentType,
        gateway_session_id: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            user_email,
            club_id,
            club_name: club_name.into(),
            event_id,
            amount,
            payment_type,
            status: PaymentStatus::Paid,
            gateway_session_id: gateway_session_id.into(),
            created_at: Timestamp::now(),
        }
    }
}

impl OwnedByUser for Payment {
    fn owner_email(&self) -> &Email {
        &self.user_email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_paid_and_serializes_type_field() {
        let payment = Payment::record(
            Email::new("p@example.com").unwrap(),
            ClubId::new(),
            "Photography Club",
            None,
            30.0,
            PaymentType::Membership,
            "cs_test_123",
        );
        assert_eq!(payment.status, PaymentStatus::Paid);

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["type"], "membership");
        assert_eq!(json["status"], "paid");
        assert_eq!(json["gatewaySessionId"], "cs_test_123");
        assert!(json["eventId"].is_null());
    }

    #[test]
    fn payment_type_parsing() {
        assert_eq!("EVENT".parse::<PaymentType>().unwrap(), PaymentType::Event);
        assert!("donation".parse::<PaymentType>().is_err());
    }
}
