//! Membership record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClubId, Email, MembershipId, OwnedByUser, PaymentId, Timestamp};

use super::MembershipStatus;

/// A member's standing in a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: MembershipId,
    pub user_email: Email,
    pub club_id: ClubId,
    pub status: MembershipStatus,
    /// Set when the membership came from a paid checkout.
    pub payment_id: Option<PaymentId>,
    pub joined_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

impl Membership {
    pub fn activate(user_email: Email, club_id: ClubId, payment_id: Option<PaymentId>) -> Self {
        Self {
            id: MembershipId::new(),
            user_email,
            club_id,
            status: MembershipStatus::Active,
            payment_id,
            joined_at: Timestamp::now(),
            expires_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }
}

impl OwnedByUser for Membership {
    fn owner_email(&self) -> &Email {
        &self.user_email
    }
}
