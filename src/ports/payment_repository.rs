//! Payment repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ClubId, DomainError, Email};
use crate::domain::payment::Payment;

use super::ListOptions;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilter {
    pub user_email: Option<Email>,
    pub club_ids: Option<Vec<ClubId>>,
}

impl PaymentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_user(email: &Email) -> Self {
        Self {
            user_email: Some(email.clone()),
            ..Self::default()
        }
    }

    pub fn in_clubs(club_ids: Vec<ClubId>) -> Self {
        Self {
            club_ids: Some(club_ids),
            ..Self::default()
        }
    }

    pub fn matches(&self, payment: &Payment) -> bool {
        self.user_email
            .as_ref()
            .map_or(true, |e| &payment.user_email == e)
            && self
                .club_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&payment.club_id))
    }
}

/// Payments are append-only.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Inserts `payment` unless one already exists for its gateway session,
    /// in which case the stored payment is returned instead.
    async fn create_for_session(&self, payment: &Payment) -> Result<Payment, DomainError>;

    async fn find_by_session(&self, session_id: &str) -> Result<Option<Payment>, DomainError>;

    /// Sorted on `createdAt`.
    async fn list(&self, filter: &PaymentFilter, options: ListOptions)
        -> Result<Vec<Payment>, DomainError>;

    /// Sum of `amount`; zero when nothing matches.
    async fn total_amount(&self, filter: &PaymentFilter) -> Result<f64, DomainError>;
}
