use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::payment::Payment;
use crate::ports::{ListOptions, PaymentFilter, PaymentRepository};

use super::{ordered, InMemoryStore};

#[async_trait]
impl PaymentRepository for InMemoryStore {
    async fn create_for_session(&self, payment: &Payment) -> Result<Payment, DomainError> {
        self.check_available()?;
        let mut payments = self.payments.write().await;
        if let Some(existing) = payments
            .iter()
            .find(|p| p.gateway_session_id == payment.gateway_session_id)
        {
            return Ok(existing.clone());
        }
        payments.push(payment.clone());
        Ok(payment.clone())
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<Payment>, DomainError> {
        self.check_available()?;
        let payments = self.payments.read().await;
        Ok(payments
            .iter()
            .find(|p| p.gateway_session_id == session_id)
            .cloned())
    }

    async fn list(
        &self,
        filter: &PaymentFilter,
        options: ListOptions,
    ) -> Result<Vec<Payment>, DomainError> {
        self.check_available()?;
        let payments: Vec<Payment> = self
            .payments
            .read()
            .await
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        Ok(ordered(payments, options, |p| p.created_at))
    }

    async fn total_amount(&self, filter: &PaymentFilter) -> Result<f64, DomainError> {
        self.check_available()?;
        let payments = self.payments.read().await;
        Ok(payments
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.amount)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ClubId, Email};
    use crate::domain::payment::PaymentType;

    fn payment(session: &str, amount: f64) -> Payment {
        Payment::record(
            Email::new("p@example.com").unwrap(),
            ClubId::new(),
            "Club",
            None,
            amount,
            PaymentType::Membership,
            session,
        )
    }

    #[tokio::test]
    async fn one_payment_per_session() {
        let store = InMemoryStore::new();
        let first = store.create_for_session(&payment("cs_1", 10.0)).await.unwrap();
        let again = store.create_for_session(&payment("cs_1", 99.0)).await.unwrap();

        assert_eq!(again.id, first.id);
        assert_eq!(store.payment_count().await, 1);
    }

    #[tokio::test]
    async fn total_amount_defaults_to_zero() {
        let store = InMemoryStore::new();
        assert_eq!(store.total_amount(&PaymentFilter::all()).await.unwrap(), 0.0);

        store.create_for_session(&payment("cs_1", 10.0)).await.unwrap();
        store.create_for_session(&payment("cs_2", 2.5)).await.unwrap();
        assert_eq!(store.total_amount(&PaymentFilter::all()).await.unwrap(), 12.5);
    }
}
