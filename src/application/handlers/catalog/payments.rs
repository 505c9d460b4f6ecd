//! Payment history.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::payment::Payment;
use crate::ports::{ListOptions, PaymentFilter, PaymentRepository};

pub struct ListPaymentsHandler {
    payments: Arc<dyn PaymentRepository>,
}

impl ListPaymentsHandler {
    pub fn new(payments: Arc<dyn PaymentRepository>) -> Self {
        Self { payments }
    }

    /// Newest first.
    pub async fn handle(&self, filter: PaymentFilter) -> Result<Vec<Payment>, DomainError> {
        self.payments.list(&filter, ListOptions::newest_first()).await
    }
}
