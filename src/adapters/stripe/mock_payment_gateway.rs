//! Mock payment gateway for testing.
//!
//! Sessions it creates start unpaid. Tests complete them with
//! [`MockPaymentGateway::mark_paid`] before confirming the payment.
//!
//! ```ignore
//! let gateway = MockPaymentGateway::new();
//! let session = gateway.create_checkout_session(request).await?;
//! gateway.mark_paid(&session.id);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::ports::{
    CheckoutRequest, CheckoutSession, CheckoutSessionDetails, PaymentError, PaymentGateway,
    SessionPaymentStatus,
};

#[derive(Debug, Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    sessions: HashMap<String, CheckoutSessionDetails>,
    requests: Vec<CheckoutRequest>,
    next_id: u64,
    error: Option<PaymentError>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Completes a previously created session.
    pub fn mark_paid(&self, session_id: &str) -> bool {
        match self.state().sessions.get_mut(session_id) {
            Some(session) => {
                session.payment_status = SessionPaymentStatus::Paid;
                true
            }
            None => false,
        }
    }

    /// Registers a session the gateway did not create itself.
    pub fn insert_session(&self, details: CheckoutSessionDetails) {
        self.state().sessions.insert(details.id.clone(), details);
    }

    /// Every call fails with `error` until cleared.
    pub fn set_error(&self, error: PaymentError) {
        self.state().error = Some(error);
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Checkout requests received so far.
    pub fn requests(&self) -> Vec<CheckoutRequest> {
        self.state().requests.clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut state = self.state();
        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        state.next_id += 1;
        let id = format!("cs_test_{}", state.next_id);
        let details = CheckoutSessionDetails {
            id: id.clone(),
            payment_status: SessionPaymentStatus::Unpaid,
            customer_email: Some(request.customer_email.to_string()),
            amount_total: Some(request.unit_amount),
            metadata: request
                .metadata
                .to_pairs()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        };
        state.sessions.insert(id.clone(), details);
        state.requests.push(request);

        Ok(CheckoutSession {
            url: format!("https://checkout.stripe.test/pay/{}", id),
            id,
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutSessionDetails>, PaymentError> {
        let state = self.state();
        if let Some(error) = &state.error {
            return Err(error.clone());
        }
        Ok(state.sessions.get(session_id).cloned())
    }
}
