//! ConfirmPaymentHandler - Records a completed checkout.
//!
//! Safe to call repeatedly for the same session: the first call stores the
//! payment and its follow-on record, later calls return that payment.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::foundation::{DomainError, Email, ErrorCode};
use crate::domain::membership::Membership;
use crate::domain::payment::{Payment, PaymentType};
use crate::domain::registration::Registration;
use crate::ports::{
    CheckoutMetadata, ClubRepository, EventRepository, MembershipRepository, PaymentGateway,
    PaymentRepository, RegistrationRepository,
};

#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    pub session_id: String,
    pub caller: Email,
}

#[derive(Debug, Clone)]
pub struct ConfirmPaymentResult {
    pub payment: Payment,
    /// True when the session had already been confirmed earlier.
    pub already_recorded: bool,
    pub membership: Option<Membership>,
    pub registration: Option<Registration>,
}

impl ConfirmPaymentResult {
    fn existing(payment: Payment) -> Self {
        Self {
            payment,
            already_recorded: true,
            membership: None,
            registration: None,
        }
    }
}

pub struct ConfirmPaymentHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    memberships: Arc<dyn MembershipRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    payments: Arc<dyn PaymentRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl ConfirmPaymentHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        memberships: Arc<dyn MembershipRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        payments: Arc<dyn PaymentRepository>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            clubs,
            events,
            memberships,
            registrations,
            payments,
            gateway,
        }
    }

    pub async fn handle(&self, cmd: ConfirmPaymentCommand) -> Result<ConfirmPaymentResult, DomainError> {
        let session_id = cmd.session_id.trim();
        if session_id.is_empty() {
            return Err(DomainError::validation("sessionId", "sessionId is required"));
        }

        // 1. Already confirmed?
        if let Some(payment) = self.payments.find_by_session(session_id).await? {
            ensure_caller(&payment.user_email, &cmd.caller)?;
            return Ok(ConfirmPaymentResult::existing(payment));
        }

        // 2. Ask the gateway
        let session = self
            .gateway
            .retrieve_checkout_session(session_id)
            .await?
            .ok_or_else(|| DomainError::validation("sessionId", "Unknown checkout session"))?;
        if !session.is_paid() {
            return Err(DomainError::new(ErrorCode::PaymentIncomplete, "Payment not completed"));
        }
        let metadata = CheckoutMetadata::from_map(&session.metadata)?;
        ensure_caller(&metadata.user_email, &cmd.caller)?;

        // 3. Authoritative price from the store
        let club = self
            .clubs
            .find_by_id(&metadata.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        match metadata.payment_type {
            PaymentType::Membership => self.record_membership(session_id, cmd.caller, club).await,
            PaymentType::Event => self.record_registration(session_id, cmd.caller, club, &metadata).await,
        }
    }

    async fn record_membership(
        &self,
        session_id: &str,
        caller: Email,
        club: Club,
    ) -> Result<ConfirmPaymentResult, DomainError> {
        let payment = Payment::record(
            caller.clone(),
            club.id,
            club.club_name.clone(),
            None,
            club.membership_fee,
            PaymentType::Membership,
            session_id,
        );
        let Some(payment) = self.store_payment(payment).await? else {
            return self.recorded_elsewhere(session_id).await;
        };

        let membership = match self.memberships.find_active(&caller, &club.id).await? {
            Some(_) => None,
            None => {
                let membership = Membership::activate(caller, club.id, Some(payment.id));
                self.memberships.create(&membership).await?;
                Some(membership)
            }
        };

        tracing::info!(
            payment_id = %payment.id,
            club_id = %club.id,
            membership_created = membership.is_some(),
            "Membership payment recorded"
        );
        Ok(ConfirmPaymentResult {
            payment,
            already_recorded: false,
            membership,
            registration: None,
        })
    }

    async fn record_registration(
        &self,
        session_id: &str,
        caller: Email,
        club: Club,
        metadata: &CheckoutMetadata,
    ) -> Result<ConfirmPaymentResult, DomainError> {
        let event_id = metadata
            .event_id
            .ok_or_else(|| DomainError::validation("eventId", "eventId is required"))?;
        let event = self
            .events
            .find_by_id(&event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;

        let payment = Payment::record(
            caller.clone(),
            club.id,
            club.club_name.clone(),
            Some(event.id),
            event.event_fee,
            PaymentType::Event,
            session_id,
        );
        let Some(payment) = self.store_payment(payment).await? else {
            return self.recorded_elsewhere(session_id).await;
        };

        let registration = match self.registrations.find_active(&event.id, &caller).await? {
            Some(_) => None,
            None => {
                let registration = Registration::register(&event, caller, Some(payment.id));
                self.registrations.create(&registration).await?;
                Some(registration)
            }
        };

        tracing::info!(
            payment_id = %payment.id,
            event_id = %event.id,
            registration_created = registration.is_some(),
            "Event payment recorded"
        );
        Ok(ConfirmPaymentResult {
            payment,
            already_recorded: false,
            membership: None,
            registration,
        })
    }

    /// `None` when a concurrent confirmation stored this session first.
    async fn store_payment(&self, payment: Payment) -> Result<Option<Payment>, DomainError> {
        let stored = self.payments.create_for_session(&payment).await?;
        Ok((stored.id == payment.id).then_some(stored))
    }

    async fn recorded_elsewhere(&self, session_id: &str) -> Result<ConfirmPaymentResult, DomainError> {
        let payment = self
            .payments
            .find_by_session(session_id)
            .await?
            .ok_or_else(|| DomainError::database("payment vanished after insert conflict"))?;
        Ok(ConfirmPaymentResult::existing(payment))
    }
}

fn ensure_caller(owner: &Email, caller: &Email) -> Result<(), DomainError> {
    if owner == caller {
        Ok(())
    } else {
        Err(DomainError::new(ErrorCode::Forbidden, "Forbidden access"))
    }
}
