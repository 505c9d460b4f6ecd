//! CreateCheckoutHandler - Opens a gateway checkout session.

use std::sync::Arc;

use crate::config::PaymentConfig;
use crate::domain::foundation::{ClubId, DomainError, Email, ErrorCode, EventId};
use crate::domain::payment::{to_minor_units, PaymentType};
use crate::ports::{
    CheckoutMetadata, CheckoutRequest, CheckoutSession, ClubRepository, EventRepository,
    MembershipRepository, PaymentGateway, RegistrationRepository,
};

/// Where the gateway sends the member afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl From<&PaymentConfig> for CheckoutUrls {
    fn from(config: &PaymentConfig) -> Self {
        Self {
            success_url: config.success_url(),
            cancel_url: config.cancel_url(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    /// Verified caller.
    pub caller: Email,
    /// Email named in the request body; must be the caller's.
    pub email: Email,
    pub payment_type: PaymentType,
    pub club_id: ClubId,
    pub event_id: Option<EventId>,
    pub club_name: String,
    /// Client-side price. Checked for sanity only; the stored fee is charged.
    pub amount: f64,
}

/// What is being bought, resolved from the store.
struct Purchase {
    product_name: String,
    club_name: String,
    amount: f64,
    event_id: Option<EventId>,
}

pub struct CreateCheckoutHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    memberships: Arc<dyn MembershipRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    gateway: Arc<dyn PaymentGateway>,
    urls: CheckoutUrls,
}

impl CreateCheckoutHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        memberships: Arc<dyn MembershipRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        gateway: Arc<dyn PaymentGateway>,
        urls: CheckoutUrls,
    ) -> Self {
        Self {
            clubs,
            events,
            memberships,
            registrations,
            gateway,
            urls,
        }
    }

    pub async fn handle(&self, cmd: CreateCheckoutCommand) -> Result<CheckoutSession, DomainError> {
        validate(&cmd)?;

        let purchase = self.resolve(&cmd).await?;
        if (purchase.amount - cmd.amount).abs() >= 0.005 {
            tracing::warn!(
                club_id = %cmd.club_id,
                submitted = cmd.amount,
                charged = purchase.amount,
                "Checkout amount differs from stored fee"
            );
        }

        let request = CheckoutRequest {
            customer_email: cmd.caller.clone(),
            product_name: purchase.product_name,
            unit_amount: to_minor_units(purchase.amount)?,
            success_url: self.urls.success_url.clone(),
            cancel_url: self.urls.cancel_url.clone(),
            metadata: CheckoutMetadata {
                club_id: cmd.club_id,
                club_name: purchase.club_name,
                user_email: cmd.caller.clone(),
                amount: purchase.amount,
                payment_type: cmd.payment_type,
                event_id: purchase.event_id,
            },
        };

        let session = self.gateway.create_checkout_session(request).await?;
        tracing::info!(
            session_id = %session.id,
            club_id = %cmd.club_id,
            payment_type = cmd.payment_type.as_str(),
            "Checkout session created"
        );
        Ok(session)
    }

    async fn resolve(&self, cmd: &CreateCheckoutCommand) -> Result<Purchase, DomainError> {
        let club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        match cmd.payment_type {
            PaymentType::Membership => {
                if club.is_free() {
                    return Err(DomainError::validation(
                        "amount",
                        "This club does not require payment",
                    ));
                }
                if self.memberships.find_active(&cmd.caller, &club.id).await?.is_some() {
                    return Err(DomainError::new(ErrorCode::AlreadyMember, "Already a member"));
                }
                Ok(Purchase {
                    product_name: format!("{} Membership", club.club_name),
                    club_name: club.club_name,
                    amount: club.membership_fee,
                    event_id: None,
                })
            }
            PaymentType::Event => {
                let event_id = cmd
                    .event_id
                    .ok_or_else(|| DomainError::validation("eventId", "eventId is required"))?;
                let event = self
                    .events
                    .find_by_id(&event_id)
                    .await?
                    .filter(|e| e.club_id == club.id)
                    .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;
                if !event.is_paid {
                    return Err(DomainError::validation(
                        "amount",
                        "This event does not require payment",
                    ));
                }
                if self
                    .registrations
                    .find_active(&event.id, &cmd.caller)
                    .await?
                    .is_some()
                {
                    return Err(DomainError::new(ErrorCode::AlreadyRegistered, "Already registered"));
                }
                Ok(Purchase {
                    product_name: format!("{} Registration", event.title),
                    club_name: club.club_name,
                    amount: event.event_fee,
                    event_id: Some(event.id),
                })
            }
        }
    }
}

fn validate(cmd: &CreateCheckoutCommand) -> Result<(), DomainError> {
    if cmd.club_name.trim().is_empty() {
        return Err(DomainError::validation("clubName", "clubName is required"));
    }
    if !cmd.amount.is_finite() || cmd.amount <= 0.0 {
        return Err(DomainError::validation("amount", "amount must be positive"));
    }
    if cmd.email != cmd.caller {
        return Err(DomainError::new(ErrorCode::Forbidden, "Forbidden access"));
    }
    Ok(())
}
