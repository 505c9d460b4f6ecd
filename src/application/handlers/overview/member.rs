//! A member's own overview and joined listings.

use std::sync::Arc;

use futures::try_join;

use crate::domain::foundation::{DomainError, Email, ErrorCode, Timestamp};
use crate::domain::overview::{
    distinct, MemberOverview, MembershipView, RegistrationView, UpcomingEvent,
};
use crate::domain::registration::RegistrationStatus;
use crate::ports::{
    ClubRepository, EventFilter, EventRepository, ListOptions, MembershipFilter,
    MembershipRepository, PaymentFilter, PaymentRepository, RegistrationFilter,
    RegistrationRepository,
};

use super::{club_index, event_index};

#[derive(Debug, Clone)]
pub struct GetMemberOverviewQuery {
    /// Email named in the path.
    pub email: Email,
    /// Verified caller.
    pub caller: Email,
}

pub struct GetMemberOverviewHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    memberships: Arc<dyn MembershipRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl GetMemberOverviewHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        memberships: Arc<dyn MembershipRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        payments: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            clubs,
            events,
            memberships,
            registrations,
            payments,
        }
    }

    pub async fn handle(&self, query: GetMemberOverviewQuery) -> Result<MemberOverview, DomainError> {
        if query.email != query.caller {
            return Err(DomainError::new(ErrorCode::Forbidden, "Forbidden access"));
        }
        let email = &query.caller;

        let own_memberships = MembershipFilter::for_user(email);
        let registered = RegistrationFilter::for_user(email).with_status(RegistrationStatus::Registered);
        let own_payments = PaymentFilter::for_user(email);
        let (memberships, total_events_registered, payments) = try_join!(
            self.memberships.list(&own_memberships, ListOptions::newest_first()),
            self.registrations.count(&registered),
            self.payments.list(&own_payments, ListOptions::newest_first()),
        )?;

        let active_club_ids = distinct(memberships.iter().filter(|m| m.is_active()).map(|m| m.club_id));
        let upcoming = async {
            if active_club_ids.is_empty() {
                return Ok(Vec::new());
            }
            self.events
                .list(
                    &EventFilter::in_clubs(active_club_ids.clone()).upcoming_from(Timestamp::now()),
                    ListOptions::oldest_first(),
                )
                .await
        };
        let (upcoming, clubs) = try_join!(
            upcoming,
            club_index(self.clubs.as_ref(), distinct(memberships.iter().map(|m| m.club_id))),
        )?;

        let memberships: Vec<MembershipView> = memberships
            .into_iter()
            .map(|m| MembershipView::decorate(m, &clubs))
            .collect();
        let active_memberships = memberships
            .iter()
            .filter(|view| view.membership.is_active())
            .cloned()
            .collect();

        Ok(MemberOverview {
            active_memberships,
            total_events_registered,
            upcoming_events: upcoming
                .into_iter()
                .map(|e| UpcomingEvent::decorate(e, &clubs))
                .collect(),
            memberships,
            payments,
        })
    }
}

/// The caller's registrations with event and club details.
pub struct ListMyEventsHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl ListMyEventsHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            clubs,
            events,
            registrations,
        }
    }

    pub async fn handle(&self, email: &Email) -> Result<Vec<RegistrationView>, DomainError> {
        let registrations = self
            .registrations
            .list(&RegistrationFilter::for_user(email), ListOptions::newest_first())
            .await?;

        let (events, clubs) = try_join!(
            event_index(self.events.as_ref(), distinct(registrations.iter().map(|r| r.event_id))),
            club_index(self.clubs.as_ref(), distinct(registrations.iter().map(|r| r.club_id))),
        )?;

        Ok(registrations
            .into_iter()
            .map(|r| RegistrationView::decorate(r, &events, &clubs))
            .collect())
    }
}

/// The caller's memberships with club details.
pub struct ListMyClubsHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl ListMyClubsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { clubs, memberships }
    }

    pub async fn handle(&self, email: &Email) -> Result<Vec<MembershipView>, DomainError> {
        let memberships = self
            .memberships
            .list(&MembershipFilter::for_user(email), ListOptions::newest_first())
            .await?;
        let clubs = club_index(self.clubs.as_ref(), distinct(memberships.iter().map(|m| m.club_id))).await?;

        Ok(memberships
            .into_iter()
            .map(|m| MembershipView::decorate(m, &clubs))
            .collect())
    }
}
