//! Queries scoped to the clubs a manager owns.

use std::sync::Arc;

use futures::try_join;

use crate::domain::club::Club;
use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, Email};
use crate::domain::membership::MembershipStatus;
use crate::domain::overview::{ManagerOverview, MembershipView, ReferenceIndex};
use crate::domain::payment::Payment;
use crate::ports::{
    ClubFilter, ClubRepository, EventFilter, EventRepository, ListOptions, MembershipFilter,
    MembershipRepository, PaymentFilter, PaymentRepository,
};

async fn owned_clubs(clubs: &dyn ClubRepository, manager: &Email) -> Result<Vec<Club>, DomainError> {
    clubs
        .list(&ClubFilter::managed_by(manager), ListOptions::newest_first())
        .await
}

fn ids(clubs: &[Club]) -> Vec<ClubId> {
    clubs.iter().map(|c| c.id).collect()
}

pub struct GetManagerOverviewHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    memberships: Arc<dyn MembershipRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl GetManagerOverviewHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        memberships: Arc<dyn MembershipRepository>,
        payments: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            clubs,
            events,
            memberships,
            payments,
        }
    }

    /// A manager with no clubs gets all zeroes and no further queries run.
    pub async fn handle(&self, manager: &Email) -> Result<ManagerOverview, DomainError> {
        let clubs = owned_clubs(self.clubs.as_ref(), manager).await?;
        if clubs.is_empty() {
            return Ok(ManagerOverview::empty());
        }
        let club_ids = ids(&clubs);

        let active_members = MembershipFilter::in_clubs(club_ids.clone()).with_status(MembershipStatus::Active);
        let club_events = EventFilter::in_clubs(club_ids.clone());
        let club_payments = PaymentFilter::in_clubs(club_ids);
        let (total_active_members, total_events, total_payment_amount) = try_join!(
            self.memberships.count(&active_members),
            self.events.count(&club_events),
            self.payments.total_amount(&club_payments),
        )?;

        Ok(ManagerOverview {
            total_clubs: clubs.len() as u64,
            total_active_members,
            total_events,
            total_payment_amount,
        })
    }
}

/// Memberships of every status across the manager's clubs, newest first.
pub struct ListClubMembersHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl ListClubMembersHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { clubs, memberships }
    }

    pub async fn handle(&self, manager: &Email) -> Result<Vec<MembershipView>, DomainError> {
        let clubs = owned_clubs(self.clubs.as_ref(), manager).await?;
        if clubs.is_empty() {
            return Ok(Vec::new());
        }

        let memberships = self
            .memberships
            .list(&MembershipFilter::in_clubs(ids(&clubs)), ListOptions::newest_first())
            .await?;
        let index = ReferenceIndex::build(clubs, |c| c.id);
        Ok(memberships
            .into_iter()
            .map(|m| MembershipView::decorate(m, &index))
            .collect())
    }
}

/// Events of the manager's clubs, soonest first.
pub struct ListManagerEventsHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
}

impl ListManagerEventsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { clubs, events }
    }

    pub async fn handle(&self, manager: &Email) -> Result<Vec<Event>, DomainError> {
        let clubs = owned_clubs(self.clubs.as_ref(), manager).await?;
        if clubs.is_empty() {
            return Ok(Vec::new());
        }
        self.events
            .list(&EventFilter::in_clubs(ids(&clubs)), ListOptions::oldest_first())
            .await
    }
}

pub struct ListManagerPaymentsHandler {
    clubs: Arc<dyn ClubRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl ListManagerPaymentsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self { clubs, payments }
    }

    pub async fn handle(&self, manager: &Email) -> Result<Vec<Payment>, DomainError> {
        let clubs = owned_clubs(self.clubs.as_ref(), manager).await?;
        if clubs.is_empty() {
            return Ok(Vec::new());
        }
        self.payments
            .list(&PaymentFilter::in_clubs(ids(&clubs)), ListOptions::newest_first())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, event_details, seed_club, seed_event, store};
    use crate::domain::club::ClubStatus;
    use crate::domain::membership::Membership;
    use crate::domain::payment::PaymentType;

    #[tokio::test]
    async fn manager_without_clubs_gets_empty_results() {
        let store = store();
        seed_club(&store, "other@example.com", "Theirs", 0.0, ClubStatus::Approved).await;
        let me = email("mgr@example.com");

        let overview = GetManagerOverviewHandler::new(store.clone(), store.clone(), store.clone(), store.clone())
            .handle(&me)
            .await
            .unwrap();
        assert_eq!(overview, ManagerOverview::empty());

        let events = ListManagerEventsHandler::new(store.clone(), store.clone())
            .handle(&me)
            .await
            .unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn overview_counts_only_owned_clubs() {
        let store = store();
        let mine = seed_club(&store, "mgr@example.com", "Mine", 10.0, ClubStatus::Approved).await;
        let theirs = seed_club(&store, "other@example.com", "Theirs", 10.0, ClubStatus::Approved).await;
        seed_event(&store, &mine, event_details("Meetup", 3, 0.0)).await;
        seed_event(&store, &theirs, event_details("Elsewhere", 3, 0.0)).await;

        let memberships: &dyn MembershipRepository = &*store;
        memberships.create(&Membership::activate(email("a@example.com"), mine.id, None)).await.unwrap();
        memberships.create(&Membership::activate(email("b@example.com"), theirs.id, None)).await.unwrap();

        let payments: &dyn PaymentRepository = &*store;
        for (club, session) in [(&mine, "cs_1"), (&theirs, "cs_2")] {
            let payment = Payment::record(
                email("a@example.com"),
                club.id,
                club.club_name.clone(),
                None,
                10.0,
                PaymentType::Membership,
                session,
            );
            payments.create_for_session(&payment).await.unwrap();
        }

        let overview = GetManagerOverviewHandler::new(store.clone(), store.clone(), store.clone(), store.clone())
            .handle(&email("mgr@example.com"))
            .await
            .unwrap();
        assert_eq!(
            overview,
            ManagerOverview {
                total_clubs: 1,
                total_active_members: 1,
                total_events: 1,
                total_payment_amount: 10.0,
            }
        );

        let listed = ListManagerPaymentsHandler::new(store.clone(), store.clone())
            .handle(&email("mgr@example.com"))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].club_id, mine.id);
    }

    #[tokio::test]
    async fn club_members_include_expired_with_club_names() {
        let store = store();
        let mine = seed_club(&store, "mgr@example.com", "Mine", 0.0, ClubStatus::Approved).await;
        let memberships: &dyn MembershipRepository = &*store;
        let expired = Membership::activate(email("a@example.com"), mine.id, None);
        memberships.create(&expired).await.unwrap();
        memberships.set_status(&expired.id, MembershipStatus::Expired).await.unwrap();
        memberships.create(&Membership::activate(email("b@example.com"), mine.id, None)).await.unwrap();

        let rows = ListClubMembersHandler::new(store.clone(), store.clone())
            .handle(&email("mgr@example.com"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.club_name == "Mine"));
        assert!(rows.iter().any(|r| r.membership.status == MembershipStatus::Expired));
    }
}
