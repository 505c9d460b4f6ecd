//! Administrator overview queries.

use std::sync::Arc;

use futures::try_join;

use crate::domain::foundation::DomainError;
use crate::domain::membership::MembershipStatus;
use crate::domain::overview::{
    count_members_per_club, distinct, AdminOverview, ClubMemberCount, ClubStatusCounts,
};
use crate::ports::{
    ClubRepository, EventFilter, EventRepository, ListOptions, MembershipFilter,
    MembershipRepository, PaymentFilter, PaymentRepository, UserRepository,
};

use super::club_index;

/// Platform totals. Five independent counts run concurrently.
pub struct GetAdminOverviewHandler {
    users: Arc<dyn UserRepository>,
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    memberships: Arc<dyn MembershipRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl GetAdminOverviewHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        memberships: Arc<dyn MembershipRepository>,
        payments: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            users,
            clubs,
            events,
            memberships,
            payments,
        }
    }

    pub async fn handle(&self) -> Result<AdminOverview, DomainError> {
        let all_events = EventFilter::all();
        let all_memberships = MembershipFilter::all();
        let all_payments = PaymentFilter::all();
        let (total_users, by_status, total_events, total_memberships, total_payment_amount) = try_join!(
            self.users.count(),
            self.clubs.count_by_status(),
            self.events.count(&all_events),
            self.memberships.count(&all_memberships),
            self.payments.total_amount(&all_payments),
        )?;

        Ok(AdminOverview {
            total_users,
            clubs: ClubStatusCounts::from_counts(by_status),
            total_events,
            total_memberships,
            total_payment_amount,
        })
    }
}

pub struct ListMembershipsPerClubHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl ListMembershipsPerClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { clubs, memberships }
    }

    pub async fn handle(&self) -> Result<Vec<ClubMemberCount>, DomainError> {
        let active = self
            .memberships
            .list(
                &MembershipFilter::all().with_status(MembershipStatus::Active),
                ListOptions::default(),
            )
            .await?;
        let clubs = club_index(self.clubs.as_ref(), distinct(active.iter().map(|m| m.club_id))).await?;
        Ok(count_members_per_club(&active, &clubs))
    }
}
