//! Overview and joined listing queries.
//!
//! Each handler fans out to several repositories at once and joins the
//! results in memory. Referenced records are fetched in one batched
//! `ids` query per collection, never one lookup per row.

mod admin;
mod manager;
mod member;

pub use admin::{GetAdminOverviewHandler, ListMembershipsPerClubHandler};
pub use manager::{
    GetManagerOverviewHandler, ListClubMembersHandler, ListManagerEventsHandler,
    ListManagerPaymentsHandler,
};
pub use member::{GetMemberOverviewHandler, GetMemberOverviewQuery, ListMyClubsHandler, ListMyEventsHandler};

use crate::domain::club::Club;
use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, EventId};
use crate::domain::overview::ReferenceIndex;
use crate::ports::{ClubFilter, ClubRepository, EventFilter, EventRepository, ListOptions};

async fn club_index(
    clubs: &dyn ClubRepository,
    ids: Vec<ClubId>,
) -> Result<ReferenceIndex<ClubId, Club>, DomainError> {
    if ids.is_empty() {
        return Ok(ReferenceIndex::empty());
    }
    let found = clubs.list(&ClubFilter::with_ids(ids), ListOptions::default()).await?;
    Ok(ReferenceIndex::build(found, |c| c.id))
}

async fn event_index(
    events: &dyn EventRepository,
    ids: Vec<EventId>,
) -> Result<ReferenceIndex<EventId, Event>, DomainError> {
    if ids.is_empty() {
        return Ok(ReferenceIndex::empty());
    }
    let found = events.list(&EventFilter::with_ids(ids), ListOptions::default()).await?;
    Ok(ReferenceIndex::build(found, |e| e.id))
}
