//! Platform-wide figures for administrators.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::ClubId;
use crate::domain::membership::Membership;

use super::{ReferenceIndex, UNKNOWN_CLUB};

/// Club counts per moderation status. Missing buckets are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClubStatusCounts {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

impl ClubStatusCounts {
    pub fn from_counts(counts: impl IntoIterator<Item = (ClubStatus, u64)>) -> Self {
        let mut totals = Self::default();
        for (status, count) in counts {
            match status {
                ClubStatus::Pending => totals.pending += count,
                ClubStatus::Approved => totals.approved += count,
                ClubStatus::Rejected => totals.rejected += count,
            }
        }
        totals
    }

    pub fn total(&self) -> u64 {
        self.pending + self.approved + self.rejected
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub total_users: u64,
    pub clubs: ClubStatusCounts,
    pub total_events: u64,
    pub total_memberships: u64,
    pub total_payment_amount: f64,
}

/// One row of the memberships-per-club report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMemberCount {
    pub club_id: ClubId,
    pub club_name: String,
    pub total_members: u64,
}

/// Groups active memberships by club, most members first. Ties keep club
/// name order so output is stable.
pub fn count_members_per_club(
    memberships: &[Membership],
    clubs: &ReferenceIndex<ClubId, Club>,
) -> Vec<ClubMemberCount> {
    let mut counts: HashMap<ClubId, u64> = HashMap::new();
    for membership in memberships.iter().filter(|m| m.is_active()) {
        *counts.entry(membership.club_id).or_default() += 1;
    }

    let mut rows: Vec<ClubMemberCount> = counts
        .into_iter()
        .map(|(club_id, total_members)| ClubMemberCount {
            club_id,
            club_name: clubs.label(&club_id, |c| c.club_name.as_str(), UNKNOWN_CLUB),
            total_members,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_members
            .cmp(&a.total_members)
            .then_with(|| a.club_name.cmp(&b.club_name))
    });
    rows
}
