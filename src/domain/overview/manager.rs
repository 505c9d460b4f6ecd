//! Figures scoped to one manager's clubs.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerOverview {
    pub total_clubs: u64,
    pub total_active_members: u64,
    pub total_events: u64,
    pub total_payment_amount: f64,
}

impl ManagerOverview {
    /// Overview for a manager who owns no clubs.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overview_is_all_zero() {
        let json = serde_json::to_value(ManagerOverview::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalClubs": 0,
                "totalActiveMembers": 0,
                "totalEvents": 0,
                "totalPaymentAmount": 0.0
            })
        );
    }
}
