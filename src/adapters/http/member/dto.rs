use serde::Deserialize;

/// Body of `POST /event-registrations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub event_id: Option<String>,
}

/// Body of `POST /memberships`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClubRequest {
    #[serde(default)]
    pub club_id: Option<String>,
}
