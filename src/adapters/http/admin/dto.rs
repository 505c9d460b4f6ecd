use serde::Deserialize;

/// Body of `PATCH /admin/users/:email/role`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetRoleRequest {
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `PATCH /admin/clubs/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetClubStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}
