use serde::{Deserialize, Serialize};

use crate::domain::user::{Role, User};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "photoURL")]
    pub photo_url: Option<String>,
}

/// `insertedId` is null when the caller was already registered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub inserted_id: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub role: Role,
}
