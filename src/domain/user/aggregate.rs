//! User record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Email, Principal, Timestamp};

use super::Role;

/// A registered platform user, keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: Email,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: Timestamp,
}

impl User {
    /// New users always start as members.
    pub fn register(email: Email, name: Option<String>, photo_url: Option<String>) -> Self {
        Self {
            email,
            name: name.filter(|n| !n.trim().is_empty()),
            photo_url: photo_url.filter(|u| !u.trim().is_empty()),
            role: Role::Member,
            created_at: Timestamp::now(),
        }
    }

    /// Registers the caller, filling blanks from the verified token.
    pub fn from_principal(
        principal: &Principal,
        name: Option<String>,
        photo_url: Option<String>,
    ) -> Self {
        Self::register(
            principal.email.clone(),
            name.or_else(|| principal.display_name.clone()),
            photo_url.or_else(|| principal.photo_url.clone()),
        )
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_users_are_members() {
        let user = User::register(Email::new("a@example.com").unwrap(), None, None);
        assert!(user.has_role(Role::Member));
        assert!(!user.has_role(Role::Admin));
    }

    #[test]
    fn blank_profile_fields_are_dropped() {
        let user = User::register(
            Email::new("a@example.com").unwrap(),
            Some("  ".to_string()),
            Some(String::new()),
        );
        assert_eq!(user.name, None);
        assert_eq!(user.photo_url, None);
    }

    #[test]
    fn principal_claims_fill_missing_profile() {
        let principal = Principal::new("uid", Email::new("b@example.com").unwrap())
            .with_display_name("Bea");
        let user = User::from_principal(&principal, None, Some("https://img/b.png".into()));
        assert_eq!(user.name.as_deref(), Some("Bea"));
        assert_eq!(user.photo_url.as_deref(), Some("https://img/b.png"));
    }

    #[test]
    fn serializes_camel_case() {
        let user = User::register(Email::new("a@example.com").unwrap(), None, None);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "member");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("photoUrl").is_some());
    }
}
