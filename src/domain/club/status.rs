//! Club moderation status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Moderation state. Clubs start `pending`; only an admin changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ClubStatus {
    pub const ALL: [ClubStatus; 3] = [ClubStatus::Pending, ClubStatus::Approved, ClubStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClubStatus::Pending => "pending",
            ClubStatus::Approved => "approved",
            ClubStatus::Rejected => "rejected",
        }
    }

    /// Approved clubs are publicly listed and accept members.
    pub fn is_public(&self) -> bool {
        *self == ClubStatus::Approved
    }
}

/// Admins may set any status, including back to `pending`.
impl StateMachine for ClubStatus {
    fn can_transition_to(&self, _target: &Self) -> bool {
        true
    }
}

impl fmt::Display for ClubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClubStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ClubStatus::Pending),
            "approved" => Ok(ClubStatus::Approved),
            "rejected" => Ok(ClubStatus::Rejected),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown club status '{}'", other),
            )),
        }
    }
}
