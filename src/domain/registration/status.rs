//! Registration status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Registered,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }
}

impl StateMachine for RegistrationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RegistrationStatus::*;
        matches!(
            (self, target),
            (Registered, Cancelled) | (Cancelled, Cancelled) | (Registered, Registered)
        )
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "registered" => Ok(RegistrationStatus::Registered),
            "cancelled" => Ok(RegistrationStatus::Cancelled),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown registration status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_final() {
        assert!(RegistrationStatus::Registered.can_transition_to(&RegistrationStatus::Cancelled));
        assert!(RegistrationStatus::Cancelled
            .transition_to(RegistrationStatus::Registered)
            .is_err());
    }

    #[test]
    fn round_trips_through_str() {
        assert_eq!(
            "cancelled".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Cancelled
        );
        assert!("waitlisted".parse::<RegistrationStatus>().is_err());
    }
}
