//! Strongly-typed identifier value objects.
//!
//! Every stored record except users is keyed by a UUID v7, so ids sort by
//! creation time. Users are keyed by [`Email`](super::Email).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered id.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format($label, e.to_string()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a club.
    ClubId,
    "club_id"
);

define_id!(
    /// Unique identifier for a club event.
    EventId,
    "event_id"
);

define_id!(
    /// Unique identifier for an event registration.
    RegistrationId,
    "registration_id"
);

define_id!(
    /// Unique identifier for a club membership.
    MembershipId,
    "membership_id"
);

define_id!(
    /// Unique identifier for a recorded payment.
    PaymentId,
    "payment_id"
);
