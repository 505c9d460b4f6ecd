//! Club record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClubId, Email, OwnedByUser, Timestamp, ValidationError,
};

use super::ClubStatus;

/// A club, owned by the manager who created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub manager_email: Email,
    pub club_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub banner_image: Option<String>,
    /// Decimal currency units; zero means free to join.
    pub membership_fee: f64,
    pub status: ClubStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields a manager supplies when creating a club.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClub {
    pub club_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub banner_image: Option<String>,
    pub membership_fee: f64,
}

/// Partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubPatch {
    pub club_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub banner_image: Option<String>,
    pub membership_fee: Option<f64>,
}

impl Club {
    /// Creates a `pending` club owned by `manager_email`.
    pub fn create(manager_email: Email, new: NewClub) -> Result<Self, ValidationError> {
        let club_name = new.club_name.trim().to_string();
        if club_name.is_empty() {
            return Err(ValidationError::empty_field("clubName"));
        }
        validate_fee(new.membership_fee)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ClubId::new(),
            manager_email,
            club_name,
            description: new.description,
            category: new.category,
            location: new.location,
            banner_image: new.banner_image,
            membership_fee: new.membership_fee,
            status: ClubStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_free(&self) -> bool {
        self.membership_fee <= 0.0
    }

    /// Applies a validated patch in place.
    pub fn apply(&mut self, patch: &ClubPatch) {
        if let Some(name) = &patch.club_name {
            self.club_name = name.trim().to_string();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(location) = &patch.location {
            self.location = Some(location.clone());
        }
        if let Some(banner) = &patch.banner_image {
            self.banner_image = Some(banner.clone());
        }
        if let Some(fee) = patch.membership_fee {
            self.membership_fee = fee;
        }
        self.updated_at = Timestamp::now();
    }
}

impl OwnedByUser for Club {
    fn owner_email(&self) -> &Email {
        &self.manager_email
    }
}

impl ClubPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.club_name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("clubName"));
            }
        }
        if let Some(fee) = self.membership_fee {
            validate_fee(fee)?;
        }
        Ok(())
    }
}

fn validate_fee(fee: f64) -> Result<(), ValidationError> {
    if !fee.is_finite() {
        return Err(ValidationError::invalid_format("membershipFee", "not a number"));
    }
    if fee < 0.0 {
        return Err(ValidationError::negative("membershipFee", fee));
    }
    Ok(())
}
