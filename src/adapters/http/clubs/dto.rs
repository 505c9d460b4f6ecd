use serde::Deserialize;

use crate::domain::club::{ClubPatch, NewClub};
use crate::ports::ClubFilter;

use super::super::error::ApiError;
use super::super::extract::{parse_value, required};

/// Body of `POST /clubs` and `PUT /clubs/:id`. Owner and status fields a
/// client might send are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRequest {
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub membership_fee: Option<f64>,
}

impl ClubRequest {
    pub fn into_new_club(self) -> Result<NewClub, ApiError> {
        let club_name = required(&self.club_name, "clubName")?.to_string();
        Ok(NewClub {
            club_name,
            description: self.description,
            category: self.category,
            location: self.location,
            banner_image: self.banner_image,
            membership_fee: self.membership_fee.unwrap_or(0.0),
        })
    }

    pub fn into_patch(self) -> ClubPatch {
        ClubPatch {
            club_name: self.club_name,
            description: self.description,
            category: self.category,
            location: self.location,
            banner_image: self.banner_image,
            membership_fee: self.membership_fee,
        }
    }
}

/// `GET /clubs?status=&category=&search=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ClubListQuery {
    pub fn into_filter(self) -> Result<ClubFilter, ApiError> {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let status = match non_blank(self.status) {
            Some(raw) => Some(parse_value(&raw)?),
            None => None,
        };
        Ok(ClubFilter {
            status,
            category: non_blank(self.category),
            search: non_blank(self.search),
            ..ClubFilter::all()
        })
    }
}
