//! Profile DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use hpe::{DomainError, NewProfile, Profile, ProfileOrder};

/// Join request; tag fields are comma-separated text as typed in the form
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProfileRequest {
    pub name: String,
    /// e.g. "créativité, empathie"
    #[serde(default)]
    pub strengths: String,
    /// e.g. "éduquer, guérir, innover"
    #[serde(default)]
    pub aspirations: String,
    /// e.g. "liberté, respect, joie"
    #[serde(default)]
    pub values: String,
}

impl TryFrom<CreateProfileRequest> for NewProfile {
    type Error = DomainError;

    fn try_from(request: CreateProfileRequest) -> Result<Self, Self::Error> {
        NewProfile::from_form(
            &request.name,
            &request.strengths,
            &request.aspirations,
            &request.values,
        )
    }
}

/// Listing query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProfilesQuery {
    /// "votes" (default) or "insertion"
    #[param(value_type = Option<String>)]
    pub order: Option<ProfileOrder>,
}

/// Display strings of the tag fields; malformed stored values appear verbatim
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileDisplay {
    pub strengths: String,
    pub aspirations: String,
    pub values: String,
}

/// Profile response
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub strengths: Vec<String>,
    pub aspirations: Vec<String>,
    pub values: Vec<String>,
    pub votes: i64,
    pub display: ProfileDisplay,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            display: ProfileDisplay {
                strengths: profile.strengths.display(),
                aspirations: profile.aspirations.display(),
                values: profile.values.display(),
            },
            strengths: profile.strengths.tags(),
            aspirations: profile.aspirations.tags(),
            values: profile.values.tags(),
            name: profile.name,
            votes: profile.votes,
            created_at: profile.created_at,
        }
    }
}

/// Vote response
#[derive(Debug, Serialize, ToSchema)]
pub struct VoteResponse {
    pub status: String,
    pub profile_id: i64,
}
