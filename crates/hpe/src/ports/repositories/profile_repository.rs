//! Profile Repository Port
//!
//! Abstract interface for the remote `profiles` table.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewProfile, Profile, ProfileId, ProfileOrder};

/// Repository interface for Profile entities
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch every profile
    async fn find_all(&self, order: ProfileOrder) -> Result<Vec<Profile>, DomainError>;

    /// Insert one profile, returning the stored representation
    async fn insert(&self, profile: &NewProfile) -> Result<Profile, DomainError>;

    /// Atomically increment the vote counter of a profile
    async fn increment_vote(&self, id: ProfileId) -> Result<(), DomainError>;
}
