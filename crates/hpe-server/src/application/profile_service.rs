//! Profile Application Service (Use Case)
//!
//! Orchestrates joining, voting and the overlap graph. A cooldown is reserved
//! before any remote call and released again when that call fails.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use hpe::{
    build_graph, CooldownKey, CooldownLedger, CooldownPolicy, DomainError, NewProfile, Profile,
    ProfileGraph, ProfileId, ProfileOrder, ProfileRepository, Visitor,
};

/// Application service for Profile operations
pub struct ProfileService<R: ProfileRepository + ?Sized, L: CooldownLedger + ?Sized> {
    repo: Arc<R>,
    ledger: Arc<L>,
    policy: CooldownPolicy,
}

impl<R: ProfileRepository + ?Sized, L: CooldownLedger + ?Sized> ProfileService<R, L> {
    pub fn new(repo: Arc<R>, ledger: Arc<L>, policy: CooldownPolicy) -> Self {
        Self {
            repo,
            ledger,
            policy,
        }
    }

    /// Get all profiles
    pub async fn list(&self, order: ProfileOrder) -> Result<Vec<Profile>, DomainError> {
        self.repo.find_all(order).await
    }

    /// Submit a new profile, subject to the visitor's submission cooldown
    pub async fn join(&self, visitor: Visitor, profile: NewProfile) -> Result<Profile, DomainError> {
        let key = CooldownKey::Submission(visitor);
        let previous = self.reserve(key).await?;

        let saved = match self.repo.insert(&profile).await {
            Ok(saved) => saved,
            Err(e) => {
                self.release(key, previous).await;
                return Err(e);
            }
        };

        tracing::info!("New member joined: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Vote for a profile, at most once per vote window and visitor
    pub async fn vote(&self, visitor: Visitor, id: ProfileId) -> Result<(), DomainError> {
        let key = CooldownKey::Vote(visitor, id);
        let previous = self.reserve(key).await?;

        if let Err(e) = self.repo.increment_vote(id).await {
            self.release(key, previous).await;
            return Err(e);
        }

        tracing::info!("Vote recorded for profile {}", id);

        Ok(())
    }

    /// Relationship graph over all profiles
    pub async fn graph(&self) -> Result<ProfileGraph, DomainError> {
        let profiles = self.repo.find_all(ProfileOrder::Votes).await?;
        let graph = build_graph(&profiles);

        tracing::debug!(
            "Built graph: {} nodes, {} edges",
            graph.nodes.len(),
            graph.edges.len()
        );

        Ok(graph)
    }

    /// Forget cooldown entries that can no longer block anything
    pub async fn sweep_cooldowns(&self) -> Result<usize, DomainError> {
        let horizon = chrono::Duration::from_std(self.policy.longest())
            .map_err(|e| DomainError::Validation(format!("Cooldown window too large: {e}")))?;
        self.ledger.purge_older_than(Utc::now() - horizon).await
    }

    async fn reserve(&self, key: CooldownKey) -> Result<Option<DateTime<Utc>>, DomainError> {
        self.ledger
            .try_reserve(key, Utc::now(), &self.policy)
            .await
            .inspect_err(|e| {
                tracing::warn!("Rejected {}: {}", key, e);
            })
    }

    /// The remote call failed; let the visitor retry right away
    async fn release(&self, key: CooldownKey, previous: Option<DateTime<Utc>>) {
        if let Err(e) = self.ledger.release(key, previous).await {
            tracing::warn!("Could not release cooldown {}: {}", key, e);
        }
    }
}
