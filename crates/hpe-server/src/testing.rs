//! Test doubles for the domain ports

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use tokio::sync::RwLock;

use hpe::{
    CooldownLedger, CooldownPolicy, DomainError, NewProfile, Profile, ProfileId, ProfileOrder,
    ProfileRepository, StoredTags,
};

use crate::adapters::InMemoryCooldownLedger;
use crate::{build_router, AppProfileService, AppState};

/// Profile store kept in memory, counting remote calls
#[derive(Default)]
pub struct FakeProfileRepository {
    profiles: RwLock<Vec<Profile>>,
    inserts: AtomicUsize,
    increments: AtomicUsize,
    failing: AtomicBool,
    delay: Duration,
}

impl FakeProfileRepository {
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
            ..Self::default()
        }
    }

    /// Delay every write, keeping concurrent calls in flight
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn increments(&self) -> usize {
        self.increments.load(Ordering::SeqCst)
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::ExternalService("store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for FakeProfileRepository {
    async fn find_all(&self, order: ProfileOrder) -> Result<Vec<Profile>, DomainError> {
        self.check()?;
        let mut profiles = self.profiles.read().await.clone();
        if order == ProfileOrder::Votes {
            profiles.sort_by(|a, b| b.votes.cmp(&a.votes));
        }
        Ok(profiles)
    }

    async fn insert(&self, profile: &NewProfile) -> Result<Profile, DomainError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.check()?;
        let mut profiles = self.profiles.write().await;
        let id = profiles.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let saved = stored(id, profile.clone());
        profiles.push(saved.clone());
        Ok(saved)
    }

    async fn increment_vote(&self, id: ProfileId) -> Result<(), DomainError> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.check()?;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found("Profile", id))?;
        profile.votes += 1;
        Ok(())
    }
}

/// Build a profile fixture from comma-separated fields
pub fn profile(
    id: ProfileId,
    name: &str,
    strengths: &str,
    aspirations: &str,
    values: &str,
) -> Profile {
    let new = NewProfile::from_form(name, strengths, aspirations, values).expect("valid fixture");
    stored(id, new)
}

/// What the store hands back for a fresh insert
fn stored(id: ProfileId, new: NewProfile) -> Profile {
    Profile {
        id,
        name: new.name,
        strengths: StoredTags::List(new.strengths),
        aspirations: StoredTags::List(new.aspirations),
        values: StoredTags::List(new.values),
        votes: 0,
        created_at: Some(Utc::now()),
    }
}

/// Service wired to fakes, with default cooldowns
pub fn service_with(
    repo: Arc<FakeProfileRepository>,
) -> (Arc<AppProfileService>, InMemoryCooldownLedger) {
    let ledger = InMemoryCooldownLedger::new();
    let store: Arc<dyn ProfileRepository> = repo;
    let cooldowns: Arc<dyn CooldownLedger> = Arc::new(ledger.clone());
    let service = AppProfileService::new(store, cooldowns, CooldownPolicy::default());
    (Arc::new(service), ledger)
}

/// Full router over a fake store
pub fn test_app(repo: Arc<FakeProfileRepository>) -> Router {
    let (profile_service, _) = service_with(repo);
    build_router(AppState { profile_service })
}
