//! In-memory implementation of CooldownLedger

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use hpe::{CooldownKey, CooldownLedger, CooldownPolicy, DomainError};

/// Process-local cooldown ledger; entries are lost on restart
#[derive(Debug, Clone, Default)]
pub struct InMemoryCooldownLedger {
    entries: Arc<RwLock<HashMap<CooldownKey, DateTime<Utc>>>>,
}

impl InMemoryCooldownLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CooldownLedger for InMemoryCooldownLedger {
    async fn last_action(&self, key: &CooldownKey) -> Result<Option<DateTime<Utc>>, DomainError> {
        Ok(self.entries.read().await.get(key).copied())
    }

    async fn try_reserve(
        &self,
        key: CooldownKey,
        now: DateTime<Utc>,
        policy: &CooldownPolicy,
    ) -> Result<Option<DateTime<Utc>>, DomainError> {
        // Check and stamp under one write guard
        let mut entries = self.entries.write().await;
        let previous = entries.get(&key).copied();
        policy.check(&key, previous, now)?;
        entries.insert(key, now);
        Ok(previous)
    }

    async fn release(
        &self,
        key: CooldownKey,
        previous: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        match previous {
            Some(at) => entries.insert(key, at),
            None => entries.remove(&key),
        };
        Ok(())
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, at| *at >= cutoff);
        Ok(before - entries.len())
    }
}
