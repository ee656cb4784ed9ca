//! Cooldown Ledger Port
//!
//! Remembers when a visitor last performed a rate-limited action.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{errors::DomainError, services::CooldownPolicy, CooldownKey};

/// Storage interface for cooldown timestamps
#[async_trait]
pub trait CooldownLedger: Send + Sync {
    /// Last time the action behind `key` was reserved
    async fn last_action(&self, key: &CooldownKey) -> Result<Option<DateTime<Utc>>, DomainError>;

    /// Check `policy` and stamp `key` with `now` as one atomic step.
    ///
    /// Fails with `CooldownActive` while the key is inside its window. On
    /// success returns the timestamp it replaced, for [`CooldownLedger::release`].
    async fn try_reserve(
        &self,
        key: CooldownKey,
        now: DateTime<Utc>,
        policy: &CooldownPolicy,
    ) -> Result<Option<DateTime<Utc>>, DomainError>;

    /// Undo a reservation whose action failed, restoring `previous`
    async fn release(
        &self,
        key: CooldownKey,
        previous: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError>;

    /// Drop entries recorded before `cutoff`, returning how many were removed
    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;
}
