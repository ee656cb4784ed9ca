//! Cooldown policy - minimum wait between a visitor's actions
//!
//! Enforced by the server against the cooldown ledger, never by the browser.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::CooldownKey;

/// Cooldown windows per action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownPolicy {
    /// Minimum time between two profile submissions of a visitor
    pub submission: Duration,
    /// Minimum time between two votes of a visitor for the same profile
    pub vote: Duration,
}

impl Default for CooldownPolicy {
    fn default() -> Self {
        Self {
            submission: Self::DEFAULT_WINDOW,
            vote: Self::DEFAULT_WINDOW,
        }
    }
}

impl CooldownPolicy {
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

    pub fn new(submission: Duration, vote: Duration) -> Self {
        Self { submission, vote }
    }

    /// Window applying to a ledger key
    pub fn window(&self, key: &CooldownKey) -> Duration {
        match key {
            CooldownKey::Submission(_) => self.submission,
            CooldownKey::Vote(..) => self.vote,
        }
    }

    /// Entries older than this can be forgotten
    pub fn longest(&self) -> Duration {
        self.submission.max(self.vote)
    }

    /// Fail with `CooldownActive` when `last` falls inside the key's window.
    ///
    /// A timestamp in the future (clock skew) counts as "just now".
    pub fn check(
        &self,
        key: &CooldownKey,
        last: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let Some(last) = last else {
            return Ok(());
        };

        let window_ms = i64::try_from(self.window(key).as_millis()).unwrap_or(i64::MAX);
        let elapsed_ms = (now - last).num_milliseconds().max(0);

        if elapsed_ms >= window_ms {
            return Ok(());
        }

        let remaining_ms = (window_ms - elapsed_ms) as u64;
        Err(DomainError::CooldownActive {
            retry_after_secs: remaining_ms.div_ceil(1000).max(1),
        })
    }
}
