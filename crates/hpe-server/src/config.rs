//! Server configuration
//!
//! Values come from Shuttle secrets or the process environment; see
//! [`Config::from_lookup`].

use std::time::Duration;

use anyhow::{Context, Result};
use hpe::CooldownPolicy;

const URL_KEYS: [&str; 2] = ["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
const KEY_KEYS: [&str; 2] = ["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];

const SUBMISSION_COOLDOWN_KEY: &str = "HPE_SUBMISSION_COOLDOWN_SECS";
const VOTE_COOLDOWN_KEY: &str = "HPE_VOTE_COOLDOWN_SECS";
const SWEEP_INTERVAL_KEY: &str = "HPE_SWEEP_INTERVAL_SECS";

const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Supabase project
    pub supabase_url: String,
    /// Anonymous access key of the Supabase project
    pub supabase_key: String,
    pub cooldowns: CooldownPolicy,
    /// Interval of the cooldown ledger sweep (0 = disabled)
    pub sweep_interval: Duration,
}

impl Config {
    /// Build the configuration from a key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = first_of(&lookup, &URL_KEYS)
            .with_context(|| format!("Missing configuration: {}", URL_KEYS.join(" or ")))?;
        let supabase_key = first_of(&lookup, &KEY_KEYS)
            .with_context(|| format!("Missing configuration: {}", KEY_KEYS.join(" or ")))?;

        let cooldowns = CooldownPolicy::new(
            seconds(&lookup, SUBMISSION_COOLDOWN_KEY, CooldownPolicy::DEFAULT_WINDOW)?,
            seconds(&lookup, VOTE_COOLDOWN_KEY, CooldownPolicy::DEFAULT_WINDOW)?,
        );
        let sweep_interval = seconds(&lookup, SWEEP_INTERVAL_KEY, DEFAULT_SWEEP_INTERVAL)?;

        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_key,
            cooldowns,
            sweep_interval,
        })
    }
}

fn first_of<F>(lookup: &F, keys: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn seconds<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {key} value: {raw:?}"))?;
            Ok(Duration::from_secs(secs))
        }
        None => {
            tracing::info!("{key} not set, using default: {}s", default.as_secs());
            Ok(default)
        }
    }
}
