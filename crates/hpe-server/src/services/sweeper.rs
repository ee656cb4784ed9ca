//! Cooldown Sweeper - Periodically forgets expired cooldown entries

use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::AppProfileService;

/// Sweeper configuration
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// Interval between sweeps
    pub interval: Duration,
}

/// Cooldown ledger sweeper
pub struct CooldownSweeper {
    service: Arc<AppProfileService>,
    config: SweeperConfig,
}

impl CooldownSweeper {
    pub fn new(service: Arc<AppProfileService>, config: SweeperConfig) -> Self {
        Self { service, config }
    }

    /// Start the sweeper (runs in background)
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    async fn run(self) {
        tracing::info!(
            "🧹 Cooldown sweeper started (interval: {:?})",
            self.config.interval
        );

        let mut ticker = interval(self.config.interval);

        // Skip the first immediate tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match self.service.sweep_cooldowns().await {
                Ok(0) => {}
                Ok(removed) => tracing::info!("🧹 Removed {} expired cooldown entries", removed),
                Err(e) => tracing::warn!("🧹 Cooldown sweep failed: {}", e),
            }
        }
    }
}

/// Start the sweeper unless the interval is zero
pub fn maybe_start_sweeper(
    service: Arc<AppProfileService>,
    interval: Duration,
) -> Option<tokio::task::JoinHandle<()>> {
    if interval.is_zero() {
        return None;
    }

    let sweeper = CooldownSweeper::new(service, SweeperConfig { interval });

    Some(sweeper.start())
}
