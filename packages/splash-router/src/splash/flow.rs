use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::SplashError;
use crate::config::SplashConfig;
use crate::domains::auth::StoredSession;
use crate::domains::routing::{route, RoutingDecision};
use crate::kernel::{BaseClock, BaseKeyValueStore, BaseNavigator, StorageKey, SystemClock};

/// Value written under `isFirstLaunch` once onboarding has been shown.
pub const FIRST_LAUNCH_DONE: &str = "false";

/// Runs the launch-time routing against injected platform collaborators.
#[derive(Clone)]
pub struct SplashFlow {
    storage: Arc<dyn BaseKeyValueStore>,
    navigator: Arc<dyn BaseNavigator>,
    clock: Arc<dyn BaseClock>,
    config: SplashConfig,
}

impl SplashFlow {
    /// Create a flow that reads the wall clock
    pub fn new(
        storage: Arc<dyn BaseKeyValueStore>,
        navigator: Arc<dyn BaseNavigator>,
        config: SplashConfig,
    ) -> Self {
        Self {
            storage,
            navigator,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the clock (tests pin "now" with a fixed clock)
    pub fn with_clock(mut self, clock: Arc<dyn BaseClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Wait out the splash delay, decide, and navigate.
    ///
    /// Returns the decision that was navigated to. The navigator is called
    /// exactly once per run.
    pub async fn run(&self) -> Result<RoutingDecision, SplashError> {
        if !self.config.splash_delay.is_zero() {
            tokio::time::sleep(self.config.splash_delay).await;
        }

        let decision = self.decide().await;
        let screen = decision.screen_name();

        info!(decision = ?decision, screen, "Leaving splash screen");
        self.navigator
            .replace(screen)
            .await
            .map_err(|source| SplashError::Navigation { screen, source })?;

        Ok(decision)
    }

    /// Routing decision plus the first-launch bookkeeping, without navigating.
    pub async fn decide(&self) -> RoutingDecision {
        let session = match self.load_session().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session, routing to login");
                return RoutingDecision::Login;
            }
        };

        let decision = route(&session, self.clock.now_epoch_seconds());

        if decision == RoutingDecision::Onboarding {
            if let Err(e) = self.mark_first_launch_done().await {
                warn!(error = %e, "Failed to persist first-launch marker, routing to login");
                return RoutingDecision::Login;
            }
        }

        decision
    }

    /// Read the three session keys from storage.
    pub async fn load_session(&self) -> Result<StoredSession> {
        let first_launch_flag = self.read(StorageKey::IsFirstLaunch).await?;
        let token = self.read(StorageKey::JwtToken).await?;
        let user_type = self.read(StorageKey::UserType).await?;

        debug!(
            first_launch = first_launch_flag.is_none(),
            has_token = token.is_some(),
            user_type = user_type.as_deref().unwrap_or("<none>"),
            "Loaded stored session"
        );

        Ok(StoredSession {
            first_launch_flag,
            token,
            user_type,
        })
    }

    async fn read(&self, key: StorageKey) -> Result<Option<String>> {
        self.storage
            .get(key.as_str())
            .await
            .with_context(|| format!("Failed to read {}", key))
    }

    async fn mark_first_launch_done(&self) -> Result<()> {
        self.storage
            .set(StorageKey::IsFirstLaunch.as_str(), FIRST_LAUNCH_DONE)
            .await
            .with_context(|| format!("Failed to write {}", StorageKey::IsFirstLaunch))
    }
}
