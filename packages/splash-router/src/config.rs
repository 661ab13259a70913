use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Splash delay used when `SPLASH_DELAY_MS` is not set.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

/// Splash configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashConfig {
    /// How long the loading indicator stays up before routing. Cosmetic only.
    pub splash_delay: Duration,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            splash_delay: Duration::from_millis(DEFAULT_SPLASH_DELAY_MS),
        }
    }
}

impl SplashConfig {
    /// No delay (tests and scripted runs)
    pub fn immediate() -> Self {
        Self {
            splash_delay: Duration::ZERO,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_delay_var(env::var("SPLASH_DELAY_MS").ok())
    }

    fn from_delay_var(value: Option<String>) -> Result<Self> {
        let millis = match value {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("SPLASH_DELAY_MS must be a non-negative number of milliseconds")?,
            None => DEFAULT_SPLASH_DELAY_MS,
        };

        Ok(Self {
            splash_delay: Duration::from_millis(millis),
        })
    }
}
