// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no routing logic.
// The routing decision is a pure domain function; these traits carry the
// platform collaborators around it (device storage, navigator, clock).
//
// Naming convention: Base* for trait names (e.g., BaseKeyValueStore, BaseNavigator)

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// Storage Keys
// =============================================================================

/// Keys the splash flow reads from device storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    IsFirstLaunch,
    JwtToken,
    UserType,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::IsFirstLaunch => "isFirstLaunch",
            StorageKey::JwtToken => "jwtToken",
            StorageKey::UserType => "userType",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Key-Value Storage Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseKeyValueStore: Send + Sync {
    /// Read a stored string. `Ok(None)` means the key was never set.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persist a string under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// Navigation Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseNavigator: Send + Sync {
    /// Replace the current screen with `screen_name` (no back-stack entry).
    async fn replace(&self, screen_name: &str) -> Result<()>;
}

// =============================================================================
// Clock Trait (Infrastructure)
// =============================================================================

pub trait BaseClock: Send + Sync {
    /// Current time as whole seconds since the Unix epoch.
    fn now_epoch_seconds(&self) -> i64;
}
