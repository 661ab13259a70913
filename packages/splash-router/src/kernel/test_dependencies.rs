// Test dependencies - mock implementations for testing
//
// Provides spy and failing collaborators that can be injected into SplashFlow.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseKeyValueStore, BaseNavigator, InMemoryKeyValueStore};

// =============================================================================
// Spy Navigator
// =============================================================================

/// Records every `replace` call. Can be told to fail.
#[derive(Clone, Default)]
pub struct SpyNavigator {
    calls: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl SpyNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator whose `replace` always errors (after recording the call)
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Screen names passed to `replace`, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent screen navigated to
    pub fn last_screen(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BaseNavigator for SpyNavigator {
    async fn replace(&self, screen_name: &str) -> Result<()> {
        self.calls.lock().unwrap().push(screen_name.to_string());
        if self.fail {
            return Err(anyhow!("navigator unavailable"));
        }
        Ok(())
    }
}

// =============================================================================
// Failing Key-Value Store
// =============================================================================

/// Wraps an in-memory store and fails reads and/or writes on demand.
#[derive(Clone, Default)]
pub struct FailingKeyValueStore {
    inner: InMemoryKeyValueStore,
    fail_get: bool,
    fail_set: bool,
}

impl FailingKeyValueStore {
    /// Every `get` fails
    pub fn failing_reads(inner: InMemoryKeyValueStore) -> Self {
        Self {
            inner,
            fail_get: true,
            fail_set: false,
        }
    }

    /// Reads succeed, every `set` fails
    pub fn failing_writes(inner: InMemoryKeyValueStore) -> Self {
        Self {
            inner,
            fail_get: false,
            fail_set: true,
        }
    }

    pub fn inner(&self) -> &InMemoryKeyValueStore {
        &self.inner
    }
}

#[async_trait]
impl BaseKeyValueStore for FailingKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_get {
            return Err(anyhow!("storage read failed for {}", key));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_set {
            return Err(anyhow!("storage write failed for {}", key));
        }
        self.inner.set(key, value).await
    }
}
