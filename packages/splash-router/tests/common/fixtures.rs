//! Token and storage fixtures shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use splash_router::encode_unsigned;
use splash_router::kernel::{InMemoryKeyValueStore, StorageKey};

/// Pinned "now" used across scenarios (2023-11-14T22:13:20Z)
pub const NOW: i64 = 1_700_000_000;

/// Unsigned token carrying `exp` plus a couple of typical claims
pub fn token_expiring_at(exp: i64) -> String {
    let Value::Object(payload) = json!({
        "sub": "member-1",
        "iat": NOW - 60,
        "exp": exp,
    }) else {
        unreachable!()
    };
    encode_unsigned(&payload)
}

/// Store as left behind by a completed onboarding + login
pub fn logged_in_store(token: &str, user_type: &str) -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
        .with_entry(StorageKey::IsFirstLaunch.as_str(), "false")
        .with_entry(StorageKey::JwtToken.as_str(), token)
        .with_entry(StorageKey::UserType.as_str(), user_type)
}

/// Store as left behind by onboarding with no login yet
pub fn onboarded_store() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new().with_entry(StorageKey::IsFirstLaunch.as_str(), "false")
}
