//! Session data types
//!
//! Plain values read out of device storage by the splash flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Session flags as persisted by the login and onboarding flows.
///
/// Fields hold the raw stored strings. Read-only to routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Set by onboarding once the app has been launched before.
    pub first_launch_flag: Option<String>,
    /// Compact JWT issued at login.
    pub token: Option<String>,
    /// Role tag written at login (`caregiver` or `friend`).
    pub user_type: Option<String>,
}

impl StoredSession {
    pub fn is_first_launch(&self) -> bool {
        self.first_launch_flag.is_none()
    }

    /// Stored token, with an empty string counted as missing.
    pub fn token(&self) -> Option<&str> {
        non_empty(self.token.as_deref())
    }

    /// Stored user type tag, with an empty string counted as missing.
    pub fn user_type(&self) -> Option<&str> {
        non_empty(self.user_type.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Which side of the app a logged-in member uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Caregiver,
    Friend,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Caregiver => "caregiver",
            UserType::Friend => "friend",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    /// Tags are matched exactly, as stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "caregiver" => Ok(UserType::Caregiver),
            "friend" => Ok(UserType::Friend),
            other => Err(UnknownUserType(other.to_string())),
        }
    }
}
