use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the splash screen sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingDecision {
    Onboarding,
    Login,
    CaregiverHome,
    FriendHome,
}

impl RoutingDecision {
    /// Screen registered with the app's navigator for this destination.
    pub fn screen_name(&self) -> &'static str {
        match self {
            RoutingDecision::Onboarding => "OnboardingScreen",
            RoutingDecision::Login => "KakaoLoginScreen",
            RoutingDecision::CaregiverHome => "CaregiverTabs",
            RoutingDecision::FriendHome => "FriendTabs",
        }
    }

    pub fn all() -> [RoutingDecision; 4] {
        [
            RoutingDecision::Onboarding,
            RoutingDecision::Login,
            RoutingDecision::CaregiverHome,
            RoutingDecision::FriendHome,
        ]
    }
}

impl fmt::Display for RoutingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.screen_name())
    }
}
