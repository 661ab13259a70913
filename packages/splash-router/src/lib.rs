// CareFriends - Splash Router
//
// Decides which screen the mobile app opens on launch from the session flags
// kept in device storage: onboarding on first launch, login when the stored
// token is missing, malformed or expired, otherwise the caregiver or friend tabs.
//
// Storage and navigation are injected collaborators (see kernel::traits).

pub mod config;
pub mod domains;
pub mod kernel;
pub mod splash;

pub use config::*;
pub use domains::auth::{
    decode, encode_unsigned, MalformedTokenError, StoredSession, TokenClaims, UserType,
};
pub use domains::routing::{route, RoutingDecision};
pub use splash::{SplashError, SplashFlow};
