//! Splash routing decision
//!
//! `route` is a pure, total function: every combination of stored flags maps
//! to exactly one destination. Malformed tokens are logged and treated as
//! logged out.

use tracing::{debug, warn};

use super::decision::RoutingDecision;
use crate::domains::auth::{self, StoredSession, UserType};

/// Decide where to send the user given the stored session and the current time.
pub fn route(session: &StoredSession, now_epoch_seconds: i64) -> RoutingDecision {
    if session.is_first_launch() {
        debug!("No first-launch marker, routing to onboarding");
        return RoutingDecision::Onboarding;
    }

    let (Some(token), Some(user_type)) = (session.token(), session.user_type()) else {
        debug!(
            has_token = session.token().is_some(),
            has_user_type = session.user_type().is_some(),
            "Stored session incomplete, routing to login"
        );
        return RoutingDecision::Login;
    };

    let claims = match auth::decode(token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(error = %e, "Stored token is malformed, routing to login");
            return RoutingDecision::Login;
        }
    };

    let Some(expires_at) = claims.expires_at else {
        warn!("Stored token has no numeric exp claim, routing to login");
        return RoutingDecision::Login;
    };

    if claims.is_expired_at(now_epoch_seconds) {
        debug!(expires_at, now = now_epoch_seconds, "Token expired, routing to login");
        return RoutingDecision::Login;
    }

    match user_type.parse::<UserType>() {
        Ok(UserType::Caregiver) => RoutingDecision::CaregiverHome,
        Ok(UserType::Friend) => RoutingDecision::FriendHome,
        Err(e) => {
            debug!(error = %e, "Routing to login");
            RoutingDecision::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::encode_unsigned;
    use serde_json::{json, Value};

    const NOW: i64 = 1_700_000_000;

    fn token_expiring_at(exp: i64) -> String {
        let Value::Object(payload) = json!({ "sub": "member-1", "exp": exp }) else {
            unreachable!()
        };
        encode_unsigned(&payload)
    }

    fn session(flag: Option<&str>, token: Option<&str>, user_type: Option<&str>) -> StoredSession {
        StoredSession {
            first_launch_flag: flag.map(str::to_string),
            token: token.map(str::to_string),
            user_type: user_type.map(str::to_string),
        }
    }

    #[test]
    fn test_first_launch_routes_to_onboarding_regardless_of_other_fields() {
        let valid = token_expiring_at(NOW + 3600);
        for token in [None, Some("abc"), Some(valid.as_str())] {
            for user_type in [None, Some("caregiver"), Some("friend"), Some("other")] {
                assert_eq!(
                    route(&session(None, token, user_type), NOW),
                    RoutingDecision::Onboarding
                );
            }
        }
    }

    #[test]
    fn test_missing_token_routes_to_login() {
        assert_eq!(
            route(&session(Some("false"), None, Some("friend")), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_missing_user_type_routes_to_login() {
        let token = token_expiring_at(NOW + 3600);
        assert_eq!(
            route(&session(Some("false"), Some(&token), None), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_empty_token_routes_to_login() {
        assert_eq!(
            route(&session(Some("false"), Some(""), Some("friend")), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_expired_token_routes_to_login() {
        let token = token_expiring_at(NOW - 1);
        assert_eq!(
            route(&session(Some("false"), Some(&token), Some("caregiver")), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_token_expiring_now_is_still_valid() {
        let token = token_expiring_at(NOW);
        assert_eq!(
            route(&session(Some("false"), Some(&token), Some("caregiver")), NOW),
            RoutingDecision::CaregiverHome
        );
    }

    #[test]
    fn test_valid_friend_token_routes_to_friend_home() {
        let token = token_expiring_at(NOW + 3600);
        assert_eq!(
            route(&session(Some("false"), Some(&token), Some("friend")), NOW),
            RoutingDecision::FriendHome
        );
    }

    #[test]
    fn test_valid_caregiver_token_routes_to_caregiver_home() {
        let token = token_expiring_at(NOW + 3600);
        assert_eq!(
            route(&session(Some("false"), Some(&token), Some("caregiver")), NOW),
            RoutingDecision::CaregiverHome
        );
    }

    #[test]
    fn test_unknown_user_type_routes_to_login() {
        let token = token_expiring_at(NOW + 3600);
        assert_eq!(
            route(&session(Some("false"), Some(&token), Some("admin")), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_malformed_token_routes_to_login() {
        assert_eq!(
            route(&session(Some("false"), Some("abc"), Some("caregiver")), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_token_without_exp_routes_to_login() {
        let Value::Object(payload) = json!({ "sub": "member-1" }) else {
            unreachable!()
        };
        let token = encode_unsigned(&payload);
        assert_eq!(
            route(&session(Some("false"), Some(&token), Some("friend")), NOW),
            RoutingDecision::Login
        );
    }

    #[test]
    fn test_unexpired_tokens_reach_user_type_dispatch() {
        for offset in [0, 1, 60, 3600, 86_400 * 365] {
            let token = token_expiring_at(NOW + offset);
            assert_eq!(
                route(&session(Some("false"), Some(&token), Some("friend")), NOW),
                RoutingDecision::FriendHome,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_route_is_total() {
        let valid = token_expiring_at(NOW + 3600);
        let expired = token_expiring_at(NOW - 3600);
        let flags = [None, Some(""), Some("false")];
        let tokens = [
            None,
            Some(""),
            Some("abc"),
            Some("a.!!.c"),
            Some(valid.as_str()),
            Some(expired.as_str()),
        ];
        let user_types = [None, Some(""), Some("caregiver"), Some("friend"), Some("admin")];

        for flag in flags {
            for token in tokens {
                for user_type in user_types {
                    let decision = route(&session(flag, token, user_type), NOW);
                    if flag.is_none() {
                        assert_eq!(decision, RoutingDecision::Onboarding);
                    } else if token != Some(valid.as_str()) {
                        assert_eq!(decision, RoutingDecision::Login);
                    }
                }
            }
        }
    }
}
