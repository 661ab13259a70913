//! Auth domain - reading the locally stored session
//!
//! Responsibilities:
//! - Unverified JWT payload decoding (claims and expiry)
//! - Stored session flags and user type tags
//!
//! Nothing here talks to a server or checks signatures.

pub mod errors;
pub mod jwt;
pub mod types;

pub use errors::MalformedTokenError;
pub use jwt::{decode, encode_unsigned, TokenClaims};
pub use types::{StoredSession, UnknownUserType, UserType};
