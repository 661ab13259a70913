//! Splash flow - what runs behind the loading indicator at app launch
//!
//! Flow:
//!   delay → read stored session → route → (mark first launch) → navigator.replace
//!
//! Storage failures never surface to the user; they route to login.

pub mod errors;
pub mod flow;

pub use errors::SplashError;
pub use flow::SplashFlow;
