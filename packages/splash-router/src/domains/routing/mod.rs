//! Routing domain - picks the screen shown after the splash screen

pub mod decision;
pub mod router;

pub use decision::RoutingDecision;
pub use router::route;
