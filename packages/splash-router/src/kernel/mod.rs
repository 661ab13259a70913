//! Kernel module - platform collaborators and their test doubles.

pub mod clock;
pub mod memory_store;
pub mod test_dependencies;
pub mod traits;

pub use clock::{FixedClock, SystemClock};
pub use memory_store::InMemoryKeyValueStore;
pub use test_dependencies::{FailingKeyValueStore, SpyNavigator};
pub use traits::*;
