//! Port traits defining external boundaries.
//!
//! Generators never touch the system clock or a random number generator
//! directly. They go through these traits, whose implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod entropy;

pub use clock::Clock;
pub use entropy::{Entropy, UUID_BYTES};
