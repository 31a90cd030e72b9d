//! Live adapters backed by the system clock and real random number generators.

pub mod clock;
pub mod entropy;

pub use clock::LiveClock;
pub use entropy::LiveEntropy;
