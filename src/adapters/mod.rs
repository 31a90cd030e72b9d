//! Adapter implementations of the port traits.

pub mod fixed;
pub mod live;
pub mod recording;
pub mod replaying;
