//! GUI frame lifecycle

pub mod bridge;

pub use bridge::{BridgeError, BridgeState, FrameBridge};
