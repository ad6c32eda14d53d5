pub mod args;
pub mod bridge;

pub use bridge::{AdbWrapper, BridgeError, BridgeResult, Device, DeviceScan, Platform, Transport};
