// Bridge module - command construction and output parsing over an external
// adb executable. Enumeration classifies each discovered device and hands it
// a child wrapper pre-bound to its identifier.

pub mod error;
pub mod types;
pub mod wrapper;

#[cfg(test)]
mod tests;

// Re-export the main types for easy access
pub use error::{BridgeError, BridgeResult};
pub use types::{Device, DeviceScan, Platform, Transport};
pub use wrapper::AdbWrapper;
