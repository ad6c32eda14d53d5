// Core bridge types
use serde::Serialize;

use super::wrapper::AdbWrapper;

/// Operating-system family of a discovered device.
///
/// The listing parser only ever assigns `Android` today; `Linux` and
/// `Tizen` are reserved for bridges this crate does not yet drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Android,
    Linux,
    Tizen,
}

/// How the bridge reaches a device. Affects command-prefix construction
/// only, never an already-assembled command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Transport {
    /// Direct cable, addressed with `-s <id>`.
    #[default]
    Usb,
    /// Network transport, selected with `-e` (typically emulator loopback).
    Tcp,
    /// Reserved; currently adds no flag to the prefix.
    Wifi,
}

/// One device reported by `adb devices -l`.
///
/// Produced only by [`AdbWrapper::parse_devices`]; the owned `bridge` is
/// always bound to `identifier`, with transport `Tcp` for emulators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub platform: Platform,
    pub identifier: String,
    pub is_emulated: bool,
    pub usb: String,
    pub product: String,
    pub model: String,
    pub bridge: AdbWrapper,
}

/// Result of one enumeration pass: parsed devices plus the raw lines the
/// parser dropped. `skipped` exists for diagnostics; callers that only want
/// devices use [`AdbWrapper::list_devices`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceScan {
    pub devices: Vec<Device>,
    pub skipped: Vec<String>,
}
