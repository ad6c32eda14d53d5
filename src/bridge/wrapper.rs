use std::process::Command;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use super::error::{BridgeError, BridgeResult};
use super::types::{Device, DeviceScan, Platform, Transport};

/// Header line printed by `adb devices -l` before any device line.
const DEVICE_LIST_HEADER: &str = "List of devices attached";

/// Identifier prefix adb assigns to locally running emulator instances.
const EMULATOR_PREFIX: &str = "emulator-";

/// One device line: identifier, anything up to the `device` state, then the
/// space-separated `key:value` descriptor tokens.
static DEVICE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9A-Za-z-]+).*device (.*)$").expect("valid regex"));

/// Command-prefix builder and process-invocation entry point, optionally
/// bound to one device.
///
/// Every operation is an independent spawn-and-wait of the external adb
/// executable; nothing is held across calls. A single instance is
/// single-threaded-use state: callers wanting to drive several devices
/// concurrently run independent instances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdbWrapper {
    path: String,
    device_id: Option<String>,
    transport: Transport,
}

impl AdbWrapper {
    /// Wrapper addressing whichever single device adb resolves by default.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            device_id: None,
            transport: Transport::default(),
        }
    }

    /// Wrapper pre-bound to one device identifier.
    pub fn with_device(path: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            device_id: Some(device_id.into()),
            transport: Transport::default(),
        }
    }

    /// Advisory readiness check: true iff the executable path is non-empty.
    ///
    /// The path is not probed further; a missing or non-executable binary
    /// surfaces as an invocation error when a command is issued, not here.
    pub fn is_ready(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Set the transport type. Affects future [`setup`](Self::setup) calls
    /// only.
    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = transport;
    }

    /// Assemble the leading tokens shared by every command line.
    ///
    /// USB appends `-s <id>` when this wrapper is bound to a device or an
    /// override id is supplied (the bound id wins), TCP appends `-e`, and
    /// WIFI adds no flag.
    pub fn setup(&self, override_id: Option<&str>) -> String {
        let mut cmd = self.path.clone();
        match self.transport {
            Transport::Usb => {
                if let Some(id) = self.device_id.as_deref().or(override_id) {
                    cmd.push_str(" -s ");
                    cmd.push_str(id);
                }
            }
            Transport::Tcp => cmd.push_str(" -e"),
            Transport::Wifi => {}
        }
        cmd
    }

    /// Enumerate attached devices with `devices -l`.
    pub fn list_devices(&self) -> BridgeResult<Vec<Device>> {
        Ok(self.scan_devices()?.devices)
    }

    /// Enumerate attached devices, also reporting the raw lines the parser
    /// dropped.
    pub fn scan_devices(&self) -> BridgeResult<DeviceScan> {
        let output = self.run(&format!("{} devices -l", self.setup(None)))?;
        Ok(self.parse_devices(&output))
    }

    /// Parse raw `devices -l` output into [`Device`] records.
    ///
    /// Blank lines and the header are ignored; every other line must match
    /// the device pattern or it lands in [`DeviceScan::skipped`]. Input
    /// order is preserved. Each record owns a child wrapper bound to the
    /// parsed identifier, with transport switched to TCP for emulators.
    pub fn parse_devices(&self, output: &str) -> DeviceScan {
        let mut scan = DeviceScan::default();
        for line in output.lines() {
            let line = line.trim();
            if line.is_empty() || line == DEVICE_LIST_HEADER {
                continue;
            }
            let Some(caps) = DEVICE_LINE.captures(line) else {
                debug!("skipping unparsable device line: {line}");
                scan.skipped.push(line.to_string());
                continue;
            };
            let identifier = caps[1].to_string();
            let descriptors = parse_descriptors(&caps[2]);
            let is_emulated = identifier.starts_with(EMULATOR_PREFIX);
            let mut bridge = AdbWrapper::with_device(self.path.as_str(), identifier.as_str());
            if is_emulated {
                bridge.set_transport(Transport::Tcp);
            }
            scan.devices.push(Device {
                platform: Platform::Android,
                identifier,
                is_emulated,
                usb: descriptors.usb,
                product: descriptors.product,
                model: descriptors.model,
                bridge,
            });
        }
        scan
    }

    /// Download a remote file, like `adb pull`.
    ///
    /// With a device id the full prefix from [`setup`](Self::setup) is used;
    /// without one the bare executable path is used and adb resolves its
    /// default device (transport and bound id are bypassed).
    pub fn pull(
        &self,
        remote_path: &str,
        local_path: &str,
        device_id: Option<&str>,
    ) -> BridgeResult<String> {
        self.run(&self.pull_command(remote_path, local_path, device_id))
    }

    /// Upload a local file, like `adb push`. Same prefix rule as
    /// [`pull`](Self::pull).
    pub fn push(
        &self,
        local_path: &str,
        remote_path: &str,
        device_id: Option<&str>,
    ) -> BridgeResult<String> {
        self.run(&self.push_command(local_path, remote_path, device_id))
    }

    /// Run a command on the device, like `adb shell`.
    pub fn shell(&self, command: &str, device_id: Option<&str>) -> BridgeResult<String> {
        self.run(&self.shell_command(command, device_id))
    }

    /// Run a command on the device through `su -c`.
    ///
    /// The command is pasted between double quotes verbatim; embedded
    /// quotes are NOT escaped and can break out of the assembled command
    /// line. Callers own quoting safety.
    pub fn privileged_shell(&self, command: &str, device_id: Option<&str>) -> BridgeResult<String> {
        self.run(&self.privileged_shell_command(command, device_id))
    }

    fn pull_command(&self, remote_path: &str, local_path: &str, device_id: Option<&str>) -> String {
        format!("{} pull {remote_path} {local_path}", self.prefix(device_id))
    }

    fn push_command(&self, local_path: &str, remote_path: &str, device_id: Option<&str>) -> String {
        format!("{} push {local_path} {remote_path}", self.prefix(device_id))
    }

    fn shell_command(&self, command: &str, device_id: Option<&str>) -> String {
        format!("{} shell {command}", self.prefix(device_id))
    }

    fn privileged_shell_command(&self, command: &str, device_id: Option<&str>) -> String {
        format!("{} shell su -c \"{command}\"", self.prefix(device_id))
    }

    // Dual-prefix rule shared by pull/push/shell: an explicit id goes
    // through setup(), no id means the bare executable path.
    fn prefix(&self, device_id: Option<&str>) -> String {
        match device_id {
            Some(id) => self.setup(Some(id)),
            None => self.path.clone(),
        }
    }

    // Run one assembled command line through the shell, capturing stdout.
    // stderr only surfaces in the failure path. No timeout, no retry.
    fn run(&self, command_line: &str) -> BridgeResult<String> {
        debug!("exec: {command_line}");
        let output = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .output()
            .map_err(|source| BridgeError::Spawn {
                command: command_line.to_string(),
                source,
            })?;
        if !output.status.success() {
            return Err(BridgeError::CommandFailed {
                command: command_line.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

struct Descriptors {
    usb: String,
    product: String,
    model: String,
}

/// Split the trailing descriptor tokens into the usb/product/model fields.
///
/// Tokens are `key:value` pairs and are looked up by key; the historical
/// positional order (0 usb, 1 product, 2 model) remains as a fallback for
/// tokens without a recognized key. Values are everything after the first
/// `:`. Missing descriptors stay empty.
fn parse_descriptors(raw: &str) -> Descriptors {
    let mut out = Descriptors {
        usb: String::new(),
        product: String::new(),
        model: String::new(),
    };
    for (position, token) in raw.split_whitespace().enumerate() {
        let (key, value) = match token.split_once(':') {
            Some((key, value)) => (Some(key), value),
            None => (None, token),
        };
        match key {
            Some("usb") => out.usb = value.to_string(),
            Some("product") => out.product = value.to_string(),
            Some("model") => out.model = value.to_string(),
            _ => match position {
                0 if out.usb.is_empty() => out.usb = value.to_string(),
                1 if out.product.is_empty() => out.product = value.to_string(),
                2 if out.model.is_empty() => out.model = value.to_string(),
                _ => {}
            },
        }
    }
    out
}
