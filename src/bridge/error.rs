use thiserror::Error;

/// A specialized `Result` type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// The error type for all bridge operations.
///
/// Listing lines that fail the device pattern are not errors: they are
/// dropped from the result and reported through
/// [`DeviceScan::skipped`](super::DeviceScan) instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },
}
