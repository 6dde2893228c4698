//! Error types for the beacon event client

use thiserror::Error;

/// Result type alias for beacon client operations
pub type Result<T> = std::result::Result<T, BeaconClientError>;

/// Errors that can occur while consuming the event stream.
///
/// All of these are transient by design: subscription and stream failures
/// are retried indefinitely, malformed events are dropped. None of them
/// terminates the client.
#[derive(Debug, Error)]
pub enum BeaconClientError {
    /// Connecting or subscribing to the event source failed.
    #[error("subscription failed: {0}")]
    Subscription(String),

    /// The established event stream produced a transport error.
    #[error("event stream error: {0}")]
    Stream(String),

    /// An event payload did not parse as slot attributes.
    #[error("malformed payload_attributes event: {0}")]
    MalformedEvent(String),
}
