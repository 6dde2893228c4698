//! Configuration for the builder sidecar

use serde::Deserialize;

/// Default consensus-client endpoint the event subscription targets.
pub const DEFAULT_BEACON_ENDPOINT: &str = "http://localhost:8546";

/// Default capacity of the attribute channel between the event client and
/// the dispatch loop. Small on purpose: a full channel blocks the client
/// and pushes backpressure onto the upstream stream.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Runtime configuration for the block-build coordinator.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Whether the sidecar is active at all.
    pub enabled: bool,

    /// Base URL of the consensus client; events are read from
    /// `{beacon_endpoint}/events`.
    pub beacon_endpoint: String,

    /// Capacity of the attribute channel.
    pub channel_capacity: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            beacon_endpoint: DEFAULT_BEACON_ENDPOINT.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
