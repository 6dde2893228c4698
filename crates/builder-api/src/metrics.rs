//! Metrics collection for the build-coordination pipeline

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the slot pipeline and build operations
#[derive(Debug, Default)]
pub struct Metrics {
    /// Attribute records received from the event client
    pub attributes_received: AtomicU64,

    /// Records accepted as the new current slot state
    pub attributes_accepted: AtomicU64,

    /// Records discarded as stale or duplicate
    pub attributes_stale: AtomicU64,

    /// Records rejected (e.g. unknown parent block)
    pub attributes_rejected: AtomicU64,

    /// Blocks successfully built
    pub blocks_built: AtomicU64,

    /// Build requests that failed
    pub build_failures: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attribute record arriving from the event client
    pub fn record_attributes_received(&self) {
        self.attributes_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an accepted attribute update
    pub fn record_attributes_accepted(&self) {
        self.attributes_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stale or duplicate record
    pub fn record_attributes_stale(&self) {
        self.attributes_stale.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected attribute update
    pub fn record_attributes_rejected(&self) {
        self.attributes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful build
    pub fn record_block_built(&self) {
        self.blocks_built.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed build
    pub fn record_build_failure(&self) {
        self.build_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get received attribute records
    pub fn get_attributes_received(&self) -> u64 {
        self.attributes_received.load(Ordering::Relaxed)
    }

    /// Get accepted attribute updates
    pub fn get_attributes_accepted(&self) -> u64 {
        self.attributes_accepted.load(Ordering::Relaxed)
    }

    /// Get rejected attribute updates
    pub fn get_attributes_rejected(&self) -> u64 {
        self.attributes_rejected.load(Ordering::Relaxed)
    }

    /// Get stale records seen
    pub fn get_attributes_stale(&self) -> u64 {
        self.attributes_stale.load(Ordering::Relaxed)
    }

    /// Get blocks built
    pub fn get_blocks_built(&self) -> u64 {
        self.blocks_built.load(Ordering::Relaxed)
    }

    /// Get failed builds
    pub fn get_build_failures(&self) -> u64 {
        self.build_failures.load(Ordering::Relaxed)
    }
}
