//! Error types for the block-build coordination layer

use builder_types::{BundleError, H256};
use thiserror::Error;

/// Result type alias for builder API operations
pub type Result<T> = std::result::Result<T, BuilderApiError>;

/// Errors surfaced at the build-request boundary.
///
/// Transient pipeline conditions (stale slots, malformed events, failed
/// subscriptions) are absorbed and logged where they occur; everything here
/// affects correctness and always propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderApiError {
    /// A slot-attribute update referenced a head block not known locally.
    /// The update is rejected and the prior record retained.
    #[error("could not find parent block with hash {head_hash:?}")]
    UnknownParentBlock {
        /// Head hash the rejected attributes pointed at.
        head_hash: H256,
    },

    /// A build request arrived before any slot attributes were accepted;
    /// there is no valid head to build against.
    #[error("no slot attributes received yet")]
    NoSlotAttributes,

    /// The chain-state lookup itself failed (transport, not a miss).
    #[error("chain lookup failed: {0}")]
    Chain(String),

    /// The execution backend reported a build failure. Carried verbatim,
    /// never retried at this layer.
    #[error("engine build failed: {0}")]
    Engine(String),

    /// A bundle-model error (refund resolution) aborted the build.
    #[error(transparent)]
    Bundle(#[from] BundleError),
}
