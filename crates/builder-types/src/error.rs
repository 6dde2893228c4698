//! Error types for the bundle model

use thiserror::Error;

/// Result type alias for bundle-model operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors that can occur while working with bundles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    /// Refund resolution reached a bundle with no body elements and no
    /// explicit refund configuration.
    #[error("incorrect refund config")]
    IncorrectRefundConfig,

    /// Refund resolution recursed past the nesting limit. Bundles can be
    /// deserialized from untrusted input, so recursion must be bounded.
    #[error("refund resolution exceeded the bundle nesting limit")]
    RefundDepthExceeded,

    /// The sender of a transaction could not be recovered.
    #[error("sender recovery failed: {0}")]
    SenderRecovery(String),
}
