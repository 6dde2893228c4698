//! Refund-policy resolution.
//!
//! Determines who gets paid back a share of builder proceeds for a bundle
//! body element. The rules, in order:
//!
//! 1. A single transaction refunds its sender at 100%.
//! 2. A nested bundle with an explicit refund configuration uses it as-is.
//! 3. A nested bundle without one defers to its **first** body element
//!    (fixed tie-break; siblings are never consulted).
//! 4. An empty bundle with no configuration is a policy error.
//!
//! Bundles arrive from untrusted wire input, so the recursion is bounded by
//! [`MAX_REFUND_DEPTH`].

use crate::bundle::{BundleBody, BundleItem, RefundConfig};
use crate::error::{BundleError, Result};
use crate::transaction::Transaction;
use crate::{Address, FULL_REFUND_PERCENT};

/// Maximum bundle nesting depth refund resolution will follow.
pub const MAX_REFUND_DEPTH: usize = 32;

/// Port: recover the sender address of an encoded transaction.
///
/// Implemented outside this crate (signature recovery is an execution-layer
/// capability); tests supply fakes.
pub trait SenderRecovery: Send + Sync {
    /// Recover the sender of `tx`.
    fn sender_of(&self, tx: &Transaction) -> Result<Address>;
}

/// Resolve the refund configuration for one bundle body element.
pub fn resolve_refund_config(
    body: &BundleBody,
    recovery: &dyn SenderRecovery,
) -> Result<Vec<RefundConfig>> {
    resolve_at_depth(body, recovery, 0)
}

fn resolve_at_depth(
    body: &BundleBody,
    recovery: &dyn SenderRecovery,
    depth: usize,
) -> Result<Vec<RefundConfig>> {
    if depth >= MAX_REFUND_DEPTH {
        return Err(BundleError::RefundDepthExceeded);
    }

    match &body.item {
        BundleItem::Transaction(tx) => {
            let address = recovery.sender_of(tx)?;
            Ok(vec![RefundConfig { address, percent: FULL_REFUND_PERCENT }])
        }
        BundleItem::Bundle(bundle) => {
            if !bundle.validity.refund_config.is_empty() {
                return Ok(bundle.validity.refund_config.clone());
            }
            match bundle.body.first() {
                Some(first) => resolve_at_depth(first, recovery, depth + 1),
                None => Err(BundleError::IncorrectRefundConfig),
            }
        }
    }
}
