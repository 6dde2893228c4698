//! # Builder Types - Core Domain Entities
//!
//! Leaf crate shared by every builder subsystem. Defines the data model for
//! block construction:
//!
//! - [`SlotAttributes`]: the consensus-layer parameters a block for a given
//!   slot must be built against, as delivered by the `payload_attributes`
//!   event stream.
//! - [`Transaction`]: an opaque binary-encoded transaction with a
//!   content-addressed keccak-256 hash.
//! - [`Bundle`]: an atomic, possibly-nested group of transactions with a
//!   lazily computed content hash and a refund policy.
//! - [`BuildBlockArgs`] / [`ExecutionPayloadEnvelope`]: the arguments handed
//!   to the execution backend and the sealed-block envelope returned to the
//!   consensus layer.
//!
//! ## Critical Invariants
//!
//! 1. **Exactly one of tx-or-bundle**: a [`BundleBody`] element is a tagged
//!    union ([`BundleItem`]); a body element holding both or neither is
//!    unrepresentable.
//! 2. **Hash reduction**: a bundle with a single body element hashes to that
//!    element's own hash; with two or more elements, to keccak-256 over the
//!    concatenation of element hashes in body order.
//! 3. **Immutability**: bundles and slot attributes are never mutated after
//!    construction, which is what makes the cached bundle hash sound.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod build;
pub mod bundle;
pub mod hexutil;
pub mod refund;
pub mod transaction;
pub mod wire;

mod error;

pub use error::{BundleError, Result};

pub use attributes::{SlotAttributes, Withdrawal};
pub use build::{Block, BuildBlockArgs, ExecutionPayload, ExecutionPayloadEnvelope};
pub use bundle::{
    Bundle, BundleBody, BundleInclusion, BundleItem, BundleValidity, RefundConfig,
    RefundConstraint,
};
pub use refund::{resolve_refund_config, SenderRecovery, MAX_REFUND_DEPTH};
pub use transaction::Transaction;
pub use wire::RpcBundle;

// Re-export the primitive types used across the builder API surface.
pub use primitive_types::{H256, U256};

/// A 20-byte execution-layer address.
pub type Address = primitive_types::H160;

/// Refund share (in percent) granted to a bundle originator when no explicit
/// configuration narrows it down.
pub const FULL_REFUND_PERCENT: u64 = 100;
