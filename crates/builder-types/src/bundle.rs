//! Atomic transaction bundles.
//!
//! A bundle is an ordered body of elements that the execution backend must
//! include all-or-nothing. Elements are either a single transaction or a
//! nested bundle, and each carries a "may revert" flag consumed during block
//! assembly. Bundles are immutable after construction; the content hash is
//! computed lazily and cached permanently, which is sound only because
//! nothing mutates the body afterwards.

use crate::transaction::Transaction;
use crate::Address;
use primitive_types::H256;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::sync::OnceLock;

/// Block-number validity window for a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BundleInclusion {
    /// Minimum block number the bundle may land in.
    pub block_number: u64,

    /// Maximum block number the bundle may land in (0 = no upper bound).
    pub max_block_number: u64,
}

/// One element of a bundle body: exactly a transaction or a nested bundle.
///
/// The two-case enum makes the "exactly one of" invariant structural; there
/// is no way to construct an element holding both or neither.
#[derive(Debug, Clone)]
pub enum BundleItem {
    /// A single transaction.
    Transaction(Transaction),

    /// A nested bundle, itself atomic.
    Bundle(Box<Bundle>),
}

impl BundleItem {
    /// Content hash of the element: the transaction hash, or the nested
    /// bundle's own hash.
    pub fn hash(&self) -> H256 {
        match self {
            Self::Transaction(tx) => tx.hash(),
            Self::Bundle(bundle) => bundle.hash(),
        }
    }
}

/// A bundle body element plus its revert policy.
#[derive(Debug, Clone)]
pub struct BundleBody {
    /// The transaction or nested bundle.
    pub item: BundleItem,

    /// Whether the element may revert without invalidating the bundle.
    pub can_revert: bool,
}

impl BundleBody {
    /// Body element wrapping a transaction that must not revert.
    pub fn transaction(tx: Transaction) -> Self {
        Self { item: BundleItem::Transaction(tx), can_revert: false }
    }

    /// Body element wrapping a nested bundle that must not revert.
    pub fn bundle(bundle: Bundle) -> Self {
        Self { item: BundleItem::Bundle(Box::new(bundle)), can_revert: false }
    }
}

/// Refund constraints attached to a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleValidity {
    /// Internal distribution: which body elements receive what share.
    pub refund: Vec<RefundConstraint>,

    /// Resolved external payees, once computed (or supplied explicitly).
    pub refund_config: Vec<RefundConfig>,
}

/// Share of proceeds granted to one bundle body element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundConstraint {
    /// Index into the bundle body.
    pub body_idx: usize,

    /// Share in percent.
    pub percent: u64,
}

/// Share of proceeds paid to an external address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundConfig {
    /// Payee address.
    pub address: Address,

    /// Share in percent.
    pub percent: u64,
}

/// An atomic, possibly-nested transaction bundle with refund support.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    /// Validity window.
    pub inclusion: BundleInclusion,

    /// Ordered body elements.
    pub body: Vec<BundleBody>,

    /// Refund constraints and resolved configuration.
    pub validity: BundleValidity,

    hash: OnceLock<H256>,
}

impl Bundle {
    /// Construct a bundle. The body is fixed from here on; the hash cache
    /// relies on it.
    pub fn new(inclusion: BundleInclusion, body: Vec<BundleBody>, validity: BundleValidity) -> Self {
        Self { inclusion, body, validity, hash: OnceLock::new() }
    }

    /// Content-addressed identifier of the bundle.
    ///
    /// A single-element body reduces to that element's own hash, with no
    /// extra domain separation. Two or more elements hash to keccak-256 over
    /// the concatenation of element hashes in body order; an empty body
    /// yields the keccak-256 empty-input digest. Computed once, cached for
    /// the lifetime of the bundle.
    pub fn hash(&self) -> H256 {
        *self.hash.get_or_init(|| self.compute_hash())
    }

    fn compute_hash(&self) -> H256 {
        if let [only] = self.body.as_slice() {
            return only.item.hash();
        }

        let mut hasher = Keccak256::new();
        for element in &self.body {
            hasher.update(element.item.hash().as_bytes());
        }
        H256::from_slice(&hasher.finalize())
    }

    /// Direct transaction elements of the body, in order. Nested bundles are
    /// not flattened.
    pub fn transactions(&self) -> Vec<&Transaction> {
        self.body
            .iter()
            .filter_map(|element| match &element.item {
                BundleItem::Transaction(tx) => Some(tx),
                BundleItem::Bundle(_) => None,
            })
            .collect()
    }

    /// Refund share of the first resolved payee, if any.
    pub fn refund_percent(&self) -> Option<u64> {
        self.validity.refund_config.first().map(|c| c.percent)
    }
}
