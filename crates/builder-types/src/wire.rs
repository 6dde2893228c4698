//! Flat bundle wire format.
//!
//! Bundles cross the RPC boundary in a flat shape: a list of encoded
//! transactions plus an inclusion window, revert allowances, and an optional
//! refund share. The recursive [`Bundle`](crate::Bundle) model is an
//! engine-side concern; this type is what the build-from-bundles operation
//! accepts and what external callers submit.

use crate::transaction::Transaction;
use primitive_types::{H256, U256};
use serde::{Deserialize, Serialize};

/// A flat atomic bundle as submitted over the wire.
///
/// Field encoding matches the established bundle JSON: big-number fields as
/// `0x`-hex, transactions as `0x`-hex binary encodings, optional fields
/// omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBundle {
    /// Exact block number the bundle targets, if constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<U256>,

    /// Last block number the bundle remains valid for, if constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_block: Option<U256>,

    /// Binary-encoded transactions, executed atomically in order.
    pub txs: Vec<Transaction>,

    /// Hashes of transactions within the bundle that may revert.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reverting_hashes: Vec<H256>,

    /// Refund share in percent owed to the bundle originator.
    #[serde(default, rename = "percent", skip_serializing_if = "Option::is_none")]
    pub refund_percent: Option<u64>,
}
