//! Slot attributes delivered by the consensus-layer event stream.

use crate::hexutil;
use crate::transaction::Transaction;
use crate::Address;
use primitive_types::H256;
use serde::{Deserialize, Serialize};

/// The consensus-layer parameters a block for one slot must be built against.
///
/// One instance is produced per `payload_attributes` event. At most one
/// instance is "current" at a time, and it is only ever superseded by an
/// instance with a strictly greater slot; instances are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAttributes {
    /// Block timestamp, hex-quantity encoded on the wire.
    #[serde(with = "hexutil::quantity")]
    pub timestamp: u64,

    /// Randomness seed for the block.
    pub prev_randao: H256,

    /// Fee recipient the consensus layer committed to for this slot.
    #[serde(default)]
    pub suggested_fee_recipient: Address,

    /// Slot number, the monotonic admission key.
    pub slot: u64,

    /// Hash of the head block this slot builds on.
    #[serde(rename = "blockHash")]
    pub head_hash: H256,

    /// Withdrawals to process in this block.
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,

    /// Root of the parent beacon block, absent pre-Cancun.
    #[serde(default)]
    pub parent_beacon_block_root: Option<H256>,

    /// Transactions the consensus layer requires in the block (e.g. deposit
    /// transactions), in canonical binary encoding.
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Gas limit for the block.
    #[serde(default)]
    pub gas_limit: u64,
}

/// A validator withdrawal, engine-API encoded (hex quantities).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Monotonic withdrawal index.
    #[serde(with = "hexutil::quantity")]
    pub index: u64,

    /// Index of the withdrawing validator.
    #[serde(with = "hexutil::quantity")]
    pub validator_index: u64,

    /// Recipient address.
    pub address: Address,

    /// Amount in Gwei.
    #[serde(with = "hexutil::quantity")]
    pub amount: u64,
}
