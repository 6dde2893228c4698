//! Build arguments and the execution-payload envelope.

use crate::attributes::{SlotAttributes, Withdrawal};
use crate::hexutil;
use crate::transaction::Transaction;
use crate::Address;
use primitive_types::{H256, U256};
use serde::{Deserialize, Serialize};

/// Final arguments for one block-construction call.
///
/// Everything except `fill_pending` is authoritative slot state: callers may
/// submit their own values over the API surface, but the coordinator
/// replaces them from the current [`SlotAttributes`] before the backend is
/// invoked. Building against anything other than the head, timestamp, and
/// fee recipient the consensus layer committed to would produce an
/// unattestable block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildBlockArgs {
    /// Slot the block is proposed for.
    pub slot: u64,

    /// Hash of the parent (head) block.
    pub parent: H256,

    /// Block timestamp.
    pub timestamp: u64,

    /// Fee recipient committed by the consensus layer.
    pub fee_recipient: Address,

    /// Block gas limit.
    pub gas_limit: u64,

    /// Randomness seed.
    pub random: H256,

    /// Withdrawals to process.
    pub withdrawals: Vec<Withdrawal>,

    /// Parent beacon block root (zero pre-Cancun).
    pub beacon_root: H256,

    /// Caller policy: top the block up from the pending pool after the
    /// supplied transactions.
    pub fill_pending: bool,

    /// Consensus-supplied transactions that must open the block (e.g.
    /// deposits).
    pub transactions: Vec<Transaction>,
}

impl BuildBlockArgs {
    /// Derive build arguments from the current slot attributes, carrying
    /// only the caller's `fill_pending` flag.
    pub fn from_attributes(attrs: &SlotAttributes, fill_pending: bool) -> Self {
        Self {
            slot: attrs.slot,
            parent: attrs.head_hash,
            timestamp: attrs.timestamp,
            fee_recipient: attrs.suggested_fee_recipient,
            gas_limit: attrs.gas_limit,
            random: attrs.prev_randao,
            withdrawals: attrs.withdrawals.clone(),
            beacon_root: attrs.parent_beacon_block_root.unwrap_or_default(),
            fill_pending,
            transactions: attrs.transactions.clone(),
        }
    }
}

/// A sealed block as returned by the execution backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Block number.
    pub number: u64,

    /// Block hash.
    pub hash: H256,

    /// Parent block hash.
    pub parent_hash: H256,

    /// Block timestamp.
    pub timestamp: u64,

    /// Fee recipient the block was built for.
    pub fee_recipient: Address,

    /// Gas limit.
    pub gas_limit: u64,

    /// Gas used by the included transactions.
    pub gas_used: u64,

    /// Randomness seed the block was built with.
    pub prev_randao: H256,

    /// Included transactions in execution order.
    pub transactions: Vec<Transaction>,

    /// Processed withdrawals.
    pub withdrawals: Vec<Withdrawal>,
}

/// Wire-level representation of a constructed block (engine-API encoding).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayload {
    /// Parent block hash.
    pub parent_hash: H256,

    /// Fee recipient.
    pub fee_recipient: Address,

    /// Randomness seed.
    pub prev_randao: H256,

    /// Block number, hex-quantity encoded.
    #[serde(with = "hexutil::quantity")]
    pub block_number: u64,

    /// Gas limit, hex-quantity encoded.
    #[serde(with = "hexutil::quantity")]
    pub gas_limit: u64,

    /// Gas used, hex-quantity encoded.
    #[serde(with = "hexutil::quantity")]
    pub gas_used: u64,

    /// Timestamp, hex-quantity encoded.
    #[serde(with = "hexutil::quantity")]
    pub timestamp: u64,

    /// Hash of this block.
    pub block_hash: H256,

    /// Included transactions.
    pub transactions: Vec<Transaction>,

    /// Processed withdrawals.
    pub withdrawals: Vec<Withdrawal>,
}

/// The envelope returned to the consensus layer: the payload plus the
/// proceeds the builder collected constructing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayloadEnvelope {
    /// The constructed block.
    pub execution_payload: ExecutionPayload,

    /// Builder proceeds in wei.
    pub block_value: U256,
}

impl ExecutionPayloadEnvelope {
    /// Wrap a sealed block and its proceeds into the wire envelope.
    pub fn from_block(block: Block, profit: U256) -> Self {
        Self {
            execution_payload: ExecutionPayload {
                parent_hash: block.parent_hash,
                fee_recipient: block.fee_recipient,
                prev_randao: block.prev_randao,
                block_number: block.number,
                gas_limit: block.gas_limit,
                gas_used: block.gas_used,
                timestamp: block.timestamp,
                block_hash: block.hash,
                transactions: block.transactions,
                withdrawals: block.withdrawals,
            },
            block_value: profit,
        }
    }
}
