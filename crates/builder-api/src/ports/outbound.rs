//! Outbound ports (driven side - SPI)

use crate::error::Result;
use async_trait::async_trait;
use builder_types::{Block, BuildBlockArgs, RpcBundle, Transaction, H256, U256};

/// Port: look up blocks in local chain state.
///
/// Used to gate slot-attribute admission: attributes are only accepted once
/// their referenced head block exists locally.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Fetch a block by hash; `None` when not known locally.
    async fn block_by_hash(&self, hash: H256) -> Result<Option<Block>>;
}

/// Port: the execution backend that assembles and seals blocks.
///
/// Atomicity of bundles (all-or-nothing inclusion, revert handling per the
/// bundle's revert allowances) is this backend's responsibility. Build
/// calls carry no builder-side timeout; the caller's cancellation, if any,
/// is the only deadline.
#[async_trait]
pub trait BlockEngine: Send + Sync {
    /// Build a block from a flat transaction list. Returns the sealed block
    /// and the builder proceeds.
    async fn build_block_from_txs(
        &self,
        args: BuildBlockArgs,
        txs: Vec<Transaction>,
    ) -> Result<(Block, U256)>;

    /// Build a block from atomic bundles. Returns the sealed block and the
    /// builder proceeds.
    async fn build_block_from_bundles(
        &self,
        args: BuildBlockArgs,
        bundles: Vec<RpcBundle>,
    ) -> Result<(Block, U256)>;
}
