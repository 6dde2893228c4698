//! Inbound ports (driving side - API)

use crate::error::Result;
use async_trait::async_trait;
use builder_types::{BuildBlockArgs, ExecutionPayloadEnvelope, RpcBundle, Transaction};

/// Port: the build-request surface exposed to the host runtime.
///
/// The transport that carries these requests (RPC framework, method
/// dispatch) lives outside this crate; it adapts onto this trait. Of the
/// caller-supplied `args` only the fill-pending flag is honored — all
/// consensus-committed fields are overridden from the current slot
/// attributes before the backend is invoked.
#[async_trait]
pub trait BlockBuilderApi: Send + Sync {
    /// Build a block from a flat transaction list and wrap it in the
    /// execution-payload envelope.
    async fn build_block_from_txs(
        &self,
        args: BuildBlockArgs,
        txs: Vec<Transaction>,
    ) -> Result<ExecutionPayloadEnvelope>;

    /// Build a block from a list of atomic bundles and wrap it in the
    /// execution-payload envelope.
    async fn build_block_from_bundles(
        &self,
        args: BuildBlockArgs,
        bundles: Vec<RpcBundle>,
    ) -> Result<ExecutionPayloadEnvelope>;
}
