//! Shared fakes for the external collaborators of the builder core.

use async_trait::async_trait;
use builder_api::{BlockEngine, BuilderApiError, ChainReader, Result};
use builder_beacon::{BeaconClientError, ByteStream, EventStreamConnector};
use builder_types::{
    Address, Block, BuildBlockArgs, BundleError, RpcBundle, SenderRecovery, SlotAttributes,
    Transaction, H256, U256,
};
use bytes::Bytes;
use futures_util::{stream, StreamExt};
use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A hash with random contents, for parent/head fixtures.
pub fn random_hash() -> H256 {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    H256(bytes)
}

/// Slot attributes with distinct, recognizable field values.
pub fn sample_attributes(slot: u64, head: H256) -> SlotAttributes {
    SlotAttributes {
        slot,
        head_hash: head,
        timestamp: 1_700_000_000 + slot * 12,
        prev_randao: H256::repeat_byte(0x0d),
        suggested_fee_recipient: Address::repeat_byte(0xfe),
        gas_limit: 30_000_000,
        transactions: vec![Transaction::from_raw(vec![0x7e, slot as u8])],
        ..Default::default()
    }
}

/// Encode slot attributes as one SSE `payload_attributes` frame.
pub fn attributes_event_bytes(attrs: &SlotAttributes) -> Bytes {
    let data = serde_json::to_string(attrs).expect("attributes serialize");
    Bytes::from(format!("event: payload_attributes\ndata: {data}\n\n"))
}

/// Chain-state lookup over a mutable set of known block hashes.
pub struct FakeChain {
    blocks: Mutex<HashSet<H256>>,
}

impl FakeChain {
    /// Chain knowing exactly the given hashes.
    pub fn with_blocks(hashes: &[H256]) -> Arc<Self> {
        Arc::new(Self { blocks: Mutex::new(hashes.iter().copied().collect()) })
    }

    /// Make another block hash known.
    pub fn add_block(&self, hash: H256) {
        self.blocks.lock().unwrap().insert(hash);
    }
}

#[async_trait]
impl ChainReader for FakeChain {
    async fn block_by_hash(&self, hash: H256) -> Result<Option<Block>> {
        Ok(self
            .blocks
            .lock()
            .unwrap()
            .contains(&hash)
            .then(|| Block { hash, ..Default::default() }))
    }
}

/// Execution backend that records every build call.
#[derive(Default)]
pub struct CountingEngine {
    calls: Mutex<Vec<BuildBlockArgs>>,
    fail_with: Mutex<Option<BuilderApiError>>,
}

impl CountingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Engine whose next calls all fail with the given error.
    pub fn failing(error: BuilderApiError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(Some(error)),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_args(&self) -> Option<BuildBlockArgs> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn respond(&self, args: BuildBlockArgs) -> Result<(Block, U256)> {
        self.calls.lock().unwrap().push(args.clone());
        if let Some(error) = self.fail_with.lock().unwrap().clone() {
            return Err(error);
        }
        let block = Block {
            number: args.slot,
            parent_hash: args.parent,
            timestamp: args.timestamp,
            fee_recipient: args.fee_recipient,
            gas_limit: args.gas_limit,
            prev_randao: args.random,
            transactions: args.transactions,
            withdrawals: args.withdrawals,
            ..Default::default()
        };
        Ok((block, U256::from(1_000)))
    }
}

#[async_trait]
impl BlockEngine for CountingEngine {
    async fn build_block_from_txs(
        &self,
        args: BuildBlockArgs,
        _txs: Vec<Transaction>,
    ) -> Result<(Block, U256)> {
        self.respond(args)
    }

    async fn build_block_from_bundles(
        &self,
        args: BuildBlockArgs,
        _bundles: Vec<RpcBundle>,
    ) -> Result<(Block, U256)> {
        self.respond(args)
    }
}

/// One scripted outcome of a `connect` call.
pub enum ConnectOutcome {
    /// The subscription attempt fails.
    Fail(String),

    /// The subscription succeeds and yields these chunks, then ends.
    Stream(Vec<Bytes>),
}

/// Event-stream connector that replays a script, one entry per connect.
///
/// Once the script is exhausted, further connects return a stream that
/// never yields, keeping the client parked until shutdown.
pub struct ScriptedConnector {
    script: Mutex<Vec<ConnectOutcome>>,
    attempts: AtomicUsize,
}

impl ScriptedConnector {
    pub fn new(mut script: Vec<ConnectOutcome>) -> Self {
        script.reverse();
        Self { script: Mutex::new(script), attempts: AtomicUsize::new(0) }
    }

    /// Total `connect` calls observed.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventStreamConnector for ScriptedConnector {
    async fn connect(&self) -> builder_beacon::Result<ByteStream> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop() {
            Some(ConnectOutcome::Fail(message)) => Err(BeaconClientError::Subscription(message)),
            Some(ConnectOutcome::Stream(chunks)) => {
                Ok(stream::iter(chunks.into_iter().map(Ok)).boxed())
            }
            None => Ok(stream::pending::<builder_beacon::Result<Bytes>>().boxed()),
        }
    }
}

/// Sender recovery that attributes every transaction to one fixed address.
pub struct StaticSender(pub Address);

impl SenderRecovery for StaticSender {
    fn sender_of(&self, _tx: &Transaction) -> std::result::Result<Address, BundleError> {
        Ok(self.0)
    }
}
