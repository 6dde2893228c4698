//! Block-build coordinator service.

use crate::config::BuilderConfig;
use crate::error::{BuilderApiError, Result};
use crate::metrics::Metrics;
use crate::ports::{BlockBuilderApi, BlockEngine, ChainReader};
use crate::store::{SlotAdmission, SlotAttributeStore};
use async_trait::async_trait;
use builder_beacon::{BeaconEventClient, EventStreamConnector, HttpEventStreamConnector};
use builder_types::{
    BuildBlockArgs, ExecutionPayloadEnvelope, RpcBundle, SlotAttributes, Transaction,
};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Coordinates the slot pipeline and serves build requests.
///
/// One background task runs the event client's reconnect loop, one consumes
/// its output and drives the [`SlotAttributeStore`]; build requests run on
/// caller tasks and may execute concurrently with both. Build operations
/// take their arguments from the current slot attributes, honoring only the
/// caller's fill-pending flag.
pub struct BlockBuildCoordinator {
    config: BuilderConfig,
    store: Arc<SlotAttributeStore>,
    engine: Arc<dyn BlockEngine>,
    metrics: Arc<Metrics>,
    shutdown: watch::Sender<bool>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl BlockBuildCoordinator {
    /// Create a coordinator over the given chain lookup and execution
    /// backend. Call [`start`](Self::start) to bring up the pipeline.
    pub fn new(
        config: BuilderConfig,
        chain: Arc<dyn ChainReader>,
        engine: Arc<dyn BlockEngine>,
    ) -> Self {
        info!(
            beacon_endpoint = %config.beacon_endpoint,
            "[builder-api] initializing block-build coordinator"
        );

        let (shutdown, _) = watch::channel(false);
        Self {
            config,
            store: Arc::new(SlotAttributeStore::new(chain)),
            engine,
            metrics: Arc::new(Metrics::new()),
            shutdown,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// The slot attribute store driven by this coordinator.
    pub fn store(&self) -> &Arc<SlotAttributeStore> {
        &self.store
    }

    /// Pipeline and build metrics.
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Start the pipeline against the configured consensus endpoint. Does
    /// nothing when the sidecar is disabled.
    pub fn start(&self) {
        if !self.config.enabled {
            info!("[builder-api] sidecar disabled, not subscribing");
            return;
        }
        self.start_with_connector(HttpEventStreamConnector::new(&self.config.beacon_endpoint));
    }

    /// Start the pipeline over an arbitrary event-stream connector.
    ///
    /// Spawns the event-client task and the dispatch task. Tests inject
    /// scripted connectors here to run the full pipeline without network
    /// I/O.
    pub fn start_with_connector<C>(&self, connector: C)
    where
        C: EventStreamConnector + 'static,
    {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(1));

        let client = BeaconEventClient::new(connector);
        let shutdown = self.shutdown.subscribe();
        let client_task = tokio::spawn(async move { client.subscribe(tx, shutdown).await });

        let store = Arc::clone(&self.store);
        let metrics = Arc::clone(&self.metrics);
        let dispatch_task = tokio::spawn(dispatch_loop(store, rx, metrics));

        self.tasks.lock().unwrap().extend([client_task, dispatch_task]);
    }

    /// Signal shutdown: the event client stops, its channel closes, and the
    /// dispatch loop drains and exits.
    pub fn stop(&self) {
        info!("[builder-api] stopping block-build coordinator");
        let _ = self.shutdown.send(true);
    }

    /// Wait for the background tasks spawned by `start` to finish.
    pub async fn join(&self) {
        let tasks: Vec<_> = self.tasks.lock().unwrap().drain(..).collect();
        for task in tasks {
            let _ = task.await;
        }
    }

    fn authoritative_args(&self, fill_pending: bool) -> Result<BuildBlockArgs> {
        let attrs = self.store.current().ok_or(BuilderApiError::NoSlotAttributes)?;
        Ok(BuildBlockArgs::from_attributes(&attrs, fill_pending))
    }
}

#[async_trait]
impl BlockBuilderApi for BlockBuildCoordinator {
    async fn build_block_from_txs(
        &self,
        args: BuildBlockArgs,
        txs: Vec<Transaction>,
    ) -> Result<ExecutionPayloadEnvelope> {
        let final_args = self.authoritative_args(args.fill_pending)?;
        info!(
            slot = final_args.slot,
            parent = ?final_args.parent,
            tx_count = txs.len(),
            "[builder-api] building block from transactions"
        );

        match self.engine.build_block_from_txs(final_args, txs).await {
            Ok((block, profit)) => {
                self.metrics.record_block_built();
                Ok(ExecutionPayloadEnvelope::from_block(block, profit))
            }
            Err(e) => {
                self.metrics.record_build_failure();
                Err(e)
            }
        }
    }

    async fn build_block_from_bundles(
        &self,
        args: BuildBlockArgs,
        bundles: Vec<RpcBundle>,
    ) -> Result<ExecutionPayloadEnvelope> {
        let final_args = self.authoritative_args(args.fill_pending)?;
        info!(
            slot = final_args.slot,
            parent = ?final_args.parent,
            bundle_count = bundles.len(),
            "[builder-api] building block from bundles"
        );

        match self.engine.build_block_from_bundles(final_args, bundles).await {
            Ok((block, profit)) => {
                self.metrics.record_block_built();
                Ok(ExecutionPayloadEnvelope::from_block(block, profit))
            }
            Err(e) => {
                self.metrics.record_build_failure();
                Err(e)
            }
        }
    }
}

/// Consume the event-client channel and drive the store.
///
/// Tracks the highest slot seen and forwards only strictly increasing
/// slots; the store repeats the same check under its lock, so out-of-order
/// delivery cannot regress the current record through either path. Exits
/// when the channel closes.
async fn dispatch_loop(
    store: Arc<SlotAttributeStore>,
    mut events: mpsc::Receiver<SlotAttributes>,
    metrics: Arc<Metrics>,
) {
    let mut highest_slot = 0u64;

    while let Some(attrs) = events.recv().await {
        metrics.record_attributes_received();
        info!(
            slot = attrs.slot,
            head_hash = ?attrs.head_hash,
            "[builder-api] received payload attributes"
        );

        if attrs.slot <= highest_slot {
            metrics.record_attributes_stale();
            continue;
        }
        highest_slot = attrs.slot;

        let (slot, head_hash) = (attrs.slot, attrs.head_hash);
        match store.accept(attrs).await {
            Ok(SlotAdmission::Accepted) => metrics.record_attributes_accepted(),
            Ok(SlotAdmission::Stale) => metrics.record_attributes_stale(),
            Err(e) => {
                metrics.record_attributes_rejected();
                error!(
                    latest_slot = highest_slot,
                    processed_slot = slot,
                    head_hash = ?head_hash,
                    error = %e,
                    "[builder-api] failed to process slot attributes"
                );
            }
        }
    }

    debug!("[builder-api] attribute channel closed, dispatch loop ending");
}
