//! Reconnecting payload-attributes event client.

use crate::error::{BeaconClientError, Result};
use crate::sse::SseParser;
use async_trait::async_trait;
use builder_types::SlotAttributes;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Fixed delay between subscription attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// SSE event type carrying slot attributes.
pub const PAYLOAD_ATTRIBUTES_EVENT: &str = "payload_attributes";

/// Raw byte stream of an established event subscription.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Port: open one subscription to the event source.
///
/// The production implementation is [`HttpEventStreamConnector`]; tests
/// inject scripted connectors to exercise the retry loop without network
/// I/O.
#[async_trait]
pub trait EventStreamConnector: Send + Sync {
    /// Establish a subscription and return its byte stream.
    async fn connect(&self) -> Result<ByteStream>;
}

#[async_trait]
impl<C: EventStreamConnector + ?Sized> EventStreamConnector for Arc<C> {
    async fn connect(&self) -> Result<ByteStream> {
        (**self).connect().await
    }
}

/// Connects to `{endpoint}/events` over HTTP and streams the response body.
pub struct HttpEventStreamConnector {
    events_url: String,
    client: reqwest::Client,
}

impl HttpEventStreamConnector {
    /// Create a connector for the given consensus-client endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            events_url: format!("{}/events", endpoint.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    /// The URL this connector subscribes to.
    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

#[async_trait]
impl EventStreamConnector for HttpEventStreamConnector {
    async fn connect(&self) -> Result<ByteStream> {
        let response = self
            .client
            .get(&self.events_url)
            .header("Accept", "text/event-stream")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| BeaconClientError::Subscription(e.to_string()))?;

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| BeaconClientError::Stream(e.to_string())));
        Ok(stream.boxed())
    }
}

/// Why one subscription attempt ended without error.
enum SubscriptionEnd {
    /// The upstream closed the stream; reconnect.
    StreamEnded,

    /// The output channel was closed; the consumer is gone, stop entirely.
    OutputClosed,
}

/// Maintains the payload-attributes subscription for the process lifetime.
pub struct BeaconEventClient<C> {
    connector: C,
    retry_delay: Duration,
}

impl<C: EventStreamConnector> BeaconEventClient<C> {
    /// Create a client over the given connector.
    pub fn new(connector: C) -> Self {
        Self { connector, retry_delay: RETRY_DELAY }
    }

    /// Override the fixed retry delay (tests).
    pub fn with_retry_delay(self, retry_delay: Duration) -> Self {
        Self { retry_delay, ..self }
    }

    /// Subscribe until shut down.
    ///
    /// Runs the connect-parse-deliver loop indefinitely, sleeping
    /// `retry_delay` after every failed or ended subscription. Returns only
    /// when the shutdown signal fires or the output channel closes.
    pub async fn subscribe(
        &self,
        output: mpsc::Sender<SlotAttributes>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!("[beacon-client] subscribing to payload_attributes events");

        loop {
            let outcome = tokio::select! {
                _ = shutdown.changed() => {
                    info!("[beacon-client] shutdown requested, closing subscription");
                    return;
                }
                outcome = self.run_subscription(&output) => outcome,
            };

            match outcome {
                Ok(SubscriptionEnd::OutputClosed) => {
                    info!("[beacon-client] output channel closed, stopping");
                    return;
                }
                Ok(SubscriptionEnd::StreamEnded) => {
                    warn!("[beacon-client] event stream ended, reconnecting");
                }
                Err(e) => {
                    warn!("[beacon-client] {e}, retrying in {:?}", self.retry_delay);
                }
            }

            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[beacon-client] shutdown requested during retry wait");
                    return;
                }
                _ = tokio::time::sleep(self.retry_delay) => {}
            }
        }
    }

    /// One subscription attempt: connect, then parse and deliver events
    /// until the stream errors or ends.
    async fn run_subscription(
        &self,
        output: &mpsc::Sender<SlotAttributes>,
    ) -> Result<SubscriptionEnd> {
        let mut stream = self.connector.connect().await?;
        let mut parser = SseParser::new();

        while let Some(chunk) = stream.next().await {
            for event in parser.push(&chunk?) {
                if event.event != PAYLOAD_ATTRIBUTES_EVENT {
                    continue;
                }

                match serde_json::from_str::<SlotAttributes>(&event.data) {
                    Ok(attrs) => {
                        debug!(
                            slot = attrs.slot,
                            head_hash = ?attrs.head_hash,
                            "[beacon-client] received payload attributes"
                        );
                        // Blocking send: backpressure on the upstream stream
                        // rather than dropped records.
                        if output.send(attrs).await.is_err() {
                            return Ok(SubscriptionEnd::OutputClosed);
                        }
                    }
                    Err(e) => {
                        let err = BeaconClientError::MalformedEvent(e.to_string());
                        warn!("[beacon-client] {err}, event dropped");
                    }
                }
            }
        }

        Ok(SubscriptionEnd::StreamEnded)
    }
}
