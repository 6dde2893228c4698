//! # Builder Beacon - Payload Attributes Event Client
//!
//! Maintains an indefinite subscription to the consensus client's
//! server-sent-event stream (`{endpoint}/events`, event type
//! `payload_attributes`) and delivers parsed
//! [`SlotAttributes`](builder_types::SlotAttributes) records to an output
//! channel.
//!
//! ## Behavior
//!
//! - Connection or subscription failure: wait a fixed delay
//!   ([`RETRY_DELAY`]), reconnect. Unbounded retries, no backoff escalation.
//! - Malformed event payload: logged and dropped; the stream stays up.
//! - Delivery: a blocking send on a bounded channel, so a slow consumer
//!   applies backpressure to the upstream stream instead of losing events.
//! - Shutdown: a watch signal stops the retry loop and drops the connection.
//!
//! The transport is abstracted behind [`EventStreamConnector`] so the retry
//! and parsing logic is testable without network I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod sse;

mod error;

pub use client::{
    BeaconEventClient, ByteStream, EventStreamConnector, HttpEventStreamConnector,
    PAYLOAD_ATTRIBUTES_EVENT, RETRY_DELAY,
};
pub use error::{BeaconClientError, Result};
pub use sse::{SseEvent, SseParser};
