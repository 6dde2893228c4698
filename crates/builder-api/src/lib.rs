//! # Builder API - Block-Build Coordination
//!
//! Bridges the consensus-layer event pipeline to block-construction
//! requests.
//!
//! ## Data Flow
//!
//! ```text
//! ┌────────────────────┐   mpsc    ┌─────────────────────┐
//! │ BeaconEventClient  │ ────────► │ dispatch loop       │
//! │ (builder-beacon)   │           │ (slot dedup)        │
//! └────────────────────┘           └─────────┬───────────┘
//!                                            │ accept()
//!                                            ▼
//!                                  ┌─────────────────────┐
//!                                  │ SlotAttributeStore  │
//!                                  │ (monotonic, parent- │
//!                                  │  checked)           │
//!                                  └─────────┬───────────┘
//!                                            │ current()
//!   build request ──────────────────────────►▼
//!                                  ┌─────────────────────┐
//!                                  │ BlockBuildCoordina- │
//!                                  │ tor → BlockEngine   │
//!                                  └─────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Slot monotonicity**: the current record is replaced only by one
//!    with a strictly greater slot; stale records never change state.
//! 2. **Parent gating**: attributes referencing an unknown head block are
//!    rejected and the prior record is retained.
//! 3. **Attributes always win**: build arguments come entirely from the
//!    current slot attributes; of the caller's arguments only the
//!    fill-pending flag survives.
//! 4. **Short critical sections**: no lock is held across a chain lookup or
//!    an engine call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ports;
pub mod service;
pub mod store;

mod config;
mod error;
mod metrics;

pub use config::{BuilderConfig, DEFAULT_BEACON_ENDPOINT, DEFAULT_CHANNEL_CAPACITY};
pub use error::{BuilderApiError, Result};
pub use metrics::Metrics;
pub use ports::{BlockBuilderApi, BlockEngine, ChainReader};
pub use service::BlockBuildCoordinator;
pub use store::{SlotAdmission, SlotAttributeStore};
