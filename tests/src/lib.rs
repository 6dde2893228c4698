//! # Builder Sidecar Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Fake ports: chain reader, engine, connectors
//! └── integration/      # Cross-crate pipeline tests
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p builder-tests
//!
//! # By area
//! cargo test -p builder-tests integration::
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
