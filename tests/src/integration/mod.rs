//! Cross-crate integration tests for the builder pipeline.

pub mod bundles;
