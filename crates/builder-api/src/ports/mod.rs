//! Hexagonal architecture ports for block-build coordination

pub mod inbound;
pub mod outbound;

pub use inbound::BlockBuilderApi;
pub use outbound::{BlockEngine, ChainReader};
