//! Opaque binary-encoded transactions.
//!
//! The builder core never interprets transaction contents; it only moves
//! them between the consensus layer, callers, and the execution backend.
//! A transaction is therefore its canonical binary (RLP) encoding, and its
//! identity is the keccak-256 hash of that encoding. `decode` followed by
//! `encode` reproduces the input bytes exactly.

use crate::hexutil;
use primitive_types::H256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

/// A transaction in its canonical binary encoding.
///
/// Serializes as a `0x`-prefixed hex string on every JSON surface (slot
/// attribute events, bundle wire format, execution payloads).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction(Vec<u8>);

impl Transaction {
    /// Wrap raw encoded transaction bytes.
    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The canonical binary encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the transaction, returning its encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the binary encoding in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Transaction hash: keccak-256 over the binary encoding.
    pub fn hash(&self) -> H256 {
        H256::from_slice(&Keccak256::digest(&self.0))
    }
}

impl From<Vec<u8>> for Transaction {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_raw(bytes)
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hexutil::encode_prefixed(&self.0))
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        hexutil::decode_prefixed(&encoded)
            .map(Transaction)
            .map_err(serde::de::Error::custom)
    }
}
