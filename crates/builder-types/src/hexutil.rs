//! Hex encoding helpers for JSON wire formats.
//!
//! The consensus-layer event stream and the engine API encode integer
//! quantities as `0x`-prefixed hex strings and byte blobs as `0x`-prefixed
//! hex. These helpers back the `#[serde(with = ...)]` attributes on the wire
//! types.

use serde::{Deserialize, Deserializer, Serializer};

/// Encode raw bytes as a `0x`-prefixed lowercase hex string.
pub fn encode_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a `0x`-prefixed hex string into raw bytes.
///
/// The prefix is required; an odd number of digits is an error.
pub fn decode_prefixed(value: &str) -> Result<Vec<u8>, String> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| format!("missing 0x prefix in {value:?}"))?;
    hex::decode(digits).map_err(|e| format!("invalid hex in {value:?}: {e}"))
}

/// Serde adapter for `u64` quantities encoded as `0x`-prefixed hex.
///
/// Deserialization also accepts a bare JSON integer, since some upstream
/// encoders emit `slot` and `gasLimit` untagged.
pub mod quantity {
    use super::*;

    /// Serialize a quantity as minimal `0x`-prefixed hex.
    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    /// Deserialize a quantity from hex or a bare integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Quantity {
            Number(u64),
            Hex(String),
        }

        match Quantity::deserialize(deserializer)? {
            Quantity::Number(n) => Ok(n),
            Quantity::Hex(s) => {
                let digits = s
                    .strip_prefix("0x")
                    .ok_or_else(|| serde::de::Error::custom("quantity missing 0x prefix"))?;
                u64::from_str_radix(digits, 16).map_err(serde::de::Error::custom)
            }
        }
    }
}
