use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// The 32-byte chain identifier mixed into every transaction digest.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ChainId([u8; ChainId::LENGTH]);

impl ChainId {
    pub const LENGTH: usize = 32;

    pub const STEEM: ChainId = ChainId([0u8; Self::LENGTH]);

    pub const GOLOS: ChainId = ChainId([
        0x78, 0x2a, 0x30, 0x39, 0xb4, 0x78, 0xc8, 0x39, 0xe4, 0xcb, 0x0c, 0x94, 0x1f, 0xf4, 0xea,
        0xeb, 0x7d, 0xf4, 0x0b, 0xdd, 0x68, 0xbd, 0x44, 0x1a, 0xfd, 0x44, 0x4b, 0x9d, 0xa7, 0x63,
        0xde, 0x12,
    ]);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(hex_str.trim_start_matches("0x"))
            .map_err(|e| TypesError::InvalidChainId(e.to_string()))?;
        let bytes: [u8; Self::LENGTH] = bytes.try_into().map_err(|v: Vec<u8>| {
            TypesError::InvalidChainId(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for ChainId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Debug for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChainId({})", self.to_hex())
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
