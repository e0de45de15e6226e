use crate::api_types::operation::Operation;
use crate::error::TypesError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An unsigned transaction envelope anchored to a recent block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    #[serde(with = "crate::api_types::time")]
    pub expiration: DateTime<Utc>,
    pub operations: Vec<Operation>,
    pub extensions: Vec<serde_json::Value>,
}

impl Transaction {
    /// Creates an empty transaction referencing the given head block.
    pub fn new(
        head_block_number: u32,
        head_block_id: &str,
        expiration: DateTime<Utc>,
    ) -> Result<Self, TypesError> {
        Ok(Self {
            ref_block_num: ref_block_num(head_block_number),
            ref_block_prefix: ref_block_prefix(head_block_id)?,
            expiration,
            operations: vec![],
            extensions: vec![],
        })
    }

    pub fn push_operation(&mut self, op: impl Into<Operation>) {
        self.operations.push(op.into());
    }
}

/// Lower 16 bits of the head block number.
pub fn ref_block_num(head_block_number: u32) -> u16 {
    (head_block_number & 0xffff) as u16
}

/// Bytes 4..8 of the head block id, read little-endian.
pub fn ref_block_prefix(head_block_id: &str) -> Result<u32, TypesError> {
    let bytes = hex::decode(head_block_id)
        .map_err(|e| TypesError::block_id(head_block_id, e.to_string()))?;
    let prefix: [u8; 4] = bytes
        .get(4..8)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| TypesError::block_id(head_block_id, "shorter than 8 bytes"))?;
    Ok(u32::from_le_bytes(prefix))
}
