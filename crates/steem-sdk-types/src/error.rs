use thiserror::Error;

/// Errors raised while parsing or constructing wire types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid asset '{input}': {reason}")]
    InvalidAsset { input: String, reason: String },

    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("Invalid block id '{input}': {reason}")]
    InvalidBlockId { input: String, reason: String },
}

impl TypesError {
    pub fn asset(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn block_id(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBlockId {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
