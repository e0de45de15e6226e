pub mod asset;
pub mod chain_id;
pub mod extension;
pub mod operation;
pub mod properties;
pub mod time;
pub mod transaction;
