//! Node API clients.

pub mod rpc;

pub use rpc::{ActiveVote, RpcClient};
