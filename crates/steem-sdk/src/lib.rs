//! # Steem SDK
//!
//! Builds and submits operations for Steem-family chains (Steem, Golos).
//!
//! [`SteemClient`] turns user actions such as votes, replies, posts, follows,
//! transfers, market orders and vesting changes into chain operations. It
//! checks the chain before actions that must not be repeated, assembles the
//! operations in the order the chain expects, and hands them to a
//! [`Broadcaster`](backend::Broadcaster) that owns the keys.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use steem_sdk::{PayoutOptions, SteemClientBuilder, SteemConfig, VoteIntent};
//! use steem_sdk::content::PostDraft;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SteemClientBuilder::with_rpc(SteemConfig::steem(), Arc::new(MyBroadcaster))?
//!         .build();
//!
//!     let draft = PostDraft::new("Hello Steem", "My first post").tag("introduceyourself");
//!     let permlink = client
//!         .post("alice", &draft, Some(VoteIntent::new(10_000)), Some(&PayoutOptions::half()))
//!         .await?;
//!     println!("published @alice/{permlink}");
//!
//!     let rate = client.steem_per_mvest().await?;
//!     println!("{rate} STEEM per MVESTS");
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - The action methods
//! - [`backend`] - Chain-state and broadcaster traits
//! - [`api`] - JSON-RPC chain-state client
//! - [`payout`], [`permlink`], [`translit`], [`content`], [`custom_json`] -
//!   Operation assembly helpers
//! - [`wif`] - Private key decoding

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod api;
pub mod backend;
pub mod client;
pub mod config;
pub mod content;
pub mod custom_json;
pub mod error;
pub mod events;
pub mod payout;
pub mod permlink;
pub mod translit;
pub mod vesting;
pub mod wif;

pub use client::{SteemClient, SteemClientBuilder, TransferEntry};
pub use config::{Network, SteemConfig};
pub use error::{SteemError, SteemResult};
pub use events::{Action, ClientEvent};
pub use payout::{PayoutOptions, VoteIntent};

pub use steem_sdk_types::api_types::asset::Asset;
pub use steem_sdk_types::api_types::chain_id::ChainId;

#[cfg(test)]
mod tests;
