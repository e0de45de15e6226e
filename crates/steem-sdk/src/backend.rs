//! The two collaborators the client depends on.
//!
//! [`ChainState`] answers read-only questions about the chain. [`Broadcaster`]
//! owns everything that needs a key: account-key lookup, signing and
//! delivery. Neither is implemented by the client itself, so it can be
//! backed by a node, a signing service or an in-memory fake.

use crate::error::SteemResult;
use crate::wif::{self, PrivateKey};
use async_trait::async_trait;
use steem_sdk_types::api_types::chain_id::ChainId;
use steem_sdk_types::api_types::operation::Operation;
use steem_sdk_types::api_types::properties::{BroadcastResponse, DynamicGlobalProperties};
use steem_sdk_types::api_types::transaction::Transaction;

/// Read-only chain queries.
#[async_trait]
pub trait ChainState: Send + Sync + 'static {
    async fn dynamic_global_properties(&self) -> SteemResult<DynamicGlobalProperties>;

    /// Whether `voter` has a vote on `@author/permlink`.
    async fn has_voted(&self, author: &str, permlink: &str, voter: &str) -> SteemResult<bool>;

    /// Whether `account` has reblogged `@author/permlink`.
    async fn has_reblogged(&self, author: &str, permlink: &str, account: &str)
        -> SteemResult<bool>;

    async fn has_votes(&self, author: &str, permlink: &str) -> SteemResult<bool>;

    async fn has_replies(&self, author: &str, permlink: &str) -> SteemResult<bool>;
}

/// Structs that implement this trait sign and deliver operations for an
/// account whose keys they hold.
#[async_trait]
pub trait Broadcaster: Send + Sync + 'static {
    /// Submits one operation on behalf of `account`.
    async fn submit_operation(
        &self,
        account: &str,
        operation: Operation,
    ) -> SteemResult<BroadcastResponse>;

    /// Submits `operations` in order as a single transaction.
    async fn submit_operations(
        &self,
        account: &str,
        operations: Vec<Operation>,
    ) -> SteemResult<BroadcastResponse>;

    /// Signs a prepared envelope with caller-supplied keys and broadcasts it
    /// synchronously.
    async fn sign_and_broadcast(
        &self,
        transaction: Transaction,
        keys: &[PrivateKey],
        chain_id: &ChainId,
    ) -> SteemResult<BroadcastResponse>;

    fn decode_private_key(&self, wif: &str) -> SteemResult<PrivateKey> {
        wif::decode(wif)
    }
}
