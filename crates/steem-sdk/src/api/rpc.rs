//! JSON-RPC client for the node's `condenser_api`.

use crate::backend::ChainState;
use crate::config::SteemConfig;
use crate::error::{SteemError, SteemResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use steem_sdk_types::api_types::properties::DynamicGlobalProperties;
use tracing::debug;
use url::Url;

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// One entry of `get_active_votes`, as returned by
/// [`RpcClient::get_active_votes`].
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveVote {
    pub voter: String,
    /// Vote weight in basis points; negative for downvotes, `0` once the
    /// vote has been removed.
    #[serde(default)]
    pub percent: i64,
}

/// Reads chain state from a node over JSON-RPC 2.0.
///
/// # Example
///
/// ```rust,no_run
/// use steem_sdk::api::RpcClient;
/// use steem_sdk::backend::ChainState;
/// use steem_sdk::SteemConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = RpcClient::new(&SteemConfig::steem())?;
///     let props = client.dynamic_global_properties().await?;
///     println!("head block: {}", props.head_block_number);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct RpcClient {
    url: Url,
    client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new client against the configured RPC URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &SteemConfig) -> SteemResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(SteemError::Http)?;
        Ok(Self::from_client(config.rpc_url().clone(), client))
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_client(url: Url, client: Client) -> Self {
        Self {
            url,
            client,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Calls `method` with positional `params` and decodes the `result`.
    ///
    /// # Errors
    ///
    /// Returns [`SteemError::Rpc`] if the node reports an error object or a
    /// non-success HTTP status (the status is used as the code), and an
    /// HTTP or JSON error if the exchange itself fails.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> SteemResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };
        debug!(method, id, "Sending RPC request");

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SteemError::rpc(i64::from(status.as_u16()), body));
        }

        let body: RpcResponse<T> = response.json().await?;
        match (body.result, body.error) {
            (_, Some(error)) => Err(SteemError::rpc(error.code, error.message)),
            (Some(result), None) => Ok(result),
            (None, None) => Err(SteemError::rpc(
                -32603,
                format!("{method} returned neither result nor error"),
            )),
        }
    }

    pub async fn get_active_votes(
        &self,
        author: &str,
        permlink: &str,
    ) -> SteemResult<Vec<ActiveVote>> {
        self.call("condenser_api.get_active_votes", json!([author, permlink]))
            .await
    }

    pub async fn get_content_replies(
        &self,
        author: &str,
        permlink: &str,
    ) -> SteemResult<Vec<Value>> {
        self.call("condenser_api.get_content_replies", json!([author, permlink]))
            .await
    }

    pub async fn get_reblogged_by(&self, author: &str, permlink: &str) -> SteemResult<Vec<String>> {
        self.call("condenser_api.get_reblogged_by", json!([author, permlink]))
            .await
    }
}

#[async_trait]
impl ChainState for RpcClient {
    async fn dynamic_global_properties(&self) -> SteemResult<DynamicGlobalProperties> {
        self.call("condenser_api.get_dynamic_global_properties", json!([]))
            .await
    }

    async fn has_voted(&self, author: &str, permlink: &str, voter: &str) -> SteemResult<bool> {
        let votes = self.get_active_votes(author, permlink).await?;
        Ok(votes.iter().any(|vote| vote.voter == voter))
    }

    async fn has_reblogged(
        &self,
        author: &str,
        permlink: &str,
        account: &str,
    ) -> SteemResult<bool> {
        let accounts = self.get_reblogged_by(author, permlink).await?;
        Ok(accounts.iter().any(|name| name == account))
    }

    async fn has_votes(&self, author: &str, permlink: &str) -> SteemResult<bool> {
        Ok(!self.get_active_votes(author, permlink).await?.is_empty())
    }

    async fn has_replies(&self, author: &str, permlink: &str) -> SteemResult<bool> {
        Ok(!self.get_content_replies(author, permlink).await?.is_empty())
    }
}
