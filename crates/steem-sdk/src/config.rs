//! Network configuration for the SDK.
//!
//! This module provides configuration for connecting to the Steem or Golos
//! networks, a local node, or a custom endpoint.

use std::time::Duration;
use steem_sdk_types::api_types::chain_id::ChainId;
use url::Url;

/// Known networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Steem mainnet
    Steem,
    /// Golos mainnet
    Golos,
    /// Local development node
    Local,
    /// Custom network
    Custom,
}

impl Network {
    /// Returns the default chain ID for this network.
    pub fn chain_id(&self) -> ChainId {
        match self {
            Network::Golos => ChainId::GOLOS,
            // Custom networks pass their id explicitly
            Network::Steem | Network::Local | Network::Custom => ChainId::STEEM,
        }
    }

    /// Returns the network name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Steem => "steem",
            Network::Golos => "golos",
            Network::Local => "local",
            Network::Custom => "custom",
        }
    }
}

/// Configuration for the client.
///
/// # Example
///
/// ```rust
/// use steem_sdk::SteemConfig;
/// use std::time::Duration;
///
/// let config = SteemConfig::golos()
///     .with_timeout(Duration::from_secs(10))
///     .with_transaction_expiration(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct SteemConfig {
    pub(crate) network: Network,
    /// JSON-RPC endpoint
    pub(crate) rpc_url: Url,
    pub(crate) chain_id: ChainId,
    /// HTTP request timeout
    pub(crate) timeout: Duration,
    /// How far in the future signed envelopes expire
    pub(crate) transaction_expiration: Duration,
}

impl Default for SteemConfig {
    fn default() -> Self {
        Self::steem()
    }
}

impl SteemConfig {
    /// Creates a configuration for Steem mainnet.
    pub fn steem() -> Self {
        Self::for_network(
            Network::Steem,
            Url::parse("https://api.steemit.com").expect("valid steem URL"),
        )
    }

    /// Creates a configuration for Golos mainnet.
    pub fn golos() -> Self {
        Self::for_network(
            Network::Golos,
            Url::parse("https://api.golos.id").expect("valid golos URL"),
        )
    }

    /// Creates a configuration for a node on the default local port.
    pub fn local() -> Self {
        Self::for_network(
            Network::Local,
            Url::parse("http://127.0.0.1:8090").expect("valid local URL"),
        )
        .with_timeout(Duration::from_secs(10))
    }

    /// Creates a custom configuration with the specified RPC URL and chain ID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steem_sdk::SteemConfig;
    /// use steem_sdk_types::api_types::chain_id::ChainId;
    ///
    /// let config = SteemConfig::custom("https://node.example.com", ChainId::GOLOS).unwrap();
    /// ```
    pub fn custom(rpc_url: &str, chain_id: ChainId) -> Result<Self, url::ParseError> {
        Ok(Self::for_network(Network::Custom, Url::parse(rpc_url)?).with_chain_id(chain_id))
    }

    fn for_network(network: Network, rpc_url: Url) -> Self {
        Self {
            network,
            rpc_url,
            chain_id: network.chain_id(),
            timeout: Duration::from_secs(30),
            transaction_expiration: Duration::from_secs(60),
        }
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the chain ID used when signing.
    pub fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Sets how long signed envelopes stay valid.
    pub fn with_transaction_expiration(mut self, expiration: Duration) -> Self {
        self.transaction_expiration = expiration;
        self
    }

    /// Sets a custom RPC URL.
    pub fn with_rpc_url(mut self, url: &str) -> Result<Self, url::ParseError> {
        self.rpc_url = Url::parse(url)?;
        Ok(self)
    }

    /// Returns the network this config is for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Returns the chain ID.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the transaction expiration window.
    pub fn transaction_expiration(&self) -> Duration {
        self.transaction_expiration
    }
}
