//! Error types for the Steem SDK.
//!
//! [`SteemError`] separates three families of failure:
//!
//! - guard violations raised before anything is submitted (duplicate vote,
//!   duplicate reblog, deleting a comment that has votes or replies);
//! - argument errors (bad amount, bad key, missing tags);
//! - upstream failures from the chain-state lookups or the broadcaster.
//!
//! Failures inside a client action are wrapped in [`SteemError::Action`] so
//! the caller sees which action failed while the original cause stays
//! reachable through [`SteemError::root_cause`].

use crate::events::Action;
use steem_sdk_types::TypesError;
use thiserror::Error;

/// A specialized Result type for SDK operations.
pub type SteemResult<T> = Result<T, SteemError>;

/// The main error type for the SDK.
#[derive(Error, Debug)]
pub enum SteemError {
    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during URL parsing
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A wire type could not be parsed
    #[error(transparent)]
    Types(#[from] TypesError),

    /// The node answered with a JSON-RPC error object
    #[error("RPC error ({code}): {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// The voter already has a vote on the content
    #[error("{voter} has already voted on @{author}/{permlink}")]
    AlreadyVoted {
        /// Account attempting the vote
        voter: String,
        /// Content author
        author: String,
        /// Content permlink
        permlink: String,
    },

    /// The account already reblogged the content
    #[error("{account} has already reblogged @{author}/{permlink}")]
    AlreadyReblogged {
        /// Account attempting the reblog
        account: String,
        /// Content author
        author: String,
        /// Content permlink
        permlink: String,
    },

    /// The comment has votes and cannot be deleted
    #[error("@{author}/{permlink} has votes and cannot be deleted")]
    CommentHasVotes {
        /// Comment author
        author: String,
        /// Comment permlink
        permlink: String,
    },

    /// The comment has replies and cannot be deleted
    #[error("@{author}/{permlink} has replies and cannot be deleted")]
    CommentHasReplies {
        /// Comment author
        author: String,
        /// Comment permlink
        permlink: String,
    },

    /// A caller-supplied argument is unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A chain amount could not be interpreted
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The WIF string did not decode to a private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The broadcaster rejected or failed to deliver the transaction
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// A failure inside a client action, tagged with the action name
    #[error("{action} failed: {source}")]
    Action {
        /// The action that failed
        action: Action,
        /// The underlying failure
        #[source]
        source: Box<SteemError>,
    },

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl SteemError {
    /// Wraps `self` with the name of the action it happened in.
    pub fn in_action(self, action: Action) -> Self {
        Self::Action {
            action,
            source: Box::new(self),
        }
    }

    /// Creates a new RPC error
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Returns the action this error was raised in, if any.
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Action { action, .. } => Some(*action),
            _ => None,
        }
    }

    /// Returns the innermost error, looking through action wrappers.
    pub fn root_cause(&self) -> &SteemError {
        match self {
            Self::Action { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns true if a business rule refused the action before submission.
    pub fn is_guard_violation(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::AlreadyVoted { .. }
                | Self::AlreadyReblogged { .. }
                | Self::CommentHasVotes { .. }
                | Self::CommentHasReplies { .. }
        )
    }
}
