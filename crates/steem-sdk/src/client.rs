//! The client that turns user actions into submitted operations.

use crate::api::RpcClient;
use crate::backend::{Broadcaster, ChainState};
use crate::config::SteemConfig;
use crate::content::{self, PostDraft};
use crate::custom_json::{self, FollowWhat, FOLLOW_ID, LOGIN_ID};
use crate::error::{SteemError, SteemResult};
use crate::events::{Action, ClientEvent};
use crate::payout::{self, PayoutOptions, VoteIntent};
use crate::permlink;
use crate::vesting;
use chrono::{Duration, Utc};
use std::fmt;
use std::sync::Arc;
use steem_sdk_types::api_types::asset::Asset;
use steem_sdk_types::api_types::operation::{
    AccountWitnessProxyOperation, AccountWitnessVoteOperation, CancelTransferFromSavingsOperation,
    ChangeRecoveryAccountOperation, CommentOperation, ConvertOperation,
    DeclineVotingRightsOperation, DelegateVestingSharesOperation, DeleteCommentOperation,
    ExchangeRate, FeedPublishOperation, LimitOrderCancelOperation, LimitOrderCreateOperation,
    Operation, TransferFromSavingsOperation, TransferOperation, TransferToSavingsOperation,
    TransferToVestingOperation, VoteOperation, WithdrawVestingOperation,
};
use steem_sdk_types::api_types::transaction::Transaction;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

/// Limit orders stay on the book for this long unless filled or cancelled.
pub const LIMIT_ORDER_LIFETIME_SECS: i64 = 3_600_000;

/// One leg of a [`SteemClient::multi_transfer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferEntry {
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

impl TransferEntry {
    pub fn new(to: impl Into<String>, amount: Asset, memo: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            amount,
            memo: memo.into(),
        }
    }
}

/// Builder for [`SteemClient`].
pub struct SteemClientBuilder {
    config: SteemConfig,
    chain_state: Arc<dyn ChainState>,
    broadcaster: Arc<dyn Broadcaster>,
    event_sender: Option<mpsc::Sender<ClientEvent>>,
}

impl fmt::Debug for SteemClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteemClientBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SteemClientBuilder {
    pub fn new(
        config: SteemConfig,
        chain_state: Arc<dyn ChainState>,
        broadcaster: Arc<dyn Broadcaster>,
    ) -> Self {
        Self {
            config,
            chain_state,
            broadcaster,
            event_sender: None,
        }
    }

    /// Uses an [`RpcClient`] against the configured node for chain state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_rpc(config: SteemConfig, broadcaster: Arc<dyn Broadcaster>) -> SteemResult<Self> {
        let rpc = RpcClient::new(&config)?;
        Ok(Self::new(config, Arc::new(rpc), broadcaster))
    }

    /// Reports every submission and login failure on `sender`.
    ///
    /// Events are dropped, with a warning, while the channel is full.
    pub fn with_event_sender(mut self, sender: mpsc::Sender<ClientEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    pub fn build(self) -> SteemClient {
        SteemClient {
            config: self.config,
            chain_state: self.chain_state,
            broadcaster: self.broadcaster,
            event_sender: self.event_sender,
        }
    }
}

/// Validates user actions, assembles their operations and hands them to a
/// [`Broadcaster`].
///
/// The client holds no mutable state and can be shared behind an `Arc`.
/// Failures are wrapped in [`SteemError::Action`]; nothing is retried.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use steem_sdk::{SteemClientBuilder, SteemConfig};
///
/// let client = SteemClientBuilder::with_rpc(SteemConfig::steem(), Arc::new(my_broadcaster))?
///     .build();
/// let block = client.vote("alice", "bob", "hello-world", 10_000).await?;
/// ```
pub struct SteemClient {
    config: SteemConfig,
    chain_state: Arc<dyn ChainState>,
    broadcaster: Arc<dyn Broadcaster>,
    event_sender: Option<mpsc::Sender<ClientEvent>>,
}

impl fmt::Debug for SteemClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteemClient")
            .field("config", &self.config)
            .field("events", &self.event_sender.is_some())
            .finish_non_exhaustive()
    }
}

impl SteemClient {
    pub fn config(&self) -> &SteemConfig {
        &self.config
    }

    /// Drops the event instead of waiting when the channel is full.
    fn send_event(&self, event: ClientEvent) {
        if let Some(sender) = &self.event_sender {
            match sender.try_send(event) {
                Ok(()) => {}
                Err(TrySendError::Full(event)) => {
                    warn!(event = ?event, "Event channel full, dropping event");
                }
                Err(TrySendError::Closed(_)) => {
                    warn!("Event channel closed, dropping event");
                }
            }
        }
    }

    fn report(&self, action: Action, block_num: u32, account: &str, counterparts: &[&str]) {
        info!(
            action = %action,
            account,
            counterparts = ?counterparts,
            block_num,
            "Operation submitted"
        );
        let accounts = std::iter::once(account)
            .chain(counterparts.iter().copied())
            .map(str::to_string)
            .collect();
        self.send_event(ClientEvent::OperationSubmitted {
            action,
            block_num,
            accounts,
        });
    }

    async fn submit(
        &self,
        action: Action,
        account: &str,
        counterparts: &[&str],
        operation: Operation,
    ) -> SteemResult<u32> {
        debug!(action = %action, account, operation = operation.name(), "Submitting operation");
        let response = self
            .broadcaster
            .submit_operation(account, operation)
            .await
            .map_err(|e| e.in_action(action))?;
        self.report(action, response.block_num, account, counterparts);
        Ok(response.block_num)
    }

    async fn submit_batch(
        &self,
        action: Action,
        account: &str,
        counterparts: &[&str],
        operations: Vec<Operation>,
    ) -> SteemResult<u32> {
        debug!(
            action = %action,
            account,
            operations = operations.len(),
            "Submitting operation batch"
        );
        let response = self
            .broadcaster
            .submit_operations(account, operations)
            .await
            .map_err(|e| e.in_action(action))?;
        self.report(action, response.block_num, account, counterparts);
        Ok(response.block_num)
    }

    /// Votes on `@author/permlink` with `weight` in basis points, capped at
    /// `10000`. Negative weights are downvotes.
    ///
    /// # Errors
    ///
    /// Fails with [`SteemError::AlreadyVoted`] without submitting if `voter`
    /// already has a vote on the content.
    pub async fn vote(
        &self,
        voter: &str,
        author: &str,
        permlink: &str,
        weight: i16,
    ) -> SteemResult<u32> {
        let action = Action::Vote;
        let voted = self
            .chain_state
            .has_voted(author, permlink, voter)
            .await
            .map_err(|e| e.in_action(action))?;
        if voted {
            return Err(SteemError::AlreadyVoted {
                voter: voter.to_string(),
                author: author.to_string(),
                permlink: permlink.to_string(),
            }
            .in_action(action));
        }

        let operation = VoteOperation {
            voter: voter.to_string(),
            author: author.to_string(),
            permlink: permlink.to_string(),
            weight: payout::clamp_weight(weight),
        };
        self.submit(action, voter, &[author], operation.into()).await
    }

    /// Replies to `@parent_author/parent_permlink` and returns the reply's
    /// permlink.
    ///
    /// `options` and a non-zero `vote` are submitted in the same transaction,
    /// after the comment.
    pub async fn comment(
        &self,
        author: &str,
        parent_author: &str,
        parent_permlink: &str,
        body: &str,
        vote: Option<VoteIntent>,
        options: Option<&PayoutOptions>,
    ) -> SteemResult<String> {
        let permlink = permlink::reply_permlink(parent_author, parent_permlink, Utc::now());
        let comment = CommentOperation {
            parent_author: parent_author.to_string(),
            parent_permlink: parent_permlink.to_string(),
            author: author.to_string(),
            permlink: permlink.clone(),
            title: String::new(),
            body: body.to_string(),
            json_metadata: content::reply_metadata(),
        };
        let operations = content::publication_batch(comment, vote, options);
        self.submit_batch(Action::Comment, author, &[parent_author], operations)
            .await?;
        Ok(permlink)
    }

    /// Deletes `@author/permlink`.
    ///
    /// # Errors
    ///
    /// Refuses with [`SteemError::CommentHasVotes`] or
    /// [`SteemError::CommentHasReplies`], checked in that order.
    pub async fn delete_comment(&self, author: &str, permlink: &str) -> SteemResult<u32> {
        let action = Action::DeleteComment;
        let has_votes = self
            .chain_state
            .has_votes(author, permlink)
            .await
            .map_err(|e| e.in_action(action))?;
        if has_votes {
            return Err(SteemError::CommentHasVotes {
                author: author.to_string(),
                permlink: permlink.to_string(),
            }
            .in_action(action));
        }

        let has_replies = self
            .chain_state
            .has_replies(author, permlink)
            .await
            .map_err(|e| e.in_action(action))?;
        if has_replies {
            return Err(SteemError::CommentHasReplies {
                author: author.to_string(),
                permlink: permlink.to_string(),
            }
            .in_action(action));
        }

        let operation = DeleteCommentOperation {
            author: author.to_string(),
            permlink: permlink.to_string(),
        };
        self.submit(action, author, &[], operation.into()).await
    }

    /// Publishes a top-level post and returns its permlink.
    ///
    /// # Errors
    ///
    /// Fails with [`SteemError::InvalidArgument`] before any submission if
    /// the draft has neither a parent tag nor any tag.
    pub async fn post(
        &self,
        author: &str,
        draft: &PostDraft,
        vote: Option<VoteIntent>,
        options: Option<&PayoutOptions>,
    ) -> SteemResult<String> {
        let action = Action::Post;
        let comment = draft
            .to_operation(author)
            .map_err(|e| e.in_action(action))?;
        let permlink = comment.permlink.clone();
        let operations = content::publication_batch(comment, vote, options);
        self.submit_batch(action, author, &[], operations).await?;
        Ok(permlink)
    }

    async fn follow_action(
        &self,
        action: Action,
        follower: &str,
        following: &str,
        what: FollowWhat,
    ) -> SteemResult<u32> {
        let json = custom_json::follow_payload(follower, following, what);
        let operation = custom_json::posting_custom_json(FOLLOW_ID, follower, json);
        self.submit(action, follower, &[following], operation.into())
            .await
    }

    pub async fn follow(&self, follower: &str, following: &str) -> SteemResult<u32> {
        self.follow_action(Action::Follow, follower, following, FollowWhat::Blog)
            .await
    }

    pub async fn unfollow(&self, follower: &str, following: &str) -> SteemResult<u32> {
        self.follow_action(Action::Unfollow, follower, following, FollowWhat::Nothing)
            .await
    }

    /// Mutes `following` for `follower`.
    pub async fn ignore(&self, follower: &str, following: &str) -> SteemResult<u32> {
        self.follow_action(Action::Ignore, follower, following, FollowWhat::Ignore)
            .await
    }

    /// Clears a previous follow or ignore. Same payload as [`Self::unfollow`].
    pub async fn notice(&self, follower: &str, following: &str) -> SteemResult<u32> {
        self.follow_action(Action::Notice, follower, following, FollowWhat::Nothing)
            .await
    }

    /// # Errors
    ///
    /// Fails with [`SteemError::AlreadyReblogged`] without submitting if
    /// `account` already reblogged the content.
    pub async fn reblog(&self, account: &str, author: &str, permlink: &str) -> SteemResult<u32> {
        let action = Action::Reblog;
        let reblogged = self
            .chain_state
            .has_reblogged(author, permlink, account)
            .await
            .map_err(|e| e.in_action(action))?;
        if reblogged {
            return Err(SteemError::AlreadyReblogged {
                account: account.to_string(),
                author: author.to_string(),
                permlink: permlink.to_string(),
            }
            .in_action(action));
        }

        let json = custom_json::reblog_payload(account, author, permlink);
        let operation = custom_json::posting_custom_json(FOLLOW_ID, account, json);
        self.submit(action, account, &[author], operation.into())
            .await
    }

    pub async fn account_witness_vote(
        &self,
        account: &str,
        witness: &str,
        approve: bool,
    ) -> SteemResult<u32> {
        let operation = AccountWitnessVoteOperation {
            account: account.to_string(),
            witness: witness.to_string(),
            approve,
        };
        self.submit(Action::AccountWitnessVote, account, &[witness], operation.into())
            .await
    }

    pub async fn account_witness_proxy(&self, account: &str, proxy: &str) -> SteemResult<u32> {
        let operation = AccountWitnessProxyOperation {
            account: account.to_string(),
            proxy: proxy.to_string(),
        };
        self.submit(Action::AccountWitnessProxy, account, &[proxy], operation.into())
            .await
    }

    pub async fn transfer(
        &self,
        from: &str,
        to: &str,
        amount: Asset,
        memo: &str,
    ) -> SteemResult<u32> {
        let operation = TransferOperation {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            memo: memo.to_string(),
        };
        self.submit(Action::Transfer, from, &[to], operation.into())
            .await
    }

    /// Sends every entry from `from` in a single transaction.
    ///
    /// # Errors
    ///
    /// Fails with [`SteemError::InvalidArgument`] if `entries` is empty.
    pub async fn multi_transfer(&self, from: &str, entries: &[TransferEntry]) -> SteemResult<u32> {
        let action = Action::MultiTransfer;
        if entries.is_empty() {
            return Err(
                SteemError::InvalidArgument("no transfer entries".to_string()).in_action(action),
            );
        }

        let operations = entries
            .iter()
            .map(|entry| {
                TransferOperation {
                    from: from.to_string(),
                    to: entry.to.clone(),
                    amount: entry.amount.clone(),
                    memo: entry.memo.clone(),
                }
                .into()
            })
            .collect();
        let recipients: Vec<&str> = entries.iter().map(|entry| entry.to.as_str()).collect();
        self.submit_batch(action, from, &recipients, operations)
            .await
    }

    /// Proves control of `account`'s posting key by broadcasting a signed
    /// `login` custom-json.
    ///
    /// Returns `false` on any failure. The reason is logged and sent as
    /// [`ClientEvent::LoginFailed`].
    pub async fn login(&self, account: &str, wif: &str) -> bool {
        match self.try_login(account, wif).await {
            Ok(block_num) => {
                self.report(Action::Login, block_num, account, &[]);
                true
            }
            Err(e) => {
                warn!(account, error = %e, "Login failed");
                self.send_event(ClientEvent::LoginFailed {
                    account: account.to_string(),
                    reason: e.to_string(),
                });
                false
            }
        }
    }

    async fn try_login(&self, account: &str, wif: &str) -> SteemResult<u32> {
        let json = custom_json::login_payload(account);
        let operation = custom_json::posting_custom_json(LOGIN_ID, account, json);

        let props = self.chain_state.dynamic_global_properties().await?;
        let lifetime = Duration::from_std(self.config.transaction_expiration())
            .map_err(|e| SteemError::InvalidArgument(format!("transaction expiration: {e}")))?;
        let mut transaction =
            Transaction::new(props.head_block_number, &props.head_block_id, Utc::now() + lifetime)?;
        transaction.push_operation(operation);

        let key = self.broadcaster.decode_private_key(wif)?;
        debug!(
            account,
            ref_block_num = transaction.ref_block_num,
            ref_block_prefix = transaction.ref_block_prefix,
            "Broadcasting login challenge"
        );
        let response = self
            .broadcaster
            .sign_and_broadcast(transaction, std::slice::from_ref(&key), &self.config.chain_id())
            .await?;
        Ok(response.block_num)
    }

    /// Places a sell order that expires after [`LIMIT_ORDER_LIFETIME_SECS`].
    pub async fn limit_order_create(
        &self,
        owner: &str,
        amount_to_sell: Asset,
        min_to_receive: Asset,
        order_id: u32,
    ) -> SteemResult<u32> {
        let operation = LimitOrderCreateOperation {
            owner: owner.to_string(),
            orderid: order_id,
            amount_to_sell,
            min_to_receive,
            fill_or_kill: false,
            expiration: Utc::now() + Duration::seconds(LIMIT_ORDER_LIFETIME_SECS),
        };
        self.submit(Action::LimitOrderCreate, owner, &[], operation.into())
            .await
    }

    pub async fn limit_order_cancel(&self, owner: &str, order_id: u32) -> SteemResult<u32> {
        let operation = LimitOrderCancelOperation {
            owner: owner.to_string(),
            orderid: order_id,
        };
        self.submit(Action::LimitOrderCancel, owner, &[], operation.into())
            .await
    }

    /// Converts SBD to STEEM at the median feed price.
    pub async fn convert(&self, owner: &str, amount: Asset, request_id: u32) -> SteemResult<u32> {
        let operation = ConvertOperation {
            owner: owner.to_string(),
            requestid: request_id,
            amount,
        };
        self.submit(Action::Convert, owner, &[], operation.into())
            .await
    }

    /// Powers up `amount` from `from` into `to`'s vesting shares.
    pub async fn transfer_to_vesting(&self, from: &str, to: &str, amount: Asset) -> SteemResult<u32> {
        let operation = TransferToVestingOperation {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        };
        self.submit(Action::TransferToVesting, from, &[to], operation.into())
            .await
    }

    pub async fn withdraw_vesting(&self, account: &str, vesting_shares: Asset) -> SteemResult<u32> {
        let operation = WithdrawVestingOperation {
            account: account.to_string(),
            vesting_shares,
        };
        self.submit(Action::WithdrawVesting, account, &[], operation.into())
            .await
    }

    pub async fn change_recovery_account(
        &self,
        account: &str,
        new_recovery_account: &str,
    ) -> SteemResult<u32> {
        let operation = ChangeRecoveryAccountOperation {
            account_to_recover: account.to_string(),
            new_recovery_account: new_recovery_account.to_string(),
            extensions: vec![],
        };
        self.submit(
            Action::ChangeRecoveryAccount,
            account,
            &[new_recovery_account],
            operation.into(),
        )
        .await
    }

    pub async fn transfer_to_savings(
        &self,
        from: &str,
        to: &str,
        amount: Asset,
        memo: &str,
    ) -> SteemResult<u32> {
        let operation = TransferToSavingsOperation {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            memo: memo.to_string(),
        };
        self.submit(Action::TransferToSavings, from, &[to], operation.into())
            .await
    }

    pub async fn transfer_from_savings(
        &self,
        from: &str,
        to: &str,
        amount: Asset,
        memo: &str,
        request_id: u32,
    ) -> SteemResult<u32> {
        let operation = TransferFromSavingsOperation {
            from: from.to_string(),
            request_id,
            to: to.to_string(),
            amount,
            memo: memo.to_string(),
        };
        self.submit(Action::TransferFromSavings, from, &[to], operation.into())
            .await
    }

    pub async fn cancel_transfer_from_savings(
        &self,
        from: &str,
        request_id: u32,
    ) -> SteemResult<u32> {
        let operation = CancelTransferFromSavingsOperation {
            from: from.to_string(),
            request_id,
        };
        self.submit(Action::CancelTransferFromSavings, from, &[], operation.into())
            .await
    }

    pub async fn decline_voting_rights(&self, account: &str, decline: bool) -> SteemResult<u32> {
        let operation = DeclineVotingRightsOperation {
            account: account.to_string(),
            decline,
        };
        self.submit(Action::DeclineVotingRights, account, &[], operation.into())
            .await
    }

    /// Publishes a witness price feed.
    pub async fn feed_publish(&self, publisher: &str, base: Asset, quote: Asset) -> SteemResult<u32> {
        let operation = FeedPublishOperation {
            publisher: publisher.to_string(),
            exchange_rate: ExchangeRate { base, quote },
        };
        self.submit(Action::FeedPublish, publisher, &[], operation.into())
            .await
    }

    /// Delegates vesting shares. Submitted as a batch of one.
    pub async fn delegate_vesting_shares(
        &self,
        delegator: &str,
        delegatee: &str,
        vesting_shares: Asset,
    ) -> SteemResult<u32> {
        let operation = DelegateVestingSharesOperation {
            delegator: delegator.to_string(),
            delegatee: delegatee.to_string(),
            vesting_shares,
        };
        self.submit_batch(
            Action::DelegateVestingShares,
            delegator,
            &[delegatee],
            vec![operation.into()],
        )
        .await
    }

    /// Current STEEM per million VESTS, rounded to three decimals.
    pub async fn steem_per_mvest(&self) -> SteemResult<f64> {
        let action = Action::SteemPerMvest;
        let props = self
            .chain_state
            .dynamic_global_properties()
            .await
            .map_err(|e| e.in_action(action))?;
        vesting::steem_per_mvest_from(&props).map_err(|e| e.in_action(action))
    }
}
