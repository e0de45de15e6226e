//! Chain operations.
//!
//! Every operation is a plain struct named after its wire name. The closed
//! [`Operation`] enum wraps them and serializes to the condenser wire form
//! `["<name>", { ...fields }]`.

use crate::api_types::asset::Asset;
use crate::api_types::extension::CommentOptionsExtension;
use chrono::{DateTime, Utc};
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct VoteOperation {
    pub voter: String,
    pub author: String,
    pub permlink: String,
    pub weight: i16,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CommentOperation {
    pub parent_author: String,
    pub parent_permlink: String,
    pub author: String,
    pub permlink: String,
    pub title: String,
    pub body: String,
    pub json_metadata: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CommentOptionsOperation {
    pub author: String,
    pub permlink: String,
    pub max_accepted_payout: Asset,
    pub percent_steem_dollars: u16,
    pub allow_votes: bool,
    pub allow_curation_rewards: bool,
    pub extensions: Vec<CommentOptionsExtension>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DeleteCommentOperation {
    pub author: String,
    pub permlink: String,
}

/// An application-defined action; `json` is opaque to the chain.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CustomJsonOperation {
    pub required_auths: Vec<String>,
    pub required_posting_auths: Vec<String>,
    pub id: String,
    pub json: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AccountWitnessVoteOperation {
    pub account: String,
    pub witness: String,
    pub approve: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AccountWitnessProxyOperation {
    pub account: String,
    pub proxy: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransferOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LimitOrderCreateOperation {
    pub owner: String,
    pub orderid: u32,
    pub amount_to_sell: Asset,
    pub min_to_receive: Asset,
    pub fill_or_kill: bool,
    #[serde(with = "crate::api_types::time")]
    pub expiration: DateTime<Utc>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LimitOrderCancelOperation {
    pub owner: String,
    pub orderid: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ConvertOperation {
    pub owner: String,
    pub requestid: u32,
    pub amount: Asset,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransferToVestingOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WithdrawVestingOperation {
    pub account: String,
    pub vesting_shares: Asset,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChangeRecoveryAccountOperation {
    pub account_to_recover: String,
    pub new_recovery_account: String,
    pub extensions: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransferToSavingsOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransferFromSavingsOperation {
    pub from: String,
    pub request_id: u32,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CancelTransferFromSavingsOperation {
    pub from: String,
    pub request_id: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DeclineVotingRightsOperation {
    pub account: String,
    pub decline: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExchangeRate {
    pub base: Asset,
    pub quote: Asset,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FeedPublishOperation {
    pub publisher: String,
    pub exchange_rate: ExchangeRate,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DelegateVestingSharesOperation {
    pub delegator: String,
    pub delegatee: String,
    pub vesting_shares: Asset,
}

macro_rules! operations {
    ($($variant:ident($inner:ty) => $name:literal,)+) => {
        /// Closed set of operations this SDK can emit.
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub enum Operation {
            $($variant($inner),)+
        }

        impl Operation {
            /// The operation's wire name, e.g. `"vote"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $name,)+
                }
            }
        }

        impl Serialize for Operation {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(self.name())?;
                match self {
                    $(Self::$variant(op) => tuple.serialize_element(op)?,)+
                }
                tuple.end()
            }
        }

        $(
            impl From<$inner> for Operation {
                fn from(op: $inner) -> Self {
                    Self::$variant(op)
                }
            }
        )+
    };
}

operations! {
    Vote(VoteOperation) => "vote",
    Comment(CommentOperation) => "comment",
    CommentOptions(CommentOptionsOperation) => "comment_options",
    DeleteComment(DeleteCommentOperation) => "delete_comment",
    CustomJson(CustomJsonOperation) => "custom_json",
    AccountWitnessVote(AccountWitnessVoteOperation) => "account_witness_vote",
    AccountWitnessProxy(AccountWitnessProxyOperation) => "account_witness_proxy",
    Transfer(TransferOperation) => "transfer",
    LimitOrderCreate(LimitOrderCreateOperation) => "limit_order_create",
    LimitOrderCancel(LimitOrderCancelOperation) => "limit_order_cancel",
    Convert(ConvertOperation) => "convert",
    TransferToVesting(TransferToVestingOperation) => "transfer_to_vesting",
    WithdrawVesting(WithdrawVestingOperation) => "withdraw_vesting",
    ChangeRecoveryAccount(ChangeRecoveryAccountOperation) => "change_recovery_account",
    TransferToSavings(TransferToSavingsOperation) => "transfer_to_savings",
    TransferFromSavings(TransferFromSavingsOperation) => "transfer_from_savings",
    CancelTransferFromSavings(CancelTransferFromSavingsOperation) => "cancel_transfer_from_savings",
    DeclineVotingRights(DeclineVotingRightsOperation) => "decline_voting_rights",
    FeedPublish(FeedPublishOperation) => "feed_publish",
    DelegateVestingShares(DelegateVestingSharesOperation) => "delegate_vesting_shares",
}
