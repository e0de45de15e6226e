//! Actions and the events the client reports about them.

use std::fmt;

/// Every user-facing action the client can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Vote,
    Comment,
    DeleteComment,
    Post,
    Follow,
    Unfollow,
    Ignore,
    Notice,
    Reblog,
    AccountWitnessVote,
    AccountWitnessProxy,
    Transfer,
    MultiTransfer,
    Login,
    LimitOrderCreate,
    LimitOrderCancel,
    Convert,
    TransferToVesting,
    WithdrawVesting,
    ChangeRecoveryAccount,
    TransferToSavings,
    TransferFromSavings,
    CancelTransferFromSavings,
    DeclineVotingRights,
    FeedPublish,
    DelegateVestingShares,
    SteemPerMvest,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Vote => "Vote",
            Action::Comment => "Comment",
            Action::DeleteComment => "DeleteComment",
            Action::Post => "Post",
            Action::Follow => "Follow",
            Action::Unfollow => "Unfollow",
            Action::Ignore => "Ignore",
            Action::Notice => "Notice",
            Action::Reblog => "Reblog",
            Action::AccountWitnessVote => "AccountWitnessVote",
            Action::AccountWitnessProxy => "AccountWitnessProxy",
            Action::Transfer => "Transfer",
            Action::MultiTransfer => "MultiTransfer",
            Action::Login => "Login",
            Action::LimitOrderCreate => "LimitOrderCreate",
            Action::LimitOrderCancel => "LimitOrderCancel",
            Action::Convert => "Convert",
            Action::TransferToVesting => "TransferToVesting",
            Action::WithdrawVesting => "WithdrawVesting",
            Action::ChangeRecoveryAccount => "ChangeRecoveryAccount",
            Action::TransferToSavings => "TransferToSavings",
            Action::TransferFromSavings => "TransferFromSavings",
            Action::CancelTransferFromSavings => "CancelTransferFromSavings",
            Action::DeclineVotingRights => "DeclineVotingRights",
            Action::FeedPublish => "FeedPublish",
            Action::DelegateVestingShares => "DelegateVestingShares",
            Action::SteemPerMvest => "SteemPerMvest",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientEvent {
    /// Fired after the broadcaster accepted an action's operations.
    OperationSubmitted {
        action: Action,
        block_num: u32,
        /// The acting account first, then any counterpart accounts.
        accounts: Vec<String>,
    },
    /// Fired when the login challenge could not be completed. The public
    /// login call only reports `false`; the reason is kept here.
    LoginFailed { account: String, reason: String },
}
