//! Payloads for the `follow` and `login` custom-json actions.
//!
//! Payloads are assembled by plain string concatenation. Account names and
//! permlinks are inserted verbatim: a value containing `"` produces invalid
//! or altered JSON. Chain account names cannot contain quotes, so only
//! unvalidated caller input is affected.

use steem_sdk_types::api_types::operation::CustomJsonOperation;

pub const FOLLOW_ID: &str = "follow";
pub const LOGIN_ID: &str = "login";

/// Application identifier embedded in post metadata and login payloads.
pub const APP_NAME: &str = "steem-go";

/// The `what` list of a follow payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowWhat {
    Blog,
    Ignore,
    /// Empty list, used by both unfollow and notice.
    Nothing,
}

impl FollowWhat {
    fn as_json(&self) -> &'static str {
        match self {
            FollowWhat::Blog => "[\"blog\"]",
            FollowWhat::Ignore => "[\"ignore\"]",
            FollowWhat::Nothing => "[]",
        }
    }
}

pub fn follow_payload(follower: &str, following: &str, what: FollowWhat) -> String {
    "[\"follow\",{\"follower\":\"".to_string()
        + follower
        + "\",\"following\":\""
        + following
        + "\",\"what\":"
        + what.as_json()
        + "}]"
}

pub fn reblog_payload(account: &str, author: &str, permlink: &str) -> String {
    "[\"reblog\",{\"account\":\"".to_string()
        + account
        + "\",\"author\":\""
        + author
        + "\",\"permlink\":\""
        + permlink
        + "\"}]"
}

pub fn login_payload(account: &str) -> String {
    "[\"login\",{\"account\":\"".to_string() + account + "\",\"app\":\"" + APP_NAME + "\"}]"
}

/// Wraps `json` in a custom-json operation authorized by `account`'s
/// posting key.
pub fn posting_custom_json(id: &str, account: &str, json: String) -> CustomJsonOperation {
    CustomJsonOperation {
        required_auths: vec![],
        required_posting_auths: vec![account.to_string()],
        id: id.to_string(),
        json,
    }
}
