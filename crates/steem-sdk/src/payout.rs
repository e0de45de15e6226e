//! Vote weight and payout policy.
//!
//! Payout options are a fixed three-way table rather than a formula:
//!
//! | `percent` | max accepted payout | percent in SBD |
//! |-----------|---------------------|----------------|
//! | `0`       | `0.000 SBD`         | 10000          |
//! | `50`      | `1000000.000 SBD`   | 10000          |
//! | other     | `1000000.000 SBD`   | 0              |
//!
//! The sentinel amounts are part of the wire contract and must not change.

use steem_sdk_types::api_types::asset::Asset;
use steem_sdk_types::api_types::extension::{Beneficiary, CommentOptionsExtension};
use steem_sdk_types::api_types::operation::CommentOptionsOperation;

/// Full-strength vote, in basis points.
pub const MAX_VOTE_WEIGHT: i16 = 10_000;

/// All of the payout routed to the secondary currency, in basis points.
pub const FULL_PERCENT_STEEM_DOLLARS: u16 = 10_000;

const PAYOUT_SYMBOL: &str = "SBD";
const PAYOUT_PRECISION: u8 = 3;
/// `1000000.000 SBD` in thousandths.
const UNBOUNDED_PAYOUT_UNITS: u64 = 1_000_000_000;

/// Caller policy for a post's reward split.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayoutOptions {
    /// `0` declines the payout, `50` selects the 50/50 split, anything else
    /// is the uncapped default.
    pub percent: u16,
    pub beneficiaries: Vec<Beneficiary>,
}

impl PayoutOptions {
    pub fn decline() -> Self {
        Self {
            percent: 0,
            beneficiaries: vec![],
        }
    }

    pub fn half() -> Self {
        Self {
            percent: 50,
            beneficiaries: vec![],
        }
    }

    pub fn full() -> Self {
        Self {
            percent: 100,
            beneficiaries: vec![],
        }
    }

    pub fn with_beneficiary(mut self, account: impl Into<String>, weight: u16) -> Self {
        self.beneficiaries.push(Beneficiary::new(account, weight));
        self
    }
}

/// A self-vote to cast on freshly published content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteIntent {
    pub weight: i16,
}

impl VoteIntent {
    pub fn new(weight: i16) -> Self {
        Self { weight }
    }
}

/// Caps `weight` at [`MAX_VOTE_WEIGHT`]. Negative weights pass through.
pub fn clamp_weight(weight: i16) -> i16 {
    weight.min(MAX_VOTE_WEIGHT)
}

/// Maps a payout percent to `(max_accepted_payout, percent_steem_dollars)`.
pub fn payout_policy(percent: u16) -> (Asset, u16) {
    let unbounded = Asset::new(UNBOUNDED_PAYOUT_UNITS, PAYOUT_PRECISION, PAYOUT_SYMBOL)
        .expect("valid SBD precision");
    match percent {
        0 => (
            Asset::zero(PAYOUT_PRECISION, PAYOUT_SYMBOL).expect("valid SBD precision"),
            FULL_PERCENT_STEEM_DOLLARS,
        ),
        50 => (unbounded, FULL_PERCENT_STEEM_DOLLARS),
        _ => (unbounded, 0),
    }
}

pub fn beneficiary_extensions(beneficiaries: &[Beneficiary]) -> Vec<CommentOptionsExtension> {
    if beneficiaries.is_empty() {
        return vec![];
    }
    vec![CommentOptionsExtension::Beneficiaries(
        beneficiaries.to_vec(),
    )]
}

pub fn comment_options(
    author: &str,
    permlink: &str,
    options: &PayoutOptions,
) -> CommentOptionsOperation {
    let (max_accepted_payout, percent_steem_dollars) = payout_policy(options.percent);
    CommentOptionsOperation {
        author: author.to_string(),
        permlink: permlink.to_string(),
        max_accepted_payout,
        percent_steem_dollars,
        allow_votes: true,
        allow_curation_rewards: true,
        extensions: beneficiary_extensions(&options.beneficiaries),
    }
}
