//! Permlink derivation.

use crate::translit;
use chrono::{DateTime, Duration, Utc};

/// Reply timestamps are taken this far ahead of the clock reading.
pub const REPLY_TIME_SKEW_SECS: i64 = 30;

/// e.g. `20180321t100130`
pub const REPLY_TIME_FORMAT: &str = "%Y%m%dt%H%M%S";

/// Builds the permlink of a reply to `@parent_author/parent_permlink`.
///
/// Two replies to the same parent within the same second get the same
/// permlink; the chain then rejects the second one.
pub fn reply_permlink(parent_author: &str, parent_permlink: &str, now: DateTime<Utc>) -> String {
    let stamp = (now + Duration::seconds(REPLY_TIME_SKEW_SECS)).format(REPLY_TIME_FORMAT);
    format!("re-{parent_author}-{parent_permlink}-{stamp}").replace('.', "-")
}

/// Permlink of a top-level post: the explicit permlink when given,
/// otherwise the title, transliterated either way.
pub fn post_permlink(title: &str, explicit: Option<&str>) -> String {
    match explicit.filter(|p| !p.is_empty()) {
        Some(permlink) => translit::encode_title(permlink),
        None => translit::encode_title(title),
    }
}
