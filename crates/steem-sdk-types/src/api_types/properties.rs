use serde::{Deserialize, Serialize};

/// The subset of `get_dynamic_global_properties` this SDK reads.
///
/// Amount fields are kept verbatim (`"1234.567 STEEM"`); callers parse the
/// ones they need.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicGlobalProperties {
    pub head_block_number: u32,
    pub head_block_id: String,
    #[serde(default)]
    pub time: String,
    pub total_vesting_fund_steem: String,
    pub total_vesting_shares: String,
}

/// Result of a synchronous broadcast.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResponse {
    pub id: String,
    pub block_num: u32,
    #[serde(default)]
    pub trx_num: u32,
}
