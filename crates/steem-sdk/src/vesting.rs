//! STEEM per million VESTS.

use crate::error::{SteemError, SteemResult};
use steem_sdk_types::api_types::properties::DynamicGlobalProperties;

/// Parses the leading numeric token of a chain amount such as
/// `"1234.567 STEEM"`.
pub fn parse_amount(amount: &str) -> SteemResult<f64> {
    let token = amount
        .split_whitespace()
        .next()
        .ok_or_else(|| SteemError::InvalidAmount(format!("empty amount {amount:?}")))?;
    let value = token
        .parse::<f64>()
        .map_err(|e| SteemError::InvalidAmount(format!("{amount:?}: {e}")))?;
    if !value.is_finite() {
        return Err(SteemError::InvalidAmount(format!(
            "{amount:?} is not a finite number"
        )));
    }
    Ok(value)
}

/// `(fund / shares) * 1_000_000`, rounded to three decimals.
pub fn steem_per_mvest(fund: f64, shares: f64) -> SteemResult<f64> {
    if shares.is_nan() || shares <= 0.0 {
        return Err(SteemError::InvalidAmount(format!(
            "total vesting shares must be positive, got {shares}"
        )));
    }
    let rate = fund / shares * 1_000_000.0;
    Ok((rate * 1_000.0).round() / 1_000.0)
}

pub fn steem_per_mvest_from(props: &DynamicGlobalProperties) -> SteemResult<f64> {
    let fund = parse_amount(&props.total_vesting_fund_steem)?;
    let shares = parse_amount(&props.total_vesting_shares)?;
    steem_per_mvest(fund, shares)
}
