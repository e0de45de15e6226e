//! Serde helpers for the chain's timestamp format (`2016-08-08T12:24:17`,
//! always UTC, no zone suffix).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub const CHAIN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(CHAIN_TIME_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, CHAIN_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
