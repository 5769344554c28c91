//! Data index responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryCounts {
    pub bulk: u64,
    pub search: u64,
}

/// Outcome of an update-by-query call on the data index.
///
/// Field names are the index engine's snake_case keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateByQueryResponse {
    pub took: u64,
    pub timed_out: bool,
    pub total: u64,
    pub updated: u64,
    pub deleted: u64,
    pub batches: u64,
    pub version_conflicts: u64,
    pub noops: u64,
    pub retries: RetryCounts,
    pub throttled_millis: u64,
    pub requests_per_second: f64,
    pub throttled_until_millis: u64,
    pub failures: Vec<Value>,
}
