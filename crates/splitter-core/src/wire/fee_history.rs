use serde::{Deserialize, Serialize};

use super::Number;

/// Result of `eth_feeHistory`.
///
/// The used ratios keep the node's number form (`0`, `1`, `0.5`), so they re-encode
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeHistory {
    pub oldest_block: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<Vec<Vec<Number>>>,
    pub base_fee_per_gas: Vec<Number>,
    pub gas_used_ratio: Vec<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_blob_gas: Option<Vec<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_gas_used_ratio: Option<Vec<serde_json::Number>>,
}
