use serde::{Deserialize, Serialize};

use super::{Addresses, BlockId, Hash, Hashes};

/// Filter object accepted by `eth_getLogs`.
///
/// Each `topics` position is either `null` (wildcard), a single hash, or a list of
/// alternatives. Absent members are omitted when the filter is forwarded upstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Addresses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Option<Hashes>>>,
    #[serde(default, alias = "blockhash", skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<Hash>,
}
