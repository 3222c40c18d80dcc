use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Address, Bytes, Hash, Json, Nonce, Number, Transaction};

/// Block object returned by `eth_getBlockByHash` / `eth_getBlockByNumber`.
///
/// `T` is the transaction list element: [`Hash`] when the request asked for hashes only,
/// [`Transaction`] when it asked for full objects.
///
/// A `null` `logsBloom` or `extraData` decodes as empty bytes and re-encodes as `"0x"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<T> {
    pub number: Option<Number>,
    pub hash: Option<Hash>,
    pub parent_hash: Hash,
    pub nonce: Option<Nonce>,
    pub sha3_uncles: Hash,
    pub logs_bloom: Bytes,
    pub transactions_root: Hash,
    pub state_root: Hash,
    pub receipts_root: Hash,
    pub miner: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_hash: Option<Hash>,
    pub difficulty: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_difficulty: Option<Number>,
    pub extra_data: Bytes,
    pub size: Number,
    pub gas_limit: Number,
    pub gas_used: Number,
    pub timestamp: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals_root: Option<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_gas_used: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excess_blob_gas: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_beacon_block_root: Option<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_hash: Option<Hash>,
    pub transactions: Vec<T>,
    pub uncles: Vec<Hash>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Block with transaction hashes only.
pub type BlockWithHashes = Block<Hash>;

/// Block with full transaction objects.
pub type BlockWithTransactions = Block<Transaction>;
