use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Address, Bytes, Hash, Number};

/// Event log entry.
///
/// Location fields are `null` for logs of pending transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub address: Address,
    pub topics: Vec<Hash>,
    pub data: Bytes,
    pub block_number: Option<Number>,
    pub transaction_hash: Option<Hash>,
    pub transaction_index: Option<Number>,
    pub block_hash: Option<Hash>,
    pub log_index: Option<Number>,
    pub removed: bool,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Transaction receipt returned by `eth_getTransactionReceipt`.
///
/// `root` is set for pre-Byzantium receipts and `status` after; whichever is absent is
/// omitted from the encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub block_hash: Hash,
    pub block_number: Number,
    pub contract_address: Option<Address>,
    pub cumulative_gas_used: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_gas_price: Option<Number>,
    pub from: Address,
    pub gas_used: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_gas_used: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_gas_price: Option<Number>,
    pub logs: Vec<Log>,
    pub logs_bloom: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Number>,
    pub to: Option<Address>,
    pub transaction_hash: Hash,
    pub transaction_index: Number,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<Number>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}
