use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Address, Bytes, Hash, Json, Number};

/// Transaction object as returned by `eth_getTransactionByHash` and full blocks.
///
/// Fields are declared in the order `go-ethereum` emits them. Fields introduced by
/// typed transactions are omitted when absent; unknown fields (e.g. rollup extensions)
/// are carried in `other` and compared like any other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub block_hash: Option<Hash>,
    pub block_number: Option<Number>,
    pub from: Address,
    pub gas: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_blob_gas: Option<Number>,
    pub hash: Hash,
    pub input: Bytes,
    pub nonce: Number,
    pub to: Option<Address>,
    pub transaction_index: Option<Number>,
    pub value: Number,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list: Option<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_versioned_hashes: Option<Vec<Hash>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_list: Option<Json>,
    pub v: Number,
    pub r: Number,
    pub s: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_parity: Option<Number>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}
